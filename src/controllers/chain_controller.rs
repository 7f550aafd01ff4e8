// src/controllers/chain_controller.rs
/// ChainController owns the node arena and decides which node animates next.
/// Only the current node is ever updated. When its step completes the
/// controller walks one node in the traversal direction, or turns around
/// at either end of the chain.
use crate::config::ChainConfig;
use crate::draw::{Canvas, StrokeStyle};
use crate::models::{Neighbor, Node, TraversalDirection};

/// What a completed step did to the chain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepOutcome {
    Advanced { from: usize, to: usize, scale: f32 },
    Reversed { at: usize, scale: f32 },
}

pub struct ChainController {
    nodes: Vec<Node>,
    current: usize,
    direction: TraversalDirection,
    config: ChainConfig,
}

impl ChainController {
    /// An empty chain is never built: `node_count` is raised to at least 1.
    pub fn new(mut config: ChainConfig) -> Self {
        if config.node_count == 0 {
            tracing::warn!("node_count of 0 requested, building a single node");
            config.node_count = 1;
        }
        let nodes = Node::chain(config.node_count);
        tracing::debug!("built chain of {} nodes", nodes.len());

        Self {
            nodes,
            current: 0,
            direction: TraversalDirection::Forward,
            config,
        }
    }

    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn direction(&self) -> TraversalDirection {
        self.direction
    }

    pub fn is_idle(&self) -> bool {
        self.nodes[self.current].state.is_idle()
    }

    pub fn draw<C: Canvas>(&self, canvas: &mut C, style: &StrokeStyle) {
        for node in &self.nodes {
            node.draw(canvas, style, &self.config);
        }
    }

    /// Advances the current node by one frame. Returns the outcome on the
    /// frame that completes its step.
    pub fn update(&mut self) -> Option<StepOutcome> {
        let node_count = self.nodes.len();
        let node = &mut self.nodes[self.current];
        let scale = node.update(self.config.step_size)?;

        let outcome = match node.neighbor(self.direction, node_count) {
            Neighbor::Advanced(next) => {
                let from = self.current;
                self.current = next;
                tracing::debug!("step complete on node {}, moving to node {}", from, next);
                StepOutcome::Advanced {
                    from,
                    to: next,
                    scale,
                }
            }
            Neighbor::Boundary => {
                self.direction = self.direction.reversed();
                tracing::info!(
                    "reached end of chain at node {}, now heading {:?}",
                    self.current,
                    self.direction
                );
                StepOutcome::Reversed {
                    at: self.current,
                    scale,
                }
            }
        };
        Some(outcome)
    }

    /// Starts a step on the current node. False while one is in flight.
    pub fn start_updating(&mut self) -> bool {
        self.nodes[self.current].start_updating()
    }
}
