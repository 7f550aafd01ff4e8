// src/models/node.rs
//
// One row of the chain. Nodes live in a flat arena owned by the
// ChainController; neighbours are found by index instead of links.

use crate::animation::ScaleState;
use crate::config::ChainConfig;
use crate::draw::{draw_node_row, Canvas, StrokeStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalDirection {
    Backward,
    Forward,
}

impl TraversalDirection {
    pub fn reversed(self) -> Self {
        match self {
            TraversalDirection::Backward => TraversalDirection::Forward,
            TraversalDirection::Forward => TraversalDirection::Backward,
        }
    }
}

/// Result of looking for the next node in a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Neighbor {
    Advanced(usize),
    Boundary, // chain ends here; the caller should turn around
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    index: usize,
    pub state: ScaleState,
}

impl Node {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            state: ScaleState::new(),
        }
    }

    /// Builds the whole chain, nodes `0..node_count` in order.
    pub fn chain(node_count: usize) -> Vec<Node> {
        (0..node_count).map(Node::new).collect()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn draw<C: Canvas>(&self, canvas: &mut C, style: &StrokeStyle, config: &ChainConfig) {
        draw_node_row(canvas, self.index, self.state.scale, config, style);
    }

    pub fn update(&mut self, step_size: f32) -> Option<f32> {
        self.state.update(step_size)
    }

    pub fn start_updating(&mut self) -> bool {
        self.state.start_updating()
    }

    pub fn neighbor(&self, direction: TraversalDirection, node_count: usize) -> Neighbor {
        match direction {
            TraversalDirection::Backward if self.index > 0 => Neighbor::Advanced(self.index - 1),
            TraversalDirection::Forward if self.index + 1 < node_count => {
                Neighbor::Advanced(self.index + 1)
            }
            _ => Neighbor::Boundary,
        }
    }
}
