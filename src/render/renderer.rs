// src/render/renderer.rs
// The renderer ties the chain to the animator: it draws every frame and
// runs one animation frame whenever the animator's next frame is due.

use std::time::Duration;

use crate::animation::Animator;
use crate::config::ChainConfig;
use crate::controllers::{ChainController, StepOutcome};
use crate::draw::{row_stroke, Canvas, StrokeStyle};

pub struct Renderer {
    chain: ChainController,
    animator: Animator,
}

impl Renderer {
    pub fn new(config: ChainConfig) -> Self {
        let animator = Animator::new(config.frame_delay);
        Self {
            chain: ChainController::new(config),
            animator,
        }
    }

    pub fn chain(&self) -> &ChainController {
        &self.chain
    }

    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    pub fn stroke_style(&self, width: f32, height: f32) -> StrokeStyle {
        row_stroke(self.chain.config(), width, height)
    }

    /// Draws the current state, then advances the animation if a frame is
    /// due. Returns the outcome when this frame finished a step.
    pub fn render<C: Canvas>(&mut self, canvas: &mut C, now: Duration) -> Option<StepOutcome> {
        canvas.clear(self.chain.config().back_color);
        let style = self.stroke_style(canvas.width(), canvas.height());
        self.chain.draw(canvas, &style);
        self.advance(now)
    }

    /// Runs one animation frame if due. Each tap animates exactly one step,
    /// so the animator stops as soon as the step completes.
    pub fn advance(&mut self, now: Duration) -> Option<StepOutcome> {
        if !self.animator.poll_frame(now) {
            return None;
        }

        let chain = &mut self.chain;
        let mut completed = None;
        self.animator.animate(now, |animator| {
            if let Some(outcome) = chain.update() {
                animator.stop();
                completed = Some(outcome);
            }
        });
        completed
    }

    /// Starts the next step. Ignored while a step is still animating.
    pub fn handle_tap(&mut self) -> bool {
        if self.chain.start_updating() {
            self.animator.start();
            tracing::debug!("tap started node {}", self.chain.current());
            true
        } else {
            tracing::debug!("tap ignored, node {} still animating", self.chain.current());
            false
        }
    }

    pub fn needs_redraw(&self, now: Duration) -> bool {
        self.animator.frame_due(now)
    }
}
