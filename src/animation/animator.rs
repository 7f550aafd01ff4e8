// src/animation/animator.rs
//
// Frame loop gated on a running flag.
// Frames are never slept for: the animator records when the next frame is
// wanted and the host polls that against its own clock.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RedrawRequest {
    Immediate,
    At(Duration), // host clock time at which the next frame is due
}

#[derive(Debug)]
pub struct Animator {
    running: bool,
    frame_delay: Duration,
    redraw: Option<RedrawRequest>,
}

impl Animator {
    pub fn new(frame_delay: Duration) -> Self {
        Self {
            running: false,
            frame_delay,
            redraw: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn redraw_request(&self) -> Option<RedrawRequest> {
        self.redraw
    }

    pub fn start(&mut self) {
        if !self.running {
            self.running = true;
            self.redraw = Some(RedrawRequest::Immediate);
            tracing::debug!("animator started");
        }
    }

    /// Stopping also drops any pending frame, so a scheduled frame never fires.
    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            self.redraw = None;
            tracing::debug!("animator stopped");
        }
    }

    /// Runs one frame of the loop. The callback may stop the animator,
    /// in which case no further frame is requested.
    pub fn animate<F>(&mut self, now: Duration, step: F)
    where
        F: FnOnce(&mut Animator),
    {
        if !self.running {
            return;
        }
        step(self);
        if self.running {
            self.redraw = Some(RedrawRequest::At(now + self.frame_delay));
        }
    }

    pub fn frame_due(&self, now: Duration) -> bool {
        match self.redraw {
            Some(RedrawRequest::Immediate) => true,
            Some(RedrawRequest::At(deadline)) => now >= deadline,
            None => false,
        }
    }

    /// Consumes the pending request if its frame is due.
    pub fn poll_frame(&mut self, now: Duration) -> bool {
        if self.frame_due(now) {
            self.redraw = None;
            true
        } else {
            false
        }
    }
}
