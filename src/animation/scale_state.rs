// src/animation/scale_state.rs
//
// Per-node scale tracker. A node is idle while its direction is zero;
// one step moves the scale a full unit away from where it started.

#[derive(Debug, Clone, PartialEq)]
pub struct ScaleState {
    pub scale: f32,
    pub direction: f32,
    pub previous_scale: f32,
}

impl Default for ScaleState {
    fn default() -> Self {
        Self::new()
    }
}

impl ScaleState {
    pub fn new() -> Self {
        Self {
            scale: 0.0,
            direction: 0.0,
            previous_scale: 0.0,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.direction == 0.0
    }

    /// Advances the scale by one frame. Returns the snapped scale exactly
    /// once, on the frame that completes the step.
    pub fn update(&mut self, step_size: f32) -> Option<f32> {
        self.scale += step_size * self.direction;
        if (self.scale - self.previous_scale).abs() > 1.0 {
            self.scale = self.previous_scale + self.direction;
            self.direction = 0.0;
            self.previous_scale = self.scale;
            return Some(self.previous_scale);
        }
        None
    }

    /// Points the state at its opposite end. Returns false (and changes
    /// nothing) while a step is still in flight.
    pub fn start_updating(&mut self) -> bool {
        if !self.is_idle() {
            return false;
        }
        self.direction = 1.0 - 2.0 * self.previous_scale;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEP: f32 = 0.02;

    // Runs updates until completion, returning the number of frames taken
    fn run_to_completion(state: &mut ScaleState) -> usize {
        for frame in 1..=1000 {
            if state.update(STEP).is_some() {
                return frame;
            }
        }
        panic!("step never completed");
    }

    #[test]
    fn test_start_updating_from_rest() {
        let mut state = ScaleState::new();
        assert!(state.is_idle());
        assert!(state.start_updating());
        assert_eq!(state.direction, 1.0);
        assert!(!state.is_idle());
    }

    #[test]
    fn test_start_updating_is_ignored_while_animating() {
        let mut state = ScaleState::new();
        assert!(state.start_updating());
        state.update(STEP);
        let before = state.clone();

        assert!(!state.start_updating());
        assert_eq!(state, before);
    }

    #[test]
    fn test_update_accumulates_step() {
        let mut state = ScaleState::new();
        state.start_updating();
        for frame in 1..=10 {
            assert_eq!(state.update(STEP), None);
            assert!((state.scale - STEP * frame as f32).abs() < 1e-5);
        }
        assert_eq!(state.previous_scale, 0.0);
    }

    #[test]
    fn test_update_while_idle_does_nothing() {
        let mut state = ScaleState::new();
        for _ in 0..100 {
            assert_eq!(state.update(STEP), None);
        }
        assert_eq!(state, ScaleState::new());
    }

    #[test]
    fn test_step_completes_once_and_snaps() {
        let mut state = ScaleState::new();
        state.start_updating();

        let frames = run_to_completion(&mut state);
        assert!(frames >= 50 && frames <= 52, "took {} frames", frames);
        assert_eq!(state.scale, 1.0);
        assert_eq!(state.previous_scale, 1.0);
        assert!(state.is_idle());

        // no second completion without a new start
        for _ in 0..200 {
            assert_eq!(state.update(STEP), None);
        }
        assert_eq!(state.scale, 1.0);
    }

    #[test]
    fn test_second_start_reverses() {
        let mut state = ScaleState::new();
        state.start_updating();
        run_to_completion(&mut state);

        assert!(state.start_updating());
        assert_eq!(state.direction, -1.0);

        state.update(STEP);
        assert!(state.scale < 1.0);

        run_to_completion(&mut state);
        assert_eq!(state.scale, 0.0);
        assert_eq!(state.previous_scale, 0.0);
        assert!(state.is_idle());
    }
}
