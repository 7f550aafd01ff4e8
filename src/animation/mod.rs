pub mod animator;
pub mod scale_state;

pub use animator::{Animator, RedrawRequest};
pub use scale_state::ScaleState;
