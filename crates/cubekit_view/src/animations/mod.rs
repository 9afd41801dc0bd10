//! Turn animations and the queue that schedules them.

mod queue;
mod turn;

pub use queue::RotationQueue;
pub use turn::{AnimationState, AnimationStatus, Callback};
