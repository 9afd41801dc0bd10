//! Turn animation and command handling for Cubekit.
//!
//! [`Engine`] owns a cube and a queue of turns. Callers submit moves,
//! rotations, resets, and state loads, then drive the engine by calling
//! [`Engine::update()`] once per frame.

pub mod animations;
mod command;
mod engine;
mod error;


pub use animations::{AnimationState, AnimationStatus, RotationQueue};
pub use command::{Command, CommandFuture};
pub use engine::{Engine, INTERRUPTED_REASON, INVALID_STATE_REASON};
pub use error::{CommandError, PreconditionError};
