use thiserror::Error;

use crate::AnimationStatus;

/// Error produced when the engine or an animation is used incorrectly.
///
/// These indicate a bug in the caller, not bad user input.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PreconditionError {
    /// Animation is in the wrong status for the operation
    #[error("cannot {operation} a turn with status {status:?}")]
    InvalidStatus {
        /// Operation that was attempted.
        operation: &'static str,
        /// Status of the turn at the time.
        status: AnimationStatus,
    },
    /// Animation speed is negative
    #[error("animation speed is negative")]
    NegativeSpeed,
    /// A turn is partway through its animation
    #[error("cannot read sticker state while a turn is in progress")]
    TurnInProgress,
}

/// Error produced by a submitted command.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum CommandError {
    /// Command was rejected or interrupted
    #[error("{0}")]
    Failed(String),
    /// Command did not finish before its deadline
    #[error("command timed out")]
    Timeout,
}
