use std::fmt;

use cubekit_core::{CubeState, Piece, Slice};
use web_time::Instant;

use crate::PreconditionError;

/// Callback invoked with a Kociemba state string or a failure reason.
pub type Callback = Box<dyn FnOnce(String) + Send>;

/// Lifecycle of a single turn animation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AnimationStatus {
    /// Queued; pieces have not been captured yet.
    Pending,
    /// Pieces captured; no time has elapsed.
    Initialised,
    /// Partway through the turn.
    InProgress,
    /// Animation finished but the turn is not yet committed.
    Complete,
    /// Callback has fired. Nothing else may happen to the animation.
    Disposed,
}

/// Animation of a single turn, from enqueueing to its callback.
pub struct AnimationState {
    slice: Slice,
    status: AnimationStatus,
    /// Progress of the turn, from 0.0 to 100.0.
    progress: f32,
    enqueued_at: Instant,
    last_update: Option<Instant>,
    /// Pieces moved by the turn, captured at initialisation.
    pieces: Vec<Piece>,
    on_complete: Option<Callback>,
    on_failed: Option<Callback>,
}
impl fmt::Debug for AnimationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationState")
            .field("slice", &self.slice)
            .field("status", &self.status)
            .field("progress", &self.progress)
            .field("enqueued_at", &self.enqueued_at)
            .field("pieces", &self.pieces.len())
            .finish_non_exhaustive()
    }
}
impl AnimationState {
    /// Constructs a pending animation for `slice`.
    pub fn new(
        slice: Slice,
        enqueued_at: Instant,
        on_complete: impl FnOnce(String) + Send + 'static,
        on_failed: impl FnOnce(String) + Send + 'static,
    ) -> Self {
        Self {
            slice,
            status: AnimationStatus::Pending,
            progress: 0.0,
            enqueued_at,
            last_update: None,
            pieces: vec![],
            on_complete: Some(Box::new(on_complete)),
            on_failed: Some(Box::new(on_failed)),
        }
    }

    /// Returns the slice being turned.
    pub fn slice(&self) -> Slice {
        self.slice
    }
    /// Returns the current status.
    pub fn status(&self) -> AnimationStatus {
        self.status
    }
    /// Returns the progress of the turn, from 0.0 to 100.0.
    pub fn progress(&self) -> f32 {
        self.progress
    }
    /// Returns the time at which the turn was enqueued.
    pub fn enqueued_at(&self) -> Instant {
        self.enqueued_at
    }
    /// Returns the pieces moved by the turn. Empty until initialised.
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }
    /// Returns the angle the moving pieces have rotated so far, in radians.
    pub fn angle(&self) -> f32 {
        self.slice.angle_for_progress(self.progress)
    }

    /// Captures the pieces moved by the turn and starts the clock.
    pub fn initialise(&mut self, cube: &CubeState, now: Instant) -> Result<(), PreconditionError> {
        self.expect_status("initialise", &[AnimationStatus::Pending])?;
        self.pieces = cube.pieces_in_slice(self.slice);
        self.last_update = Some(now);
        self.status = AnimationStatus::Initialised;
        Ok(())
    }

    /// Advances the animation to `now`, where a full turn takes `speed_ms`
    /// milliseconds. A speed of zero completes the turn immediately.
    ///
    /// Returns the progress gained, in percent.
    pub fn update(&mut self, now: Instant, speed_ms: f32) -> Result<f32, PreconditionError> {
        if speed_ms < 0.0 {
            return Err(PreconditionError::NegativeSpeed);
        }
        if self.status == AnimationStatus::Initialised {
            self.status = AnimationStatus::InProgress;
        }
        self.expect_status("update", &[AnimationStatus::InProgress])?;

        let last = self.last_update.unwrap_or(now);
        let interval_ms = now.saturating_duration_since(last).as_secs_f32() * 1000.0;
        self.last_update = Some(now);

        let remaining = 100.0 - self.progress;
        let potential = match speed_ms == 0.0 {
            true => remaining,
            false => interval_ms / speed_ms * 100.0,
        };
        if potential < remaining {
            self.progress += potential;
            Ok(potential)
        } else {
            self.progress = 100.0;
            self.status = AnimationStatus::Complete;
            Ok(remaining)
        }
    }

    /// Applies the turn to `cube`. The animation must be complete.
    pub fn commit(&self, cube: &mut CubeState) -> Result<(), PreconditionError> {
        self.expect_status("commit", &[AnimationStatus::Complete])?;
        cube.apply_turn(self.slice, &self.pieces);
        Ok(())
    }

    /// Fires the completion callback with `state`.
    pub fn complete(mut self, state: String) -> Result<(), PreconditionError> {
        self.expect_status("complete", &[AnimationStatus::Complete])?;
        self.status = AnimationStatus::Disposed;
        if let Some(callback) = self.on_complete.take() {
            callback(state);
        }
        Ok(())
    }

    /// Fires the failure callback with `reason`.
    pub fn fail(mut self, reason: &str) {
        self.status = AnimationStatus::Disposed;
        if let Some(callback) = self.on_failed.take() {
            callback(reason.to_owned());
        }
    }

    fn expect_status(
        &self,
        operation: &'static str,
        allowed: &[AnimationStatus],
    ) -> Result<(), PreconditionError> {
        if allowed.contains(&self.status) {
            Ok(())
        } else {
            Err(PreconditionError::InvalidStatus {
                operation,
                status: self.status,
            })
        }
    }
}
