use std::collections::VecDeque;

use cubekit_core::CubeState;
use cubeprefs::{AnimationStyle, Settings};
use itertools::Itertools;
use web_time::Instant;

use super::AnimationState;
use crate::PreconditionError;

/// FIFO queue of turn animations, with at most one turn in flight.
#[derive(Debug, Default)]
pub struct RotationQueue {
    /// Turn currently animating, if any.
    current: Option<AnimationState>,
    /// Turns waiting behind the current one.
    queue: VecDeque<AnimationState>,
    /// Fastest submission cadence seen since the queue was last empty, in
    /// milliseconds.
    match_speed_ms: Option<f32>,
}
impl RotationQueue {
    /// Adds a turn to the back of the queue.
    pub fn push(&mut self, anim: AnimationState) {
        self.queue.push_back(anim);
    }

    /// Returns the turn currently animating.
    pub fn current(&self) -> Option<&AnimationState> {
        self.current.as_ref()
    }
    pub(crate) fn current_mut(&mut self) -> Option<&mut AnimationState> {
        self.current.as_mut()
    }
    pub(crate) fn take_current(&mut self) -> Option<AnimationState> {
        self.current.take()
    }

    /// Returns the number of turns waiting behind the current one.
    pub fn len(&self) -> usize {
        self.queue.len()
    }
    /// Returns whether there is no current turn and nothing waiting.
    pub fn is_empty(&self) -> bool {
        self.current.is_none() && self.queue.is_empty()
    }

    /// Pops the next turn and initialises it against `cube`. Returns whether
    /// there is now a current turn.
    ///
    /// Does nothing if a turn is already in flight.
    pub(crate) fn start_next(
        &mut self,
        cube: &CubeState,
        now: Instant,
    ) -> Result<bool, PreconditionError> {
        if self.current.is_some() {
            return Ok(true);
        }
        let Some(mut next) = self.queue.pop_front() else {
            self.match_speed_ms = None;
            return Ok(false);
        };
        next.initialise(cube, now)?;
        log::trace!("starting turn {}", next.slice());
        self.current = Some(next);
        Ok(true)
    }

    /// Removes every waiting turn, leaving the current one.
    pub(crate) fn drain_waiting(&mut self) -> impl Iterator<Item = AnimationState> + '_ {
        self.queue.drain(..)
    }

    /// Returns the duration of the current turn, in milliseconds, according
    /// to the animation style in `settings`.
    pub fn rotation_speed_ms(&mut self, settings: &Settings) -> f32 {
        let base = settings.animation_speed_ms as f32;
        match settings.animation_style {
            AnimationStyle::Fixed => base,
            AnimationStyle::Exponential => {
                let divisor = (settings.exponential_factor as f32).powi(self.queue.len() as i32);
                base / divisor
            }
            AnimationStyle::Next => match self.queue.is_empty() {
                true => base,
                false => 0.0,
            },
            AnimationStyle::Match => {
                if let Some(gap) = self.min_submission_gap_ms(base) {
                    self.match_speed_ms = Some(gap);
                }
                self.match_speed_ms.unwrap_or(base)
            }
        }
    }

    /// Returns the smallest gap between consecutive submissions among the
    /// current and waiting turns, or `None` if nothing is waiting.
    fn min_submission_gap_ms(&self, base: f32) -> Option<f32> {
        let first_gap = match (&self.current, self.queue.front()) {
            (_, None) => return None,
            (Some(current), Some(first)) => gap_ms(current.enqueued_at(), first.enqueued_at()),
            (None, Some(_)) => self.match_speed_ms.unwrap_or(base),
        };
        let later_gaps = self
            .queue
            .iter()
            .tuple_windows()
            .map(|(a, b)| gap_ms(a.enqueued_at(), b.enqueued_at()));
        std::iter::once(first_gap).chain(later_gaps).reduce(f32::min)
    }
}

fn gap_ms(earlier: Instant, later: Instant) -> f32 {
    later.saturating_duration_since(earlier).as_secs_f32() * 1000.0
}
