//! Cube engine: commands in, animated turns and callbacks out.

use cubekit_core::{CubeState, Slice, StickerState};
use cubekit_notation::{resolve_move, resolve_rotation};
use cubeprefs::{Settings, SettingsError};
use web_time::Instant;

use crate::PreconditionError;
use crate::animations::{AnimationState, AnimationStatus, RotationQueue};
use crate::command::PendingCommand;

/// Reason given to turns discarded by [`Engine::stop()`] or
/// [`Engine::reset()`].
pub const INTERRUPTED_REASON: &str = "Movement Interrupted.";
/// Reason given when [`Engine::set_state()`] receives an undecodable state.
pub const INVALID_STATE_REASON: &str = "Invalid Kociemba State";

/// Owns a cube and animates turns on it one at a time.
///
/// Turns are committed to the cube only once their animation completes.
/// Callbacks fire in submission order and receive the Kociemba state of the
/// cube after the turn.
#[derive(Debug)]
pub struct Engine {
    settings: Settings,
    cube: CubeState,
    queue: RotationQueue,
    pub(crate) pending_commands: Vec<PendingCommand>,
}
impl Engine {
    /// Constructs an engine with a solved cube.
    pub fn new(settings: Settings) -> Result<Self, SettingsError> {
        settings.validate()?;
        let cube = CubeState::new(settings.layer_count)?;
        log::info!("created {0}x{0}x{0} cube", settings.layer_count);
        Ok(Self {
            settings,
            cube,
            queue: RotationQueue::default(),
            pending_commands: vec![],
        })
    }

    /// Returns the current settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
    /// Replaces the settings.
    ///
    /// Speed changes affect the turn in flight. A new layer count takes
    /// effect once the queue is empty, and the new cube starts solved.
    pub fn set_settings(&mut self, settings: Settings) -> Result<(), SettingsError> {
        settings.validate()?;
        self.settings = settings;
        self.rebuild_if_idle();
        Ok(())
    }

    /// Returns the cube, as of the last committed turn.
    pub fn cube(&self) -> &CubeState {
        &self.cube
    }
    /// Returns the number of layers of the current cube.
    pub fn layer_count(&self) -> u8 {
        self.cube.layer_count()
    }
    /// Returns the turn currently animating.
    pub fn current_turn(&self) -> Option<&AnimationState> {
        self.queue.current()
    }
    /// Returns the number of turns waiting behind the current one.
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }
    /// Returns whether no turns are animating or waiting.
    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }

    /// Captures the sticker state of the cube.
    ///
    /// Fails while a turn is partway through its animation.
    pub fn sticker_state(&self) -> Result<StickerState, PreconditionError> {
        match self.queue.current() {
            Some(_) => Err(PreconditionError::TurnInProgress),
            None => Ok(StickerState::capture(&self.cube)),
        }
    }
    /// Returns the Kociemba state string of the cube.
    pub fn kociemba_state(&self) -> Result<String, PreconditionError> {
        Ok(self.sticker_state()?.to_kociemba())
    }

    /// Queues a layer turn, such as `R` or `2-3Lw'`.
    ///
    /// Invalid notation calls `on_failed` immediately and queues nothing.
    pub fn movement(
        &mut self,
        text: &str,
        on_complete: impl FnOnce(String) + Send + 'static,
        on_failed: impl FnOnce(String) + Send + 'static,
    ) {
        let parsed = resolve_move(text, self.layer_count());
        self.enqueue(text, parsed, on_complete, on_failed);
    }

    /// Queues a whole-cube rotation, such as `x` or `y2'`.
    ///
    /// Invalid notation calls `on_failed` immediately and queues nothing.
    pub fn rotate(
        &mut self,
        text: &str,
        on_complete: impl FnOnce(String) + Send + 'static,
        on_failed: impl FnOnce(String) + Send + 'static,
    ) {
        let parsed = resolve_rotation(text, self.layer_count());
        self.enqueue(text, parsed, on_complete, on_failed);
    }

    fn enqueue(
        &mut self,
        text: &str,
        parsed: Result<Slice, cubekit_notation::ParseError>,
        on_complete: impl FnOnce(String) + Send + 'static,
        on_failed: impl FnOnce(String) + Send + 'static,
    ) {
        match parsed {
            Ok(slice) => {
                log::debug!("queued {text:?} as {slice}");
                let anim = AnimationState::new(slice, Instant::now(), on_complete, on_failed);
                self.queue.push(anim);
            }
            Err(e) => {
                log::warn!("rejected {text:?}: {e}");
                on_failed(e.to_string());
            }
        }
    }

    /// Interrupts all turns, resets the cube to solved, and calls
    /// `on_complete` with the solved state.
    pub fn reset(&mut self, on_complete: impl FnOnce(String) + Send + 'static) {
        self.stop(INTERRUPTED_REASON);
        self.cube.reset();
        self.rebuild_if_idle();
        log::info!("reset cube");
        on_complete(StickerState::capture(&self.cube).to_kociemba());
    }

    /// Interrupts all turns and replaces the stickers with those decoded from
    /// a Kociemba state string.
    ///
    /// An undecodable string calls `on_failed` immediately and leaves the
    /// engine untouched.
    pub fn set_state(
        &mut self,
        state: &str,
        on_complete: impl FnOnce(String) + Send + 'static,
        on_failed: impl FnOnce(String) + Send + 'static,
    ) {
        let stickers = match StickerState::from_kociemba(state, self.layer_count()) {
            Ok(stickers) => stickers,
            Err(e) => {
                log::warn!("rejected state {state:?}: {e}");
                on_failed(INVALID_STATE_REASON.to_owned());
                return;
            }
        };
        self.stop(INTERRUPTED_REASON);
        if let Err(e) = stickers.apply_to(&mut self.cube) {
            log::error!("error applying decoded state: {e}");
            on_failed(INVALID_STATE_REASON.to_owned());
            return;
        }
        on_complete(StickerState::capture(&self.cube).to_kociemba());
    }

    /// Finishes the turn in flight immediately and fails every waiting turn
    /// with `reason`.
    pub fn stop(&mut self, reason: &str) {
        if let Err(e) = self.finish_current_now() {
            log::error!("error stopping turn: {e}");
        }
        let mut interrupted = 0;
        for anim in self.queue.drain_waiting() {
            anim.fail(reason);
            interrupted += 1;
        }
        if interrupted > 0 {
            log::warn!("interrupted {interrupted} queued turns");
        }
    }

    /// Advances animations using the current time.
    pub fn update(&mut self) {
        self.update_at(Instant::now());
    }

    /// Advances animations to `now`, committing any turn that completes.
    ///
    /// At most one turn starts per call. With zero speed, a turn starts and
    /// completes within a single call.
    pub fn update_at(&mut self, now: Instant) {
        if let Err(e) = self.try_update(now) {
            log::error!("error updating animation: {e}");
        }
        self.expire_commands(now);
    }

    fn try_update(&mut self, now: Instant) -> Result<(), PreconditionError> {
        self.rebuild_if_idle();
        if !self.queue.start_next(&self.cube, now)? {
            return Ok(());
        }

        let speed_ms = self.queue.rotation_speed_ms(&self.settings);
        if let Some(current) = self.queue.current_mut() {
            let delta = current.update(now, speed_ms)?;
            log::trace!("turn {} advanced {delta:.1}%", current.slice());
        }
        let complete = self
            .queue
            .current()
            .is_some_and(|c| c.status() == AnimationStatus::Complete);
        if complete {
            self.commit_current()?;
        }
        Ok(())
    }

    fn finish_current_now(&mut self) -> Result<(), PreconditionError> {
        let Some(current) = self.queue.current_mut() else {
            return Ok(());
        };
        current.update(Instant::now(), 0.0)?;
        self.commit_current()
    }

    fn commit_current(&mut self) -> Result<(), PreconditionError> {
        let Some(anim) = self.queue.take_current() else {
            return Ok(());
        };
        anim.commit(&mut self.cube)?;
        log::debug!("completed turn {}", anim.slice());
        anim.complete(StickerState::capture(&self.cube).to_kociemba())
    }

    fn rebuild_if_idle(&mut self) {
        let layer_count = self.settings.layer_count;
        if layer_count == self.cube.layer_count() || !self.queue.is_empty() {
            return;
        }
        match CubeState::new(layer_count) {
            Ok(cube) => {
                log::info!("rebuilt cube as {0}x{0}x{0}", layer_count);
                self.cube = cube;
            }
            Err(e) => log::error!("error rebuilding cube: {e}"),
        }
    }
}
