//! Futures-based interface to the engine.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll, Waker};

use parking_lot::Mutex;
use web_time::Instant;

use crate::{CommandError, Engine};

/// Request that can be submitted to an [`Engine`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
    /// Layer turn, such as `R'` or `3Rw2`.
    Movement(String),
    /// Whole-cube rotation, such as `x` or `y'`.
    Rotate(String),
    /// Interrupt everything and solve the cube.
    Reset,
    /// Interrupt everything and load a Kociemba state string.
    SetState(String),
}

#[derive(Debug, Default)]
struct CommandSlot {
    result: Option<Result<String, CommandError>>,
    finished: bool,
    waker: Option<Waker>,
}
impl CommandSlot {
    /// Records the result and returns the waker to notify. Only the first
    /// result counts.
    ///
    /// The waker must be woken after the lock is released.
    #[must_use]
    fn resolve(&mut self, result: Result<String, CommandError>) -> Option<Waker> {
        if self.finished {
            return None;
        }
        self.finished = true;
        self.result = Some(result);
        self.waker.take()
    }
}

fn resolve_slot(slot: &Mutex<CommandSlot>, result: Result<String, CommandError>) {
    let waker = slot.lock().resolve(result);
    if let Some(waker) = waker {
        waker.wake();
    }
}

/// Command that the engine has not yet resolved.
#[derive(Debug)]
pub(crate) struct PendingCommand {
    deadline: Instant,
    slot: Arc<Mutex<CommandSlot>>,
}

/// Future resolving to the Kociemba state after a command, or the reason it
/// failed.
///
/// The engine only makes progress when updated, so something else must keep
/// calling [`Engine::update()`] for this to resolve.
#[derive(Debug)]
#[must_use = "futures do nothing unless polled"]
pub struct CommandFuture {
    deadline: Instant,
    slot: Arc<Mutex<CommandSlot>>,
}
impl CommandFuture {
    /// Returns the time after which the command times out.
    pub fn deadline(&self) -> Instant {
        self.deadline
    }
    /// Returns whether the command has succeeded, failed, or timed out.
    pub fn is_finished(&self) -> bool {
        self.slot.lock().finished
    }
}
impl Future for CommandFuture {
    type Output = Result<String, CommandError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut slot = self.slot.lock();
        if !slot.finished && Instant::now() >= self.deadline {
            // This task is already awake.
            drop(slot.resolve(Err(CommandError::Timeout)));
        }
        match slot.result.take() {
            Some(result) => Poll::Ready(result),
            None => {
                slot.waker = Some(cx.waker().clone());
                Poll::Pending
            }
        }
    }
}

impl Engine {
    /// Submits a command, returning a future for its result.
    ///
    /// The command times out after [`cubeprefs::Settings::command_timeout()`].
    pub fn submit(&mut self, command: Command) -> CommandFuture {
        let deadline = Instant::now() + self.settings().command_timeout();
        let slot = Arc::new(Mutex::new(CommandSlot::default()));

        let on_complete = {
            let slot = Arc::clone(&slot);
            move |state| resolve_slot(&slot, Ok(state))
        };
        let on_failed = {
            let slot = Arc::clone(&slot);
            move |reason| resolve_slot(&slot, Err(CommandError::Failed(reason)))
        };

        log::debug!("submitted {command:?}");
        match command {
            Command::Movement(text) => self.movement(&text, on_complete, on_failed),
            Command::Rotate(text) => self.rotate(&text, on_complete, on_failed),
            Command::Reset => self.reset(on_complete),
            Command::SetState(state) => self.set_state(&state, on_complete, on_failed),
        }

        if !slot.lock().finished {
            self.pending_commands.push(PendingCommand {
                deadline,
                slot: Arc::clone(&slot),
            });
        }
        CommandFuture { deadline, slot }
    }

    /// Times out every unresolved command whose deadline is at or before
    /// `now`, and forgets resolved ones.
    pub(crate) fn expire_commands(&mut self, now: Instant) {
        let mut wakers = vec![];
        self.pending_commands.retain(|pending| {
            let mut slot = pending.slot.lock();
            if !slot.finished && now >= pending.deadline {
                log::warn!("command timed out");
                wakers.extend(slot.resolve(Err(CommandError::Timeout)));
            }
            !slot.finished
        });
        for waker in wakers {
            waker.wake();
        }
    }
}
