//! Exclusive ownership of keyboard input.
//!
//! Responsibilities:
//! - Track which consumer currently owns the keyboard.
//! - Hand out scoped `InputGrant`s that release ownership when dropped.
//!
//! Does NOT handle:
//! - Routing events (the event loop asks `holder()` and dispatches).
//!
//! Invariants:
//! - At most one holder at a time; acquiring while held preempts.
//! - Dropping a grant that has been preempted never releases the new holder.
//! - Release happens on every exit path, including unwinding.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Holder {
    owner: &'static str,
    generation: u64,
}

/// Single-threaded arbiter for the keyboard.
#[derive(Debug, Default)]
pub struct InputChannel {
    holder: RefCell<Option<Holder>>,
    next_generation: Cell<u64>,
}

impl InputChannel {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Take the keyboard for `owner` until the returned grant is dropped.
    pub fn acquire(self: &Rc<Self>, owner: &'static str) -> InputGrant {
        let generation = self.next_generation.get();
        self.next_generation.set(generation + 1);

        let previous = self.holder.replace(Some(Holder { owner, generation }));
        if let Some(previous) = previous {
            tracing::debug!(
                owner,
                preempted = previous.owner,
                "Input channel preempted"
            );
        } else {
            tracing::debug!(owner, "Input channel acquired");
        }

        InputGrant {
            channel: Rc::clone(self),
            owner,
            generation,
        }
    }

    /// Current owner, if any.
    pub fn holder(&self) -> Option<&'static str> {
        self.holder.borrow().map(|h| h.owner)
    }

    pub fn is_held(&self) -> bool {
        self.holder.borrow().is_some()
    }

    pub fn is_held_by(&self, owner: &str) -> bool {
        self.holder() == Some(owner)
    }

    fn is_current(&self, generation: u64) -> bool {
        self.holder
            .borrow()
            .is_some_and(|h| h.generation == generation)
    }

    fn release(&self, generation: u64) {
        let mut holder = self.holder.borrow_mut();
        match *holder {
            Some(current) if current.generation == generation => {
                tracing::debug!(owner = current.owner, "Input channel released");
                *holder = None;
            }
            _ => {
                tracing::trace!(generation, "Stale input grant dropped");
            }
        }
    }
}

/// Scoped keyboard ownership. Releases the channel on drop.
pub struct InputGrant {
    channel: Rc<InputChannel>,
    owner: &'static str,
    generation: u64,
}

impl InputGrant {
    pub fn owner(&self) -> &'static str {
        self.owner
    }

    /// Whether this grant still owns the channel (it has not been preempted).
    pub fn is_current(&self) -> bool {
        self.channel.is_current(self.generation)
    }
}

impl fmt::Debug for InputGrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputGrant")
            .field("owner", &self.owner)
            .field("generation", &self.generation)
            .finish()
    }
}

impl Drop for InputGrant {
    fn drop(&mut self) {
        self.channel.release(self.generation);
    }
}
