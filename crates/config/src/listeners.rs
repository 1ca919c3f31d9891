//! Payload-free change notification.
//!
//! Responsibilities:
//! - Keep an ordered registry of callbacks identified by `ListenerId`.
//! - Invoke every callback synchronously on `notify`.
//! - Bound re-entrant notification depth.
//!
//! Does NOT handle:
//! - Delivering data with the notification. Listeners pull current state
//!   from its owner, so a notification can never disagree with the source.
//!
//! Invariants:
//! - Callbacks may subscribe, unsubscribe or trigger further notifications
//!   while being notified; the registry is snapshotted before invocation.
//! - Nesting beyond `MAX_NOTIFY_DEPTH` is suppressed, never recursed into.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::constants::MAX_NOTIFY_DEPTH;

/// A registered change callback.
pub type Listener = Rc<dyn Fn()>;

/// Handle returned by `Listeners::subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Registry of change callbacks.
#[derive(Default)]
pub struct Listeners {
    entries: RefCell<Vec<(ListenerId, Listener)>>,
    next_id: Cell<u64>,
    depth: Cell<usize>,
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("len", &self.len())
            .field("depth", &self.depth.get())
            .finish()
    }
}

/// Decrements the notification depth when dropped, including on unwind.
struct DepthGuard<'a>(&'a Cell<usize>);

impl Drop for DepthGuard<'_> {
    fn drop(&mut self) {
        self.0.set(self.0.get().saturating_sub(1));
    }
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback.
    pub fn subscribe(&self, listener: impl Fn() + 'static) -> ListenerId {
        self.subscribe_rc(Rc::new(listener))
    }

    /// Register an already shared callback.
    pub fn subscribe_rc(&self, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.entries.borrow_mut().push((id, listener));
        id
    }

    /// Remove a callback. Returns false if the id was not registered.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        let mut entries = self.entries.borrow_mut();
        let before = entries.len();
        entries.retain(|(entry_id, _)| *entry_id != id);
        entries.len() != before
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Invoke every registered callback.
    ///
    /// Returns false if the notification was suppressed because the nesting
    /// limit was reached.
    pub fn notify(&self) -> bool {
        let depth = self.depth.get();
        if depth >= MAX_NOTIFY_DEPTH {
            tracing::warn!(
                depth,
                "Suppressing re-entrant change notification; a listener mutates on notify"
            );
            return false;
        }

        self.depth.set(depth + 1);
        let _guard = DepthGuard(&self.depth);

        let snapshot: Vec<Listener> = self
            .entries
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();

        for listener in snapshot {
            listener();
        }
        true
    }
}
