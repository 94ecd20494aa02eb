//! # Synchronous store listeners.
//!
//! The subscription registry behind [`Toaster::subscribe`](crate::Toaster::subscribe).
//! Rendering surfaces register a callback and receive the **full current list**
//! after every store mutation.
//!
//! ## Rules
//! - Callbacks run on the mutating thread, after the store lock is released.
//! - The list passed to a callback is the one produced by the mutation that
//!   triggered it, never an intermediate state.
//! - A callback never receives an older list after a newer one. When a nested
//!   mutation has already notified a callback, the outer (stale) delivery is
//!   skipped for it.
//! - Callbacks may call back into the toaster (dismiss, show, unsubscribe).
//! - A panicking callback is isolated and reported as `EventKind::ListenerPanicked`;
//!   the remaining callbacks still run.
//! - `unsubscribe` is idempotent. A notification already in flight on another
//!   thread may still reach a callback that was just removed.

use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use crate::events::{panic_message, Bus, Event};
use crate::toasts::ToastRecord;

/// Callback receiving the current toast list.
pub type Listener = Arc<dyn Fn(&[ToastRecord]) + Send + Sync + 'static>;

/// Handle returned by [`Toaster::subscribe`](crate::Toaster::subscribe).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Registered callback plus the version of the newest list it was handed.
struct Entry {
    id: SubscriptionId,
    listener: Listener,
    seen: Arc<AtomicU64>,
}

/// Registry of listeners, in subscription order.
pub(crate) struct Listeners {
    next: AtomicU64,
    entries: Mutex<Vec<Entry>>,
    bus: Bus,
}

impl Listeners {
    pub fn new(bus: Bus) -> Self {
        Self {
            next: AtomicU64::new(0),
            entries: Mutex::new(Vec::new()),
            bus,
        }
    }

    pub fn subscribe(&self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next.fetch_add(1, Ordering::Relaxed));
        self.lock().push(Entry {
            id,
            listener,
            seen: Arc::new(AtomicU64::new(0)),
        });
        id
    }

    /// Returns `true` if the listener was still registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut entries = self.lock();
        let before = entries.len();
        entries.retain(|e| e.id != id);
        entries.len() != before
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Calls every registered listener with `list`, the store state at `version`.
    ///
    /// Versions start at 1. A listener that was already handed a newer list
    /// (a nested mutation notified it first) is skipped for this one.
    pub fn notify(&self, list: &[ToastRecord], version: u64) {
        let targets: Vec<(Listener, Arc<AtomicU64>)> = self
            .lock()
            .iter()
            .map(|e| (Arc::clone(&e.listener), Arc::clone(&e.seen)))
            .collect();

        for (listener, seen) in targets {
            if seen.fetch_max(version, Ordering::AcqRel) >= version {
                continue;
            }
            if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(|| listener(list))) {
                self.bus
                    .publish(Event::listener_panicked(panic_message(payload.as_ref())));
            }
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Entry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
