//! # Event bus for broadcasting lifecycle events.
//!
//! [`Bus`] is a thin wrapper around [`tokio::sync::broadcast`]. The [`Toaster`](crate::Toaster)
//! publishes one [`Event`] per store mutation; timers and the promise adapter publish
//! through the same handle.
//!
//! ## Architecture
//! ```text
//! Publishers:                          Receivers:
//!   Toaster ops ──┐
//!   DismissTimer ─┼────► Bus ────┬───► subscriber_listener ──► SubscriberSet
//!   promise()   ──┘  (broadcast) └───► Toaster::events() (user receivers)
//! ```
//!
//! ## Rules
//! - **Non-blocking publish**: `publish()` never blocks and works outside a runtime.
//! - **Bounded capacity**: one ring buffer shared by all receivers.
//! - **Lag handling**: slow receivers get `RecvError::Lagged(n)` and skip `n` oldest items.
//! - **No persistence**: events are lost if nobody is subscribed at send time.

use tokio::sync::broadcast;

use super::event::Event;

/// Broadcast channel for lifecycle events.
///
/// Cheap to clone (internally holds an `Arc`-backed sender).
#[derive(Clone, Debug)]
pub struct Bus {
    tx: broadcast::Sender<Event>,
}

impl Bus {
    /// Creates a new bus with the given channel capacity (clamped to at least 1).
    pub fn new(capacity: usize) -> Self {
        let (tx, _rx) = broadcast::channel::<Event>(capacity.max(1));
        Self { tx }
    }

    /// Publishes an event to all active receivers.
    ///
    /// If there are no receivers, the event is dropped.
    pub fn publish(&self, ev: Event) {
        let _ = self.tx.send(ev);
    }

    /// Creates a new receiver that observes subsequent events.
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.tx.subscribe()
    }
}
