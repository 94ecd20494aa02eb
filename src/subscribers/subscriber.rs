//! # Async lifecycle observers.
//!
//! [`Subscribe`] is how logging, metrics or audit code watches what the toaster
//! does. Every implementation is fed by its own worker and its own bounded queue,
//! so a slow one only ever delays itself. A panic inside `on_event` is caught and
//! turned into `EventKind::SubscriberPanicked`.
//!
//! Subscribers see [`Event`]s after the fact. A rendering surface that needs the
//! exact list on screen registers a synchronous listener with
//! [`Toaster::subscribe`](crate::Toaster::subscribe) instead.
//!
//! ## Example
//! ```rust
//! use async_trait::async_trait;
//! use toastvisor::{Event, EventKind, Subscribe};
//!
//! struct EvictionCounter;
//!
//! #[async_trait]
//! impl Subscribe for EvictionCounter {
//!     async fn on_event(&self, ev: &Event) {
//!         if ev.kind == EventKind::ToastEvicted {
//!             // bump a counter
//!         }
//!     }
//!
//!     fn name(&self) -> &'static str { "eviction_counter" }
//!     fn queue_capacity(&self) -> usize { 64 }
//! }
//! ```

use async_trait::async_trait;

use crate::events::Event;

/// Observer of toaster lifecycle events. Must not block the executor.
#[async_trait]
pub trait Subscribe: Send + Sync + 'static {
    /// Handles one event. Events arrive in publication order.
    async fn on_event(&self, event: &Event);

    /// Name reported in overflow and panic events. Defaults to the type name.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Queue size (min 1, default 256). When the queue is full the event is
    /// dropped for this subscriber and `EventKind::SubscriberOverflow` is published.
    fn queue_capacity(&self) -> usize {
        256
    }
}
