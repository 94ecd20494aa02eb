//! Lifecycle events: types and broadcast bus.
//!
//! This module groups the event **data model** and the **bus** used to publish
//! lifecycle events emitted by the toaster, dismiss timers, the promise adapter
//! and subscriber workers.
//!
//! ## Contents
//! - [`EventKind`], [`Event`] event classification and payload metadata
//! - [`Bus`] thin wrapper over `tokio::sync::broadcast`
//!
//! ## Quick reference
//! - **Publishers**: `Toaster` operations, `DismissTimer`, `Toaster::promise`,
//!   listener notification (panics), `SubscriberSet` workers (overflow/panic).
//! - **Consumers**: the subscriber listener spawned by `ToasterBuilder::build`
//!   (fans out to `SubscriberSet`) and any receiver from `Toaster::events()`.

mod bus;
mod event;

pub use bus::Bus;
pub(crate) use event::panic_message;
pub use event::{Event, EventKind};
