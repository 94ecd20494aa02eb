//! # Event subscribers for the toastvisor engine.
//!
//! This module provides the [`Subscribe`] trait and the [`SubscriberSet`] that
//! drives it, for handling lifecycle events broadcast through the [`Bus`](crate::events::Bus).
//!
//! ## Architecture
//! ```text
//! Event flow:
//!   Toaster ── publish(Event) ──► Bus ──► subscriber_listener ──► SubscriberSet
//!                                                                     │
//!                                                     ┌───────────┬───┴───────┐
//!                                                     ▼           ▼           ▼
//!                                                 LogWriter    Metrics     Custom
//! ```

#[cfg(feature = "logging")]
mod log;
mod subscriber;
mod subscriber_set;

#[cfg(feature = "logging")]
pub use log::LogWriter;
pub use subscriber::Subscribe;
pub use subscriber_set::SubscriberSet;
