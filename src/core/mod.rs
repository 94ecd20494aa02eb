//! Engine core: store, listeners, configuration and the public API.
//!
//! The public surface of this module is the [`Toaster`] handle and its
//! configuration/builder types; the store and listener registry are internal.
//!
//! Internal modules:
//! - [`store`]: ordered toast list with capacity-bounded insertion;
//! - [`listeners`]: synchronous subscription registry notified on every mutation;
//! - [`toaster`]: public request API (`show`, `success`, `dismiss`, ...);
//! - [`promise`]: promise-lifecycle adapter (`Toaster::promise`);
//! - [`builder`]: wiring of the bus and async subscribers;
//! - [`config`]: process-wide settings and per-call overrides.

mod builder;
mod config;
mod listeners;
mod promise;
mod store;
mod toaster;

pub use builder::ToasterBuilder;
pub use config::{ShowOptions, ToasterConfig};
pub use listeners::{Listener, SubscriptionId};
pub use promise::{DescribeFn, PromiseMessage, PromiseMessages};
pub use toaster::{Toaster, WeakToaster};
