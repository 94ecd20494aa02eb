//! # toastvisor
//!
//! **Toastvisor** is the state and lifecycle engine behind toast notifications.
//!
//! It keeps a bounded, newest-first list of short-lived messages, tells every
//! subscriber when that list changes, and drives the lifecycle of each toast:
//! auto-dismiss timers, replacement by id, in-place updates and promise tracking.
//! Rendering is left to whatever surface subscribes to the list.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!  app code                           rendering surface
//!  ─────────                          ─────────────────
//!  show / success / error /           configure(ToasterConfig)
//!  warning / info / dismiss /         subscribe(|list| render(list))
//!  update / promise(fut, msgs)        AutoDismiss / DismissTimer
//!        │                                  │      ▲
//!        ▼                                  ▼      │ full list, newest first
//! ┌──────────────────────────────────────────────────────────────────┐
//! │  Toaster (cheap-clone handle)                                    │
//! │  - ToasterConfig (max_visible, default_duration)                 │
//! │  - Store (bounded list, synchronous listener notification)       │
//! │  - Bus (broadcast lifecycle events)                              │
//! └──────────────────────────────┬───────────────────────────────────┘
//!                                ▼
//!                    ┌────────────────────────┐
//!                    │  subscriber_listener   │  (only with subscribers)
//!                    └───────────┬────────────┘
//!                                ▼
//!                          SubscriberSet
//!                        (per-sub queues)
//!                     ┌──────────┼──────────┐
//!                     ▼          ▼          ▼
//!                  worker1    worker2    workerN
//! ```
//!
//! ### Toast lifecycle
//! ```text
//! show(request) ──► normalize ──► Store.insert ──► visible
//!
//! visible
//!   ├─► update(id, patch)         ─► visible (same id, same position)
//!   ├─► show({id: same})          ─► removed, then shown again at the head
//!   ├─► list over max_visible     ─► evicted from the tail
//!   ├─► dismiss(id) / dismiss()   ─► removed
//!   └─► DismissTimer expired      ─► dismiss(id) ─► removed
//!
//! duration == 0 ─► sticky: no timer, stays until dismissed or evicted
//! ```
//!
//! ## Features
//! | Area              | Description                                                      | Key types / traits                          |
//! |-------------------|------------------------------------------------------------------|---------------------------------------------|
//! | **Requests**      | Show, update and dismiss toasts; sugar per kind.                 | [`Toaster`], [`ToastRequest`], [`ToastPatch`] |
//! | **Data model**    | Normalized records with ids, kinds and actions.                  | [`ToastRecord`], [`ToastId`], [`ToastKind`]  |
//! | **Timers**        | Cancellable auto-dismiss owned by the rendering surface.         | [`DismissTimer`], [`AutoDismiss`]           |
//! | **Promises**      | Loading toast that turns into success or error.                  | [`PromiseMessages`]                         |
//! | **Subscriber API**| Hook into lifecycle events (logging, metrics, custom).           | [`Subscribe`], [`Event`]                    |
//! | **Configuration** | Capacity and default duration pushed by the surface.             | [`ToasterConfig`], [`ShowOptions`]          |
//! | **Errors**        | Typed configuration errors.                                      | [`ConfigError`]                             |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogWriter`] _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use toastvisor::{AutoDismiss, PromiseMessages, Toaster, ToasterConfig, ToastRequest};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     // Build subscribers (optional)
//!     #[cfg(feature = "logging")]
//!     let subs: Vec<Arc<dyn toastvisor::Subscribe>> = vec![Arc::new(toastvisor::LogWriter)];
//!     #[cfg(not(feature = "logging"))]
//!     let subs: Vec<Arc<dyn toastvisor::Subscribe>> = Vec::new();
//!
//!     let toaster = Toaster::builder(ToasterConfig::default())
//!         .with_subscribers(subs)
//!         .build();
//!
//!     // The rendering surface listens to the list and owns the timers.
//!     let _timers = AutoDismiss::attach(&toaster);
//!     toaster.subscribe(|list| println!("{} toast(s) on screen", list.len()));
//!
//!     toaster.success("Saved");
//!     toaster.show(ToastRequest::from("Offline").with_id("net").sticky());
//!
//!     let bytes = toaster
//!         .promise(
//!             async { Ok::<_, std::io::Error>(512_u64) },
//!             PromiseMessages::new("Uploading...")
//!                 .success_with(|n: &u64| format!("Uploaded {n} bytes"))
//!                 .error("Upload failed"),
//!         )
//!         .await
//!         .unwrap();
//!     assert_eq!(bytes, 512);
//!
//!     toaster.shutdown().await;
//! }
//! ```
mod core;
mod error;
mod events;
mod subscribers;
mod timers;
mod toasts;

// ---- Public re-exports ----

pub use core::{
    DescribeFn, Listener, PromiseMessage, PromiseMessages, ShowOptions, SubscriptionId, Toaster,
    ToasterBuilder, ToasterConfig, WeakToaster,
};
pub use error::ConfigError;
pub use events::{Bus, Event, EventKind};
pub use subscribers::{Subscribe, SubscriberSet};
pub use timers::{AutoDismiss, DismissTimer};
pub use toasts::{
    normalize, ActionFn, ToastAction, ToastId, ToastKind, ToastPatch, ToastRecord, ToastRequest,
    ID_LEN,
};

// Optional: expose a simple built-in logger subscriber (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use subscribers::LogWriter;
