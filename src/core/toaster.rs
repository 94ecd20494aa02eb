//! # Toaster: the public request API.
//!
//! The [`Toaster`] owns the [`Store`], the current [`ToasterConfig`] and the event
//! [`Bus`]. It is a cheap-clone handle; clones share the same list. Build one per
//! application (or one per test).
//!
//! ## Request flow
//! ```text
//! show(request)
//!   ├─► resolve (max_visible, default_duration) from ShowOptions or config
//!   ├─► request.id live?  ──yes──► Store.remove(id)  ─► notify, ToastReplaced
//!   │                      no id ─► generate one not currently live
//!   ├─► normalize(request, default_duration)
//!   └─► Store.insert(record, max_visible) ─► notify, ToastShown (+ ToastEvicted ...)
//!
//! dismiss(id?) / remove(id?)
//!   └─► Store.remove(id?) ─► notify, ToastDismissed (only if something was removed)
//! ```
//!
//! ## Rules
//! - Toast operations never fail; bad input is defaulted, unknown ids are no-ops.
//! - Every store mutation notifies listeners synchronously, once per mutation.
//! - `success`/`error`/`warning`/`info` force the kind, overriding the request's.

use std::sync::{Arc, Mutex, PoisonError, RwLock, Weak};

use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use super::builder::ToasterBuilder;
use super::config::{ShowOptions, ToasterConfig};
use super::listeners::SubscriptionId;
use super::store::Store;
use crate::error::ConfigError;
use crate::events::{Bus, Event, EventKind};
use crate::toasts::{normalize, ToastId, ToastKind, ToastPatch, ToastRecord, ToastRequest};

/// Shared state behind every [`Toaster`] clone.
pub(crate) struct Inner {
    pub(crate) store: Store,
    pub(crate) config: RwLock<ToasterConfig>,
    pub(crate) bus: Bus,
    pub(crate) token: CancellationToken,
    pub(crate) listener: Mutex<Option<JoinHandle<()>>>,
}

impl Drop for Inner {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

/// Handle to a toast store and its lifecycle engine.
///
/// ## Example
/// ```rust
/// use toastvisor::{Toaster, ToasterConfig, ToastKind, ToastRequest};
///
/// let toaster = Toaster::new(ToasterConfig::default());
/// let id = toaster.success("Saved");
/// toaster.show(ToastRequest::from("Syncing").with_id("sync").sticky());
///
/// let list = toaster.toasts();
/// assert_eq!(list[0].id.as_str(), "sync");
/// assert_eq!(list[1].kind, ToastKind::Success);
///
/// toaster.dismiss(Some(&id));
/// assert_eq!(toaster.toasts().len(), 1);
/// ```
#[derive(Clone)]
pub struct Toaster {
    pub(crate) inner: Arc<Inner>,
}

/// Non-owning handle to a [`Toaster`], used by timers and surface-side helpers.
#[derive(Clone)]
pub struct WeakToaster(Weak<Inner>);

impl WeakToaster {
    /// Returns the toaster if it is still alive.
    pub fn upgrade(&self) -> Option<Toaster> {
        self.0.upgrade().map(|inner| Toaster { inner })
    }
}

impl Toaster {
    /// Creates a toaster without event subscribers.
    ///
    /// Works outside a Tokio runtime; only timers, `promise` and subscribers need one.
    pub fn new(config: ToasterConfig) -> Self {
        ToasterBuilder::new(config).build()
    }

    /// Returns a builder for a toaster with event subscribers.
    pub fn builder(config: ToasterConfig) -> ToasterBuilder {
        ToasterBuilder::new(config)
    }

    /// Shows a toast using the current configuration. Returns its id.
    pub fn show(&self, request: impl Into<ToastRequest>) -> ToastId {
        self.show_with(request, ShowOptions::default())
    }

    /// Shows a toast with per-call overrides of `max_visible`/`default_duration`.
    ///
    /// If the request carries the id of a live toast, that toast is removed first,
    /// so the new one starts fresh at the head of the list with a new timer.
    pub fn show_with(&self, request: impl Into<ToastRequest>, options: ShowOptions) -> ToastId {
        let mut request = request.into();
        let (max_visible, default_duration) = options.resolve(&self.config());

        match &request.id {
            Some(id) => {
                if self.inner.store.exists(id) {
                    self.inner.store.remove(Some(id));
                    self.publish(Event::new(EventKind::ToastReplaced).with_toast(id.clone()));
                }
            }
            None => request.id = Some(self.fresh_id()),
        }

        let record = normalize(request, default_duration);
        let shown = Event::new(EventKind::ToastShown)
            .with_toast(record.id.clone())
            .with_toast_kind(record.kind)
            .with_duration(record.duration);
        let id = record.id.clone();

        let evicted = self.inner.store.insert(record, max_visible);
        self.publish(shown);
        for old in evicted {
            self.publish(
                Event::new(EventKind::ToastEvicted)
                    .with_toast(old.id)
                    .with_toast_kind(old.kind),
            );
        }
        id
    }

    /// Shows a success toast. A plain string becomes the title.
    pub fn success(&self, request: impl Into<ToastRequest>) -> ToastId {
        self.show_kind(request, ToastKind::Success)
    }

    /// Shows an error toast. A plain string becomes the title.
    pub fn error(&self, request: impl Into<ToastRequest>) -> ToastId {
        self.show_kind(request, ToastKind::Error)
    }

    /// Shows a warning toast. A plain string becomes the title.
    pub fn warning(&self, request: impl Into<ToastRequest>) -> ToastId {
        self.show_kind(request, ToastKind::Warning)
    }

    /// Shows an info toast. A plain string becomes the title.
    pub fn info(&self, request: impl Into<ToastRequest>) -> ToastId {
        self.show_kind(request, ToastKind::Info)
    }

    fn show_kind(&self, request: impl Into<ToastRequest>, kind: ToastKind) -> ToastId {
        self.show(request.into().with_kind(kind))
    }

    /// Dismisses the toast with `id`, or the oldest one when `id` is `None`.
    ///
    /// Returns `true` if a toast was removed. Listeners are notified either way.
    pub fn dismiss(&self, id: Option<&ToastId>) -> bool {
        match self.inner.store.remove(id) {
            Some(removed) => {
                self.publish(Event::new(EventKind::ToastDismissed).with_toast(removed.id));
                true
            }
            None => false,
        }
    }

    /// Alias of [`dismiss`](Self::dismiss).
    #[inline]
    pub fn remove(&self, id: Option<&ToastId>) -> bool {
        self.dismiss(id)
    }

    /// Updates a live toast in place; its id, position and `created_at` are kept.
    ///
    /// Returns `true` if the toast was live. Listeners are notified either way.
    pub fn update(&self, id: &ToastId, patch: impl Into<ToastPatch>) -> bool {
        match self.inner.store.update(id, patch.into()) {
            Some(updated) => {
                self.publish(
                    Event::new(EventKind::ToastUpdated)
                        .with_toast(updated.id)
                        .with_toast_kind(updated.kind),
                );
                true
            }
            None => false,
        }
    }

    /// Returns `true` if a toast with `id` is live.
    pub fn exists(&self, id: &ToastId) -> bool {
        self.inner.store.exists(id)
    }

    /// Returns a snapshot of the live toasts, newest first.
    pub fn toasts(&self) -> Vec<ToastRecord> {
        self.inner.store.snapshot()
    }

    /// Returns the number of live toasts.
    pub fn len(&self) -> usize {
        self.inner.store.len()
    }

    /// Returns `true` if no toast is live.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Registers a listener called with the full list after every mutation.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&[ToastRecord]) + Send + Sync + 'static,
    {
        self.inner.store.listeners().subscribe(Arc::new(listener))
    }

    /// Removes a listener. Idempotent; returns `true` if it was still registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.store.listeners().unsubscribe(id)
    }

    /// Returns the current configuration.
    pub fn config(&self) -> ToasterConfig {
        self.inner
            .config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replaces the configuration. Called by the mounted rendering surface; last write wins.
    ///
    /// Live toasts are untouched: a lower `max_visible` applies from the next insertion.
    ///
    /// ### Errors
    /// [`ConfigError::MaxVisibleZero`] if `config.max_visible == 0`; the previous
    /// configuration stays in effect.
    pub fn configure(&self, config: ToasterConfig) -> Result<(), ConfigError> {
        config.validate()?;
        let reason = format!(
            "max_visible={} default_duration_ms={}",
            config.max_visible,
            config.default_duration.as_millis()
        );
        *self
            .inner
            .config
            .write()
            .unwrap_or_else(PoisonError::into_inner) = config;
        self.publish(Event::new(EventKind::ConfigChanged).with_reason(reason));
        Ok(())
    }

    /// Returns a receiver of lifecycle events published from now on.
    pub fn events(&self) -> broadcast::Receiver<Event> {
        self.inner.bus.subscribe()
    }

    /// Returns a non-owning handle.
    pub fn downgrade(&self) -> WeakToaster {
        WeakToaster(Arc::downgrade(&self.inner))
    }

    /// Stops the event fan-out and waits for subscriber workers to drain.
    ///
    /// The store keeps working; only async subscribers stop receiving events.
    pub async fn shutdown(&self) {
        self.inner.token.cancel();
        let handle = self
            .inner
            .listener
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(handle) = handle {
            let _ = handle.await;
        }
    }

    /// Dismisses `id` on behalf of an expired timer.
    pub(crate) fn expire(&self, id: &ToastId, after: std::time::Duration) {
        self.publish(
            Event::new(EventKind::TimerExpired)
                .with_toast(id.clone())
                .with_duration(after),
        );
        self.dismiss(Some(id));
    }

    pub(crate) fn publish(&self, ev: Event) {
        self.inner.bus.publish(ev);
    }

    /// Generates an id that is not currently live.
    fn fresh_id(&self) -> ToastId {
        loop {
            let id = ToastId::generate();
            if !self.inner.store.exists(&id) {
                return id;
            }
        }
    }
}
