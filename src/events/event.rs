//! # Lifecycle events emitted by the toaster.
//!
//! The [`EventKind`] enum classifies event types across three categories:
//! - **Store events**: a toast was shown, replaced, updated, dismissed or evicted
//! - **Lifecycle events**: timer expiry, promise settlement, configuration change
//! - **Delivery events**: a listener or subscriber misbehaved (panic, overflow)
//!
//! The [`Event`] struct carries additional metadata such as timestamps, toast id,
//! toast kind and reasons.
//!
//! ## Ordering guarantees
//! Each event has a globally unique sequence number (`seq`) that increases monotonically.
//! Use `seq` to restore the exact order when events are delivered out of order.
//!
//! ## Example
//! ```rust
//! use toastvisor::{Event, EventKind, ToastId, ToastKind};
//!
//! let ev = Event::new(EventKind::ToastShown)
//!     .with_toast(ToastId::from("upload"))
//!     .with_toast_kind(ToastKind::Success);
//!
//! assert_eq!(ev.kind, EventKind::ToastShown);
//! assert_eq!(ev.toast.as_ref().map(|id| id.as_str()), Some("upload"));
//! ```

use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use crate::toasts::{ToastId, ToastKind};

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Classification of lifecycle events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    // === Store events ===
    /// A toast was inserted at the head of the list.
    ///
    /// Sets:
    /// - `toast`: toast id
    /// - `toast_kind`: toast kind
    /// - `duration_ms`: auto-dismiss delay (`0` = sticky)
    ToastShown,

    /// A live toast was removed because `show` was called again with its id.
    ///
    /// Sets:
    /// - `toast`: toast id
    ToastReplaced,

    /// A live toast was updated in place.
    ///
    /// Sets:
    /// - `toast`: toast id
    /// - `toast_kind`: kind after the update
    ToastUpdated,

    /// A toast was removed (explicit dismiss or timer expiry).
    ///
    /// Sets:
    /// - `toast`: toast id
    ToastDismissed,

    /// A toast was dropped from the tail because the list was full.
    ///
    /// Sets:
    /// - `toast`: toast id
    /// - `toast_kind`: toast kind
    ToastEvicted,

    // === Lifecycle events ===
    /// An auto-dismiss timer expired and requested dismissal.
    ///
    /// Sets:
    /// - `toast`: toast id
    /// - `duration_ms`: the elapsed delay
    TimerExpired,

    /// The future tracked by `promise` completed with `Ok`.
    ///
    /// Sets:
    /// - `toast`: id of the loading toast
    PromiseResolved,

    /// The future tracked by `promise` completed with `Err`.
    ///
    /// Sets:
    /// - `toast`: id of the loading toast
    PromiseRejected,

    /// The rendering surface pushed a new configuration.
    ///
    /// Sets:
    /// - `reason`: `max_visible=.. default_duration_ms=..`
    ConfigChanged,

    // === Delivery events ===
    /// A synchronous store listener panicked.
    ///
    /// Sets:
    /// - `reason`: panic info/message
    ListenerPanicked,

    /// An async subscriber panicked during event processing.
    ///
    /// Sets:
    /// - `subscriber`: subscriber name
    /// - `reason`: panic info/message
    SubscriberPanicked,

    /// An async subscriber dropped an event (queue full or worker closed).
    ///
    /// Sets:
    /// - `subscriber`: subscriber name
    /// - `reason`: reason string (e.g., "full", "closed")
    SubscriberOverflow,
}

/// Lifecycle event with optional metadata.
///
/// - `seq`: monotonic global sequence for ordering
/// - `at`: wall-clock timestamp (for logs)
/// - other optional fields are set depending on the [`EventKind`]
#[derive(Clone, Debug)]
pub struct Event {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    /// Event classification.
    pub kind: EventKind,

    /// Id of the toast, if applicable.
    pub toast: Option<ToastId>,
    /// Kind of the toast, if applicable.
    pub toast_kind: Option<ToastKind>,
    /// Auto-dismiss delay in milliseconds (compact).
    pub duration_ms: Option<u32>,
    /// Name of the subscriber, for delivery events.
    pub subscriber: Option<Arc<str>>,
    /// Human-readable reason (panic details, overflow details, etc.).
    pub reason: Option<Arc<str>>,
}

impl Event {
    /// Creates a new event of the given kind with current timestamp and next sequence number.
    pub fn new(kind: EventKind) -> Self {
        Self {
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            kind,
            toast: None,
            toast_kind: None,
            duration_ms: None,
            subscriber: None,
            reason: None,
        }
    }

    /// Attaches a toast id.
    #[inline]
    pub fn with_toast(mut self, id: ToastId) -> Self {
        self.toast = Some(id);
        self
    }

    /// Attaches a toast kind.
    #[inline]
    pub fn with_toast_kind(mut self, kind: ToastKind) -> Self {
        self.toast_kind = Some(kind);
        self
    }

    /// Attaches a duration (stored as milliseconds).
    #[inline]
    pub fn with_duration(mut self, d: Duration) -> Self {
        let ms = d.as_millis().min(u128::from(u32::MAX)) as u32;
        self.duration_ms = Some(ms);
        self
    }

    /// Attaches a subscriber name.
    #[inline]
    pub fn with_subscriber(mut self, name: impl Into<Arc<str>>) -> Self {
        self.subscriber = Some(name.into());
        self
    }

    /// Attaches a human-readable reason.
    #[inline]
    pub fn with_reason(mut self, reason: impl Into<Arc<str>>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Creates a subscriber overflow event.
    #[inline]
    pub fn subscriber_overflow(subscriber: &'static str, reason: &'static str) -> Self {
        Event::new(EventKind::SubscriberOverflow)
            .with_subscriber(subscriber)
            .with_reason(format!("subscriber={subscriber} reason={reason}"))
    }

    /// Creates a subscriber panic event.
    #[inline]
    pub fn subscriber_panicked(subscriber: &'static str, info: String) -> Self {
        Event::new(EventKind::SubscriberPanicked)
            .with_subscriber(subscriber)
            .with_reason(info)
    }

    /// Creates a listener panic event.
    #[inline]
    pub fn listener_panicked(info: String) -> Self {
        Event::new(EventKind::ListenerPanicked).with_reason(info)
    }

    #[inline]
    pub fn is_subscriber_overflow(&self) -> bool {
        matches!(self.kind, EventKind::SubscriberOverflow)
    }
}

/// Extracts a printable message from a panic payload.
pub(crate) fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&'static str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}
