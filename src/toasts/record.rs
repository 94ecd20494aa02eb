//! # Canonical, store-resident toast records.
//!
//! A [`ToastRecord`] is what the store holds and what listeners receive. Every field
//! is filled in: requests are normalized before they reach the store
//! (see [`normalize`](super::normalize)).

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use super::id::ToastId;

/// Visual category of a toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ToastKind {
    /// Neutral message.
    #[default]
    Default,
    /// Operation completed successfully.
    Success,
    /// Operation failed.
    Error,
    /// Something needs attention but nothing failed.
    Warning,
    /// Informational message.
    Info,
}

impl ToastKind {
    /// Returns a short stable label (snake_case) for use in logs.
    pub fn as_label(&self) -> &'static str {
        match self {
            ToastKind::Default => "default",
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Warning => "warning",
            ToastKind::Info => "info",
        }
    }
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

/// Callback attached to a toast action button.
pub type ActionFn = Arc<dyn Fn() + Send + Sync + 'static>;

/// Action button shown on a toast.
///
/// The engine never runs `on_activate` itself; the rendering surface calls
/// [`ToastAction::activate`] when the user clicks the button.
#[derive(Clone)]
pub struct ToastAction {
    /// Button label.
    pub label: String,
    /// Application callback.
    pub on_activate: ActionFn,
}

impl ToastAction {
    /// Creates an action from a label and a callback.
    pub fn new<F>(label: impl Into<String>, on_activate: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self {
            label: label.into(),
            on_activate: Arc::new(on_activate),
        }
    }

    /// Runs the application callback.
    pub fn activate(&self) {
        (self.on_activate)();
    }
}

impl fmt::Debug for ToastAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastAction")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// A complete toast, as held by the store.
///
/// ## Field semantics
/// - `duration`: auto-dismiss delay; `Duration::ZERO` = sticky (never auto-dismissed)
/// - `created_at`: set once by the normalizer, never changed by updates
#[derive(Clone, Debug)]
pub struct ToastRecord {
    /// Unique id, stable for the toast's lifetime.
    pub id: ToastId,
    /// Headline text.
    pub title: String,
    /// Secondary text.
    pub description: String,
    /// Visual category.
    pub kind: ToastKind,
    /// Auto-dismiss delay (`Duration::ZERO` = sticky).
    pub duration: Duration,
    /// Optional action button.
    pub action: Option<ToastAction>,
    /// Whether the user may dismiss it.
    pub dismissible: bool,
    /// Creation timestamp.
    pub created_at: SystemTime,
}

impl ToastRecord {
    /// Returns `true` if the toast never auto-dismisses.
    #[inline]
    pub fn is_sticky(&self) -> bool {
        self.duration.is_zero()
    }

    /// Returns the auto-dismiss delay, or `None` for sticky toasts.
    #[inline]
    pub fn auto_dismiss_after(&self) -> Option<Duration> {
        if self.is_sticky() {
            None
        } else {
            Some(self.duration)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn activate_runs_callback() {
        let hits = Arc::new(AtomicUsize::new(0));
        let h = Arc::clone(&hits);
        let action = ToastAction::new("Undo", move || {
            h.fetch_add(1, Ordering::Relaxed);
        });

        action.activate();
        action.clone().activate();
        assert_eq!(hits.load(Ordering::Relaxed), 2);
        assert!(format!("{action:?}").contains("Undo"));
    }

    #[test]
    fn kind_labels_are_stable() {
        assert_eq!(ToastKind::default(), ToastKind::Default);
        assert_eq!(ToastKind::Warning.as_label(), "warning");
        assert_eq!(ToastKind::Error.to_string(), "error");
    }
}
