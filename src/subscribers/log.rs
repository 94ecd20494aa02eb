//! # Simple logging subscriber for debugging and demos.
//!
//! [`LogWriter`] prints events to stdout in a human-readable format.
//!
//! ## Output format
//! ```text
//! [shown] toast=k3j9x0a1b2c4 kind=success duration_ms=4000
//! [evicted] toast=q8w7e6r5t4y3 kind=info
//! [updated] toast=upload kind=error
//! [timer-expired] toast=k3j9x0a1b2c4 after_ms=4000
//! [dismissed] toast=k3j9x0a1b2c4
//! [promise-rejected] toast=upload
//! ```
//!
//! ## Example
//! ```no_run
//! # #[cfg(feature = "logging")]
//! # async fn demo() {
//! use std::sync::Arc;
//! use toastvisor::{LogWriter, Toaster, ToasterConfig};
//!
//! let toaster = Toaster::builder(ToasterConfig::default())
//!     .with_subscribers(vec![Arc::new(LogWriter)])
//!     .build();
//! toaster.success("Saved");
//! # }
//! ```

use async_trait::async_trait;

use crate::events::{Event, EventKind};
use crate::subscribers::Subscribe;

/// Simple stdout logging subscriber.
///
/// Enabled via the `logging` feature. Not intended for production use;
/// implement a custom [`Subscribe`] for structured logging or metrics.
pub struct LogWriter;

#[async_trait]
impl Subscribe for LogWriter {
    async fn on_event(&self, e: &Event) {
        if let Some(line) = format_event(e) {
            println!("{line}");
        }
    }

    fn name(&self) -> &'static str {
        "log_writer"
    }
}

fn format_event(e: &Event) -> Option<String> {
    let toast = e.toast.as_ref().map(|id| id.as_str()).unwrap_or("-");
    let kind = e.toast_kind.map(|k| k.as_label()).unwrap_or("-");
    let line = match e.kind {
        EventKind::ToastShown => format!(
            "[shown] toast={toast} kind={kind} duration_ms={}",
            e.duration_ms.unwrap_or(0)
        ),
        EventKind::ToastReplaced => format!("[replaced] toast={toast}"),
        EventKind::ToastUpdated => format!("[updated] toast={toast} kind={kind}"),
        EventKind::ToastDismissed => format!("[dismissed] toast={toast}"),
        EventKind::ToastEvicted => format!("[evicted] toast={toast} kind={kind}"),
        EventKind::TimerExpired => format!(
            "[timer-expired] toast={toast} after_ms={}",
            e.duration_ms.unwrap_or(0)
        ),
        EventKind::PromiseResolved => format!("[promise-resolved] toast={toast}"),
        EventKind::PromiseRejected => format!("[promise-rejected] toast={toast}"),
        EventKind::ConfigChanged => format!("[config] {}", e.reason.as_deref().unwrap_or("")),
        EventKind::ListenerPanicked => {
            format!("[listener-panicked] err={:?}", e.reason.as_deref())
        }
        EventKind::SubscriberPanicked | EventKind::SubscriberOverflow => return None,
    };
    Some(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toasts::{ToastId, ToastKind};
    use std::time::Duration;

    #[test]
    fn shown_line_has_id_kind_and_duration() {
        let ev = Event::new(EventKind::ToastShown)
            .with_toast(ToastId::from("save"))
            .with_toast_kind(ToastKind::Success)
            .with_duration(Duration::from_millis(4000));
        assert_eq!(
            format_event(&ev).as_deref(),
            Some("[shown] toast=save kind=success duration_ms=4000")
        );
    }

    #[test]
    fn delivery_events_are_not_printed() {
        let ev = Event::subscriber_overflow("log_writer", "full");
        assert!(format_event(&ev).is_none());
    }
}
