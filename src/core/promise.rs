//! # Promise-lifecycle adapter.
//!
//! [`Toaster::promise`] attaches a toast to an asynchronous operation: a sticky
//! "loading" toast while the future runs, then the same toast (same id) turned into
//! a success or error toast once it settles.
//!
//! ## State machine
//! ```text
//!              show({..loading, duration: 0})
//!                        │
//!                        ▼
//!                  ┌──────────┐
//!                  │ Loading  │  sticky, no timer
//!                  └────┬─────┘
//!            Ok(v)      │       Err(e)
//!          ┌────────────┴────────────┐
//!          ▼                         ▼
//!   ┌────────────┐            ┌────────────┐
//!   │  Resolved  │            │  Rejected  │
//!   └────────────┘            └────────────┘
//!   update(id, success(&v))   update(id, error(&e))
//!   kind defaults to Success  kind defaults to Error
//!   returns Ok(v)             returns Err(e) unchanged
//! ```
//!
//! The settled toast is normalized with the configured default duration, so it
//! becomes subject to auto-dismiss again. If the loading toast is gone when the
//! future settles (dismissed, evicted), the update is a no-op.
//! The future is never cancelled by the toaster.

use std::future::Future;

use super::toaster::Toaster;
use crate::events::{Event, EventKind};
use crate::toasts::{normalize, ToastId, ToastKind, ToastPatch, ToastRequest};

/// Builds the settled toast from the operation's output.
pub type DescribeFn<T> = Box<dyn FnOnce(&T) -> ToastRequest + Send + 'static>;

/// Content of a settled toast: fixed, or computed from the value/error.
pub enum PromiseMessage<T> {
    /// Same request whatever the outcome carries.
    Static(ToastRequest),
    /// Request computed from the value (or error).
    Describe(DescribeFn<T>),
}

impl<T> PromiseMessage<T> {
    fn resolve(self, outcome: &T) -> ToastRequest {
        match self {
            PromiseMessage::Static(request) => request,
            PromiseMessage::Describe(f) => f(outcome),
        }
    }
}

/// Toast contents for each state of a tracked operation.
///
/// ## Example
/// ```rust
/// use toastvisor::PromiseMessages;
///
/// let messages: PromiseMessages<u32, std::io::Error> = PromiseMessages::new("Uploading...")
///     .success_with(|n: &u32| format!("Uploaded {n} files"))
///     .error("Upload failed");
/// ```
pub struct PromiseMessages<T, E> {
    loading: ToastRequest,
    success: Option<PromiseMessage<T>>,
    error: Option<PromiseMessage<E>>,
}

impl<T, E> PromiseMessages<T, E> {
    /// Creates messages with the loading toast; success/error default to an empty title.
    pub fn new(loading: impl Into<ToastRequest>) -> Self {
        Self {
            loading: loading.into(),
            success: None,
            error: None,
        }
    }

    /// Sets a fixed success toast.
    #[must_use]
    pub fn success(mut self, request: impl Into<ToastRequest>) -> Self {
        self.success = Some(PromiseMessage::Static(request.into()));
        self
    }

    /// Sets a success toast computed from the resolved value.
    #[must_use]
    pub fn success_with<F, R>(mut self, f: F) -> Self
    where
        F: FnOnce(&T) -> R + Send + 'static,
        R: Into<ToastRequest>,
    {
        self.success = Some(PromiseMessage::Describe(Box::new(move |v: &T| f(v).into())));
        self
    }

    /// Sets a fixed error toast.
    #[must_use]
    pub fn error(mut self, request: impl Into<ToastRequest>) -> Self {
        self.error = Some(PromiseMessage::Static(request.into()));
        self
    }

    /// Sets an error toast computed from the error.
    #[must_use]
    pub fn error_with<F, R>(mut self, f: F) -> Self
    where
        F: FnOnce(&E) -> R + Send + 'static,
        R: Into<ToastRequest>,
    {
        self.error = Some(PromiseMessage::Describe(Box::new(move |e: &E| f(e).into())));
        self
    }
}

impl Toaster {
    /// Tracks `fut` with a toast and returns its output unchanged.
    ///
    /// The loading toast is always sticky, whatever duration `messages` asks for.
    /// Errors are never swallowed: `Err(e)` from `fut` is returned as is, after the
    /// toast has switched to its error state.
    pub async fn promise<T, E, F>(&self, fut: F, messages: PromiseMessages<T, E>) -> Result<T, E>
    where
        F: Future<Output = Result<T, E>>,
    {
        let PromiseMessages {
            loading,
            success,
            error,
        } = messages;
        let id = self.show(loading.sticky());

        match fut.await {
            Ok(value) => {
                let request = success.map(|m| m.resolve(&value)).unwrap_or_default();
                self.settle(&id, request, ToastKind::Success);
                self.publish(Event::new(EventKind::PromiseResolved).with_toast(id));
                Ok(value)
            }
            Err(err) => {
                let request = error.map(|m| m.resolve(&err)).unwrap_or_default();
                self.settle(&id, request, ToastKind::Error);
                self.publish(Event::new(EventKind::PromiseRejected).with_toast(id));
                Err(err)
            }
        }
    }

    fn settle(&self, id: &ToastId, mut request: ToastRequest, default_kind: ToastKind) {
        request.kind.get_or_insert(default_kind);
        request.id = Some(id.clone());
        let record = normalize(request, self.config().default_duration);
        self.update(id, ToastPatch::from(record));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ToasterConfig;
    use std::time::Duration;
    use tokio::sync::oneshot;

    #[tokio::test]
    async fn success_updates_the_loading_toast() {
        let t = Toaster::new(ToasterConfig::default());

        let out = t
            .promise(
                async { Ok::<_, String>(42) },
                PromiseMessages::new("Loading").success_with(|v: &i32| format!("Got {v}")),
            )
            .await;

        assert_eq!(out, Ok(42));
        let list = t.toasts();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].title, "Got 42");
        assert_eq!(list[0].kind, ToastKind::Success);
        assert_eq!(list[0].duration, Duration::from_millis(4000));
    }

    #[tokio::test]
    async fn failure_updates_and_propagates() {
        let t = Toaster::new(ToasterConfig::default());

        let out = t
            .promise(
                async { Err::<i32, _>(String::from("boom")) },
                PromiseMessages::new("Loading").error("Failed"),
            )
            .await;

        assert_eq!(out, Err(String::from("boom")));
        let rec = &t.toasts()[0];
        assert_eq!(rec.title, "Failed");
        assert_eq!(rec.kind, ToastKind::Error);
        assert!(!rec.is_sticky());
    }

    #[tokio::test]
    async fn error_message_can_use_the_error() {
        let t = Toaster::new(ToasterConfig::default());

        let _ = t
            .promise(
                async { Err::<(), _>(std::io::Error::other("disk full")) },
                PromiseMessages::new("Saving")
                    .error_with(|e: &std::io::Error| format!("Save failed: {e}")),
            )
            .await;

        assert_eq!(t.toasts()[0].title, "Save failed: disk full");
    }

    #[tokio::test]
    async fn explicit_kind_in_outcome_is_kept() {
        let t = Toaster::new(ToasterConfig::default());

        let _ = t
            .promise(
                async { Ok::<_, ()>(()) },
                PromiseMessages::new("Checking")
                    .success(ToastRequest::from("Nothing to do").with_kind(ToastKind::Info)),
            )
            .await;

        assert_eq!(t.toasts()[0].kind, ToastKind::Info);
    }

    #[tokio::test]
    async fn loading_toast_is_sticky_and_keeps_its_id() {
        let t = Toaster::new(ToasterConfig::default());
        let (tx, rx) = oneshot::channel::<u32>();

        let task = {
            let t = t.clone();
            tokio::spawn(async move {
                t.promise(
                    async move { rx.await.map_err(|_| "sender dropped") },
                    PromiseMessages::new(ToastRequest::from("Working").with_duration_ms(9000))
                        .success("Done"),
                )
                .await
            })
        };
        tokio::task::yield_now().await;

        let loading = t.toasts()[0].clone();
        assert_eq!(loading.title, "Working");
        assert!(loading.is_sticky());

        tx.send(7).unwrap();
        assert_eq!(task.await.unwrap(), Ok(7));

        let done = &t.toasts()[0];
        assert_eq!(done.id, loading.id);
        assert_eq!(done.created_at, loading.created_at);
        assert_eq!(done.title, "Done");
        assert_eq!(done.kind, ToastKind::Success);
    }

    #[tokio::test]
    async fn dismissed_loading_toast_is_not_resurrected() {
        let t = Toaster::new(ToasterConfig::default());
        let t2 = t.clone();

        let out = t
            .promise(
                async move {
                    t2.dismiss(None);
                    Ok::<_, ()>(1)
                },
                PromiseMessages::new("Loading").success("Done"),
            )
            .await;

        assert_eq!(out, Ok(1));
        assert!(t.is_empty());
    }

    #[tokio::test]
    async fn missing_descriptors_default_to_empty_title() {
        let t = Toaster::new(ToasterConfig::default());

        let ok = t
            .promise(async { Ok::<_, ()>(1) }, PromiseMessages::new("x"))
            .await;
        assert_eq!(ok, Ok(1));
        let rec = t.toasts()[0].clone();
        assert_eq!(rec.title, "");
        assert_eq!(rec.kind, ToastKind::Success);
        assert_eq!(rec.duration, ToasterConfig::default().default_duration);

        let err = t
            .promise(async { Err::<(), _>("nope") }, PromiseMessages::new("y"))
            .await;
        assert_eq!(err, Err("nope"));
        let rec = &t.toasts()[0];
        assert_eq!(rec.title, "");
        assert_eq!(rec.kind, ToastKind::Error);
        assert_eq!(rec.duration, ToasterConfig::default().default_duration);
    }
}
