//! # Cancellable auto-dismiss timer.
//!
//! A [`DismissTimer`] is owned by whatever renders a toast. It counts from the
//! moment it is started (first display) and, once `duration` has elapsed, issues
//! exactly one `dismiss(id)` on the toaster.
//!
//! ## Rules
//! - Sticky toasts (`duration == 0`) get no timer: [`DismissTimer::start`] returns `None`.
//! - [`cancel`](DismissTimer::cancel) or dropping the handle before expiry releases the
//!   background task; it never fires afterwards.
//! - The task holds only a weak reference to the toaster.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;

use crate::core::{Toaster, WeakToaster};
use crate::toasts::{ToastId, ToastRecord};

/// Handle to a running auto-dismiss timer. Cancels on drop.
#[derive(Debug)]
pub struct DismissTimer {
    id: ToastId,
    duration: Duration,
    token: CancellationToken,
    fired: Arc<AtomicBool>,
}

impl DismissTimer {
    /// Starts a timer for `record`, or returns `None` if it is sticky.
    ///
    /// # Panics
    /// Panics if called outside a Tokio runtime.
    pub fn start(toaster: &Toaster, record: &ToastRecord) -> Option<Self> {
        Self::start_on(&Handle::current(), toaster.downgrade(), record)
    }

    /// Starts a timer on an explicit runtime handle.
    pub fn start_on(handle: &Handle, toaster: WeakToaster, record: &ToastRecord) -> Option<Self> {
        let duration = record.auto_dismiss_after()?;
        let token = CancellationToken::new();
        let fired = Arc::new(AtomicBool::new(false));

        let task_token = token.clone();
        let task_fired = Arc::clone(&fired);
        let task_id = record.id.clone();
        handle.spawn(async move {
            tokio::select! {
                biased;
                _ = task_token.cancelled() => {}
                _ = tokio::time::sleep(duration) => {
                    task_fired.store(true, Ordering::Release);
                    if let Some(toaster) = toaster.upgrade() {
                        toaster.expire(&task_id, duration);
                    }
                }
            }
        });

        Some(Self {
            id: record.id.clone(),
            duration,
            token,
            fired,
        })
    }

    /// Id of the toast this timer dismisses.
    pub fn id(&self) -> &ToastId {
        &self.id
    }

    /// Delay the timer was started with.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Cancels the timer. Idempotent; no effect once it has fired.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Returns `true` once the timer has expired and requested dismissal.
    pub fn has_fired(&self) -> bool {
        self.fired.load(Ordering::Acquire)
    }

    /// Returns `true` while the timer can still fire.
    pub fn is_pending(&self) -> bool {
        !self.token.is_cancelled() && !self.has_fired()
    }
}

impl Drop for DismissTimer {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
