//! # Surface-side timer ownership.
//!
//! [`AutoDismiss`] is the reference owner of [`DismissTimer`]s for a rendering
//! surface. It subscribes to the toaster and, on every list change, reconciles
//! one timer per displayed toast.
//!
//! ## Reconciliation
//! ```text
//! list changed
//!   ├─► timer for an id no longer in the list        → cancel (dismissed, evicted)
//!   ├─► timer whose toast changed duration            → cancel, then restart
//!   └─► non-sticky toast without a timer              → start
//! ```
//!
//! Replacing a toast through `show` with the same id removes it first, so the
//! new instance always starts with a fresh timer.
//!
//! Each reconcile reads the current list rather than the notified one. A
//! listener registered before the owner may mutate the toaster from its
//! callback; the owner then reconciles against the latest state either way.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::runtime::Handle;

use super::timer::DismissTimer;
use crate::core::{SubscriptionId, Toaster, WeakToaster};
use crate::toasts::ToastId;

type Timers = Arc<Mutex<HashMap<ToastId, DismissTimer>>>;

/// Keeps one auto-dismiss timer per displayed toast. Detaches on drop.
pub struct AutoDismiss {
    toaster: WeakToaster,
    subscription: SubscriptionId,
    timers: Timers,
}

impl AutoDismiss {
    /// Subscribes to `toaster` and starts timers for the toasts already shown.
    ///
    /// # Panics
    /// Panics if called outside a Tokio runtime.
    pub fn attach(toaster: &Toaster) -> Self {
        let handle = Handle::current();
        let weak = toaster.downgrade();
        let timers: Timers = Arc::new(Mutex::new(HashMap::new()));

        let subscription = {
            let handle = handle.clone();
            let weak = weak.clone();
            let timers = Arc::clone(&timers);
            toaster.subscribe(move |_| reconcile(&handle, &weak, &timers))
        };
        reconcile(&handle, &weak, &timers);

        Self {
            toaster: weak,
            subscription,
            timers,
        }
    }

    /// Number of timers that can still fire.
    pub fn active(&self) -> usize {
        lock(&self.timers).values().filter(|t| t.is_pending()).count()
    }

    /// Returns `true` if the toast with `id` has a pending timer.
    pub fn is_pending(&self, id: &ToastId) -> bool {
        lock(&self.timers).get(id).is_some_and(DismissTimer::is_pending)
    }
}

impl Drop for AutoDismiss {
    fn drop(&mut self) {
        if let Some(toaster) = self.toaster.upgrade() {
            toaster.unsubscribe(self.subscription);
        }
        lock(&self.timers).clear();
    }
}

/// Reads the live list under the timer lock, so concurrent reconciles are
/// serialized and the last one always sees the newest list.
fn reconcile(handle: &Handle, toaster: &WeakToaster, timers: &Timers) {
    let mut timers = lock(timers);
    let Some(live) = toaster.upgrade() else {
        timers.clear();
        return;
    };
    let list = live.toasts();
    timers.retain(|id, timer| {
        list.iter()
            .any(|r| &r.id == id && r.duration == timer.duration())
    });

    for record in &list {
        if timers.contains_key(&record.id) {
            continue;
        }
        if let Some(timer) = DismissTimer::start_on(handle, toaster.clone(), record) {
            timers.insert(record.id.clone(), timer);
        }
    }
}

fn lock(timers: &Timers) -> MutexGuard<'_, HashMap<ToastId, DismissTimer>> {
    timers.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ToasterConfig;
    use crate::toasts::ToastRequest;
    use crate::PromiseMessages;
    use std::time::Duration;
    use tokio::time::sleep;

    fn toaster(max_visible: usize) -> Toaster {
        Toaster::new(ToasterConfig {
            max_visible,
            ..ToasterConfig::default()
        })
    }

    #[tokio::test(start_paused = true)]
    async fn toasts_expire_after_default_duration() {
        let t = toaster(3);
        let _auto = AutoDismiss::attach(&t);
        let id = t.success("Saved");

        sleep(Duration::from_millis(3999)).await;
        assert!(t.exists(&id));
        sleep(Duration::from_millis(2)).await;
        assert!(!t.exists(&id));
    }

    #[tokio::test(start_paused = true)]
    async fn attach_picks_up_existing_toasts() {
        let t = toaster(3);
        let id = t.info(ToastRequest::from("hello").with_duration_ms(500));
        let auto = AutoDismiss::attach(&t);
        assert!(auto.is_pending(&id));

        sleep(Duration::from_millis(501)).await;
        assert!(t.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn sticky_toast_survives_any_wait() {
        let t = toaster(3);
        let auto = AutoDismiss::attach(&t);
        let id = t.show(ToastRequest::from("pinned").sticky());

        assert_eq!(auto.active(), 0);
        sleep(Duration::from_secs(24 * 3600)).await;
        assert!(t.exists(&id));
    }

    #[tokio::test(start_paused = true)]
    async fn dismiss_releases_the_timer() {
        let t = toaster(3);
        let auto = AutoDismiss::attach(&t);
        let id = t.show("bye");
        assert_eq!(auto.active(), 1);

        t.dismiss(Some(&id));
        assert_eq!(auto.active(), 0);
        assert!(!auto.is_pending(&id));
    }

    #[tokio::test(start_paused = true)]
    async fn eviction_releases_the_timer() {
        let t = toaster(1);
        let auto = AutoDismiss::attach(&t);
        let a = t.show("A");
        let b = t.show("B");

        assert_eq!(auto.active(), 1);
        assert!(!auto.is_pending(&a));
        assert!(auto.is_pending(&b));
    }

    #[tokio::test(start_paused = true)]
    async fn replacing_by_id_restarts_the_timer() {
        let t = toaster(3);
        let _auto = AutoDismiss::attach(&t);
        let req = || ToastRequest::from("sync").with_id("sync");

        t.show(req());
        sleep(Duration::from_millis(3000)).await;
        t.show(req());
        sleep(Duration::from_millis(3000)).await;
        assert!(t.exists(&ToastId::from("sync")));

        sleep(Duration::from_millis(1001)).await;
        assert!(!t.exists(&ToastId::from("sync")));
    }

    #[tokio::test(start_paused = true)]
    async fn resolved_promise_toast_becomes_dismissable() {
        let t = toaster(3);
        let auto = AutoDismiss::attach(&t);

        let t2 = t.clone();
        let out = t
            .promise(
                async move {
                    // loading toast is sticky while we wait
                    sleep(Duration::from_secs(60)).await;
                    assert_eq!(t2.len(), 1);
                    Ok::<_, ()>("done")
                },
                PromiseMessages::new("Working").success("Done"),
            )
            .await;
        assert_eq!(out, Ok("done"));
        assert_eq!(auto.active(), 1);

        sleep(Duration::from_millis(4001)).await;
        assert!(t.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn drop_detaches_and_cancels() {
        let t = toaster(3);
        let auto = AutoDismiss::attach(&t);
        let id = t.show("stays");

        drop(auto);
        sleep(Duration::from_secs(10)).await;
        assert!(t.exists(&id));

        // no listener left behind
        t.show("more");
        sleep(Duration::from_secs(10)).await;
        assert_eq!(t.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn follow_up_shown_from_an_earlier_listener_still_expires() {
        let t = toaster(3);
        {
            let t2 = t.clone();
            t.subscribe(move |list| {
                if list.len() == 1 && list[0].title == "trigger" {
                    t2.show("follow-up");
                }
            });
        }
        let auto = AutoDismiss::attach(&t);
        let seen = Arc::new(Mutex::new(Vec::<Vec<String>>::new()));
        {
            let seen = Arc::clone(&seen);
            t.subscribe(move |list| {
                seen.lock()
                    .unwrap()
                    .push(list.iter().map(|r| r.title.clone()).collect());
            });
        }

        t.show(ToastRequest::from("trigger").sticky());

        assert_eq!(*seen.lock().unwrap(), [vec!["follow-up", "trigger"]]);
        let follow_up = t.toasts()[0].id.clone();
        assert!(auto.is_pending(&follow_up));

        sleep(Duration::from_millis(4001)).await;
        assert!(!t.exists(&follow_up));
        assert_eq!(t.len(), 1);
    }
}
