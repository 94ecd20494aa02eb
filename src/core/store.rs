//! # Toast store: the ordered list of live toasts.
//!
//! The [`Store`] exclusively owns the list; everything else reads cloned snapshots
//! or goes through the operations below. Every mutating operation notifies the
//! [`Listeners`] exactly once, even when it turns out to be a no-op.
//!
//! ## Invariants
//! - The list is newest-first; removal never reorders the remaining toasts.
//! - No two toasts share an id (inserting an id that is already live drops the old one).
//! - After `insert(_, max_visible)` the list holds at most `max_visible` toasts.
//! - Each snapshot handed to listeners carries a version taken under the lock;
//!   listeners never see a lower version after a higher one.
//!
//! ## Eviction
//! ```text
//! max_visible = 2
//! insert(A) → [A]
//! insert(B) → [B, A]
//! insert(C) → [C, B]        A evicted (returned to the caller, no dismissal)
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::listeners::Listeners;
use crate::events::Bus;
use crate::toasts::{ToastId, ToastPatch, ToastRecord};

/// Ordered, capacity-bounded list of toasts plus its listener registry.
pub(crate) struct Store {
    toasts: Mutex<Vec<ToastRecord>>,
    version: AtomicU64,
    listeners: Listeners,
}

impl Store {
    pub fn new(bus: Bus) -> Self {
        Self {
            toasts: Mutex::new(Vec::new()),
            version: AtomicU64::new(0),
            listeners: Listeners::new(bus),
        }
    }

    pub fn listeners(&self) -> &Listeners {
        &self.listeners
    }

    /// Prepends `record` and truncates the tail to `max_visible` (min 1).
    ///
    /// Returns the evicted records, oldest last.
    pub fn insert(&self, record: ToastRecord, max_visible: usize) -> Vec<ToastRecord> {
        let max_visible = max_visible.max(1);
        let (snapshot, version, evicted) = {
            let mut toasts = self.lock();
            toasts.retain(|t| t.id != record.id);
            toasts.insert(0, record);
            let evicted = if toasts.len() > max_visible {
                toasts.split_off(max_visible)
            } else {
                Vec::new()
            };
            (toasts.clone(), self.bump(), evicted)
        };
        self.listeners.notify(&snapshot, version);
        evicted
    }

    /// Removes the toast with `id`, or the oldest one when `id` is `None`.
    ///
    /// Returns the removed record; unknown ids and an empty list are no-ops.
    pub fn remove(&self, id: Option<&ToastId>) -> Option<ToastRecord> {
        let (snapshot, version, removed) = {
            let mut toasts = self.lock();
            let removed = match id {
                Some(id) => toasts
                    .iter()
                    .position(|t| &t.id == id)
                    .map(|pos| toasts.remove(pos)),
                None => toasts.pop(),
            };
            (toasts.clone(), self.bump(), removed)
        };
        self.listeners.notify(&snapshot, version);
        removed
    }

    /// Applies `patch` to the toast with `id`.
    ///
    /// Returns a copy of the updated record, or `None` if `id` is not live.
    pub fn update(&self, id: &ToastId, patch: ToastPatch) -> Option<ToastRecord> {
        let (snapshot, version, updated) = {
            let mut toasts = self.lock();
            let updated = toasts.iter_mut().find(|t| &t.id == id).map(|t| {
                patch.apply(t);
                t.clone()
            });
            (toasts.clone(), self.bump(), updated)
        };
        self.listeners.notify(&snapshot, version);
        updated
    }

    pub fn exists(&self, id: &ToastId) -> bool {
        self.lock().iter().any(|t| &t.id == id)
    }

    pub fn snapshot(&self) -> Vec<ToastRecord> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Next snapshot version. Called with the list lock held, so versions
    /// follow the order of mutations.
    fn bump(&self) -> u64 {
        self.version.fetch_add(1, Ordering::Relaxed) + 1
    }

    fn lock(&self) -> MutexGuard<'_, Vec<ToastRecord>> {
        self.toasts.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toasts::{normalize, ToastKind, ToastRequest};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    fn rec(id: &str) -> ToastRecord {
        normalize(
            ToastRequest::from(id).with_id(id),
            Duration::from_millis(4000),
        )
    }

    fn ids(store: &Store) -> Vec<String> {
        store
            .snapshot()
            .iter()
            .map(|t| t.id.to_string())
            .collect()
    }

    #[test]
    fn insert_is_newest_first() {
        let store = Store::new(Bus::new(4));
        store.insert(rec("a"), 3);
        store.insert(rec("b"), 3);
        assert_eq!(ids(&store), ["b", "a"]);
    }

    #[test]
    fn overflow_evicts_the_oldest() {
        let store = Store::new(Bus::new(4));
        assert!(store.insert(rec("a"), 2).is_empty());
        assert!(store.insert(rec("b"), 2).is_empty());
        let evicted = store.insert(rec("c"), 2);

        assert_eq!(ids(&store), ["c", "b"]);
        assert_eq!(evicted.len(), 1);
        assert_eq!(evicted[0].id.as_str(), "a");
    }

    #[test]
    fn zero_capacity_still_keeps_the_newest() {
        let store = Store::new(Bus::new(4));
        store.insert(rec("a"), 0);
        store.insert(rec("b"), 0);
        assert_eq!(ids(&store), ["b"]);
    }

    #[test]
    fn shrinking_capacity_truncates_on_next_insert() {
        let store = Store::new(Bus::new(4));
        for id in ["a", "b", "c", "d"] {
            store.insert(rec(id), 5);
        }
        let evicted = store.insert(rec("e"), 2);
        assert_eq!(ids(&store), ["e", "d"]);
        assert_eq!(evicted.len(), 3);
    }

    #[test]
    fn duplicate_id_last_writer_wins() {
        let store = Store::new(Bus::new(4));
        store.insert(rec("a"), 3);
        store.insert(rec("b"), 3);
        store.insert(rec("a"), 3);
        assert_eq!(ids(&store), ["a", "b"]);
    }

    #[test]
    fn remove_by_id_keeps_order() {
        let store = Store::new(Bus::new(4));
        for id in ["a", "b", "c"] {
            store.insert(rec(id), 3);
        }
        let removed = store.remove(Some(&ToastId::from("b")));
        assert_eq!(removed.map(|t| t.id.to_string()).as_deref(), Some("b"));
        assert_eq!(ids(&store), ["c", "a"]);
    }

    #[test]
    fn remove_without_id_drops_the_oldest() {
        let store = Store::new(Bus::new(4));
        for id in ["a", "b", "c"] {
            store.insert(rec(id), 3);
        }
        store.remove(None);
        assert_eq!(ids(&store), ["c", "b"]);
    }

    #[test]
    fn remove_unknown_or_empty_is_noop() {
        let store = Store::new(Bus::new(4));
        assert!(store.remove(None).is_none());
        store.insert(rec("a"), 3);
        assert!(store.remove(Some(&ToastId::from("zzz"))).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn update_patches_in_place() {
        let store = Store::new(Bus::new(4));
        store.insert(rec("a"), 3);
        store.insert(rec("b"), 3);

        let updated = store
            .update(
                &ToastId::from("a"),
                ToastPatch::new().title("done").kind(ToastKind::Success),
            )
            .expect("a is live");
        assert_eq!(updated.title, "done");
        assert_eq!(ids(&store), ["b", "a"]);
        assert_eq!(store.snapshot()[1].kind, ToastKind::Success);

        assert!(store
            .update(&ToastId::from("zzz"), ToastPatch::new().title("x"))
            .is_none());
    }

    #[test]
    fn every_mutation_notifies_once_with_fresh_list() {
        let store = Store::new(Bus::new(4));
        let seen: Arc<Mutex<Vec<Vec<String>>>> = Arc::new(Mutex::new(Vec::new()));
        let calls = Arc::new(AtomicUsize::new(0));
        {
            let seen = Arc::clone(&seen);
            let calls = Arc::clone(&calls);
            store.listeners().subscribe(Arc::new(move |list: &[ToastRecord]| {
                calls.fetch_add(1, Ordering::Relaxed);
                seen.lock()
                    .unwrap()
                    .push(list.iter().map(|t| t.id.to_string()).collect());
            }));
        }

        store.insert(rec("a"), 3);
        store.insert(rec("b"), 3);
        store.update(&ToastId::from("a"), ToastPatch::new().title("x"));
        store.remove(Some(&ToastId::from("missing")));
        store.remove(None);

        assert_eq!(calls.load(Ordering::Relaxed), 5);
        let seen = seen.lock().unwrap();
        assert_eq!(seen[0], ["a"]);
        assert_eq!(seen[1], ["b", "a"]);
        assert_eq!(seen[2], ["b", "a"]);
        assert_eq!(seen[3], ["b", "a"]);
        assert_eq!(seen[4], ["b"]);
    }

    #[test]
    fn exists_does_not_notify() {
        let store = Store::new(Bus::new(4));
        let calls = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&calls);
        store.listeners().subscribe(Arc::new(move |_: &[ToastRecord]| {
            c.fetch_add(1, Ordering::Relaxed);
        }));

        assert!(!store.exists(&ToastId::from("a")));
        assert_eq!(calls.load(Ordering::Relaxed), 0);
    }
}
