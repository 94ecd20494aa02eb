use std::sync::{Arc, Mutex, RwLock};

use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use super::{
    config::ToasterConfig,
    store::Store,
    toaster::{Inner, Toaster},
};
use crate::{
    events::Bus,
    subscribers::{Subscribe, SubscriberSet},
};

/// Builder for constructing a [`Toaster`] with optional event subscribers.
pub struct ToasterBuilder {
    cfg: ToasterConfig,
    subscribers: Vec<Arc<dyn Subscribe>>,
}

impl ToasterBuilder {
    /// Creates a new builder with the given configuration.
    pub fn new(cfg: ToasterConfig) -> Self {
        Self {
            cfg,
            subscribers: Vec::new(),
        }
    }

    /// Sets event subscribers for observability.
    ///
    /// Subscribers receive lifecycle events through dedicated workers with
    /// bounded queues. With at least one subscriber, [`build`](Self::build)
    /// must run inside a Tokio runtime.
    pub fn with_subscribers(mut self, subscribers: Vec<Arc<dyn Subscribe>>) -> Self {
        self.subscribers = subscribers;
        self
    }

    /// Builds the toaster.
    ///
    /// `max_visible = 0` is clamped to 1 here; [`Toaster::configure`] rejects it instead.
    pub fn build(self) -> Toaster {
        let mut cfg = self.cfg;
        cfg.max_visible = cfg.max_visible_clamped();

        let bus = Bus::new(cfg.bus_capacity);
        let token = CancellationToken::new();
        let listener = if self.subscribers.is_empty() {
            None
        } else {
            Some(subscriber_listener(bus.clone(), self.subscribers, token.clone()))
        };

        Toaster {
            inner: Arc::new(Inner {
                store: Store::new(bus.clone()),
                config: RwLock::new(cfg),
                bus,
                token,
                listener: Mutex::new(listener),
            }),
        }
    }
}

/// Forwards bus events to the subscriber set until `token` is cancelled.
///
/// On cancellation, events already queued on the bus are still delivered before
/// the workers are shut down.
fn subscriber_listener(
    bus: Bus,
    subscribers: Vec<Arc<dyn Subscribe>>,
    token: CancellationToken,
) -> JoinHandle<()> {
    let mut rx = bus.subscribe();
    let set = SubscriberSet::new(subscribers, bus);

    tokio::spawn(async move {
        loop {
            tokio::select! {
                _ = token.cancelled() => break,
                msg = rx.recv() => match msg {
                    Ok(ev) => set.emit(ev),
                    Err(RecvError::Lagged(_)) => continue,
                    Err(RecvError::Closed) => break,
                }
            }
        }

        while let Ok(ev) = rx.try_recv() {
            set.emit(ev);
        }
        set.shutdown().await;
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{Event, EventKind};
    use async_trait::async_trait;

    struct Recorder {
        seen: Mutex<Vec<EventKind>>,
    }

    #[async_trait]
    impl Subscribe for Recorder {
        async fn on_event(&self, event: &Event) {
            self.seen.lock().unwrap().push(event.kind);
        }

        fn name(&self) -> &'static str {
            "recorder"
        }
    }

    #[test]
    fn build_without_subscribers_needs_no_runtime() {
        let t = ToasterBuilder::new(ToasterConfig {
            max_visible: 0,
            ..ToasterConfig::default()
        })
        .build();
        assert_eq!(t.config().max_visible, 1);
        t.show("A");
        assert_eq!(t.len(), 1);
    }

    #[tokio::test]
    async fn shutdown_delivers_queued_events_to_subscribers() {
        let rec = Arc::new(Recorder {
            seen: Mutex::new(Vec::new()),
        });
        let subs: Vec<Arc<dyn Subscribe>> = vec![rec.clone()];
        let t = ToasterBuilder::new(ToasterConfig::default())
            .with_subscribers(subs)
            .build();

        let id = t.show("A");
        t.dismiss(Some(&id));
        t.shutdown().await;

        assert_eq!(
            *rec.seen.lock().unwrap(),
            [EventKind::ToastShown, EventKind::ToastDismissed]
        );
    }
}
