//! Fire-and-forget event emitter. `track` pushes onto a bounded queue and
//! returns immediately; a background dispatch task posts each event to the
//! collection endpoint. Delivery failures are logged and dropped, never
//! retried, and never surfaced to the caller.

use folio_core::config::TrackerConfig;
use folio_core::types::TrackEvent;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Non-blocking emitter in front of the collection endpoint.
#[derive(Clone)]
pub struct EventEmitter {
    sender: mpsc::Sender<TrackEvent>,
}

impl EventEmitter {
    /// Create an emitter and spawn its HTTP dispatch task. Must be called
    /// from within a Tokio runtime.
    pub fn new(config: &TrackerConfig) -> Self {
        let (sender, receiver) = mpsc::channel::<TrackEvent>(config.queue_capacity);

        let worker = DispatchWorker {
            client: reqwest::Client::new(),
            endpoint: config.endpoint.clone(),
        };
        tokio::spawn(worker.run(receiver));

        Self { sender }
    }

    /// Create an emitter whose queue drains into the returned receiver
    /// instead of an HTTP task. Used by tests to observe emissions.
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<TrackEvent>) {
        let (sender, receiver) = mpsc::channel(capacity);
        (Self { sender }, receiver)
    }

    /// Queue an event for dispatch. Returns `true` when the event was
    /// accepted; a full queue drops the event with a logged warning.
    pub fn track(&self, event: TrackEvent) -> bool {
        match self.sender.try_send(event) {
            Ok(()) => {
                metrics::counter!("tracker.events_queued").increment(1);
                true
            }
            Err(e) => {
                metrics::counter!("tracker.events_dropped").increment(1);
                warn!("Tracking event dropped: {}", e);
                false
            }
        }
    }
}

/// Background task that posts queued events one at a time.
struct DispatchWorker {
    client: reqwest::Client,
    endpoint: String,
}

impl DispatchWorker {
    async fn run(self, mut receiver: mpsc::Receiver<TrackEvent>) {
        while let Some(event) = receiver.recv().await {
            self.deliver(&event).await;
        }
    }

    async fn deliver(&self, event: &TrackEvent) {
        match self.client.post(&self.endpoint).json(event).send().await {
            Ok(response) if response.status().is_success() => {
                metrics::counter!("tracker.events_delivered").increment(1);
                debug!(kind = ?event.kind(), "tracking event delivered");
            }
            Ok(response) => {
                metrics::counter!("tracker.delivery_errors").increment(1);
                warn!(
                    status = %response.status(),
                    kind = ?event.kind(),
                    "collection endpoint rejected tracking event"
                );
            }
            Err(e) => {
                metrics::counter!("tracker.delivery_errors").increment(1);
                warn!(error = %e, kind = ?event.kind(), "failed to deliver tracking event");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::types::ClickEvent;

    fn click(id: &str) -> TrackEvent {
        TrackEvent::Click(ClickEvent {
            session_id: "s-1".into(),
            page_path: "/".into(),
            component_id: id.into(),
            event_value: String::new(),
        })
    }

    #[tokio::test]
    async fn test_track_preserves_order() {
        let (emitter, mut receiver) = EventEmitter::channel(8);

        assert!(emitter.track(click("first")));
        assert!(emitter.track(click("second")));

        let first = receiver.recv().await.unwrap();
        let second = receiver.recv().await.unwrap();
        match (first, second) {
            (TrackEvent::Click(a), TrackEvent::Click(b)) => {
                assert_eq!(a.component_id, "first");
                assert_eq!(b.component_id, "second");
            }
            other => panic!("unexpected events: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_full_queue_drops_without_error() {
        let (emitter, _receiver) = EventEmitter::channel(2);

        assert!(emitter.track(click("a")));
        assert!(emitter.track(click("b")));
        // Queue is full and nothing drains it; the event is dropped
        assert!(!emitter.track(click("c")));
    }
}
