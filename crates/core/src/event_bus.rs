//! Event sink — trait for forwarding collected tracking events to whatever
//! backend stores or inspects them.
//!
//! The collector accepts an `Arc<dyn EventSink>`, so a persistence layer can
//! be attached later without touching the ingest path.

use crate::types::{EventKind, TrackEvent};
use std::sync::{Arc, Mutex};

/// Trait for receiving tracking events from the collector.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: TrackEvent);
}

/// No-op sink for tests and deployments without a storage backend.
pub struct NoOpSink;

impl EventSink for NoOpSink {
    fn emit(&self, _event: TrackEvent) {}
}

/// Sink that writes each event to the structured log.
pub struct LogSink;

impl EventSink for LogSink {
    fn emit(&self, event: TrackEvent) {
        tracing::info!(
            kind = ?event.kind(),
            session_id = %event.session_id(),
            page_path = %event.page_path(),
            "tracking event collected"
        );
    }
}

/// In-memory sink that captures events for testing.
#[derive(Default)]
pub struct CaptureSink {
    events: Mutex<Vec<TrackEvent>>,
}

impl CaptureSink {
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }

    pub fn events(&self) -> Vec<TrackEvent> {
        self.events.lock().expect("event sink mutex poisoned").clone()
    }

    pub fn count(&self) -> usize {
        self.events.lock().expect("event sink mutex poisoned").len()
    }

    pub fn count_kind(&self, kind: EventKind) -> usize {
        self.events
            .lock()
            .expect("event sink mutex poisoned")
            .iter()
            .filter(|e| e.kind() == kind)
            .count()
    }

    pub fn clear(&self) {
        self.events.lock().expect("event sink mutex poisoned").clear();
    }
}

impl EventSink for CaptureSink {
    fn emit(&self, event: TrackEvent) {
        self.events
            .lock()
            .expect("event sink mutex poisoned")
            .push(event);
    }
}

/// Convenience: create a no-op sink for modules that don't need one.
pub fn noop_sink() -> Arc<dyn EventSink> {
    Arc::new(NoOpSink)
}

/// Convenience: create a capture sink for tests.
pub fn capture_sink() -> Arc<CaptureSink> {
    Arc::new(CaptureSink::new())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::{ClickEvent, PageExitEvent};

    fn click(session: &str) -> TrackEvent {
        TrackEvent::Click(ClickEvent {
            session_id: session.into(),
            page_path: "/".into(),
            component_id: "cta".into(),
            event_value: "Submit".into(),
        })
    }

    #[test]
    fn test_capture_sink() {
        let sink = capture_sink();
        assert_eq!(sink.count(), 0);

        sink.emit(click("s-1"));
        sink.emit(TrackEvent::PageExit(PageExitEvent {
            session_id: "s-1".into(),
            page_path: "/".into(),
            page_title: "Home".into(),
            duration_ms: 10,
        }));

        assert_eq!(sink.count(), 2);
        assert_eq!(sink.count_kind(EventKind::Click), 1);
        assert_eq!(sink.count_kind(EventKind::PageExit), 1);
        assert_eq!(sink.count_kind(EventKind::PageView), 0);

        let events = sink.events();
        assert_eq!(events[0].session_id(), "s-1");

        sink.clear();
        assert_eq!(sink.count(), 0);
    }

    #[test]
    fn test_noop_sink() {
        let sink = noop_sink();
        // Should not panic
        sink.emit(click("s-2"));
    }
}
