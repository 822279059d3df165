//! Server-side collector — ingests submitted tracking events, keeps
//! per-session aggregate counters, and forwards each event to the sink.

use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use folio_core::event_bus::{noop_sink, EventSink};
use folio_core::types::TrackEvent;
use tracing::debug;

/// Per-session aggregate counters.
#[derive(Debug, Clone)]
pub struct SessionMetrics {
    pub session_id: String,
    pub page_views: u64,
    pub clicks: u64,
    pub exits: u64,
    pub total_events: u64,
    /// Sum of reported page dwell times.
    pub total_dwell_ms: u64,
    last_seen: Instant,
}

impl SessionMetrics {
    fn new(session_id: String) -> Self {
        Self {
            session_id,
            page_views: 0,
            clicks: 0,
            exits: 0,
            total_events: 0,
            total_dwell_ms: 0,
            last_seen: Instant::now(),
        }
    }
}

/// Collects tracking events, forwards them to the sink, and tracks
/// per-session metrics.
pub struct EventCollector {
    sessions: DashMap<String, SessionMetrics>,
    sink: Arc<dyn EventSink>,
}

impl Default for EventCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl EventCollector {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
            sink: noop_sink(),
        }
    }

    /// Attach a sink for forwarding collected events.
    pub fn with_sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Ingest a single tracking event.
    pub fn ingest(&self, event: TrackEvent) {
        {
            let mut session = self
                .sessions
                .entry(event.session_id().to_string())
                .or_insert_with(|| SessionMetrics::new(event.session_id().to_string()));
            session.total_events += 1;
            session.last_seen = Instant::now();
            match &event {
                TrackEvent::PageView(_) => session.page_views += 1,
                TrackEvent::Click(_) => session.clicks += 1,
                TrackEvent::PageExit(exit) => {
                    session.exits += 1;
                    session.total_dwell_ms += exit.duration_ms;
                }
            }
        }

        debug!(
            kind = ?event.kind(),
            session_id = %event.session_id(),
            page_path = %event.page_path(),
            "tracking event ingested"
        );
        metrics::counter!("collector.events_ingested").increment(1);

        self.sink.emit(event);
    }

    /// Get metrics for a specific session.
    pub fn session_metrics(&self, session_id: &str) -> Option<SessionMetrics> {
        self.sessions.get(session_id).map(|m| m.clone())
    }

    /// Get all session metrics.
    pub fn all_session_metrics(&self) -> Vec<SessionMetrics> {
        self.sessions
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }

    /// Drop sessions idle longer than `max_idle`. Call this periodically
    /// from a background task. Returns the number of sessions removed.
    pub fn prune_stale(&self, max_idle: Duration) -> usize {
        let before = self.sessions.len();
        self.sessions
            .retain(|_, session| session.last_seen.elapsed() <= max_idle);
        before - self.sessions.len()
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }
}
