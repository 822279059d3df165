//! Integration test for the full tracking flow: identity, lifecycle, and
//! collection, driven through the emitter's capture channel.

use std::sync::Arc;
use std::time::Duration;

use folio_core::event_bus::capture_sink;
use folio_core::event_bus::EventSink;
use folio_core::types::{EventKind, TrackEvent};
use folio_tracker::collector::EventCollector;
use folio_tracker::emitter::EventEmitter;
use folio_tracker::identity::{IdentityManager, MemoryIdentityStore};
use folio_tracker::lifecycle::{PageLifecycle, PageSignal};
use folio_tracker::page::{ElementNode, PageContext};

fn identity() -> Arc<IdentityManager> {
    Arc::new(IdentityManager::new(
        Arc::new(MemoryIdentityStore::new()),
        Duration::from_secs(30 * 60),
        Duration::from_secs(730 * 24 * 60 * 60),
    ))
}

fn page(path: &str, title: &str) -> PageContext {
    PageContext {
        title: title.into(),
        referrer: "https://google.com".into(),
        user_agent: "Mozilla/5.0 (test)".into(),
        screen_width: 1440,
        screen_height: 900,
        language: "en-US".into(),
        ..PageContext::new(path)
    }
}

/// Navigate to /projects, settle, navigate home, settle: exactly one page
/// view per path, with the exit for /projects in between.
#[tokio::test]
async fn test_navigation_scenario() {
    let (emitter, mut receiver) = EventEmitter::channel(32);
    let mut lifecycle = PageLifecycle::new(emitter, identity());
    lifecycle.mount();

    let generation = lifecycle.navigate(page("/projects", "Projects"));
    lifecycle.handle(PageSignal::Settled { generation });
    let generation = lifecycle.navigate(page("/", "Home"));
    lifecycle.handle(PageSignal::Settled { generation });
    lifecycle.handle(PageSignal::Unload);

    let mut events = Vec::new();
    while let Ok(event) = receiver.try_recv() {
        events.push(event);
    }

    let kinds: Vec<_> = events.iter().map(TrackEvent::kind).collect();
    assert_eq!(
        kinds,
        vec![
            EventKind::PageView,
            EventKind::PageExit,
            EventKind::PageView,
            EventKind::PageExit,
        ]
    );
    assert_eq!(events[0].page_path(), "/projects");
    assert_eq!(events[1].page_path(), "/projects");
    assert_eq!(events[2].page_path(), "/");
    assert_eq!(events[3].page_path(), "/");

    // All events share the session established at the first page view
    let session_id = events[0].session_id().to_string();
    assert!(!session_id.is_empty());
    assert!(events.iter().all(|e| e.session_id() == session_id));
}

/// The full pipeline: lifecycle emissions flow through the collector into
/// the sink, and the per-session counters line up.
#[tokio::test]
async fn test_emitted_events_collect_into_session_metrics() {
    let (emitter, mut receiver) = EventEmitter::channel(32);
    let mut lifecycle = PageLifecycle::new(emitter, identity());
    lifecycle.mount();

    let generation = lifecycle.navigate(page("/projects", "Projects"));
    lifecycle.handle(PageSignal::Settled { generation });
    lifecycle.click(&[
        ElementNode::new("span").with_text("source"),
        ElementNode::new("a")
            .with_id("repo-link")
            .with_href("https://github.com/ismatsamadov"),
    ]);
    lifecycle.handle(PageSignal::Unload);

    let sink = capture_sink();
    let collector = EventCollector::new().with_sink(sink.clone() as Arc<dyn EventSink>);
    let mut session_id = String::new();
    while let Ok(event) = receiver.try_recv() {
        session_id = event.session_id().to_string();
        collector.ingest(event);
    }

    let metrics = collector.session_metrics(&session_id).unwrap();
    assert_eq!(metrics.page_views, 1);
    assert_eq!(metrics.clicks, 1);
    assert_eq!(metrics.exits, 1);
    assert_eq!(metrics.total_events, 3);
    assert_eq!(sink.count(), 3);

    match &sink.events()[1] {
        TrackEvent::Click(click) => {
            assert_eq!(click.component_id, "repo-link");
            assert_eq!(click.event_value, "https://github.com/ismatsamadov");
        }
        other => panic!("expected click, got {other:?}"),
    }
}

/// UTM parameters ride along on the page view and serialize camelCase.
#[tokio::test]
async fn test_utm_parameters_forwarded() {
    let (emitter, mut receiver) = EventEmitter::channel(8);
    let mut lifecycle = PageLifecycle::new(emitter, identity());
    lifecycle.mount();

    let generation = lifecycle.navigate(PageContext {
        query: "utm_source=linkedin&utm_campaign=launch".into(),
        ..page("/", "Home")
    });
    lifecycle.handle(PageSignal::Settled { generation });

    let event = receiver.try_recv().unwrap();
    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(json["eventType"], "pageview");
    assert_eq!(json["utmSource"], "linkedin");
    assert_eq!(json["utmCampaign"], "launch");
    assert!(json.get("utmMedium").is_none());
    assert_eq!(json["screenResolution"], "1440x900");
}
