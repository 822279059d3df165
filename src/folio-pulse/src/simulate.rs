//! Simulated browsing session — drives the tracking SDK against the local
//! collection endpoint as an end-to-end smoke test.

use folio_core::config::TrackerConfig;
use folio_tracker::emitter::EventEmitter;
use folio_tracker::identity::{IdentityManager, MemoryIdentityStore};
use folio_tracker::lifecycle::{LifecycleBinder, PageLifecycle};
use folio_tracker::page::{ElementNode, PageContext};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Walk one visitor through the home and projects pages with a click.
pub async fn run(config: &TrackerConfig) {
    info!(endpoint = %config.endpoint, "starting simulated browsing session");

    let identity = Arc::new(IdentityManager::from_config(
        Arc::new(MemoryIdentityStore::new()),
        config,
    ));
    let emitter = EventEmitter::new(config);
    let binder = LifecycleBinder::new(
        PageLifecycle::new(emitter, identity),
        Duration::from_millis(config.debounce_ms),
    );
    binder.mount();

    binder.navigate(PageContext {
        title: "Ismat Samadov | Data Analytics & AI Professional".into(),
        referrer: "https://google.com".into(),
        user_agent: "folio-pulse-simulator/0.1".into(),
        screen_width: 1920,
        screen_height: 1080,
        language: "en-US".into(),
        query: "utm_source=simulation".into(),
        ..PageContext::new("/")
    });

    // Let the page view debounce elapse before interacting
    tokio::time::sleep(Duration::from_millis(config.debounce_ms + 200)).await;

    binder.click(&[
        ElementNode::new("span").with_text("View Projects"),
        ElementNode::new("a")
            .with_id("view-projects")
            .with_href("/projects"),
    ]);

    binder.navigate(PageContext {
        title: "Projects | Ismat Samadov".into(),
        user_agent: "folio-pulse-simulator/0.1".into(),
        screen_width: 1920,
        screen_height: 1080,
        language: "en-US".into(),
        ..PageContext::new("/projects")
    });

    tokio::time::sleep(Duration::from_millis(config.debounce_ms + 200)).await;
    binder.unload();

    // Allow the dispatch queue to drain before the task ends
    tokio::time::sleep(Duration::from_secs(1)).await;
    info!("simulated browsing session complete");
}
