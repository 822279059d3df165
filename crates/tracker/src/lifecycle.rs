//! Per-navigation lifecycle — owns the page-view gate and the page timer,
//! and turns navigation/visibility/unload signals into tracking events.
//!
//! State is scoped to the lifecycle value and reset explicitly on every
//! navigation. Ordering within one navigation is enforced by the
//! `has_tracked_page_view` gate alone: an exit signal that arrives before
//! the debounce elapses drops both the page view and the page exit for
//! that navigation. That gap is intentional and preserved.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use folio_core::types::{ClickEvent, PageExitEvent, PageViewEvent, TrackEvent, UtmParams};
use tracing::debug;

use crate::emitter::EventEmitter;
use crate::identity::IdentityManager;
use crate::page::{resolve_click, ElementNode, PageContext};

/// Signals delivered to the lifecycle after a navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSignal {
    /// The debounce delay elapsed for the navigation with this generation.
    /// Stale generations are ignored.
    Settled { generation: u64 },
    /// The page was hidden (tab switch, minimize).
    Hidden,
    /// The page became visible again.
    Visible,
    /// The page is being torn down. Terminal: later signals are no-ops.
    Unload,
}

/// State machine for one tracked page at a time.
pub struct PageLifecycle {
    emitter: EventEmitter,
    identity: Arc<IdentityManager>,
    mounted: bool,
    generation: u64,
    page: Option<PageContext>,
    page_load_time: Instant,
    has_tracked_page_view: bool,
}

impl PageLifecycle {
    pub fn new(emitter: EventEmitter, identity: Arc<IdentityManager>) -> Self {
        Self {
            emitter,
            identity,
            mounted: false,
            generation: 0,
            page: None,
            page_load_time: Instant::now(),
            has_tracked_page_view: false,
        }
    }

    /// Arm the lifecycle. Signals received before mounting are no-ops.
    pub fn mount(&mut self) {
        self.mounted = true;
    }

    /// Enter a new page: emit the exit for the previous page if one was
    /// tracked, then reset the per-navigation state. Returns the new
    /// generation, to be echoed back in the matching [`PageSignal::Settled`].
    pub fn navigate(&mut self, page: PageContext) -> u64 {
        if !self.mounted {
            return self.generation;
        }

        self.exit_current();

        debug!(path = %page.path, "navigation");
        self.page = Some(page);
        self.page_load_time = Instant::now();
        self.has_tracked_page_view = false;
        self.generation += 1;
        self.generation
    }

    pub fn handle(&mut self, signal: PageSignal) {
        if !self.mounted {
            return;
        }
        match signal {
            PageSignal::Settled { generation } => {
                if generation == self.generation && !self.has_tracked_page_view {
                    self.track_page_view();
                }
            }
            PageSignal::Hidden => {
                self.exit_current();
            }
            PageSignal::Visible => {
                self.page_load_time = Instant::now();
                if !self.has_tracked_page_view {
                    self.track_page_view();
                }
            }
            PageSignal::Unload => {
                self.exit_current();
                self.mounted = false;
            }
        }
    }

    /// Resolve a click's ancestor chain and emit a click event when a
    /// trackable element is found.
    pub fn click(&mut self, chain: &[ElementNode]) {
        if !self.mounted {
            return;
        }
        let Some(page) = &self.page else {
            return;
        };
        let Some(target) = resolve_click(chain) else {
            return;
        };

        let session = self.identity.session_data();
        if session.session_id.is_empty() {
            return;
        }

        self.emitter.track(TrackEvent::Click(ClickEvent {
            session_id: session.session_id,
            page_path: page.path.clone(),
            component_id: target.component_id,
            event_value: target.event_value,
        }));
    }

    fn track_page_view(&mut self) {
        let Some(page) = &self.page else {
            return;
        };

        let session = self.identity.session_data();
        if !session.is_complete() {
            debug!("incomplete identity, page view skipped");
            return;
        }

        let event = TrackEvent::PageView(PageViewEvent {
            session_id: session.session_id,
            visitor_id: session.visitor_id,
            page_path: page.path.clone(),
            page_title: page.title.clone(),
            referrer: page.referrer.clone(),
            utm: UtmParams::from_query(&page.query),
            user_agent: page.user_agent.clone(),
            screen_resolution: page.screen_resolution(),
            language: page.language.clone(),
        });

        if self.emitter.track(event) {
            self.has_tracked_page_view = true;
        }
    }

    /// Emit the page-exit for the current page, at most once per tracked
    /// view. A page without a tracked view exits silently.
    fn exit_current(&mut self) {
        if !self.has_tracked_page_view {
            return;
        }
        let Some(page) = &self.page else {
            return;
        };

        let session = self.identity.session_data();
        if session.session_id.is_empty() {
            return;
        }

        let duration_ms = self.page_load_time.elapsed().as_millis() as u64;
        self.emitter.track(TrackEvent::PageExit(PageExitEvent {
            session_id: session.session_id,
            page_path: page.path.clone(),
            page_title: page.title.clone(),
            duration_ms,
        }));
        self.has_tracked_page_view = false;
    }
}

/// Async shell around [`PageLifecycle`]: schedules the debounced `Settled`
/// signal for each navigation and forwards UI signals.
#[derive(Clone)]
pub struct LifecycleBinder {
    inner: Arc<Mutex<PageLifecycle>>,
    debounce: Duration,
}

impl LifecycleBinder {
    pub fn new(lifecycle: PageLifecycle, debounce: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(lifecycle)),
            debounce,
        }
    }

    pub fn mount(&self) {
        self.lock().mount();
    }

    /// Record a navigation and schedule its page view after the debounce
    /// delay. A navigation that arrives before the delay elapses makes the
    /// pending signal stale via the generation counter.
    pub fn navigate(&self, page: PageContext) {
        let generation = self.lock().navigate(page);
        let inner = self.inner.clone();
        let debounce = self.debounce;
        tokio::spawn(async move {
            tokio::time::sleep(debounce).await;
            inner
                .lock()
                .expect("lifecycle mutex poisoned")
                .handle(PageSignal::Settled { generation });
        });
    }

    pub fn page_hidden(&self) {
        self.lock().handle(PageSignal::Hidden);
    }

    pub fn page_visible(&self) {
        self.lock().handle(PageSignal::Visible);
    }

    pub fn unload(&self) {
        self.lock().handle(PageSignal::Unload);
    }

    pub fn click(&self, chain: &[ElementNode]) {
        self.lock().click(chain);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, PageLifecycle> {
        self.inner.lock().expect("lifecycle mutex poisoned")
    }
}
