//! Session and visitor identity — two identifiers persisted in a key/value
//! store with independent expirations. The session id groups events from one
//! visit, the visitor id groups events from one client across visits.

use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use folio_core::config::TrackerConfig;
use tracing::debug;
use uuid::Uuid;

/// Storage key for the short-lived session identifier.
pub const SESSION_KEY: &str = "session_id";
/// Storage key for the long-lived visitor identifier.
pub const VISITOR_KEY: &str = "visitor_id";

/// The identifier pair attached to outgoing events.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionData {
    pub session_id: String,
    pub visitor_id: String,
}

impl SessionData {
    /// Both identifiers were resolved. Tracking is skipped otherwise.
    pub fn is_complete(&self) -> bool {
        !self.session_id.is_empty() && !self.visitor_id.is_empty()
    }
}

/// Key/value storage with per-entry expiration.
///
/// `set` returns `false` when the backend cannot persist the value; callers
/// degrade to empty identifiers rather than erroring.
pub trait IdentityStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: String, ttl: Duration) -> bool;
}

struct StoredId {
    value: String,
    inserted_at: Instant,
    ttl: Duration,
}

/// In-process identity store backed by DashMap with lazy expiry.
#[derive(Default)]
pub struct MemoryIdentityStore {
    entries: DashMap<String, StoredId>,
}

impl MemoryIdentityStore {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }
}

impl IdentityStore for MemoryIdentityStore {
    fn get(&self, key: &str) -> Option<String> {
        let entry = self.entries.get(key)?;
        if entry.inserted_at.elapsed() > entry.ttl {
            drop(entry);
            self.entries.remove(key);
            return None;
        }
        Some(entry.value.clone())
    }

    fn set(&self, key: &str, value: String, ttl: Duration) -> bool {
        self.entries.insert(
            key.to_string(),
            StoredId {
                value,
                inserted_at: Instant::now(),
                ttl,
            },
        );
        true
    }
}

/// Store whose writes always fail. Stands in when no storage backend is
/// available; tracking degrades to a silent no-op upstream.
pub struct UnavailableStore;

impl IdentityStore for UnavailableStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: String, _ttl: Duration) -> bool {
        false
    }
}

/// Resolves the session/visitor identifier pair, creating and persisting
/// fresh UUIDs when absent or expired.
pub struct IdentityManager {
    store: Arc<dyn IdentityStore>,
    session_ttl: Duration,
    visitor_ttl: Duration,
}

impl IdentityManager {
    pub fn new(store: Arc<dyn IdentityStore>, session_ttl: Duration, visitor_ttl: Duration) -> Self {
        Self {
            store,
            session_ttl,
            visitor_ttl,
        }
    }

    pub fn from_config(store: Arc<dyn IdentityStore>, config: &TrackerConfig) -> Self {
        Self::new(
            store,
            Duration::from_secs(config.session_ttl_minutes * 60),
            Duration::from_secs(config.visitor_ttl_days * 24 * 60 * 60),
        )
    }

    /// Resolve the identifier pair. Idempotent within the expiration
    /// windows: repeated calls return the same identifiers until they
    /// expire. Unavailable storage yields empty-string placeholders.
    pub fn session_data(&self) -> SessionData {
        SessionData {
            session_id: self.read_or_create(SESSION_KEY, self.session_ttl),
            visitor_id: self.read_or_create(VISITOR_KEY, self.visitor_ttl),
        }
    }

    fn read_or_create(&self, key: &str, ttl: Duration) -> String {
        if let Some(existing) = self.store.get(key) {
            return existing;
        }
        let id = Uuid::new_v4().to_string();
        if self.store.set(key, id.clone(), ttl) {
            debug!(key, "created new identifier");
            id
        } else {
            debug!(key, "identity store unavailable, tracking disabled");
            String::new()
        }
    }
}
