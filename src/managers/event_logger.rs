//! Event Logger for ReviewChill.
//!
//! Accumulates a capped history of page views and named events in the local
//! store for later inspection. Nothing here is transmitted anywhere, and
//! nothing here is allowed to fail the caller: a full or corrupt store means
//! the record is silently dropped and page behavior is unaffected.

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::dom::PageContext;
use crate::storage::LocalStore;
use crate::types::event::{PageViewRecord, TrackedEvent};

/// Store key holding the page-view sequence.
pub const PAGEVIEWS_KEY: &str = "reviewchill-pageviews";
/// Store key holding the event sequence.
pub const EVENTS_KEY: &str = "reviewchill-events";

/// Maximum retained page views. Oldest entries are dropped first.
pub const PAGEVIEW_CAP: usize = 50;
/// Maximum retained events. Oldest entries are dropped first.
pub const EVENT_CAP: usize = 100;

/// Logger writing bounded JSON sequences into the local store.
///
/// Each sequence is persisted as a single JSON value under one fixed key, so
/// every append reads, decodes, mutates, re-encodes and rewrites the whole
/// sequence. All operations run synchronously inside a single UI callback;
/// the read-modify-write is not guarded against other tabs.
pub struct EventLogger<'a> {
    store: &'a dyn LocalStore,
    page: &'a dyn PageContext,
}

impl<'a> EventLogger<'a> {
    pub fn new(store: &'a dyn LocalStore, page: &'a dyn PageContext) -> Self {
        Self { store, page }
    }

    /// Records a view of the current page.
    ///
    /// Captures the URL, title and current time internally. Never fails the
    /// caller: quota errors are logged and dropped, and a missing or
    /// unparsable stored sequence is treated as empty.
    pub fn record_page_view(&self) {
        let record = PageViewRecord {
            url: self.page.url(),
            title: self.page.title(),
            timestamp: Utc::now(),
        };
        self.append(PAGEVIEWS_KEY, PAGEVIEW_CAP, record);
    }

    /// Records a named event with an arbitrary JSON payload.
    ///
    /// The timestamp and current URL are captured at call time, not supplied
    /// by the caller. Same silent-discard failure mode as page views.
    pub fn record_event(&self, name: &str, data: Map<String, Value>) {
        let event = TrackedEvent {
            name: name.to_string(),
            data,
            timestamp: Utc::now(),
            url: self.page.url(),
        };
        self.append(EVENTS_KEY, EVENT_CAP, event);
    }

    /// The persisted page-view sequence, oldest first. Empty if absent or corrupt.
    pub fn recent_page_views(&self) -> Vec<PageViewRecord> {
        read_list(self.store, PAGEVIEWS_KEY)
    }

    /// The persisted event sequence, oldest first. Empty if absent or corrupt.
    pub fn recent_events(&self) -> Vec<TrackedEvent> {
        read_list(self.store, EVENTS_KEY)
    }

    /// Shared bounded-list discipline: read, append, truncate from the
    /// front, write back.
    fn append<T>(&self, key: &str, cap: usize, item: T)
    where
        T: Serialize + DeserializeOwned,
    {
        let mut list: Vec<T> = read_list(self.store, key);
        list.push(item);
        if list.len() > cap {
            let excess = list.len() - cap;
            list.drain(..excess);
        }

        match serde_json::to_string(&list) {
            Ok(json) => {
                if let Err(e) = self.store.set(key, &json) {
                    tracing::debug!(key, error = %e, "record dropped, store write failed");
                }
            }
            Err(e) => {
                tracing::debug!(key, error = %e, "record dropped, serialization failed");
            }
        }
    }
}

/// Decodes a stored JSON sequence, treating absent or corrupt values as empty.
/// Corrupt state self-heals on the next write.
fn read_list<T: DeserializeOwned>(store: &dyn LocalStore, key: &str) -> Vec<T> {
    match store.get(key) {
        Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!(key, error = %e, "stored sequence unparsable, starting fresh");
            Vec::new()
        }),
        None => Vec::new(),
    }
}
