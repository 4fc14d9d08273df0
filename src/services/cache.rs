use chrono::{DateTime, Duration, Utc};
use serde_json::Value;
use std::cell::RefCell;
use std::collections::HashMap;

use crate::config::Config;

thread_local! {
    static RESPONSES: RefCell<ResponseCache> =
        RefCell::new(ResponseCache::new(Duration::seconds(Config::CACHE_TTL_SECS)));
}

#[derive(Debug, Clone)]
struct CacheEntry {
    stored_at: DateTime<Utc>,
    value: Value,
}

/// Short-lived store of decoded API responses keyed by request URL.
#[derive(Debug)]
pub struct ResponseCache {
    ttl: Duration,
    entries: HashMap<String, CacheEntry>,
}

impl ResponseCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: HashMap::new(),
        }
    }

    fn is_fresh(&self, entry: &CacheEntry, now: DateTime<Utc>) -> bool {
        now - entry.stored_at < self.ttl
    }

    /// Returns a copy of the entry if it is younger than the TTL.
    pub fn get(&self, key: &str, now: DateTime<Utc>) -> Option<Value> {
        self.entries
            .get(key)
            .filter(|entry| self.is_fresh(entry, now))
            .map(|entry| entry.value.clone())
    }

    /// Stores a response and drops anything already expired.
    pub fn insert(&mut self, key: String, value: Value, now: DateTime<Utc>) {
        let ttl = self.ttl;
        self.entries.retain(|_, entry| now - entry.stored_at < ttl);
        self.entries.insert(
            key,
            CacheEntry {
                stored_at: now,
                value,
            },
        );
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Looks up the page-wide response cache.
pub fn cached(key: &str, now: DateTime<Utc>) -> Option<Value> {
    RESPONSES.with(|cache| cache.borrow().get(key, now))
}

/// Stores into the page-wide response cache.
pub fn store(key: String, value: Value, now: DateTime<Utc>) {
    RESPONSES.with(|cache| cache.borrow_mut().insert(key, value, now));
}
