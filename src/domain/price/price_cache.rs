//! In-process floor price cache with a freshness window

use std::time::Duration;

use chrono::{DateTime, Utc};
use dashmap::DashMap;

use crate::domain::gift::CollectionId;

/// Default freshness window: one hour
pub const DEFAULT_FRESHNESS_SECS: u64 = 3600;

/// A cached lookup result. `floor_price` is `None` for not-found and failed
/// lookups, which are cached all the same.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceCacheEntry {
    pub floor_price: Option<f64>,
    pub last_update_at: DateTime<Utc>,
}

impl PriceCacheEntry {
    pub fn is_fresh(&self, now: DateTime<Utc>, window: Duration) -> bool {
        match (now - self.last_update_at).to_std() {
            Ok(age) => age < window,
            // entry stamped in the future: clock stepped back
            Err(_) => true,
        }
    }
}

/// Floor price cache keyed by collection.
///
/// Entries are overwritten once stale and never evicted. Writes are atomic
/// per key, so concurrent lookups of different collections do not interfere.
#[derive(Debug)]
pub struct PriceCache {
    entries: DashMap<CollectionId, PriceCacheEntry>,
    freshness: Duration,
}

impl Default for PriceCache {
    fn default() -> Self {
        Self::new(DEFAULT_FRESHNESS_SECS)
    }
}

impl PriceCache {
    pub fn new(freshness_secs: u64) -> Self {
        Self {
            entries: DashMap::new(),
            freshness: Duration::from_secs(freshness_secs),
        }
    }

    pub fn freshness_window(&self) -> Duration {
        self.freshness
    }

    /// Entry for `collection` if one exists, fresh or not
    pub fn get(&self, collection: &CollectionId) -> Option<PriceCacheEntry> {
        self.entries.get(collection).map(|entry| *entry)
    }

    /// Entry for `collection` if it is still inside the freshness window at `now`
    pub fn get_fresh(
        &self,
        collection: &CollectionId,
        now: DateTime<Utc>,
    ) -> Option<PriceCacheEntry> {
        self.get(collection)
            .filter(|entry| entry.is_fresh(now, self.freshness))
    }

    /// Record a lookup outcome, replacing any previous entry
    pub fn store(&self, collection: CollectionId, floor_price: Option<f64>, now: DateTime<Utc>) {
        self.entries.insert(
            collection,
            PriceCacheEntry {
                floor_price,
                last_update_at: now,
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
