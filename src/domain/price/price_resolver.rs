//! Cached floor price resolution

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use super::{parse_floor_price, Clock, ListingPageSource, PriceCache, PriceLookup, SystemClock};
use crate::domain::gift::CollectionId;
use crate::shared::errors::PriceError;

/// Resolves collection floor prices through a shared [`PriceCache`].
///
/// `resolve` never fails: network errors, missing listings and unparseable
/// prices all come back as `None`, and that outcome is cached for the whole
/// freshness window like a successful one. Lookups of the same collection are
/// serialized so overlapping callers trigger a single marketplace request.
pub struct PriceResolver {
    source: Arc<dyn ListingPageSource>,
    cache: Arc<PriceCache>,
    clock: Arc<dyn Clock>,
    // one gate per collection ever looked up; grows no larger than the cache
    in_flight: DashMap<CollectionId, Arc<Mutex<()>>>,
}

impl PriceResolver {
    pub fn new(source: Arc<dyn ListingPageSource>, cache: Arc<PriceCache>) -> Self {
        Self::with_clock(source, cache, Arc::new(SystemClock))
    }

    pub fn with_clock(
        source: Arc<dyn ListingPageSource>,
        cache: Arc<PriceCache>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            source,
            cache,
            clock,
            in_flight: DashMap::new(),
        }
    }

    pub fn cache(&self) -> &Arc<PriceCache> {
        &self.cache
    }

    /// Floor price of `collection` in TON, or `None` if unknown
    pub async fn resolve(&self, collection: &CollectionId) -> Option<f64> {
        if let Some(entry) = self.cache.get_fresh(collection, self.clock.now()) {
            debug!(collection = %collection, price = ?entry.floor_price, "floor price cache hit");
            return entry.floor_price;
        }

        let gate = self
            .in_flight
            .entry(collection.clone())
            .or_default()
            .value()
            .clone();
        let _guard = gate.lock().await;

        // refreshed by a concurrent caller while we waited on the gate
        let started_at = self.clock.now();
        if let Some(entry) = self.cache.get_fresh(collection, started_at) {
            debug!(collection = %collection, price = ?entry.floor_price, "floor price refreshed concurrently");
            return entry.floor_price;
        }

        let lookup = self.lookup(collection).await;
        match &lookup {
            PriceLookup::Found(price) => {
                info!(collection = %collection, price, "floor price resolved")
            }
            PriceLookup::NoData(reason) => {
                info!(collection = %collection, ?reason, "no floor price listed")
            }
            PriceLookup::Failed(err) => {
                warn!(collection = %collection, error = %err, "floor price lookup failed")
            }
        }

        let floor_price = lookup.floor_price();
        self.cache.store(collection.clone(), floor_price, started_at);
        floor_price
    }

    /// One uncached marketplace lookup, with the failure cause preserved
    pub async fn lookup(&self, collection: &CollectionId) -> PriceLookup {
        let markup = match self.source.fetch_listing_page(collection).await {
            Ok(markup) => markup,
            Err(err) => return PriceLookup::Failed(err),
        };

        match tokio::task::spawn_blocking(move || parse_floor_price(&markup)).await {
            Ok(lookup) => lookup,
            Err(err) => PriceLookup::Failed(PriceError::ParseTask(err.to_string())),
        }
    }
}
