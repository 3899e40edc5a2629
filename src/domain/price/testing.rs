//! Test doubles for the marketplace source and the clock

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use tokio::sync::Barrier;

use super::{Clock, ListingPageSource};
use crate::domain::gift::CollectionId;
use crate::shared::errors::PriceError;

/// Listing page with a single item at `price`
pub(crate) fn listing_page_with_price(price: &str) -> String {
    format!(
        r#"<div class="tm-catalog-grid js-autoscroll-body">
             <a class="tm-grid-item" href="/gift/x-1">
               <div class="tm-grid-item-values"><div class="tm-value">{}</div></div>
             </a>
           </div>"#,
        price
    )
}

/// Listing page with an empty catalog grid
pub(crate) fn empty_listing_page() -> String {
    r#"<div class="tm-catalog-grid js-autoscroll-body"></div>"#.to_string()
}

/// In-memory marketplace keyed by collection, counting every fetch.
/// Unknown collections answer with a 404 error.
pub(crate) struct FakeListingSource {
    pages: Mutex<HashMap<CollectionId, Result<String, PriceError>>>,
    calls: Mutex<HashMap<CollectionId, usize>>,
    total: AtomicUsize,
    delay: Option<Duration>,
    barrier: Option<Arc<Barrier>>,
}

impl FakeListingSource {
    pub(crate) fn new() -> Self {
        Self {
            pages: Mutex::new(HashMap::new()),
            calls: Mutex::new(HashMap::new()),
            total: AtomicUsize::new(0),
            delay: None,
            barrier: None,
        }
    }

    pub(crate) fn with_price(self, title: &str, price: &str) -> Self {
        self.set_price(title, price);
        self
    }

    pub(crate) fn with_empty_listing(self, title: &str) -> Self {
        self.set_page(title, Ok(empty_listing_page()));
        self
    }

    pub(crate) fn with_failure(self, title: &str, err: PriceError) -> Self {
        self.set_page(title, Err(err));
        self
    }

    pub(crate) fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Hold every fetch until `parties` fetches are in progress at once
    pub(crate) fn with_barrier(mut self, parties: usize) -> Self {
        self.barrier = Some(Arc::new(Barrier::new(parties)));
        self
    }

    pub(crate) fn set_price(&self, title: &str, price: &str) {
        self.set_page(title, Ok(listing_page_with_price(price)));
    }

    fn set_page(&self, title: &str, page: Result<String, PriceError>) {
        self.pages
            .lock()
            .unwrap()
            .insert(CollectionId::from_title(title), page);
    }

    pub(crate) fn total_calls(&self) -> usize {
        self.total.load(Ordering::SeqCst)
    }

    pub(crate) fn calls_for(&self, title: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .get(&CollectionId::from_title(title))
            .copied()
            .unwrap_or(0)
    }
}

#[async_trait]
impl ListingPageSource for FakeListingSource {
    async fn fetch_listing_page(&self, collection: &CollectionId) -> Result<String, PriceError> {
        self.total.fetch_add(1, Ordering::SeqCst);
        *self
            .calls
            .lock()
            .unwrap()
            .entry(collection.clone())
            .or_insert(0) += 1;

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(barrier) = &self.barrier {
            barrier.wait().await;
        }

        self.pages
            .lock()
            .unwrap()
            .get(collection)
            .cloned()
            .unwrap_or(Err(PriceError::Status(404)))
    }
}

/// Clock that only moves when told to
pub(crate) struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub(crate) fn new() -> Self {
        Self {
            now: Mutex::new(Utc.timestamp_opt(1_700_000_000, 0).unwrap()),
        }
    }

    pub(crate) fn advance_secs(&self, seconds: i64) {
        let mut now = self.now.lock().unwrap();
        *now += chrono::Duration::seconds(seconds);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}
