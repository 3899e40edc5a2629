//! Price domain - collection floor price lookup and caching

mod listing_parser;
mod price_cache;
mod price_feed;
mod price_resolver;

#[cfg(test)]
pub(crate) mod testing;

pub use listing_parser::parse_floor_price;
pub use price_cache::{PriceCache, PriceCacheEntry};
pub use price_feed::ListingPageSource;
pub use price_resolver::PriceResolver;

use chrono::{DateTime, Utc};

use crate::shared::errors::PriceError;

/// Why a listing page produced no floor price
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingListing {
    /// The catalog grid is not on the page (unknown collection or layout change)
    NoContainer,
    /// The collection has nothing for sale
    NoItems,
    /// The cheapest item carries no price value
    NoPriceTag,
}

/// Outcome of a single marketplace lookup
#[derive(Debug, Clone, PartialEq)]
pub enum PriceLookup {
    Found(f64),
    NoData(MissingListing),
    Failed(PriceError),
}

impl PriceLookup {
    /// Collapse to the optional floor price seen by callers
    pub fn floor_price(&self) -> Option<f64> {
        match self {
            PriceLookup::Found(price) => Some(*price),
            PriceLookup::NoData(_) | PriceLookup::Failed(_) => None,
        }
    }
}

/// Time source for cache freshness checks
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
