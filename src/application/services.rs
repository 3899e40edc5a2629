//! Application services and use cases

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::gift::{AggregateResult, GiftAggregator};
use crate::domain::price::{PriceCache, PriceResolver};
use crate::infrastructure::marketplace::FragmentClient;
use crate::infrastructure::telegram::{AccountResolver, GiftPageSource};
use crate::shared::errors::AppError;
use crate::shared::types::FetcherConfig;

/// Application service for fetching and valuing a user's gifts
pub struct GiftService {
    accounts: Arc<dyn AccountResolver>,
    pages: Arc<dyn GiftPageSource>,
    aggregator: GiftAggregator,
}

impl GiftService {
    pub fn new(
        accounts: Arc<dyn AccountResolver>,
        pages: Arc<dyn GiftPageSource>,
        aggregator: GiftAggregator,
    ) -> Self {
        Self {
            accounts,
            pages,
            aggregator,
        }
    }

    /// Wire the service to Fragment using the given config
    pub fn with_fragment(
        config: &FetcherConfig,
        accounts: Arc<dyn AccountResolver>,
        pages: Arc<dyn GiftPageSource>,
    ) -> Result<Self, AppError> {
        let resolver = build_price_resolver(config)?;
        Ok(Self::new(accounts, pages, GiftAggregator::new(Arc::new(resolver))))
    }

    /// Fetch one page of `username`'s received gifts and value it.
    ///
    /// An unknown username yields an empty result, not an error.
    pub async fn get_user_gifts(
        &self,
        username: &str,
        offset: &str,
        limit: u32,
    ) -> Result<AggregateResult, AppError> {
        let Some(user) = self.accounts.resolve_username(username).await? else {
            warn!("⚠️ No user found for username '{}'", username);
            return Ok(AggregateResult::empty());
        };

        let raw_gifts = self.pages.fetch_user_gifts(&user, offset, limit).await?;
        info!(
            "📦 Fetched {} gift records for '{}' (user_id={})",
            raw_gifts.len(),
            username,
            user.user_id
        );

        Ok(self.aggregator.aggregate(&raw_gifts).await)
    }
}

/// Price resolver backed by Fragment and a fresh process-wide cache
pub fn build_price_resolver(config: &FetcherConfig) -> Result<PriceResolver, AppError> {
    let client = FragmentClient::new(&config.marketplace)?;
    let cache = Arc::new(PriceCache::new(config.cache.freshness_secs));
    Ok(PriceResolver::new(Arc::new(client), cache))
}
