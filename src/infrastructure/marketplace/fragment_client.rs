//! Fragment gift catalog client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::debug;

use crate::domain::gift::CollectionId;
use crate::domain::price::ListingPageSource;
use crate::shared::errors::{AppError, PriceError};
use crate::shared::types::MarketplaceConfig;

/// Fetches collection listing pages from fragment.com
pub struct FragmentClient {
    http_client: Client,
    base_url: Url,
}

impl FragmentClient {
    pub fn new(config: &MarketplaceConfig) -> Result<Self, AppError> {
        let http_client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        let base_url = Url::parse(&config.base_url).map_err(|e| {
            AppError::ConfigError(format!("Invalid marketplace base_url {}: {}", config.base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(AppError::ConfigError(format!(
                "Marketplace base_url cannot hold a path: {}",
                config.base_url
            )));
        }

        Ok(Self {
            http_client,
            base_url,
        })
    }

    /// Catalog page of a collection, without the sort/filter query.
    /// The slug is a single percent-encoded path segment.
    pub fn listing_url(&self, collection: &CollectionId) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .push("gifts")
                .push(collection.as_str());
        }
        url
    }
}

#[async_trait]
impl ListingPageSource for FragmentClient {
    async fn fetch_listing_page(&self, collection: &CollectionId) -> Result<String, PriceError> {
        let url = self.listing_url(collection);
        debug!("🔍 Fetching Fragment listing page: {}", url);

        let response = self
            .http_client
            .get(url)
            .query(&[("sort", "price_asc"), ("filter", "sale")])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(PriceError::Status(response.status().as_u16()));
        }

        Ok(response.text().await?)
    }
}
