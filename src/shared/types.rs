//! Common types used across the application

use serde::{Deserialize, Serialize};

/// Marketplace (Fragment) configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketplaceConfig {
    pub base_url: String,
    pub user_agent: String,
    pub request_timeout_ms: u64,
}

impl Default for MarketplaceConfig {
    fn default() -> Self {
        Self {
            base_url: "https://fragment.com".to_string(),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36"
                .to_string(),
            request_timeout_ms: 15_000,
        }
    }
}

/// Floor price cache configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// How long a cached floor price (or cached failure) stays fresh
    pub freshness_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { freshness_secs: 3600 }
    }
}

/// Gift page fetch configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GiftsConfig {
    pub page_limit: u32,
}

impl Default for GiftsConfig {
    fn default() -> Self {
        Self { page_limit: 50 }
    }
}

/// Fetcher configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetcherConfig {
    pub marketplace: MarketplaceConfig,
    pub cache: CacheConfig,
    pub gifts: GiftsConfig,
}
