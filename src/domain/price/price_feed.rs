//! Marketplace listing page source

use async_trait::async_trait;

use crate::domain::gift::CollectionId;
use crate::shared::errors::PriceError;

/// Fetches the raw listing markup of a collection, cheapest items first,
/// restricted to items currently for sale
#[async_trait]
pub trait ListingPageSource: Send + Sync {
    async fn fetch_listing_page(&self, collection: &CollectionId) -> Result<String, PriceError>;
}
