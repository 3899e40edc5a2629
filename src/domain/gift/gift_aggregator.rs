//! Gift page classification and valuation

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, info};

use super::{
    AggregateResult, CollectionId, FungibleGift, NormalizedGift, RawGift, RawGiftRecord,
    TotalCost, UniqueGift,
};
use crate::domain::price::PriceResolver;

/// Turns a raw gift page into normalized records plus a total valuation.
///
/// Each distinct collection referenced by the page is priced exactly once,
/// all collections concurrently, before any record is built. Output keeps the
/// page order; unsupported gift types are dropped.
pub struct GiftAggregator {
    resolver: Arc<PriceResolver>,
}

impl GiftAggregator {
    pub fn new(resolver: Arc<PriceResolver>) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &Arc<PriceResolver> {
        &self.resolver
    }

    pub async fn aggregate(&self, raw_gifts: &[RawGiftRecord]) -> AggregateResult {
        let collections = Self::distinct_collections(raw_gifts);
        let floor_prices = self.resolve_floor_prices(collections).await;

        let mut gifts = Vec::with_capacity(raw_gifts.len());
        let mut total_cost = TotalCost::default();

        for record in raw_gifts {
            match &record.gift {
                RawGift::StarGift(gift) => {
                    total_cost.stars = total_cost.stars.saturating_add(gift.convert_stars);
                    gifts.push(NormalizedGift::Fungible(FungibleGift {
                        id: gift.id,
                        stars: gift.stars,
                        convert_stars: gift.convert_stars,
                        sender_id: record.from_id,
                        received_date: record.date,
                    }));
                }
                RawGift::StarGiftUnique(gift) => {
                    let floor_price = floor_prices
                        .get(&gift.collection_id())
                        .copied()
                        .flatten();
                    if let Some(price) = floor_price {
                        total_cost.ton += price;
                    }
                    gifts.push(NormalizedGift::Unique(UniqueGift {
                        id: gift.id,
                        title: gift.title.clone(),
                        slug: gift.slug.clone(),
                        num: gift.num,
                        floor_price,
                        availability_issued: gift.availability_issued,
                        availability_total: gift.availability_total,
                        received_date: record.date,
                    }));
                }
                RawGift::Unsupported => {
                    debug!(date = record.date, "skipping unsupported gift type");
                }
            }
        }

        info!(
            gifts = gifts.len(),
            skipped = raw_gifts.len() - gifts.len(),
            ton = total_cost.ton,
            stars = total_cost.stars,
            "aggregated gift page"
        );

        AggregateResult {
            count: gifts.len(),
            gifts,
            total_cost,
        }
    }

    /// Collections referenced by unique gifts, deduplicated after normalization
    pub fn distinct_collections(raw_gifts: &[RawGiftRecord]) -> BTreeSet<CollectionId> {
        raw_gifts
            .iter()
            .filter_map(|record| match &record.gift {
                RawGift::StarGiftUnique(gift) => Some(gift.collection_id()),
                _ => None,
            })
            .collect()
    }

    async fn resolve_floor_prices(
        &self,
        collections: BTreeSet<CollectionId>,
    ) -> HashMap<CollectionId, Option<f64>> {
        if collections.is_empty() {
            return HashMap::new();
        }

        debug!(collections = collections.len(), "resolving floor prices");
        let lookups = collections.into_iter().map(|collection| async move {
            let price = self.resolver.resolve(&collection).await;
            (collection, price)
        });

        join_all(lookups).await.into_iter().collect()
    }
}
