//! Gift domain - raw Telegram gift records, their normalized form and valuation

mod collection;
mod gift_aggregator;

pub use collection::CollectionId;
pub use gift_aggregator::GiftAggregator;

use serde::{Deserialize, Serialize};

/// One entry of a user's received gift page, as returned by Telegram
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawGiftRecord {
    /// Unix timestamp (seconds) the gift was received at
    pub date: i64,
    /// Sender user id; Telegram omits it for anonymous gifts
    #[serde(default)]
    pub from_id: Option<i64>,
    pub gift: RawGift,
}

/// Gift payload, discriminated by its TL constructor name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RawGift {
    StarGift(StarGift),
    StarGiftUnique(StarGiftUnique),
    /// Any constructor this crate does not know about yet
    #[serde(other)]
    Unsupported,
}

/// Fungible gift, valued by the stars it can be converted back into
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarGift {
    pub id: i64,
    pub stars: i64,
    pub convert_stars: i64,
}

/// Numbered collectible gift
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarGiftUnique {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub num: i32,
    pub availability_issued: i32,
    pub availability_total: i32,
}

impl StarGiftUnique {
    pub fn collection_id(&self) -> CollectionId {
        CollectionId::from_title(&self.title)
    }
}

/// Output record for a fungible gift
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FungibleGift {
    pub id: i64,
    pub stars: i64,
    pub convert_stars: i64,
    pub sender_id: Option<i64>,
    pub received_date: i64,
}

/// Output record for a unique gift
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniqueGift {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub num: i32,
    #[serde(rename = "collection_floor_price_in_ton")]
    pub floor_price: Option<f64>,
    pub availability_issued: i32,
    pub availability_total: i32,
    pub received_date: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum NormalizedGift {
    #[serde(rename = "StarGift")]
    Fungible(FungibleGift),
    #[serde(rename = "StarGiftUnique")]
    Unique(UniqueGift),
}

impl NormalizedGift {
    pub fn id(&self) -> i64 {
        match self {
            NormalizedGift::Fungible(gift) => gift.id,
            NormalizedGift::Unique(gift) => gift.id,
        }
    }

    /// Resolved floor price; always `None` for fungible gifts
    pub fn floor_price(&self) -> Option<f64> {
        match self {
            NormalizedGift::Fungible(_) => None,
            NormalizedGift::Unique(gift) => gift.floor_price,
        }
    }
}

/// Summed valuation of a gift page
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TotalCost {
    /// Sum of known unique-gift floor prices, in TON
    pub ton: f64,
    /// Sum of fungible-gift convert values, in Telegram Stars
    pub stars: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregateResult {
    pub gifts: Vec<NormalizedGift>,
    #[serde(rename = "count_gifts")]
    pub count: usize,
    pub total_cost: TotalCost,
}

impl AggregateResult {
    /// The shape returned when there is nothing to report, e.g. an unknown account
    pub fn empty() -> Self {
        Self::default()
    }
}
