//! Gift Valuator - Telegram gift fetcher with Fragment floor-price valuation
//! Built with Domain-Driven Design principles

pub mod domain;
pub mod infrastructure;
pub mod application;
pub mod shared;

// Re-export main types for convenience
pub use domain::gift::{AggregateResult, GiftAggregator, NormalizedGift, RawGiftRecord};
pub use domain::price::{PriceCache, PriceResolver};
pub use application::GiftService;
