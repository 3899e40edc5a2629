//! Domain layer - gift classification, valuation and floor price caching

pub mod gift;
pub mod price;
