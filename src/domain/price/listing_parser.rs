//! Fragment listing page parsing

use scraper::{Html, Selector};

use super::{MissingListing, PriceLookup};
use crate::shared::errors::PriceError;

const CATALOG_GRID: &str = ".tm-catalog-grid.js-autoscroll-body";
const GRID_ITEM: &str = "a.tm-grid-item";
const ITEM_PRICE: &str = ".tm-grid-item-values .tm-value";

fn selector(css: &'static str) -> Selector {
    Selector::parse(css).expect("static selector is valid")
}

/// Extract the floor price from a listing page sorted by ascending price.
///
/// The first grid item is the cheapest one on sale; its price text may carry
/// thousands separators (`1,250`).
pub fn parse_floor_price(markup: &str) -> PriceLookup {
    let document = Html::parse_document(markup);

    let Some(container) = document.select(&selector(CATALOG_GRID)).next() else {
        return PriceLookup::NoData(MissingListing::NoContainer);
    };
    let Some(first_item) = container.select(&selector(GRID_ITEM)).next() else {
        return PriceLookup::NoData(MissingListing::NoItems);
    };
    let Some(price_tag) = first_item.select(&selector(ITEM_PRICE)).next() else {
        return PriceLookup::NoData(MissingListing::NoPriceTag);
    };

    let text: String = price_tag.text().collect();
    let cleaned = text.trim().replace(',', "");
    match cleaned.parse::<f64>() {
        Ok(price) => PriceLookup::Found(price),
        Err(_) => PriceLookup::Failed(PriceError::InvalidPrice(text.trim().to_string())),
    }
}
