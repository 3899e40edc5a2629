//! Utility functions and helpers

/// Format a TON amount for display
pub fn format_ton(amount: f64) -> String {
    format!("{:.2} TON", amount)
}

/// Format an optional floor price, showing "n/a" when unknown
pub fn format_floor_price(price: Option<f64>) -> String {
    price.map(format_ton).unwrap_or_else(|| "n/a".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_floor_price() {
        assert_eq!(format_floor_price(Some(12.5)), "12.50 TON");
        assert_eq!(format_floor_price(None), "n/a");
    }
}
