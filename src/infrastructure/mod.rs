//! Infrastructure layer - Fragment marketplace client and Telegram gift sources

pub mod marketplace;
pub mod telegram;
