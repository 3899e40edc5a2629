//! Error handling for the application

use thiserror::Error;

/// Price lookup errors
///
/// These never leave the price resolver: they are logged and collapsed into
/// an unknown floor price.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PriceError {
    #[error("Marketplace request failed: {0}")]
    Network(String),

    #[error("Marketplace returned status {0}")]
    Status(u16),

    #[error("Invalid price text: {0:?}")]
    InvalidPrice(String),

    #[error("Listing parse task failed: {0}")]
    ParseTask(String),
}

impl From<reqwest::Error> for PriceError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => PriceError::Status(status.as_u16()),
            None => PriceError::Network(err.to_string()),
        }
    }
}

/// General application error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Snapshot error: {0}")]
    SnapshotError(String),

    #[error("Account resolution failed: {0}")]
    AccountError(String),

    #[error("Gift fetch failed: {0}")]
    GiftFetchError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<PriceError> for AppError {
    fn from(err: PriceError) -> Self {
        AppError::Unknown(err.to_string())
    }
}
