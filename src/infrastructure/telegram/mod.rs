//! Telegram collaborators: username resolution and the received-gifts page

pub mod snapshot;

pub use snapshot::SnapshotGiftSource;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::gift::RawGiftRecord;
use crate::shared::errors::AppError;

/// Resolved Telegram user, as needed by `payments.getUserStarGifts`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserHandle {
    pub user_id: i64,
    pub access_hash: i64,
}

/// Maps a public username to a user handle
#[async_trait]
pub trait AccountResolver: Send + Sync {
    /// `Ok(None)` when no such user exists
    async fn resolve_username(&self, username: &str) -> Result<Option<UserHandle>, AppError>;
}

/// Fetches one page of a user's received gifts
#[async_trait]
pub trait GiftPageSource: Send + Sync {
    async fn fetch_user_gifts(
        &self,
        user: &UserHandle,
        offset: &str,
        limit: u32,
    ) -> Result<Vec<RawGiftRecord>, AppError>;
}

/// Usernames are matched case-insensitively, with an optional leading `@`
pub fn normalize_username(username: &str) -> String {
    username.trim().trim_start_matches('@').to_lowercase()
}
