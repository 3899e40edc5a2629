//! Gift source backed by a JSON dump of Telegram responses

use std::fs;
use std::path::Path;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::info;

use super::{normalize_username, AccountResolver, GiftPageSource, UserHandle};
use crate::domain::gift::RawGiftRecord;
use crate::shared::errors::AppError;

#[derive(Debug, Clone, Deserialize)]
struct SnapshotFile {
    users: Vec<SnapshotUser>,
}

#[derive(Debug, Clone, Deserialize)]
struct SnapshotUser {
    username: String,
    user_id: i64,
    access_hash: i64,
    #[serde(default)]
    gifts: Vec<RawGiftRecord>,
}

/// Serves both username resolution and gift pages from a snapshot file:
///
/// ```json
/// { "users": [ { "username": "alice", "user_id": 1, "access_hash": 2, "gifts": [] } ] }
/// ```
pub struct SnapshotGiftSource {
    users: Vec<SnapshotUser>,
}

impl SnapshotGiftSource {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AppError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::SnapshotError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let source = Self::from_json(&content)?;
        info!(path = %path.display(), users = source.users.len(), "loaded gift snapshot");
        Ok(source)
    }

    pub fn from_json(content: &str) -> Result<Self, AppError> {
        let file: SnapshotFile = serde_json::from_str(content)
            .map_err(|e| AppError::SnapshotError(format!("Failed to parse snapshot: {}", e)))?;
        Ok(Self { users: file.users })
    }

    fn parse_offset(offset: &str) -> Result<usize, AppError> {
        if offset.is_empty() {
            return Ok(0);
        }
        offset
            .parse()
            .map_err(|_| AppError::GiftFetchError(format!("Invalid page offset: {:?}", offset)))
    }
}

#[async_trait]
impl AccountResolver for SnapshotGiftSource {
    async fn resolve_username(&self, username: &str) -> Result<Option<UserHandle>, AppError> {
        let wanted = normalize_username(username);
        Ok(self
            .users
            .iter()
            .find(|user| normalize_username(&user.username) == wanted)
            .map(|user| UserHandle {
                user_id: user.user_id,
                access_hash: user.access_hash,
            }))
    }
}

#[async_trait]
impl GiftPageSource for SnapshotGiftSource {
    async fn fetch_user_gifts(
        &self,
        user: &UserHandle,
        offset: &str,
        limit: u32,
    ) -> Result<Vec<RawGiftRecord>, AppError> {
        let start = Self::parse_offset(offset)?;
        let entry = self
            .users
            .iter()
            .find(|u| u.user_id == user.user_id && u.access_hash == user.access_hash)
            .ok_or_else(|| {
                AppError::GiftFetchError(format!("Unknown user handle: {}", user.user_id))
            })?;

        Ok(entry
            .gifts
            .iter()
            .skip(start)
            .take(limit as usize)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gift::RawGift;

    const SNAPSHOT: &str = r#"{
        "users": [
            {
                "username": "Alice",
                "user_id": 1,
                "access_hash": 100,
                "gifts": [
                    { "date": 10, "from_id": 2, "gift": { "type": "StarGift", "id": 1, "stars": 50, "convert_stars": 40 } },
                    { "date": 20, "gift": { "type": "StarGiftUnique", "id": 2, "title": "Neko Helmet", "slug": "NekoHelmet-9", "num": 9, "availability_issued": 10, "availability_total": 20 } },
                    { "date": 30, "gift": { "type": "StarGiftUpgrade", "id": 3 } }
                ]
            },
            { "username": "bob", "user_id": 2, "access_hash": 200 }
        ]
    }"#;

    #[tokio::test]
    async fn test_resolves_username_case_insensitively() {
        let source = SnapshotGiftSource::from_json(SNAPSHOT).unwrap();

        let handle = source.resolve_username("@alice").await.unwrap();
        assert_eq!(handle, Some(UserHandle { user_id: 1, access_hash: 100 }));
        assert_eq!(source.resolve_username("carol").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_page_respects_offset_and_limit() {
        let source = SnapshotGiftSource::from_json(SNAPSHOT).unwrap();
        let handle = UserHandle { user_id: 1, access_hash: 100 };

        let page = source.fetch_user_gifts(&handle, "", 50).await.unwrap();
        assert_eq!(page.len(), 3);
        assert_eq!(page[2].gift, RawGift::Unsupported);

        let page = source.fetch_user_gifts(&handle, "1", 1).await.unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].date, 20);
    }

    #[tokio::test]
    async fn test_user_without_gifts() {
        let source = SnapshotGiftSource::from_json(SNAPSHOT).unwrap();
        let handle = UserHandle { user_id: 2, access_hash: 200 };
        assert!(source.fetch_user_gifts(&handle, "", 50).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_bad_offset_and_unknown_handle_are_errors() {
        let source = SnapshotGiftSource::from_json(SNAPSHOT).unwrap();
        let handle = UserHandle { user_id: 1, access_hash: 100 };

        assert!(matches!(
            source.fetch_user_gifts(&handle, "next", 50).await,
            Err(AppError::GiftFetchError(_))
        ));
        let stranger = UserHandle { user_id: 9, access_hash: 9 };
        assert!(matches!(
            source.fetch_user_gifts(&stranger, "", 50).await,
            Err(AppError::GiftFetchError(_))
        ));
    }

    #[test]
    fn test_malformed_snapshot() {
        assert!(matches!(
            SnapshotGiftSource::from_json("{\"users\": 3}"),
            Err(AppError::SnapshotError(_))
        ));
    }
}
