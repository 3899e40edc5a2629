//! Collection identifiers derived from gift titles

use std::fmt;

use serde::{Deserialize, Serialize};

/// Normalized collection key: the gift title lower-cased with all whitespace removed.
///
/// Used both as the floor price cache key and as the marketplace slug, so two
/// titles that differ only in case or spacing always share one price lookup.
/// Tabs and non-breaking spaces are stripped too, not only `' '`, so a title
/// padded with them keys the same as its plain form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CollectionId(String);

impl CollectionId {
    pub fn from_title(title: &str) -> Self {
        Self(
            title
                .chars()
                .filter(|c| !c.is_whitespace())
                .flat_map(char::to_lowercase)
                .collect(),
        )
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CollectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
