//! Item model
//!
//! A purchasable catalog entry. Items are built once when the catalog is
//! loaded and never change afterwards.

use serde::{Deserialize, Serialize};

/// A catalog item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique name within the catalog
    pub name: String,

    /// Price as a non-negative integer amount
    pub price: u64,

    /// Tags attached to this item (repeats count as repeated tags)
    pub hashtags: Vec<String>,

    /// Free text shown to the user
    pub description: String,
}

impl Item {
    /// Create a new item
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        price: u64,
        hashtags: Vec<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            price,
            hashtags,
            description: description.into(),
        }
    }

    /// Whether `tag` is exactly one of this item's tags
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.hashtags.iter().any(|t| t == tag)
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.price)
    }
}
