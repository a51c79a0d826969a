//! Catalog source port
//!
//! Defines where a store gets its items from. The core never reads files
//! itself; a source hands it fully constructed items.

use crate::core::models::Item;

/// Provider of catalog items
///
/// Implementations parse some configuration source (a TOML, JSON or YAML file, a
/// fixed list in tests) and construct the items in load order.
#[cfg_attr(test, mockall::automock)]
pub trait CatalogSource {
    /// Load every catalog item, in the order they were declared
    fn load(&self) -> anyhow::Result<Vec<Item>>;

    /// Human-readable description of the source, used in logs
    fn describe(&self) -> String {
        "catalog".to_string()
    }
}
