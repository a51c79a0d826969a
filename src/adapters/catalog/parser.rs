//! Catalog file parser
//!
//! Reads and deserializes catalog files. The format is picked from the file
//! extension: `.json` is JSON, `.yaml`/`.yml` is YAML, everything else TOML.
//!
//! ```toml
//! [[items]]
//! name = "apple"
//! price = 10
//! hashtags = ["fruit"]
//! description = "Crisp and red"
//! ```

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::core::error::CatalogError;
use crate::core::models::Item;

/// A catalog file structure
#[derive(Debug, Default, Deserialize)]
pub struct CatalogFile {
    /// Item records, in declaration order
    #[serde(default)]
    pub items: Vec<ItemEntry>,
}

/// An item record as written in the catalog file
#[derive(Debug, Clone, Deserialize)]
pub struct ItemEntry {
    /// Item name
    pub name: String,

    /// Price, coerced to an integer when converted
    pub price: RawPrice,

    /// Tags
    #[serde(default)]
    pub hashtags: Vec<String>,

    /// Description
    #[serde(default)]
    pub description: String,
}

/// A price as it appears in the file, before integer coercion
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawPrice {
    /// `price = 10`
    Integer(i64),
    /// `price = 9.99` (truncated toward zero)
    Float(f64),
    /// `price = "10"`
    Text(String),
}

impl std::fmt::Display for RawPrice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(s) => write!(f, "{s:?}"),
        }
    }
}

/// Serialization format of a catalog file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    /// TOML (default)
    Toml,
    /// JSON
    Json,
    /// YAML
    Yaml,
}

impl CatalogFormat {
    /// Pick the format from a path's extension
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Self::Yaml
            },
            _ => Self::Toml,
        }
    }
}

impl ItemEntry {
    /// Coerce the price and build an [`Item`]
    pub fn into_item(self) -> Result<Item, CatalogError> {
        let price = coerce_price(&self.name, &self.price)?;
        Ok(Item::new(self.name, price, self.hashtags, self.description))
    }
}

/// Coerce a raw price to a non-negative integer
///
/// Integers pass through, floats truncate toward zero and strings must hold
/// a base-10 integer.
#[allow(clippy::cast_possible_truncation)]
pub fn coerce_price(name: &str, raw: &RawPrice) -> Result<u64, CatalogError> {
    let invalid = || CatalogError::InvalidPrice {
        name: name.to_string(),
        value: raw.to_string(),
    };

    let price = match raw {
        RawPrice::Integer(n) => *n,
        RawPrice::Float(x) if x.is_finite() && x.abs() < 9.2e18 => x.trunc() as i64,
        RawPrice::Float(_) => return Err(invalid()),
        RawPrice::Text(s) => s.trim().parse::<i64>().map_err(|_| invalid())?,
    };

    u64::try_from(price).map_err(|_| CatalogError::NegativePrice {
        name: name.to_string(),
        price,
    })
}

/// Parse catalog text in the given format
pub fn parse_str(content: &str, format: CatalogFormat) -> anyhow::Result<CatalogFile> {
    let file = match format {
        CatalogFormat::Toml => toml::from_str(content)?,
        CatalogFormat::Json => serde_json::from_str(content)?,
        CatalogFormat::Yaml => serde_yaml::from_str(content)?,
    };
    Ok(file)
}

/// Load a catalog file
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_file(path: &Path) -> anyhow::Result<CatalogFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog {}", path.display()))?;
    parse_str(&content, CatalogFormat::from_path(path))
        .with_context(|| format!("failed to parse catalog {}", path.display()))
}

/// Convert every record into an item, in order
pub fn into_items(file: CatalogFile) -> Result<Vec<Item>, CatalogError> {
    file.items.into_iter().map(ItemEntry::into_item).collect()
}
