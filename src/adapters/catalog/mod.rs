//! File-based catalog loading
//!
//! Implements `CatalogSource` using TOML, JSON or YAML catalog files.
//!
//! - [`parser`] - Read and deserialize catalog files, coerce prices
//! - [`repository`] - `CatalogSource` implementation

pub mod parser;
pub mod repository;

pub use parser::{
    CatalogFile, CatalogFormat, ItemEntry, RawPrice, coerce_price, into_items, load_file,
    parse_str,
};
pub use repository::FileCatalog;
