//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `catalog/` - catalog file parsing (TOML, JSON, YAML)

pub mod catalog;

pub use catalog::FileCatalog;
