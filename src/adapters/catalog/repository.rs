//! File-backed catalog source
//!
//! Implements the `CatalogSource` port trait over a TOML, JSON or YAML file.

use std::path::{Path, PathBuf};

use crate::core::models::Item;
use crate::core::ports::CatalogSource;

use super::parser::{into_items, load_file};

/// Catalog source backed by a single file
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    /// Create a source for the given catalog file
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the catalog file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for FileCatalog {
    fn load(&self) -> anyhow::Result<Vec<Item>> {
        let file = load_file(&self.path)?;
        let items = into_items(file)?;
        log::debug!("Parsed {} record(s) from {}", items.len(), self.path.display());
        Ok(items)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
