//! Command implementations

mod catalog;
mod checkout;
mod config;
mod shop;

use std::path::PathBuf;

use anyhow::Context as _;
use storecart::adapters::FileCatalog;
use storecart::config::GlobalConfig;
use storecart::core::Store;
use storecart::output::OutputMode;
use storecart::paths::{self, ResolvedCatalog};

pub use catalog::{items, search, tag};
pub use checkout::checkout;
pub use config::config;
pub use shop::shop;

/// Settings shared by every command
#[derive(Debug)]
pub struct Context {
    /// `--catalog` flag, if given
    pub catalog: Option<PathBuf>,
    /// User config
    pub config: GlobalConfig,
    /// Output mode
    pub mode: OutputMode,
}

impl Context {
    /// Resolve which catalog file to use
    pub fn resolve_catalog(&self) -> ResolvedCatalog {
        paths::resolve_catalog(self.catalog.as_deref(), self.config.catalog.as_deref())
    }

    /// Load the catalog and build a store with an empty cart
    pub fn open_store(&self) -> anyhow::Result<Store> {
        let resolved = self.resolve_catalog();
        log::debug!("Using catalog {} ({})", resolved.path.display(), resolved.origin);

        let source = FileCatalog::new(resolved.path);
        Store::from_source(&source)
            .with_context(|| format!("could not load catalog from {}", source.path().display()))
    }
}
