//! Centralized path definitions for storecart
//!
//! This module provides a single source of truth for the files storecart
//! reads: the catalog and the user-level config.
//!
//! ## Layout
//!
//! ```text
//! ./catalog.toml                # Default catalog (current directory)
//! ~/.storecart/
//! └── config.toml               # User preferences, default catalog path
//! ```
//!
//! ## Catalog resolution
//!
//! The first of these wins:
//! 1. `--catalog <PATH>` on the command line
//! 2. the `STORECART_CATALOG` environment variable
//! 3. `catalog = "..."` in `~/.storecart/config.toml` (relative to that directory)
//! 4. `./catalog.toml`

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Default catalog filename, looked up in the current directory
pub const CATALOG_FILE: &str = "catalog.toml";

/// Environment variable naming the catalog file
pub const CATALOG_ENV: &str = "STORECART_CATALOG";

/// Global config directory name
const GLOBAL_DIR: &str = ".storecart";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the global storecart directory.
///
/// Returns `~/.storecart/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.storecart/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}

/// Where the catalog path came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogOrigin {
    /// `--catalog` flag
    Flag,
    /// `STORECART_CATALOG`
    Environment,
    /// User config file
    Config,
    /// `./catalog.toml`
    Default,
}

impl std::fmt::Display for CatalogOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flag => write!(f, "--catalog flag"),
            Self::Environment => write!(f, "{CATALOG_ENV}"),
            Self::Config => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

/// A resolved catalog path and its origin
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedCatalog {
    /// Path to the catalog file
    pub path: PathBuf,
    /// Which setting supplied it
    pub origin: CatalogOrigin,
}

/// Resolve the catalog path from explicit inputs
///
/// Empty values are treated as unset.
#[must_use]
pub fn resolve_catalog_with(
    flag: Option<&Path>,
    env: Option<OsString>,
    config: Option<&Path>,
) -> ResolvedCatalog {
    if let Some(path) = flag.filter(|p| !p.as_os_str().is_empty()) {
        return ResolvedCatalog {
            path: path.to_path_buf(),
            origin: CatalogOrigin::Flag,
        };
    }
    if let Some(value) = env.filter(|v| !v.is_empty()) {
        return ResolvedCatalog {
            path: PathBuf::from(value),
            origin: CatalogOrigin::Environment,
        };
    }
    if let Some(path) = config.filter(|p| !p.as_os_str().is_empty()) {
        return ResolvedCatalog {
            path: path.to_path_buf(),
            origin: CatalogOrigin::Config,
        };
    }
    ResolvedCatalog {
        path: PathBuf::from(CATALOG_FILE),
        origin: CatalogOrigin::Default,
    }
}

/// Resolve the catalog path, reading `STORECART_CATALOG` from the environment
#[must_use]
pub fn resolve_catalog(flag: Option<&Path>, config: Option<&Path>) -> ResolvedCatalog {
    resolve_catalog_with(flag, std::env::var_os(CATALOG_ENV), config)
}
