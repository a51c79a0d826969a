//! Global configuration management
//!
//! User preferences are stored at `~/.storecart/config.toml`. Every key is
//! optional; a missing or broken file means defaults. A relative `catalog`
//! path is taken relative to the directory holding the config file.
//!
//! ```toml
//! catalog = "/srv/shop/catalog.toml"
//!
//! [ui]
//! prompt = "cart> "
//! color = false
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::paths;

/// Global storecart configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Catalog file used when neither the flag nor the environment names one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

/// UI preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Prompt shown by the interactive session
    #[serde(default = "default_prompt")]
    pub prompt: String,
    /// Colored human output
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_prompt() -> String {
    "> ".to_string()
}

const fn default_color() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            color: default_color(),
        }
    }
}

impl GlobalConfig {
    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load config from the default location, or defaults if absent
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load config from `path`, or defaults if absent or unreadable
    ///
    /// A relative `catalog` is joined onto the parent directory of `path`.
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(path)
            .map_err(anyhow::Error::from)
            .and_then(|content| toml::from_str::<Self>(&content).map_err(anyhow::Error::from))
        {
            Ok(config) => config.relative_to(path.parent().unwrap_or_else(|| Path::new(""))),
            Err(e) => {
                log::warn!("Ignoring config at {}: {e}", path.display());
                Self::default()
            },
        }
    }

    fn relative_to(mut self, dir: &Path) -> Self {
        self.catalog = self.catalog.map(|catalog| {
            if catalog.is_relative() && !catalog.as_os_str().is_empty() {
                dir.join(catalog)
            } else {
                catalog
            }
        });
        self
    }
}
