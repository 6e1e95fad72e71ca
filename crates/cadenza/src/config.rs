//! User configuration, read once at startup.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

/// Default config location relative to the working directory.
pub const DEFAULT_PATH: &str = "locals/conf.toml";

fn default_map_dir() -> PathBuf {
    PathBuf::from("maps")
}

/// User-tunable settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Directory scanned for map folders.
    #[serde(default = "default_map_dir")]
    pub map_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self { map_dir: default_map_dir() }
    }
}

impl Config {
    /// Loads the config from [`DEFAULT_PATH`].
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(Path::new(DEFAULT_PATH))
    }

    /// Loads the config from a specific path.
    ///
    /// A missing or malformed file falls back to the defaults; the game must
    /// still reach the menu, so this never fails.
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(error) => {
                info!(?path, %error, "no config file, using defaults");
                return Self::default();
            }
        };

        match toml::from_str(&raw) {
            Ok(config) => {
                info!(?path, "config loaded");
                config
            }
            Err(error) => {
                warn!(?path, %error, "malformed config, using defaults");
                Self::default()
            }
        }
    }
}
