//! Server configuration from config.toml with environment overrides

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tapthegame_core::SECTION_CAP;

const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Address the HTTP server binds to
    pub bind_address: String,

    /// Catalog JSON to serve instead of the built-in one
    pub catalog_path: Option<PathBuf>,

    /// File holding submitted reviews
    pub reviews_path: PathBuf,

    /// Games per landing page section
    pub section_cap: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            catalog_path: None,
            reviews_path: PathBuf::from("reviews.json"),
            section_cap: SECTION_CAP,
        }
    }
}

impl Config {
    /// Load from `TAPTHEGAME_CONFIG` (default config.toml), then apply env overrides
    pub fn load() -> Self {
        let path = std::env::var("TAPTHEGAME_CONFIG")
            .unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let mut config = Self::load_file(Path::new(&path));
        config.apply_env();
        config
    }

    /// Parse a config file; a missing or unreadable file yields the defaults
    pub fn load_file(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Config::default();
        }
        match fs::read_to_string(path) {
            Ok(content) => match Self::parse(&content) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("Error parsing {}: {}", path.display(), e);
                    Config::default()
                }
            },
            Err(e) => {
                tracing::warn!("Error reading {}: {}", path.display(), e);
                Config::default()
            }
        }
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    fn apply_env(&mut self) {
        if let Ok(addr) = std::env::var("BIND_ADDRESS") {
            self.bind_address = addr;
        }
        if let Ok(path) = std::env::var("CATALOG_PATH") {
            self.catalog_path = Some(PathBuf::from(path));
        }
        if let Ok(path) = std::env::var("REVIEWS_PATH") {
            self.reviews_path = PathBuf::from(path);
        }
    }
}
