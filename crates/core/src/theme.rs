//! Light/dark theme preference

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::storage::KeyValueStore;

const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
    
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }
    
    pub fn toggle(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
    
    /// Saved preference, or the system preference when nothing valid is saved
    pub fn load(store: &impl KeyValueStore, prefers_dark: bool) -> Result<Self> {
        let saved = store.get(THEME_KEY)?.and_then(|v| Theme::parse(&v));
        Ok(saved.unwrap_or(if prefers_dark { Theme::Dark } else { Theme::Light }))
    }
    
    pub fn save(&self, store: &mut impl KeyValueStore) -> Result<()> {
        store.set(THEME_KEY, self.as_str())
    }
}
