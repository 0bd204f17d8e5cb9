//! Configuration to acknowledge developer preferences as well as set defaults.
//!
//! Specifically, we try to find a pilcrow.toml, and if present we load
//! settings from there. This provides file extension and output preferences.

use facet::Facet;
use std::fs;

#[derive(Facet, Clone)]
/// User preferences loaded from pilcrow.toml or falling back to defaults.
pub struct Config {
    #[facet(default = vec!["md".to_string()])]
    /// File suffixes to match when scanning directories.
    pub file_extensions: Vec<String>,
    #[facet(default = false)]
    /// Emit problems as pretty-printed JSON instead of text lines.
    pub json: bool,
}

impl Config {
    #[must_use]
    /// Load configuration from pilcrow.toml if present.
    ///
    /// # Panics
    ///
    /// Panics if the default configuration cannot be parsed.
    pub fn load() -> Self {
        if let Ok(contents) = fs::read_to_string("pilcrow.toml") {
            if let Ok(config) = facet_toml::from_str::<Self>(&contents) {
                return config;
            }
        }
        facet_toml::from_str::<Self>("").unwrap()
    }
}
