//! Configuration and derived-statistics types for gamedex.
//!
//! The record model itself lives in the `gamedex-types` crate; this module
//! holds the catalog-side configuration plus the statistics snapshot, and
//! re-exports the query report types so crate-internal code can reach
//! everything through one path.

use serde::de::Error;
use serde::{Deserialize, Serialize};

pub use gamedex_types::report::{CommonGenrePair, CompletionAverages, PlayerModeCount};

/// Catalog configuration.
///
/// Designed to be easily serializable and loadable from JSON or TOML while
/// keeping complexity minimal. The default configuration reproduces the
/// reference query semantics exactly.
///
/// # Example
///
/// ```rust
/// use gamedex::Config;
///
/// // Create default config
/// let config = Config::default();
/// assert_eq!(config.min_shared_genres, 2);
///
/// // Load from JSON
/// let config = Config::from_json(r#"{ "min_shared_genres": 3 }"#).unwrap();
/// assert_eq!(config.min_shared_genres, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Minimum number of shared genre tags for two games to be reported as
    /// a common-genre pair. The default of 2 matches the "more than one
    /// common genre" rule.
    #[serde(default = "Config::default_min_shared_genres")]
    pub min_shared_genres: usize,
}

impl Config {
    const fn default_min_shared_genres() -> usize {
        2
    }

    /// Adjust the common-genre pair threshold.
    pub fn with_min_shared_genres(mut self, min_shared_genres: usize) -> Self {
        self.min_shared_genres = min_shared_genres;
        self
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if self.min_shared_genres == 0 {
            // Every pair trivially shares zero genres.
            return Err("min_shared_genres must be greater than zero".to_string());
        }
        Ok(())
    }

    /// Load configuration from JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: Config = serde_json::from_str(json)?;
        if let Err(e) = config.validate() {
            return Err(Error::custom(e));
        }
        Ok(config)
    }

    /// Save configuration as JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load configuration from TOML string (requires toml feature).
    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let config: Config = toml::from_str(toml_str)?;
        if let Err(e) = config.validate() {
            return Err(toml::de::Error::custom(e));
        }
        Ok(config)
    }

    /// Save configuration as TOML string (requires toml feature).
    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_shared_genres: Self::default_min_shared_genres(),
        }
    }
}

/// Derived statistics over a whole catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CatalogStats {
    /// Number of game records in the catalog.
    pub game_count: usize,
    /// Number of distinct genre tags across all records.
    pub distinct_genre_count: usize,
    /// Number of records with online multiplayer support.
    pub online_multiplayer_count: usize,
}
