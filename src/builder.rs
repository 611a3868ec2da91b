//! Catalog builder for flexible construction.
//!
//! This module provides a builder pattern for creating catalogs from staged
//! records or a JSON data file, with optional configuration overrides.

use crate::catalog::Catalog;
use crate::error::{GamedexError, Result};
use crate::loader;
use crate::types::Config;
use gamedex_types::game::Game;
use std::path::PathBuf;

/// Builder for catalog construction with staged records, data-file loading,
/// and configuration.
///
/// # Examples
///
/// ```rust
/// use gamedex::{Catalog, Config, Game};
///
/// let catalog = Catalog::builder()
///     .game(Game::new("Starfall").with_genres(["Action", "Adventure"]))
///     .game(Game::new("Mooncrest").with_genres(["RPG"]))
///     .config(Config::default().with_min_shared_genres(2))
///     .build()?;
///
/// assert_eq!(catalog.len(), 2);
/// # Ok::<(), gamedex::GamedexError>(())
/// ```
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    games: Vec<Game>,
    json_path: Option<PathBuf>,
    config: Config,
}

impl CatalogBuilder {
    /// Create a new builder with no records and the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the staged records. Clears any configured data-file path.
    pub fn games(mut self, games: Vec<Game>) -> Self {
        self.games = games;
        self.json_path = None;
        self
    }

    /// Stage a single record.
    pub fn game(mut self, game: Game) -> Self {
        self.games.push(game);
        self
    }

    /// Load records from a JSON data file at build time. Clears any staged
    /// records.
    pub fn json_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.json_path = Some(path.into());
        self.games.clear();
        self
    }

    /// Set the catalog configuration.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Build the catalog. Reads the data file if one was configured and
    /// validates the configuration.
    pub fn build(self) -> Result<Catalog> {
        self.config
            .validate()
            .map_err(GamedexError::InvalidConfig)?;

        let games = match self.json_path {
            Some(path) => loader::games_from_json_file(path)?,
            None => self.games,
        };

        Ok(Catalog::from_games_with_config(games, self.config))
    }
}
