//! Core catalog implementation for gamedex.
//!
//! This module defines the main [`Catalog`] type: an immutable, in-memory
//! collection of game records together with the typed query operations that
//! power the public API.

use crate::builder::CatalogBuilder;
use crate::error::Result;
use crate::genre_index::GenreIndex;
use crate::loader;
use crate::query;
use crate::types::{CatalogStats, CommonGenrePair, CompletionAverages, Config, PlayerModeCount};
use gamedex_types::game::Game;
use rustc_hash::FxHashSet;
use std::path::Path;

/// An immutable, in-memory collection of game records with typed query
/// operations.
///
/// The catalog owns the records it is given and never mutates them; every
/// query is a pure transformation into a derived value. Records arrive via
/// explicit construction or loading, not a process-wide singleton, so two
/// catalogs with different data can coexist in one process.
///
/// # Examples
///
/// ## Basic usage
/// ```rust
/// use gamedex::{Catalog, Game};
///
/// let catalog = Catalog::from_games(vec![
///     Game::new("Starfall")
///         .with_genres(["Action", "Adventure"])
///         .with_ign_rating(9.3),
///     Game::new("Mooncrest")
///         .with_genres(["RPG"])
///         .with_ign_rating(8.1),
/// ]);
///
/// assert_eq!(catalog.titles_rated_above(9.0), ["Starfall"]);
/// assert_eq!(catalog.player_mode_count().total(), 2);
/// ```
///
/// ## Loading from a JSON data file
/// ```rust,no_run
/// use gamedex::Catalog;
///
/// let catalog = Catalog::from_json_file("data/games.json")?;
/// println!("{} games loaded", catalog.len());
/// # Ok::<(), gamedex::GamedexError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Catalog {
    games: Vec<Game>,
    config: Config,
}

impl Catalog {
    /// Build a catalog from already-parsed records with the default
    /// configuration.
    pub fn from_games(games: Vec<Game>) -> Self {
        Self::from_games_with_config(games, Config::default())
    }

    /// Build a catalog from already-parsed records with a custom
    /// configuration.
    pub fn from_games_with_config(games: Vec<Game>, config: Config) -> Self {
        log::debug!("catalog created with {} game records", games.len());
        Self { games, config }
    }

    /// Parse a catalog from a JSON array of game records.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gamedex::Catalog;
    ///
    /// let catalog = Catalog::from_json_str("[]")?;
    /// assert!(catalog.is_empty());
    /// # Ok::<(), gamedex::GamedexError>(())
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(Self::from_games(loader::games_from_json_str(json)?))
    }

    /// Load a catalog from a JSON data file on disk.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::from_games(loader::games_from_json_file(path)?))
    }

    /// Create a catalog builder for advanced construction.
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::new()
    }

    /// The records backing this catalog, in input order.
    pub fn games(&self) -> &[Game] {
        &self.games
    }

    /// Number of records in the catalog.
    pub fn len(&self) -> usize {
        self.games.len()
    }

    /// Whether the catalog holds no records.
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// The configuration this catalog queries with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Derived statistics over the whole catalog.
    pub fn stats(&self) -> CatalogStats {
        let distinct: FxHashSet<&str> = self
            .games
            .iter()
            .flat_map(|game| game.genres.iter().map(String::as_str))
            .collect();

        CatalogStats {
            game_count: self.games.len(),
            distinct_genre_count: distinct.len(),
            online_multiplayer_count: self
                .games
                .iter()
                .filter(|game| game.is_online_multiplayer())
                .count(),
        }
    }

    /// Titles whose IGN rating is strictly greater than `threshold`, in
    /// input order.
    pub fn titles_rated_above(&self, threshold: f64) -> Vec<String> {
        query::titles_rated_above(&self.games, threshold)
    }

    /// Partition of the catalog by online-multiplayer support.
    pub fn player_mode_count(&self) -> PlayerModeCount {
        query::player_mode_count(&self.games)
    }

    /// Mean completion times over the games carrying `genre`; zeros when no
    /// game matches.
    pub fn average_completion_time(&self, genre: &str) -> CompletionAverages {
        query::average_completion_time(&self.games, genre)
    }

    /// Protagonist names of the games carrying `genre`, in input order.
    pub fn protagonists_in_genre(&self, genre: &str) -> Vec<String> {
        query::protagonists_in_genre(&self.games, genre)
    }

    /// Protagonist names of the `"Action"` games, in input order.
    ///
    /// Equivalent to `protagonists_in_genre("Action")`; multiplayer support
    /// plays no part in the filter.
    pub fn action_protagonists(&self) -> Vec<String> {
        query::protagonists_in_genre(&self.games, query::ACTION_GENRE)
    }

    /// Insertion-ordered mapping from genre to the titles carrying it.
    pub fn titles_by_genre(&self) -> GenreIndex {
        query::titles_by_genre(&self.games)
    }

    /// All pairs of games sharing at least `config.min_shared_genres` genre
    /// tags (default: more than one), in nested ascending input order.
    pub fn common_genre_pairs(&self) -> Vec<CommonGenrePair> {
        query::common_genre_pairs(&self.games, self.config.min_shared_genres)
    }
}
