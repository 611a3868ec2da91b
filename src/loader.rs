//! JSON data-file loading.
//!
//! Record collections typically live in a static JSON data file. This module
//! turns such a file into `Vec<Game>` with explicit error reporting, so the
//! parsed collection is passed into the catalog as a plain value instead of
//! being imported as a module-level singleton.

use crate::error::Result;
use gamedex_types::game::Game;
use std::fs;
use std::path::Path;

/// Parse game records from a JSON array string.
///
/// # Examples
///
/// ```rust
/// let games = gamedex::loader::games_from_json_str("[]")?;
/// assert!(games.is_empty());
/// # Ok::<(), gamedex::GamedexError>(())
/// ```
pub fn games_from_json_str(json: &str) -> Result<Vec<Game>> {
    let games: Vec<Game> = serde_json::from_str(json)?;
    Ok(games)
}

/// Read and parse game records from a JSON file on disk.
pub fn games_from_json_file<P: AsRef<Path>>(path: P) -> Result<Vec<Game>> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)?;
    let games = games_from_json_str(&raw)?;
    log::info!("loaded {} game records from {}", games.len(), path.display());
    Ok(games)
}
