//! Insertion-ordered mapping from genre to game titles.

use rustc_hash::FxHashMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Mapping from genre name to the titles carrying that genre.
///
/// Key order follows the first time each genre was encountered while
/// scanning the input; titles within a genre follow game input order.
/// Lookups go through a hash index kept alongside the ordered entries, so
/// `get` is O(1) while iteration stays deterministic.
///
/// Serializing produces a JSON object whose keys appear in first-seen order.
///
/// # Examples
///
/// ```rust
/// use gamedex::{Catalog, Game};
///
/// let catalog = Catalog::from_games(vec![
///     Game::new("Starfall").with_genres(["Action", "Adventure"]),
///     Game::new("Mooncrest").with_genres(["Adventure"]),
/// ]);
///
/// let index = catalog.titles_by_genre();
/// assert_eq!(index.genres().collect::<Vec<_>>(), ["Action", "Adventure"]);
/// assert_eq!(
///     index.get("Adventure"),
///     Some(&["Starfall".to_string(), "Mooncrest".to_string()][..])
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct GenreIndex {
    entries: Vec<(String, Vec<String>)>,
    positions: FxHashMap<String, usize>,
}

impl GenreIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `title` under `genre`, registering the genre on first sight.
    pub(crate) fn push(&mut self, genre: &str, title: &str) {
        match self.positions.get(genre) {
            Some(&idx) => self.entries[idx].1.push(title.to_owned()),
            None => {
                self.positions.insert(genre.to_owned(), self.entries.len());
                self.entries.push((genre.to_owned(), vec![title.to_owned()]));
            }
        }
    }

    /// Titles under the given genre, in game input order.
    pub fn get(&self, genre: &str) -> Option<&[String]> {
        self.positions
            .get(genre)
            .map(|&idx| self.entries[idx].1.as_slice())
    }

    /// Whether any game carries the given genre.
    pub fn contains_genre(&self, genre: &str) -> bool {
        self.positions.contains_key(genre)
    }

    /// Genre names in first-seen order.
    pub fn genres(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(genre, _)| genre.as_str())
    }

    /// `(genre, titles)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(genre, titles)| (genre.as_str(), titles.as_slice()))
    }

    /// Number of distinct genres in the index.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index holds no genres at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PartialEq for GenreIndex {
    fn eq(&self, other: &Self) -> bool {
        // The hash index is derived state; entry order and content decide
        // equality.
        self.entries == other.entries
    }
}

impl Serialize for GenreIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (genre, titles) in &self.entries {
            map.serialize_entry(genre, titles)?;
        }
        map.end()
    }
}
