//! Pure query operations over game records.
//!
//! Every function here is a side-effect-free transformation of a borrowed
//! record slice into a derived value: no shared state, no suspension points,
//! nothing to clean up. [`crate::Catalog`] exposes the same operations as
//! methods; the free functions exist so callers can run one-off queries over
//! records they already hold without building a catalog first.

use crate::genre_index::GenreIndex;
use crate::types::{CommonGenrePair, CompletionAverages, PlayerModeCount};
use gamedex_types::game::Game;
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

/// Genre tag used by the protagonist convenience query.
pub const ACTION_GENRE: &str = "Action";

/// Titles whose IGN rating is strictly greater than `threshold`, in input
/// order.
///
/// Empty input or no matches yields an empty vector. A NaN threshold matches
/// nothing and is rejected up front.
///
/// # Examples
///
/// ```rust
/// use gamedex::Game;
/// use gamedex::query::titles_rated_above;
///
/// let games = [
///     Game::new("Starfall").with_ign_rating(9.3),
///     Game::new("Mooncrest").with_ign_rating(8.1),
/// ];
///
/// assert_eq!(titles_rated_above(&games, 9.0), ["Starfall"]);
/// assert!(titles_rated_above(&games, 10.0).is_empty());
/// ```
pub fn titles_rated_above(games: &[Game], threshold: f64) -> Vec<String> {
    if threshold.is_nan() {
        log::warn!("Rejecting rating query with NaN threshold");
        return Vec::new();
    }

    games
        .iter()
        .filter(|game| game.ratings.ign > threshold)
        .map(|game| game.title.clone())
        .collect()
}

/// Partition the records by online-multiplayer support.
///
/// The returned counts always sum to `games.len()`.
pub fn player_mode_count(games: &[Game]) -> PlayerModeCount {
    let mut count = PlayerModeCount::default();
    for game in games {
        if game.is_online_multiplayer() {
            count.multiplayer += 1;
        } else {
            count.single_player += 1;
        }
    }
    count
}

/// Mean minimum and maximum completion times over the games carrying
/// `genre` (case-sensitive exact match).
///
/// When no game matches, including empty input, both averages are exactly
/// `0.0` rather than NaN.
pub fn average_completion_time(games: &[Game], genre: &str) -> CompletionAverages {
    let mut matched = 0usize;
    let mut min_sum = 0.0f64;
    let mut max_sum = 0.0f64;

    for game in games.iter().filter(|game| game.has_genre(genre)) {
        matched += 1;
        min_sum += game.minimum_complete_time;
        max_sum += game.maximum_complete_time;
    }

    if matched == 0 {
        // Explicit zeros instead of 0.0 / 0.0.
        return CompletionAverages::default();
    }

    CompletionAverages {
        average_min: min_sum / matched as f64,
        average_max: max_sum / matched as f64,
    }
}

/// Protagonist names of the games carrying `genre`, in input order.
pub fn protagonists_in_genre(games: &[Game], genre: &str) -> Vec<String> {
    games
        .iter()
        .filter(|game| game.has_genre(genre))
        .map(|game| game.protagonist.name.clone())
        .collect()
}

/// Group titles under every genre they carry.
///
/// A game with N genres appears under N keys. Key order follows the first
/// genre encountered across the input scan; titles within a key follow game
/// input order.
pub fn titles_by_genre(games: &[Game]) -> GenreIndex {
    let mut index = GenreIndex::new();
    for game in games {
        for genre in &game.genres {
            index.push(genre, &game.title);
        }
    }
    index
}

/// All pairs of distinct games sharing at least `min_shared` genre tags.
///
/// Pairs are scanned in nested ascending input order, so every pair is
/// reported once with the earlier game as `game1`. The shared genres
/// preserve the order of the earlier game's genre list. Empty and singleton
/// inputs yield no pairs.
pub fn common_genre_pairs(games: &[Game], min_shared: usize) -> Vec<CommonGenrePair> {
    // Membership sets are built once per game; the pair scan itself is O(n^2).
    let genre_sets: Vec<FxHashSet<&str>> = games
        .iter()
        .map(|game| game.genres.iter().map(String::as_str).collect())
        .collect();

    let mut pairs = Vec::new();
    for (i, first) in games.iter().enumerate() {
        for (j, second) in games.iter().enumerate().skip(i + 1) {
            let shared: SmallVec<[&str; 4]> = first
                .genres
                .iter()
                .map(String::as_str)
                .filter(|genre| genre_sets[j].contains(genre))
                .collect();

            if shared.len() >= min_shared {
                pairs.push(CommonGenrePair {
                    game1: first.title.clone(),
                    game2: second.title.clone(),
                    common_genres: shared.iter().map(|genre| (*genre).to_owned()).collect(),
                });
            }
        }
    }
    pairs
}
