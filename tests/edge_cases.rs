use gamedex::{Catalog, Game, GamedexError};
use std::io::Write;

/// Test 1: every query on an empty catalog returns its neutral value
#[test]
fn test_empty_catalog() {
    let catalog = Catalog::from_games(Vec::new());

    assert!(catalog.titles_rated_above(0.0).is_empty());
    assert_eq!(catalog.player_mode_count().total(), 0);

    let averages = catalog.average_completion_time("Action");
    assert_eq!(averages.average_min, 0.0);
    assert_eq!(averages.average_max, 0.0);

    assert!(catalog.action_protagonists().is_empty());
    assert!(catalog.titles_by_genre().is_empty());
    assert!(catalog.common_genre_pairs().is_empty());
    assert_eq!(catalog.stats().distinct_genre_count, 0);
}

/// Test 2: a single game can never form a pair
#[test]
fn test_singleton_catalog_has_no_pairs() {
    let catalog = Catalog::from_games(vec![
        Game::new("Solo").with_genres(["Action", "Adventure", "Fantasy"]),
    ]);

    assert!(catalog.common_genre_pairs().is_empty());
    assert_eq!(catalog.titles_by_genre().len(), 3);
}

/// Test 3: non-finite rating thresholds
#[test]
fn test_non_finite_thresholds() {
    let catalog = Catalog::from_games(vec![
        Game::new("Starfall").with_ign_rating(9.0),
        Game::new("Mooncrest").with_ign_rating(8.0),
    ]);

    assert!(catalog.titles_rated_above(f64::NAN).is_empty());
    assert!(catalog.titles_rated_above(f64::INFINITY).is_empty());
    // Everything beats negative infinity.
    assert_eq!(catalog.titles_rated_above(f64::NEG_INFINITY).len(), 2);
}

/// Test 4: games without genres contribute nothing to genre queries
#[test]
fn test_games_without_genres() {
    let catalog = Catalog::from_games(vec![
        Game::new("Untagged").with_ign_rating(9.9).with_protagonist("Nix"),
        Game::new("Tagged").with_genres(["Action"]).with_protagonist("Mira"),
    ]);

    assert!(catalog.titles_by_genre().get("Untagged").is_none());
    assert_eq!(catalog.titles_by_genre().len(), 1);
    assert_eq!(catalog.action_protagonists(), ["Mira"]);
    assert!(catalog.common_genre_pairs().is_empty());
    // Rating queries still see the untagged game.
    assert_eq!(catalog.titles_rated_above(9.5), ["Untagged"]);
}

/// Test 5: duplicate titles are tolerated, not deduplicated
#[test]
fn test_duplicate_titles_pass_through() {
    let catalog = Catalog::from_games(vec![
        Game::new("Twin").with_genres(["Action", "Adventure"]),
        Game::new("Twin").with_genres(["Action", "Adventure"]),
    ]);

    let pairs = catalog.common_genre_pairs();
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].game1, "Twin");
    assert_eq!(pairs[0].game2, "Twin");

    assert_eq!(catalog.titles_by_genre().get("Action").unwrap(), ["Twin", "Twin"]);
}

/// Test 6: a larger synthetic catalog keeps the pair scan well-behaved
#[test]
fn test_synthetic_catalog_pair_scan() {
    let genre_pool = ["Action", "Adventure", "Puzzle", "Racing", "Strategy"];
    let games: Vec<Game> = (0..200)
        .map(|i| {
            Game::new(format!("Game {i}"))
                .with_genres([genre_pool[i % 5], genre_pool[(i + 1) % 5]])
                .with_ign_rating((i % 100) as f64 / 10.0)
        })
        .collect();
    let catalog = Catalog::from_games(games);

    let pairs = catalog.common_genre_pairs();
    // Games i and j share both genres exactly when i == j (mod 5), which
    // gives C(40, 2) pairs per residue class.
    assert_eq!(pairs.len(), 5 * (40 * 39) / 2);
    assert_eq!(catalog.player_mode_count().total(), 200);
}

/// Test 7: loading failures carry the underlying error kind
#[test]
fn test_loader_error_kinds() {
    let missing = Catalog::from_json_file("/definitely/not/here/games.json");
    assert!(matches!(missing, Err(GamedexError::Io(_))));

    let malformed = Catalog::from_json_str("{ not a json array }");
    assert!(matches!(malformed, Err(GamedexError::Json(_))));

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "[[]]").unwrap();
    let wrong_shape = Catalog::from_json_file(file.path());
    assert!(matches!(wrong_shape, Err(GamedexError::Json(_))));
}

/// Test 8: builder surface composes with inline records
#[test]
fn test_builder_inline_records() {
    let catalog = Catalog::builder()
        .games(vec![
            Game::new("Starfall").with_genres(["Action", "Adventure"]),
            Game::new("Mooncrest").with_genres(["Adventure", "Action"]),
        ])
        .build()
        .unwrap();

    let pairs = catalog.common_genre_pairs();
    assert_eq!(pairs.len(), 1);
    // Intersection order follows the first game's genre list.
    assert_eq!(pairs[0].common_genres, ["Action", "Adventure"]);
}
