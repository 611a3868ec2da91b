//! Every query operation exercised against the bundled ten-game data set.
//!
//! Run with: cargo run --example catalog_queries

use gamedex::{Catalog, Result};

const GAMES_JSON: &str = include_str!("../tests/data/games.json");

fn main() -> Result<()> {
    env_logger::init();

    let catalog = Catalog::from_json_str(GAMES_JSON)?;
    let stats = catalog.stats();
    println!(
        "{} games, {} distinct genres, {} with online multiplayer",
        stats.game_count, stats.distinct_genre_count, stats.online_multiplayer_count
    );

    println!("\nRated above 9.5:");
    for title in catalog.titles_rated_above(9.5) {
        println!("  {title}");
    }

    let averages = catalog.average_completion_time("Action");
    println!(
        "\nAction completion averages: {:.1} to {:.1} minutes",
        averages.average_min, averages.average_max
    );

    println!("\nTitles by genre:");
    for (genre, titles) in catalog.titles_by_genre().iter() {
        println!("  {genre}: {}", titles.join(", "));
    }

    println!("\nPairs sharing more than one genre:");
    for pair in catalog.common_genre_pairs() {
        println!(
            "  {} / {} share {}",
            pair.game1,
            pair.game2,
            pair.common_genres.join(", ")
        );
    }

    Ok(())
}
