//! Minimal tour of the catalog API with inline records.
//!
//! Run with: cargo run --example getting_started

use gamedex::{Catalog, Game, Result};

fn main() -> Result<()> {
    env_logger::init();

    let catalog = Catalog::from_games(vec![
        Game::new("Starfall")
            .with_genres(["Action", "Adventure"])
            .with_ign_rating(9.3)
            .with_online_multiplayer(true)
            .with_completion_times(1200.0, 2400.0)
            .with_protagonist("Mira"),
        Game::new("Mooncrest")
            .with_genres(["Adventure", "RPG"])
            .with_ign_rating(8.6)
            .with_completion_times(3000.0, 5400.0)
            .with_protagonist("Tal"),
        Game::new("Dustline")
            .with_genres(["Racing", "Action"])
            .with_ign_rating(9.0)
            .with_online_multiplayer(true)
            .with_completion_times(500.0, 900.0)
            .with_protagonist("Juno"),
    ]);

    println!("Catalog holds {} games", catalog.len());

    let high_rated = catalog.titles_rated_above(9.0);
    println!("Rated above 9.0: {high_rated:?}");

    let count = catalog.player_mode_count();
    println!(
        "{} online multiplayer, {} single player",
        count.multiplayer, count.single_player
    );

    let averages = catalog.average_completion_time("Adventure");
    println!(
        "Adventure games average {:.0} to {:.0} minutes",
        averages.average_min, averages.average_max
    );

    println!("Action protagonists: {:?}", catalog.action_protagonists());

    Ok(())
}
