//! # gamedex-types
//!
//! Core record types for the gamedex catalog.
//!
//! This crate provides the data model shared by the catalog and its callers:
//!
//! - **Record types**: [`game::Game`] and its nested pieces
//!   ([`game::Ratings`], [`game::Features`], [`game::Protagonist`])
//! - **Report types**: derived values returned by catalog queries
//!   ([`report::PlayerModeCount`], [`report::CompletionAverages`],
//!   [`report::CommonGenrePair`])
//!
//! All types are serializable with Serde and use the wire field names of the
//! original JSON data files (`IGN`, `minimumCompleteTime`, `singlePlayer`).
//!
//! ## Examples
//!
//! ```rust
//! use gamedex_types::game::Game;
//!
//! let game = Game::new("Starfall")
//!     .with_genres(["Action", "Adventure"])
//!     .with_ign_rating(9.3);
//!
//! assert!(game.has_genre("Action"));
//! ```

pub mod game;
pub mod report;
