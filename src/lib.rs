//! Embedded in-memory video-game catalog with typed query operations.
//!
//! ```rust
//! use gamedex::{Catalog, Game};
//!
//! let catalog = Catalog::from_games(vec![
//!     Game::new("Starfall")
//!         .with_genres(["Action", "Adventure"])
//!         .with_ign_rating(9.3),
//!     Game::new("Mooncrest")
//!         .with_genres(["RPG"])
//!         .with_ign_rating(8.1),
//! ]);
//!
//! assert_eq!(catalog.titles_rated_above(9.0), ["Starfall"]);
//! ```

pub mod builder;
pub mod catalog;
pub mod error;
pub mod genre_index;
pub mod loader;
pub mod query;
pub mod types;

pub use builder::CatalogBuilder;
pub use catalog::Catalog;
pub use error::{GamedexError, Result};
pub use genre_index::GenreIndex;

pub use types::{CatalogStats, CommonGenrePair, CompletionAverages, Config, PlayerModeCount};

pub use gamedex_types::game::{Features, Game, MultiplayerModes, Protagonist, Ratings};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {

    pub use crate::{Catalog, CatalogBuilder, GamedexError, Result};

    pub use crate::{CatalogStats, Config};

    pub use crate::{CommonGenrePair, CompletionAverages, GenreIndex, PlayerModeCount};

    pub use gamedex_types::game::{Game, Protagonist};
}
