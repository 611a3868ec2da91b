use serde::{Deserialize, Serialize};

/// A single video-game record.
///
/// Records are read-only inputs: the catalog never creates, mutates, or
/// destroys them. Field names on the wire follow the JSON data files this
/// model was built for, so a record round-trips through `serde_json`
/// unchanged.
///
/// # Examples
///
/// ```
/// use gamedex_types::game::Game;
///
/// let game = Game::new("Starfall")
///     .with_genres(["Action", "Adventure"])
///     .with_ign_rating(9.3)
///     .with_online_multiplayer(true)
///     .with_completion_times(1200.0, 2400.0)
///     .with_protagonist("Mira");
///
/// assert!(game.has_genre("Adventure"));
/// assert!(game.is_online_multiplayer());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    /// Display title, unique within a collection by convention.
    pub title: String,
    /// Genre tags in first-seen/display order. A game may carry several.
    pub genres: Vec<String>,
    pub ratings: Ratings,
    pub features: Features,
    /// Shortest completion time in minutes.
    pub minimum_complete_time: f64,
    /// Longest completion time in minutes.
    pub maximum_complete_time: f64,
    pub protagonist: Protagonist,
}

impl Game {
    /// Create a record with the given title and neutral defaults for every
    /// other field.
    pub fn new<S: Into<String>>(title: S) -> Self {
        Self {
            title: title.into(),
            genres: Vec::new(),
            ratings: Ratings::default(),
            features: Features::default(),
            minimum_complete_time: 0.0,
            maximum_complete_time: 0.0,
            protagonist: Protagonist::default(),
        }
    }

    /// Replace the genre list.
    pub fn with_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres = genres.into_iter().map(Into::into).collect();
        self
    }

    /// Set the IGN review score.
    pub fn with_ign_rating(mut self, rating: f64) -> Self {
        self.ratings.ign = rating;
        self
    }

    /// Set the online-multiplayer flag.
    pub fn with_online_multiplayer(mut self, online: bool) -> Self {
        self.features.multiplayer.online = online;
        self
    }

    /// Set the minimum and maximum completion times in minutes.
    pub fn with_completion_times(mut self, minimum: f64, maximum: f64) -> Self {
        self.minimum_complete_time = minimum;
        self.maximum_complete_time = maximum;
        self
    }

    /// Set the protagonist name.
    pub fn with_protagonist<S: Into<String>>(mut self, name: S) -> Self {
        self.protagonist.name = name.into();
        self
    }

    /// Whether this game carries the given genre tag (case-sensitive exact
    /// match).
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }

    /// Whether this game supports online multiplayer.
    pub fn is_online_multiplayer(&self) -> bool {
        self.features.multiplayer.online
    }
}

/// Review scores attached to a game.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Ratings {
    /// IGN review score. Serialized as `"IGN"` on the wire.
    #[serde(rename = "IGN")]
    pub ign: f64,
}

/// Feature flags attached to a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Features {
    pub multiplayer: MultiplayerModes,
}

/// Multiplayer capabilities of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MultiplayerModes {
    /// Whether the game supports online play.
    pub online: bool,
}

/// The named lead character of a game.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Protagonist {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_style_construction() {
        let game = Game::new("Starfall")
            .with_genres(["Action", "Adventure"])
            .with_ign_rating(9.3)
            .with_online_multiplayer(true)
            .with_completion_times(1200.0, 2400.0)
            .with_protagonist("Mira");

        assert_eq!(game.title, "Starfall");
        assert_eq!(game.genres, ["Action", "Adventure"]);
        assert_eq!(game.ratings.ign, 9.3);
        assert!(game.is_online_multiplayer());
        assert_eq!(game.minimum_complete_time, 1200.0);
        assert_eq!(game.maximum_complete_time, 2400.0);
        assert_eq!(game.protagonist.name, "Mira");
    }

    #[test]
    fn test_has_genre_is_case_sensitive() {
        let game = Game::new("Starfall").with_genres(["Action"]);

        assert!(game.has_genre("Action"));
        assert!(!game.has_genre("action"));
        assert!(!game.has_genre("Adventure"));
    }

    #[test]
    fn test_wire_field_names() {
        let game = Game::new("Starfall")
            .with_genres(["Action"])
            .with_ign_rating(9.0)
            .with_completion_times(100.0, 200.0);

        let json = serde_json::to_value(&game).unwrap();
        assert_eq!(json["ratings"]["IGN"], 9.0);
        assert_eq!(json["minimumCompleteTime"], 100.0);
        assert_eq!(json["maximumCompleteTime"], 200.0);
        assert_eq!(json["features"]["multiplayer"]["online"], false);
    }

    #[test]
    fn test_record_round_trip() {
        let json = r#"{
            "title": "Starfall",
            "genres": ["Action", "Adventure"],
            "ratings": { "IGN": 9.3 },
            "features": { "multiplayer": { "online": true } },
            "minimumCompleteTime": 1200,
            "maximumCompleteTime": 2400,
            "protagonist": { "name": "Mira" }
        }"#;

        let game: Game = serde_json::from_str(json).unwrap();
        assert_eq!(game.title, "Starfall");
        assert!(game.is_online_multiplayer());

        let back = serde_json::to_string(&game).unwrap();
        let again: Game = serde_json::from_str(&back).unwrap();
        assert_eq!(game, again);
    }
}
