use serde::{Deserialize, Serialize};

/// Partition of a catalog by online-multiplayer support.
///
/// The two counts always sum to the number of records the query saw.
/// Serializes as `{"multiplayer": n, "singlePlayer": m}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerModeCount {
    pub multiplayer: usize,
    pub single_player: usize,
}

impl PlayerModeCount {
    /// Total number of records counted.
    pub fn total(&self) -> usize {
        self.multiplayer + self.single_player
    }
}

/// Mean completion times over the games matching a genre query.
///
/// Both fields are exactly `0.0` when no game matched; the division by zero
/// is special-cased away rather than surfacing NaN. Serializes as
/// `{"averageMin": x, "averageMax": y}`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionAverages {
    pub average_min: f64,
    pub average_max: f64,
}

/// Two distinct games sharing more than one genre tag, reported once per
/// unordered pair.
///
/// `game1` is always the game appearing earlier in the input sequence, and
/// `common_genres` preserves the order of that game's genre list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonGenrePair {
    pub game1: String,
    pub game2: String,
    pub common_genres: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_mode_count_total() {
        let count = PlayerModeCount {
            multiplayer: 8,
            single_player: 2,
        };
        assert_eq!(count.total(), 10);
    }

    #[test]
    fn test_report_wire_names() {
        let count = PlayerModeCount {
            multiplayer: 8,
            single_player: 2,
        };
        let json = serde_json::to_value(count).unwrap();
        assert_eq!(json["singlePlayer"], 2);

        let averages = CompletionAverages {
            average_min: 1562.5,
            average_max: 3125.0,
        };
        let json = serde_json::to_value(averages).unwrap();
        assert_eq!(json["averageMin"], 1562.5);
        assert_eq!(json["averageMax"], 3125.0);

        let pair = CommonGenrePair {
            game1: "A".into(),
            game2: "B".into(),
            common_genres: vec!["Action".into(), "Adventure".into()],
        };
        let json = serde_json::to_value(&pair).unwrap();
        assert_eq!(json["game1"], "A");
        assert_eq!(json["commonGenres"][0], "Action");
    }
}
