//! The static game catalog shown in the lobby.
//!
//! Only the fruit-matching game is playable; every other entry renders a
//! placeholder pane.

/// One catalog entry.
#[derive(Debug, Clone, Copy)]
pub struct GameInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub modes: &'static [&'static str],
    pub maps: &'static [&'static str],
}

/// Id of the one catalog entry backed by a real engine.
pub const FRUIT_MATCH_ID: &str = "fruit-match";

pub const GAMES: &[GameInfo] = &[
    GameInfo {
        id: "fps",
        name: "Tactical Shooter",
        icon: "\u{1F3AF}", // 🎯
        description: "5v5 tactical FPS",
        modes: &["Competitive", "Casual", "Deathmatch"],
        maps: &["Dust Valley", "Industrial", "Cityscape"],
    },
    GameInfo {
        id: "battle-royale",
        name: "Battle Royale",
        icon: "\u{1F3C6}", // 🏆
        description: "100-player survival",
        modes: &["Solo", "Duo", "Squad"],
        maps: &["Storm Island", "Desert Wasteland"],
    },
    GameInfo {
        id: "moba",
        name: "MOBA",
        icon: "\u{2694}", // ⚔
        description: "5v5 strategic battles",
        modes: &["Ranked", "Normal", "ARAM"],
        maps: &["Summoner's Rift", "Howling Abyss"],
    },
    GameInfo {
        id: "rts",
        name: "Real-Time Strategy",
        icon: "\u{1F3F0}", // 🏰
        description: "Build and conquer",
        modes: &["1v1", "2v2", "Campaign"],
        maps: &["Ancient Ruins", "Frozen Tundra"],
    },
    GameInfo {
        id: "racing",
        name: "Racing",
        icon: "\u{1F3CE}", // 🏎
        description: "High-speed racing",
        modes: &["Circuit", "Time Trial", "Drift"],
        maps: &["Monaco", "Nurburgring", "Tokyo"],
    },
    GameInfo {
        id: "fighting",
        name: "Fighting",
        icon: "\u{1F94A}", // 🥊
        description: "1v1 combat",
        modes: &["Arcade", "Tournament", "Training"],
        maps: &["Dojo", "Street", "Arena"],
    },
    GameInfo {
        id: "puzzle",
        name: "Puzzle",
        icon: "\u{1F9E9}", // 🧩
        description: "Brain teasers",
        modes: &["Classic", "Timed", "Endless"],
        maps: &["Garden", "Space", "Underwater"],
    },
    GameInfo {
        id: "rpg",
        name: "RPG",
        icon: "\u{1F5E1}", // 🗡
        description: "Role-playing adventure",
        modes: &["Story", "Co-op", "PvP"],
        maps: &["Forest", "Dungeon", "Castle"],
    },
    GameInfo {
        id: FRUIT_MATCH_ID,
        name: "Fruit Matching",
        icon: "\u{1F34E}", // 🍎
        description: "Match 3+ fruits to score points",
        modes: &["Competitive", "Practice"],
        maps: &["Classic Board", "Obstacle Course"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_nine_games() {
        assert_eq!(GAMES.len(), 9);
    }

    #[test]
    fn test_catalog_ids_unique() {
        let mut ids: Vec<_> = GAMES.iter().map(|g| g.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), GAMES.len());
    }

    #[test]
    fn test_fruit_match_present_and_described() {
        let game = GAMES
            .iter()
            .find(|g| g.id == FRUIT_MATCH_ID)
            .expect("fruit-match must be in the catalog");
        assert_eq!(game.name, "Fruit Matching");
        assert_eq!(game.modes.len(), 2);
    }

    #[test]
    fn test_every_game_has_modes_and_maps() {
        for game in GAMES {
            assert!(!game.modes.is_empty(), "{} has no modes", game.id);
            assert!(!game.maps.is_empty(), "{} has no maps", game.id);
        }
    }
}
