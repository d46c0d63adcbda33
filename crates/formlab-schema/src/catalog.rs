//! Read-only catalog of games users can mark as favorites.

use serde::Serialize;

use crate::types::{AgeRating, GamePlatform};

/// A selectable game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: &'static str,
    pub title: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<GamePlatform>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_rating: Option<AgeRating>,
}

/// Games offered by the favorite-games picker.
pub const AVAILABLE_GAMES: &[Game] = &[
    Game {
        id: "g1",
        title: "Cyberpunk 2077",
        platform: Some(GamePlatform::Pc),
        age_rating: Some(AgeRating::Mature),
    },
    Game {
        id: "g2",
        title: "The Legend of Zelda: BOTW",
        platform: Some(GamePlatform::Switch),
        age_rating: Some(AgeRating::Everyone10Plus),
    },
    Game {
        id: "g3",
        title: "Elden Ring",
        platform: Some(GamePlatform::PlayStation),
        age_rating: Some(AgeRating::Mature),
    },
    Game {
        id: "g4",
        title: "Halo Infinite",
        platform: Some(GamePlatform::Xbox),
        age_rating: Some(AgeRating::Teen),
    },
    Game {
        id: "g5",
        title: "Stardew Valley",
        platform: Some(GamePlatform::Pc),
        age_rating: Some(AgeRating::Everyone),
    },
];

/// Looks up a catalog game by id.
pub fn find_game(id: &str) -> Option<&'static Game> {
    AVAILABLE_GAMES.iter().find(|game| game.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_game() {
        assert_eq!(find_game("g3").map(|g| g.title), Some("Elden Ring"));
        assert!(find_game("g42").is_none());
    }

    #[test]
    fn test_catalog_serialization() {
        let json = serde_json::to_value(AVAILABLE_GAMES[1]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "g2",
                "title": "The Legend of Zelda: BOTW",
                "platform": "switch",
                "ageRating": "E10+",
            })
        );
    }

    #[test]
    fn test_ids_are_unique() {
        let mut ids: Vec<_> = AVAILABLE_GAMES.iter().map(|g| g.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), AVAILABLE_GAMES.len());
    }
}
