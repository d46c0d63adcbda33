//! Tests for the favorite-games list of the edit-user form.

mod common;
use common::*;

use formlab_forms::ErrorKind;
use formlab_schema::{find_game, FavoriteGameEntry, Region, AVAILABLE_GAMES};

#[test]
fn append_then_remove_last_restores_list() {
    let mut state = filled_state();
    state.add_favorite(find_game("g1").unwrap());
    state.add_favorite(find_game("g4").unwrap());
    let before = state.favorite_games.items().to_vec();

    let len = state.append_favorite().len();
    state.remove_favorite(len - 1).unwrap();

    assert_eq!(state.favorite_games.items(), before.as_slice());
}

#[test]
fn remove_out_of_range_leaves_list_unchanged() {
    let mut state = filled_state();
    state.add_favorite(find_game("g2").unwrap());
    let before = state.favorite_games.items().to_vec();

    for index in [1, 2, usize::MAX] {
        let err = state.remove_favorite(index).unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::IndexOutOfRange));
    }
    assert_eq!(state.favorite_games.items(), before.as_slice());
}

#[test]
fn remove_shifts_later_entries_down() {
    let mut state = filled_state();
    for game in AVAILABLE_GAMES.iter().take(3) {
        state.add_favorite(game);
    }
    let keys: Vec<String> = state.favorite_games.keys().iter().map(|k| (*k).to_string()).collect();

    state.remove_favorite(0).unwrap();
    assert_eq!(state.favorite_games.get(0).map(|g| g.id.as_str()), Some("g2"));
    assert_eq!(state.favorite_games.keys(), vec![keys[1].as_str(), keys[2].as_str()]);
}

#[test]
fn appended_entry_must_be_filled_in() {
    let mut state = filled_state();
    state.switch_region(Region::Other);
    state.append_favorite();

    let errors = state.submit().unwrap_err();
    assert_eq!(errors.paths(), vec!["favoriteGames[0].id"]);

    if let Some(entry) = state.favorite_games.get_mut(0) {
        *entry = FavoriteGameEntry {
            favorite_since: Some("2023-11-02".into()),
            ..FavoriteGameEntry::new("g5")
        };
    }
    let request = state.submit().unwrap();
    assert_eq!(request.base.favorite_games[0].id, "g5");
}

#[test]
fn keys_are_not_submitted() {
    let mut state = filled_state();
    state.switch_region(Region::Other);
    state.add_favorite(find_game("g3").unwrap());

    let json = serde_json::to_value(state.submit().unwrap()).unwrap();
    assert!(json["favoriteGames"][0].get("key").is_none());
    assert_eq!(json["favoriteGames"][0]["id"], "g3");
}
