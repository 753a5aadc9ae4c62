//! Property-based tests using proptest.

use proptest::prelude::*;

use super::{Game, GameRecord, Player, Status, NUM_COLUMNS, NUM_ROWS};
use crate::error::MoveError;

/// Column choices, including a few past the right edge and below zero
fn column_strategy() -> impl Strategy<Value = i64> {
    -1..=(NUM_COLUMNS as i64 + 1)
}

/// A move attempt: column plus whether the caller passes the right player
fn attempts_strategy() -> impl Strategy<Value = Vec<(i64, bool)>> {
    prop::collection::vec((column_strategy(), any::<bool>()), 0..80)
}

/// Occupied cells of every column are contiguous from row 0.
fn assert_gravity(game: &Game) -> Result<(), TestCaseError> {
    for column in 0..NUM_COLUMNS {
        let height = game.board().height(column);
        for row in 0..NUM_ROWS {
            let occupied = game.board().position(column, row).unwrap().is_some();
            prop_assert_eq!(occupied, row < height);
        }
    }
    Ok(())
}

proptest! {
    /// Property: every sequence of attempts keeps the gravity invariant and
    /// rejected moves leave the game untouched
    #[test]
    fn prop_moves_keep_gravity(attempts in attempts_strategy()) {
        let mut game = Game::new("Alice", "Bob").unwrap();

        for (column, right_player) in attempts {
            let player = if right_player {
                game.current_player()
            } else {
                game.next_player()
            };
            let before = game.clone();

            match game.apply_move(column, player) {
                Ok(status) => {
                    prop_assert_eq!(status, game.status());
                    prop_assert_eq!(game.board().piece_count(), before.board().piece_count() + 1);
                }
                Err(_) => prop_assert_eq!(&game, &before),
            }
            assert_gravity(&game)?;
        }
    }

    /// Property: the turn passes to the other player after each successful move
    #[test]
    fn prop_turns_alternate(columns in prop::collection::vec(0..NUM_COLUMNS as i64, 0..60)) {
        let mut game = Game::new("Alice", "Bob").unwrap();

        for column in columns {
            let player = game.current_player();
            if game.apply_move(column, player).is_ok() && !game.is_terminal() {
                prop_assert_eq!(game.current_player(), player.other());
            }
        }
    }

    /// Property: evaluation is stable and agrees with the stored status
    #[test]
    fn prop_evaluate_is_idempotent(columns in prop::collection::vec(0..NUM_COLUMNS as i64, 0..60)) {
        let mut game = Game::new("Alice", "Bob").unwrap();

        for column in columns {
            let player = game.current_player();
            let _ = game.apply_move(column, player);
            let first = game.evaluate();
            prop_assert_eq!(first, game.evaluate());
            prop_assert_eq!(first, game.status());
        }
    }

    /// Property: once the game ends, every move fails and nothing changes
    #[test]
    fn prop_terminal_is_final(
        columns in prop::collection::vec(0..NUM_COLUMNS as i64, 0..60),
        extra in column_strategy(),
    ) {
        let mut game = Game::new("Alice", "Bob").unwrap();
        for column in columns {
            let player = game.current_player();
            let _ = game.apply_move(column, player);
        }

        if game.is_terminal() {
            prop_assert_ne!(game.status(), Status::InProgress);
            let before = game.clone();
            for player in [Player::Red, Player::Blue] {
                prop_assert_eq!(game.apply_move(extra, player), Err(MoveError::GameAlreadyOver));
            }
            prop_assert_eq!(&game, &before);
        }
    }

    /// Property: a stored record rehydrates to an identical game
    #[test]
    fn prop_record_survives_json(columns in prop::collection::vec(0..NUM_COLUMNS as i64, 0..60)) {
        let mut game = Game::new("Alice", "Bob").unwrap();
        for column in columns {
            let player = game.current_player();
            let _ = game.apply_move(column, player);
        }

        let json = game.to_record().to_json().unwrap();
        let restored = Game::from_record(GameRecord::from_json(&json).unwrap()).unwrap();
        prop_assert_eq!(restored, game);
    }
}
