//! Evaluation properties on random positions.

mod common;

use isolation_agent::board::{BoardBuilder, GameState, IsolationBoard, Move, Player};
use isolation_agent::evaluation::{
    custom_score, improved_score, quarter_cell, NEAR_CENTER_BONUS, NEAR_CENTER_CELLS,
};
use proptest::prelude::*;

fn cornering_bonus(state: &IsolationBoard, player: Player) -> f64 {
    let opponent = player.opponent();
    let on_near_center = state
        .player_location(opponent)
        .is_some_and(|loc| NEAR_CENTER_CELLS.contains(&loc));
    if on_near_center && !state.legal_moves_for(opponent).contains(&quarter_cell(state)) {
        NEAR_CENTER_BONUS
    } else {
        0.0
    }
}

fn forced_capture(state: &IsolationBoard, player: Player) -> bool {
    let opp_moves = state.legal_moves_for(player.opponent());
    state.active_player() == player
        && opp_moves.len() == 1
        && state.legal_moves_for(player).contains(&opp_moves[0])
}

proptest! {
    /// Property: non-terminal scores are finite and follow bonus + own - opp
    #[test]
    fn prop_base_formula(seed in any::<u64>(), plies in 0..25usize, size in 4..8usize) {
        let state = common::random_board(seed, plies, size);
        for player in Player::ALL {
            if state.is_winner(player) || state.is_loser(player) || forced_capture(&state, player) {
                continue;
            }
            let score = custom_score(&state, player);
            prop_assert!(score.is_finite());
            let expected = cornering_bonus(&state, player) + improved_score(&state, player);
            prop_assert_eq!(score, expected);
        }
    }

    /// Property: turning the board 180 degrees keeps the score, unless the
    /// cornering bonus applies to either orientation
    #[test]
    fn prop_rotation_symmetry(seed in any::<u64>(), plies in 0..25usize, size in 4..8usize) {
        let state = common::random_board(seed, plies, size);
        let rotated = common::rotate_180(&state);
        prop_assert_eq!(rotated.blank_cells().len(), state.blank_cells().len());

        for player in Player::ALL {
            let opponent = player.opponent();
            let near_center = |s: &IsolationBoard| {
                s.player_location(opponent)
                    .is_some_and(|loc| NEAR_CENTER_CELLS.contains(&loc))
            };
            if near_center(&state) || near_center(&rotated) {
                continue;
            }
            prop_assert_eq!(custom_score(&state, player), custom_score(&rotated, player));
        }
    }
}

#[test]
fn bonus_only_at_listed_cells() {
    let with_opponent_at = |cell| {
        BoardBuilder::new(7, 7)
            .place(Player::One, Move(6, 6))
            .place(Player::Two, cell)
            .build()
            .unwrap()
    };

    // Both squares give player two six moves and keep (1, 1) out of reach
    let listed = with_opponent_at(Move(2, 1));
    let transposed = with_opponent_at(Move(1, 2));
    assert_eq!(custom_score(&listed, Player::One), NEAR_CENTER_BONUS + 2.0 - 6.0);
    assert_eq!(custom_score(&transposed, Player::One), 2.0 - 6.0);
}
