#![allow(dead_code)]

use isolation_agent::board::{BoardBuilder, GameState, IsolationBoard, Move, Player};
use rand::prelude::*;

/// Board reached by `plies` random legal moves from an empty `size` x `size` board.
pub fn random_board(seed: u64, plies: usize, size: usize) -> IsolationBoard {
    let mut board = IsolationBoard::new(size, size).unwrap();
    let mut rng = StdRng::seed_from_u64(seed);
    board.play_random_plies(&mut rng, plies);
    board
}

/// The same position turned 180 degrees.
pub fn rotate_180(board: &IsolationBoard) -> IsolationBoard {
    let (w, h) = (board.width() as i32, board.height() as i32);
    let locations: Vec<Move> = Player::ALL
        .iter()
        .filter_map(|&p| board.player_location(p))
        .collect();

    let mut builder = BoardBuilder::new(board.width(), board.height())
        .active(board.active_player())
        .move_count(board.move_count());
    for row in 0..h {
        for col in 0..w {
            let cell = Move(row, col);
            if !board.is_blank(cell) && !locations.contains(&cell) {
                builder = builder.block(cell.rotate_180(w, h));
            }
        }
    }
    for player in Player::ALL {
        if let Some(loc) = board.player_location(player) {
            builder = builder.place(player, loc.rotate_180(w, h));
        }
    }
    builder.build().unwrap()
}
