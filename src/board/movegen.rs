//! Knight-move generation for the reference board.

use super::{IsolationBoard, Move, Player};

/// The eight `(row, col)` knight jumps, in enumeration order.
pub(crate) const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

impl IsolationBoard {
    /// Legal destinations for `player`.
    ///
    /// A player that has not been placed yet may move to any blank cell.
    pub(crate) fn generate_moves(&self, player: Player) -> Vec<Move> {
        let Some(from) = self.locations[player.index()] else {
            return self.blank_cell_list();
        };
        KNIGHT_OFFSETS
            .iter()
            .map(|&(dr, dc)| from.offset(dr, dc))
            .filter(|&to| self.is_blank(to))
            .collect()
    }
}
