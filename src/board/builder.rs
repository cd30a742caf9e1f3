//! Fluent builder for constructing Isolation positions.
//!
//! Allows setting up mid-game positions directly instead of replaying moves.
//!
//! # Example
//! ```
//! use isolation_agent::board::{BoardBuilder, GameState, Move, Player};
//!
//! let board = BoardBuilder::new(7, 7)
//!     .place(Player::One, Move(0, 0))
//!     .place(Player::Two, Move(6, 6))
//!     .block(Move(3, 3))
//!     .active(Player::One)
//!     .build()
//!     .unwrap();
//! assert_eq!(board.legal_moves(), vec![Move(1, 2), Move(2, 1)]);
//! ```

use super::{BoardError, IsolationBoard, Move, Player};

/// A fluent builder for constructing `IsolationBoard` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    width: usize,
    height: usize,
    blocked: Vec<Move>,
    placements: [Option<Move>; 2],
    active: Player,
    move_count: Option<usize>,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new(7, 7)
    }
}

impl BoardBuilder {
    /// Create a builder for an empty `width` x `height` board.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        BoardBuilder {
            width,
            height,
            blocked: Vec::new(),
            placements: [None, None],
            active: Player::One,
            move_count: None,
        }
    }

    /// Mark a cell as blocked.
    #[must_use]
    pub fn block(mut self, cell: Move) -> Self {
        if !self.blocked.contains(&cell) {
            self.blocked.push(cell);
        }
        self
    }

    /// Mark several cells as blocked.
    #[must_use]
    pub fn block_all<I: IntoIterator<Item = Move>>(self, cells: I) -> Self {
        cells.into_iter().fold(self, BoardBuilder::block)
    }

    /// Put a player on a cell. The cell ends up blocked like any occupied cell.
    #[must_use]
    pub fn place(mut self, player: Player, cell: Move) -> Self {
        self.placements[player.index()] = Some(cell);
        self
    }

    /// Set the player to move.
    #[must_use]
    pub const fn active(mut self, player: Player) -> Self {
        self.active = player;
        self
    }

    /// Override the ply counter. Defaults to the number of placed players.
    #[must_use]
    pub const fn move_count(mut self, count: usize) -> Self {
        self.move_count = Some(count);
        self
    }

    /// Build the board, validating bounds and placements.
    pub fn build(self) -> Result<IsolationBoard, BoardError> {
        let mut board = IsolationBoard::new(self.width, self.height)?;

        for cell in &self.blocked {
            let idx = board
                .cell_index(*cell)
                .ok_or(BoardError::OutOfBounds { cell: *cell })?;
            board.blocked[idx] = true;
        }

        if let [Some(first), Some(second)] = self.placements {
            if first == second {
                return Err(BoardError::Overlap { cell: first });
            }
        }

        for player in Player::ALL {
            let Some(cell) = self.placements[player.index()] else {
                continue;
            };
            if !board.contains(cell) {
                return Err(BoardError::OutOfBounds { cell });
            }
            if !board.is_blank(cell) {
                return Err(BoardError::CellBlocked { cell });
            }
            board.place(player, cell);
        }

        board.active = self.active;
        board.move_count = self
            .move_count
            .unwrap_or_else(|| self.placements.iter().flatten().count());
        Ok(board)
    }
}
