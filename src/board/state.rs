use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

use super::{BoardError, GameState, Move, Player};

/// Minimal Isolation position: two knights on a grid of cells that become
/// blocked once occupied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IsolationBoard {
    pub(crate) width: usize,
    pub(crate) height: usize,
    /// Row-major, `true` once a cell has been occupied.
    pub(crate) blocked: Vec<bool>,
    pub(crate) locations: [Option<Move>; 2],
    pub(crate) active: Player,
    pub(crate) move_count: usize,
}

impl IsolationBoard {
    /// Empty board with player one to move.
    pub fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        if width == 0 || height == 0 {
            return Err(BoardError::InvalidDimensions { width, height });
        }
        Ok(IsolationBoard {
            width,
            height,
            blocked: vec![false; width * height],
            locations: [None, None],
            active: Player::One,
            move_count: 0,
        })
    }

    #[inline]
    pub(crate) fn cell_index(&self, cell: Move) -> Option<usize> {
        let (row, col) = (cell.row(), cell.col());
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        if row < self.height && col < self.width {
            Some(row * self.width + col)
        } else {
            None
        }
    }

    #[must_use]
    pub fn contains(&self, cell: Move) -> bool {
        self.cell_index(cell).is_some()
    }

    /// In bounds and never occupied.
    #[must_use]
    pub fn is_blank(&self, cell: Move) -> bool {
        self.cell_index(cell).is_some_and(|idx| !self.blocked[idx])
    }

    /// Number of plies played so far.
    #[must_use]
    pub const fn move_count(&self) -> usize {
        self.move_count
    }

    pub(crate) fn blank_cell_list(&self) -> Vec<Move> {
        let mut cells = Vec::with_capacity(self.blocked.len());
        for row in 0..self.height {
            for col in 0..self.width {
                if !self.blocked[row * self.width + col] {
                    cells.push(Move(row as i32, col as i32));
                }
            }
        }
        cells
    }

    /// Play `mv` for the active player, blocking the destination and passing the turn.
    pub fn apply_move(&mut self, mv: Move) -> Result<(), BoardError> {
        let player = self.active;
        if !self.generate_moves(player).contains(&mv) {
            return Err(BoardError::IllegalMove { player, cell: mv });
        }
        self.place(player, mv);
        self.active = player.opponent();
        self.move_count += 1;
        Ok(())
    }

    /// Occupy `cell` without touching the turn. Callers validate the cell.
    pub(crate) fn place(&mut self, player: Player, cell: Move) {
        if let Some(idx) = self.cell_index(cell) {
            self.blocked[idx] = true;
        }
        self.locations[player.index()] = Some(cell);
    }

    /// Advance through up to `plies` uniformly random legal moves.
    ///
    /// Returns the number of plies actually played; stops early once the side
    /// to move is stuck.
    pub fn play_random_plies<R: Rng + ?Sized>(&mut self, rng: &mut R, plies: usize) -> usize {
        for played in 0..plies {
            let moves = self.generate_moves(self.active);
            let Some(&mv) = moves.choose(rng) else {
                return played;
            };
            self.place(self.active, mv);
            self.active = self.active.opponent();
            self.move_count += 1;
        }
        plies
    }
}

impl GameState for IsolationBoard {
    fn active_player(&self) -> Player {
        self.active
    }

    fn player_location(&self, player: Player) -> Option<Move> {
        self.locations[player.index()]
    }

    fn legal_moves_for(&self, player: Player) -> Vec<Move> {
        self.generate_moves(player)
    }

    fn forecast_move(&self, mv: Move) -> Self {
        let mut next = self.clone();
        // Unchecked: `mv` must come from `legal_moves`.
        next.place(next.active, mv);
        next.active = next.active.opponent();
        next.move_count += 1;
        next
    }

    fn is_winner(&self, player: Player) -> bool {
        let opponent = player.opponent();
        self.active == opponent && self.generate_moves(opponent).is_empty()
    }

    fn is_loser(&self, player: Player) -> bool {
        self.active == player && self.generate_moves(player).is_empty()
    }

    fn blank_cells(&self) -> Vec<Move> {
        self.blank_cell_list()
    }

    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }
}

impl fmt::Display for IsolationBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            let mut line = String::with_capacity(self.width * 4 + 1);
            for col in 0..self.width {
                let cell = Move(row as i32, col as i32);
                let glyph = Player::ALL
                    .iter()
                    .find(|p| self.locations[p.index()] == Some(cell))
                    .map_or_else(
                        || if self.blocked[row * self.width + col] { '-' } else { ' ' },
                        |p| p.to_char(),
                    );
                line.push_str(" | ");
                line.push(glyph);
            }
            writeln!(f, "{} |", line.trim_start())?;
        }
        Ok(())
    }
}
