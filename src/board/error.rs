//! Error types for board construction and move application.

use std::fmt;

use super::{Move, Player};

/// Error type for reference-board failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Width or height is zero
    InvalidDimensions { width: usize, height: usize },
    /// Cell lies outside the board
    OutOfBounds { cell: Move },
    /// Cell is already blocked
    CellBlocked { cell: Move },
    /// Both players were placed on the same cell
    Overlap { cell: Move },
    /// Move is not legal for the active player
    IllegalMove { player: Player, cell: Move },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidDimensions { width, height } => {
                write!(f, "Board dimensions must be positive, found {width}x{height}")
            }
            BoardError::OutOfBounds { cell } => {
                write!(f, "Cell {cell} is outside the board")
            }
            BoardError::CellBlocked { cell } => {
                write!(f, "Cell {cell} is already blocked")
            }
            BoardError::Overlap { cell } => {
                write!(f, "Both players placed on {cell}")
            }
            BoardError::IllegalMove { player, cell } => {
                write!(f, "Illegal move {cell} for {player}")
            }
        }
    }
}

impl std::error::Error for BoardError {}
