//! Move (destination cell) type.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A destination cell on the board, represented as (row, col).
///
/// Coordinates are signed so that the "no legal move" sentinel `(-1, -1)` and
/// knight offsets can share the type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move(pub i32, pub i32); // (row, col)

impl Move {
    /// Sentinel returned when there is no legal move available.
    pub const NONE: Move = Move(-1, -1);

    #[inline]
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Move(row, col)
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> i32 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn col(self) -> i32 {
        self.1
    }

    /// True for the `(-1, -1)` sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == Self::NONE.0 && self.1 == Self::NONE.1
    }

    /// Translate this cell by a `(row, col)` offset.
    #[inline]
    #[must_use]
    pub const fn offset(self, dr: i32, dc: i32) -> Self {
        Move(self.0 + dr, self.1 + dc)
    }

    /// Rotate the cell 180 degrees on a `width` x `height` board.
    #[inline]
    #[must_use]
    pub const fn rotate_180(self, width: i32, height: i32) -> Self {
        Move(height - 1 - self.0, width - 1 - self.1)
    }
}

impl Default for Move {
    fn default() -> Self {
        Move::NONE
    }
}

impl From<(i32, i32)> for Move {
    fn from((row, col): (i32, i32)) -> Self {
        Move(row, col)
    }
}

impl From<Move> for (i32, i32) {
    fn from(mv: Move) -> Self {
        (mv.0, mv.1)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}
