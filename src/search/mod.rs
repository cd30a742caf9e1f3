//! Search module implementing minimax and alpha-beta with iterative deepening.
//!
//! Features:
//! - Depth-bounded minimax
//! - Alpha-beta pruning below an exhaustive root
//! - Iterative deepening bounded by the number of blank cells
//! - Cooperative timeout: the time probe is polled at every node

mod config;
mod context;
mod error;
mod iterative;

pub use config::{SearchConfig, SearchMethod};
pub use context::SearchContext;
pub use error::{ConfigError, SearchTimeout};
pub use iterative::DeepeningOutcome;

use crate::board::Move;

/// Score of the best root move, with the move itself.
///
/// The score is from the point of view of the player to move at the root and
/// may be `±inf` for proven wins and losses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    pub score: f64,
    pub best_move: Move,
}

impl SearchResult {
    /// Score and move for a root with no legal moves.
    pub const NO_MOVE: SearchResult = SearchResult {
        score: 0.0,
        best_move: Move::NONE,
    };

    #[inline]
    #[must_use]
    pub const fn new(score: f64, best_move: Move) -> Self {
        SearchResult { score, best_move }
    }
}
