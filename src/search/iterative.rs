use log::debug;

use crate::board::{GameState, Move};
use crate::evaluation::Evaluator;

use super::{SearchContext, SearchMethod, SearchTimeout};

/// What iterative deepening settled on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeepeningOutcome {
    /// Move from the deepest completed depth, or the seed if none completed
    pub best_move: Move,
    /// Root score from the deepest completed depth
    pub score: Option<f64>,
    /// Deepest depth that finished; 0 when even depth 1 timed out
    pub completed_depth: u32,
    /// Whether the loop ended on a timeout rather than the depth bound
    pub timed_out: bool,
}

impl<E> SearchContext<'_, E> {
    /// Iterative deepening from depth 1 up to the number of blank cells.
    ///
    /// Each completed depth replaces the best move. The first timeout ends
    /// the loop and the last completed depth's move is kept; if depth 1
    /// never completes the result is `seed`.
    pub fn iterative_deepening<S>(
        &mut self,
        state: &S,
        method: SearchMethod,
        seed: Move,
    ) -> DeepeningOutcome
    where
        S: GameState,
        E: Evaluator<S>,
    {
        let max_depth = u32::try_from(state.blank_cells().len()).unwrap_or(u32::MAX);
        let mut outcome = DeepeningOutcome {
            best_move: seed,
            score: None,
            completed_depth: 0,
            timed_out: false,
        };

        for depth in 1..=max_depth {
            match self.search(state, method, depth) {
                Ok(result) => {
                    outcome.best_move = result.best_move;
                    outcome.score = Some(result.score);
                    outcome.completed_depth = depth;
                    debug!(
                        "{method} depth {depth} score {} move {} nodes {}",
                        result.score,
                        result.best_move,
                        self.nodes()
                    );
                }
                Err(SearchTimeout) => {
                    outcome.timed_out = true;
                    debug!(
                        "{method} timed out at depth {depth}, keeping {} from depth {}",
                        outcome.best_move, outcome.completed_depth
                    );
                    break;
                }
            }
        }

        outcome
    }
}
