//! Position evaluation.
//!
//! Scores are `f64` from the point of view of a given player. A lost
//! position is `-inf` and a won one `+inf`; those dominate every finite
//! score and are checked before anything else.

use crate::board::{GameState, Move, Player};

/// Opponent cells that earn the cornering bonus in [`custom_score`].
pub const NEAR_CENTER_CELLS: [Move; 4] = [Move(2, 1), Move(-2, 1), Move(2, -1), Move(-2, -1)];

/// Bonus added by [`custom_score`] when the opponent sits on a
/// [`NEAR_CENTER_CELLS`] cell and cannot reach the quarter cell.
pub const NEAR_CENTER_BONUS: f64 = 2.0;

/// Heuristic used at cutoff nodes.
///
/// Implemented for any `Fn(&S, Player) -> f64`, so plain functions such as
/// `custom_score::<IsolationBoard>` can be passed directly.
pub trait Evaluator<S: GameState> {
    fn score(&self, state: &S, player: Player) -> f64;
}

impl<S, F> Evaluator<S> for F
where
    S: GameState,
    F: Fn(&S, Player) -> f64,
{
    #[inline]
    fn score(&self, state: &S, player: Player) -> f64 {
        self(state, player)
    }
}

/// `-inf` if `player` has lost, `+inf` if it has won.
#[inline]
fn terminal_score<S: GameState>(state: &S, player: Player) -> Option<f64> {
    if state.is_loser(player) {
        Some(f64::NEG_INFINITY)
    } else if state.is_winner(player) {
        Some(f64::INFINITY)
    } else {
        None
    }
}

/// The quarter-dimension cell `(width >> 2, height >> 2)`.
#[inline]
#[must_use]
pub fn quarter_cell<S: GameState>(state: &S) -> Move {
    Move((state.width() >> 2) as i32, (state.height() >> 2) as i32)
}

/// Mobility difference plus two positional terms:
///
/// - if it is `player`'s turn and the opponent's only escape is also one of
///   `player`'s moves, the position is scored `+inf`;
/// - [`NEAR_CENTER_BONUS`] when the opponent stands on one of
///   [`NEAR_CENTER_CELLS`] and the [`quarter_cell`] is not among its moves.
pub fn custom_score<S: GameState>(state: &S, player: Player) -> f64 {
    if let Some(score) = terminal_score(state, player) {
        return score;
    }

    let own_moves = state.legal_moves_for(player);
    let opponent = state.opponent(player);
    let opp_moves = state.legal_moves_for(opponent);

    if state.active_player() == player {
        if let [last_escape] = opp_moves.as_slice() {
            if own_moves.contains(last_escape) {
                return f64::INFINITY;
            }
        }
    }

    let mut bonus = 0.0;
    let cornered = state
        .player_location(opponent)
        .is_some_and(|loc| NEAR_CENTER_CELLS.contains(&loc));
    if cornered && !opp_moves.contains(&quarter_cell(state)) {
        bonus += NEAR_CENTER_BONUS;
    }

    bonus + own_moves.len() as f64 - opp_moves.len() as f64
}

/// Own mobility minus opponent mobility.
pub fn improved_score<S: GameState>(state: &S, player: Player) -> f64 {
    if let Some(score) = terminal_score(state, player) {
        return score;
    }
    let own = state.legal_moves_for(player).len() as f64;
    let opp = state.legal_moves_for(state.opponent(player)).len() as f64;
    own - opp
}

/// Own mobility.
pub fn open_move_score<S: GameState>(state: &S, player: Player) -> f64 {
    terminal_score(state, player).unwrap_or_else(|| state.legal_moves_for(player).len() as f64)
}

/// Zero for every non-terminal position.
pub fn null_score<S: GameState>(state: &S, player: Player) -> f64 {
    terminal_score(state, player).unwrap_or(0.0)
}

/// [`custom_score`] as a unit evaluator; the agent's default.
#[derive(Clone, Copy, Debug, Default)]
pub struct CustomScore;

/// [`improved_score`] as a unit evaluator.
#[derive(Clone, Copy, Debug, Default)]
pub struct ImprovedScore;

/// [`open_move_score`] as a unit evaluator.
#[derive(Clone, Copy, Debug, Default)]
pub struct OpenMoveScore;

/// [`null_score`] as a unit evaluator.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullScore;

impl<S: GameState> Evaluator<S> for CustomScore {
    fn score(&self, state: &S, player: Player) -> f64 {
        custom_score(state, player)
    }
}

impl<S: GameState> Evaluator<S> for ImprovedScore {
    fn score(&self, state: &S, player: Player) -> f64 {
        improved_score(state, player)
    }
}

impl<S: GameState> Evaluator<S> for OpenMoveScore {
    fn score(&self, state: &S, player: Player) -> f64 {
        open_move_score(state, player)
    }
}

impl<S: GameState> Evaluator<S> for NullScore {
    fn score(&self, state: &S, player: Player) -> f64 {
        null_score(state, player)
    }
}
