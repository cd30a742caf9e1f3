//! The game-state interface the search consumes.
//!
//! Search code never mutates a state: every exploration step asks for a new
//! successor through [`GameState::forecast_move`].

use super::{Move, Player};

/// Read-only view of an Isolation position plus successor generation.
pub trait GameState: Sized {
    /// Player whose turn it is.
    fn active_player(&self) -> Player;

    /// The other player.
    fn opponent(&self, player: Player) -> Player {
        player.opponent()
    }

    /// Current cell of `player`, or `None` before its first placement.
    fn player_location(&self, player: Player) -> Option<Move>;

    /// Moves available to `player`; empty if none.
    fn legal_moves_for(&self, player: Player) -> Vec<Move>;

    /// Moves available to the active player.
    fn legal_moves(&self) -> Vec<Move> {
        self.legal_moves_for(self.active_player())
    }

    /// Successor state after the active player plays `mv`. `self` is untouched.
    fn forecast_move(&self, mv: Move) -> Self;

    fn is_winner(&self, player: Player) -> bool;

    fn is_loser(&self, player: Player) -> bool;

    /// Cells that are neither occupied nor blocked.
    fn blank_cells(&self) -> Vec<Move>;

    fn width(&self) -> usize;

    fn height(&self) -> usize;
}
