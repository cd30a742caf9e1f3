//! Reference Isolation board and the game-state interface the search consumes.
//!
//! The search layer is generic over [`GameState`]; [`IsolationBoard`] is a
//! small implementation of it (knight moves, cells blocked once occupied)
//! used by the tests, benchmarks, and anyone who wants a ready-made board.
//!
//! # Example
//! ```
//! use isolation_agent::board::{GameState, IsolationBoard, Move};
//!
//! let mut board = IsolationBoard::new(7, 7).unwrap();
//! assert_eq!(board.legal_moves().len(), 49);
//! board.apply_move(Move(3, 3)).unwrap();
//! assert_eq!(board.blank_cells().len(), 48);
//! ```

mod builder;
mod error;
mod game_state;
mod movegen;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::BoardError;
pub use game_state::GameState;
pub use state::IsolationBoard;
pub use types::{Move, Player};
