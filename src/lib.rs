//! Time-bounded adversarial search for knight-move Isolation.
//!
//! - [`board`] - the [`GameState`](board::GameState) interface and a reference board
//! - [`evaluation`] - heuristic scoring
//! - [`search`] - minimax, alpha-beta, iterative deepening
//! - [`agent`] - the move-selection facade
//! - [`timer`] - time probes

pub mod agent;
pub mod board;
pub mod evaluation;
pub mod prelude;
pub mod search;
pub mod timer;

pub use agent::IsolationAgent;
pub use board::{GameState, IsolationBoard, Move, Player};
pub use search::{SearchConfig, SearchMethod, SearchResult, SearchTimeout};
