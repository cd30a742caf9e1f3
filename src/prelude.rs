//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use isolation_agent::prelude::*;
//! ```

pub use crate::agent::IsolationAgent;
pub use crate::board::{BoardBuilder, BoardError, GameState, IsolationBoard, Move, Player};
pub use crate::evaluation::{custom_score, improved_score, CustomScore, Evaluator};
pub use crate::search::{
    ConfigError, SearchConfig, SearchContext, SearchMethod, SearchResult, SearchTimeout,
};
pub use crate::timer::{CountdownProbe, Deadline, TimeProbe};
