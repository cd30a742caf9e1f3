//! Move-selection facade.
//!
//! # Example
//! ```
//! use isolation_agent::agent::IsolationAgent;
//! use isolation_agent::board::{GameState, IsolationBoard, Move};
//! use isolation_agent::search::{SearchConfig, SearchMethod};
//! use isolation_agent::timer::Deadline;
//!
//! let config = SearchConfig::default()
//!     .with_method(SearchMethod::AlphaBeta)
//!     .with_iterative(false)
//!     .with_depth(3);
//! let agent = IsolationAgent::with_default_score(config).unwrap();
//!
//! let mut board = IsolationBoard::new(5, 5).unwrap();
//! board.apply_move(Move(2, 2)).unwrap();
//! board.apply_move(Move(0, 0)).unwrap();
//!
//! let legal = board.legal_moves();
//! let mv = agent.select_move(&board, &legal, &Deadline::from_millis(150));
//! assert!(legal.contains(&mv));
//! ```

use log::{debug, trace};

use crate::board::{GameState, Move, Player};
use crate::evaluation::{CustomScore, Evaluator};
use crate::search::{ConfigError, SearchConfig, SearchContext, SearchResult, SearchTimeout};
use crate::timer::TimeProbe;

/// Game-playing agent: a validated [`SearchConfig`] plus an injected evaluator.
///
/// The agent holds no per-turn state. The time probe handed to
/// [`select_move`](Self::select_move) lives only for that call.
#[derive(Clone, Debug)]
pub struct IsolationAgent<E = CustomScore> {
    config: SearchConfig,
    evaluator: E,
}

impl IsolationAgent<CustomScore> {
    /// Agent scoring positions with [`custom_score`](crate::evaluation::custom_score).
    pub fn with_default_score(config: SearchConfig) -> Result<Self, ConfigError> {
        Self::new(config, CustomScore)
    }
}

impl Default for IsolationAgent<CustomScore> {
    fn default() -> Self {
        IsolationAgent {
            config: SearchConfig::default(),
            evaluator: CustomScore,
        }
    }
}

impl<E> IsolationAgent<E> {
    pub fn new(config: SearchConfig, evaluator: E) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(IsolationAgent { config, evaluator })
    }

    #[must_use]
    pub const fn config(&self) -> &SearchConfig {
        &self.config
    }

    #[must_use]
    pub const fn evaluator(&self) -> &E {
        &self.evaluator
    }

    fn context<'a>(&'a self, time_left: &'a dyn TimeProbe) -> SearchContext<'a, E> {
        SearchContext::new(&self.evaluator, time_left, self.config.timeout_ms)
    }

    /// Pick a move for the player to move in `state` before time runs out.
    ///
    /// Returns `Move::NONE` when `legal_moves` is empty (without searching),
    /// when no search depth completed in time, or when the deepest completed
    /// search proves every move lost. Never fails: a timeout falls back to
    /// the best move found so far.
    pub fn select_move<S, P>(&self, state: &S, legal_moves: &[Move], time_left: &P) -> Move
    where
        S: GameState,
        E: Evaluator<S>,
        P: TimeProbe,
    {
        let Some(&first) = legal_moves.first() else {
            return Move::NONE;
        };
        let seed = if self.config.seed_first_move {
            first
        } else {
            Move::NONE
        };

        let mut ctx = self.context(time_left);
        let best_move = if self.config.iterative {
            ctx.iterative_deepening(state, self.config.method, seed)
                .best_move
        } else {
            match ctx.search(state, self.config.method, self.config.search_depth) {
                Ok(result) => result.best_move,
                Err(SearchTimeout) => {
                    debug!(
                        "{} depth {} timed out, falling back to {seed}",
                        self.config.method, self.config.search_depth
                    );
                    seed
                }
            }
        };

        trace!("selected {best_move} after {} nodes", ctx.nodes());
        best_move
    }

    /// Fixed-depth minimax with an explicit time probe.
    pub fn minimax<S, P>(
        &self,
        state: &S,
        depth: u32,
        time_left: &P,
    ) -> Result<SearchResult, SearchTimeout>
    where
        S: GameState,
        E: Evaluator<S>,
        P: TimeProbe,
    {
        self.context(time_left).minimax(state, depth, true)
    }

    /// Fixed-depth alpha-beta over the full window with an explicit time probe.
    pub fn alphabeta<S, P>(
        &self,
        state: &S,
        depth: u32,
        time_left: &P,
    ) -> Result<SearchResult, SearchTimeout>
    where
        S: GameState,
        E: Evaluator<S>,
        P: TimeProbe,
    {
        self.context(time_left)
            .alphabeta(state, depth, f64::NEG_INFINITY, true)
    }

    /// The injected evaluator applied to `state` from `player`'s point of view.
    pub fn score<S>(&self, state: &S, player: Player) -> f64
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.evaluator.score(state, player)
    }
}
