use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Which bounded search the agent runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SearchMethod {
    /// Exhaustive minimax to the depth limit
    #[default]
    Minimax,
    /// Minimax with alpha-beta pruning below the root
    AlphaBeta,
}

impl fmt::Display for SearchMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchMethod::Minimax => write!(f, "minimax"),
            SearchMethod::AlphaBeta => write!(f, "alphabeta"),
        }
    }
}

impl FromStr for SearchMethod {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimax" => Ok(SearchMethod::Minimax),
            "alphabeta" | "alpha_beta" | "alpha-beta" => Ok(SearchMethod::AlphaBeta),
            _ => Err(ConfigError::UnknownMethod {
                name: s.to_string(),
            }),
        }
    }
}

/// Search settings, fixed when the agent is built.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Plies searched when `iterative` is off
    pub search_depth: u32,
    /// Run iterative deepening instead of a single fixed-depth search
    pub iterative: bool,
    pub method: SearchMethod,
    /// Abort once fewer than this many milliseconds are left
    pub timeout_ms: f64,
    /// Start from the first legal move instead of `Move::NONE`, so a search
    /// that never completes a depth still plays something
    pub seed_first_move: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            search_depth: 3,
            iterative: true,
            method: SearchMethod::Minimax,
            timeout_ms: 10.0,
            seed_first_move: false,
        }
    }
}

impl SearchConfig {
    #[must_use]
    pub const fn with_depth(mut self, depth: u32) -> Self {
        self.search_depth = depth;
        self
    }

    #[must_use]
    pub const fn with_iterative(mut self, iterative: bool) -> Self {
        self.iterative = iterative;
        self
    }

    #[must_use]
    pub const fn with_method(mut self, method: SearchMethod) -> Self {
        self.method = method;
        self
    }

    #[must_use]
    pub fn with_timeout_ms(mut self, timeout_ms: f64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    #[must_use]
    pub const fn with_seed_first_move(mut self, seed: bool) -> Self {
        self.seed_first_move = seed;
        self
    }

    /// Check the invariants: a positive finite threshold, and a non-zero
    /// depth whenever iterative deepening is off.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.timeout_ms.is_finite() || self.timeout_ms <= 0.0 {
            return Err(ConfigError::NonPositiveTimeout {
                timeout_ms: self.timeout_ms,
            });
        }
        if !self.iterative && self.search_depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }
        Ok(())
    }
}
