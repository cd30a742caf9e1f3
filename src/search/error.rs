//! Error types for search and agent configuration.

use std::fmt;

/// The turn's remaining time dropped below the configured threshold.
///
/// This is the only way a search can fail; it unwinds every pending
/// recursive frame through `?` and carries no partial result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTimeout;

impl fmt::Display for SearchTimeout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Search aborted: time left fell below the timeout threshold")
    }
}

impl std::error::Error for SearchTimeout {}

/// Error type for invalid search configuration
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Timeout threshold must be a positive, finite number of milliseconds
    NonPositiveTimeout { timeout_ms: f64 },
    /// Fixed-depth search needs at least one ply
    ZeroDepth,
    /// Search method name not recognised
    UnknownMethod { name: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositiveTimeout { timeout_ms } => {
                write!(f, "Timeout threshold must be positive, found {timeout_ms} ms")
            }
            ConfigError::ZeroDepth => {
                write!(f, "Search depth must be at least 1 without iterative deepening")
            }
            ConfigError::UnknownMethod { name } => {
                write!(f, "Unknown search method '{name}', expected 'minimax' or 'alphabeta'")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
