use thiserror::Error;

use super::{bracket::BracketError, config::ConfigError};

/// Errors that can occur during bisection solving.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid bracket: {0}")]
    InvalidBracket(#[from] BracketError),

    #[error("invalid tolerance: {0}")]
    InvalidTolerance(#[from] ConfigError),

    #[error("no convergence after {iters} iterations: root lies in [{low}, {high}]")]
    Convergence { iters: usize, low: f64, high: f64 },

    #[error("non-finite function value {value} at x = {x}")]
    NonFiniteValue { x: f64, value: f64 },
}

impl Error {
    /// Returns the best bracket found before the iteration limit was hit.
    ///
    /// Only [`Error::Convergence`] carries a bracket.
    #[must_use]
    pub fn best_bracket(&self) -> Option<[f64; 2]> {
        match self {
            Self::Convergence { low, high, .. } => Some([*low, *high]),
            _ => None,
        }
    }
}
