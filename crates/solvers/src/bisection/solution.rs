use std::fmt;

use super::{Bracket, Config, bracket::midpoint};

/// Indicates how the solver finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Status {
    /// The function evaluated to exactly zero at the reported x.
    Exact,

    /// The bracket width dropped below the configured tolerance.
    Converged,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a bisection solve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Best estimate of the root, unrounded.
    pub x: f64,

    /// Reported root, rounded when the config requests decimal places.
    pub value: f64,

    /// Lower bound of the final bracket.
    pub low: f64,

    /// Upper bound of the final bracket.
    pub high: f64,

    /// Number of midpoint evaluations performed.
    pub iters: usize,
}

impl Solution {
    /// Builds a solution for an exact zero at `x`, collapsing the bracket.
    pub(super) fn exact(x: f64, iters: usize, config: &Config) -> Self {
        Self {
            status: Status::Exact,
            x,
            value: round_to(x, config.decimal_places()),
            low: x,
            high: x,
            iters,
        }
    }

    /// Builds a solution reporting the midpoint of `bracket`.
    pub(super) fn from_bracket(
        bracket: [f64; 2],
        status: Status,
        iters: usize,
        config: &Config,
    ) -> Self {
        let [low, high] = bracket;
        let x = midpoint(low, high);
        Self {
            status,
            x,
            value: round_to(x, config.decimal_places()),
            low,
            high,
            iters,
        }
    }

    pub(super) fn converged(bracket: &Bracket, iters: usize, config: &Config) -> Self {
        Self::from_bracket(bracket.as_array(), Status::Converged, iters, config)
    }

    /// Returns true if the function evaluated to exactly zero at the root.
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.status == Status::Exact
    }

    /// Returns the width of the final bracket.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.high - self.low
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Status::Exact => write!(f, "root found at {}", self.x),
            Status::Converged => write!(
                f,
                "root lies between {} and {}, approx. {}",
                self.low, self.high, self.value
            ),
            Status::StoppedByObserver => write!(
                f,
                "stopped after {} iterations: root lies between {} and {}, approx. {}",
                self.iters, self.low, self.high, self.value
            ),
        }
    }
}

/// Rounds half away from zero to `places` decimal places.
///
/// Values that cannot be scaled without overflow are returned unchanged.
fn round_to(x: f64, places: Option<u32>) -> f64 {
    let Some(places) = places else {
        return x;
    };
    let Ok(exp) = i32::try_from(places) else {
        return x;
    };

    let scale = 10f64.powi(exp);
    let scaled = x * scale;
    if !scaled.is_finite() {
        return x;
    }

    scaled.round() / scale
}
