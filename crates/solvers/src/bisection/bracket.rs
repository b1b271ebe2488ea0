use thiserror::Error;

/// Errors that can occur when validating a bracket.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum BracketError {
    /// One or both endpoints are non-finite.
    #[error("non-finite endpoint(s): [{low}, {high}]")]
    NonFinite { low: f64, high: f64 },

    /// Endpoints are equal, giving zero width.
    #[error("zero width: low and high are both {value}")]
    ZeroWidth { value: f64 },

    /// The low endpoint lies above the high endpoint.
    #[error("reversed endpoints: low = {low} is greater than high = {high}")]
    Reversed { low: f64, high: f64 },

    /// Function values at the endpoints share a sign.
    #[error("no sign change: f({low}) = {f_low}, f({high}) = {f_high}")]
    NoSignChange {
        low: f64,
        high: f64,
        f_low: f64,
        f_high: f64,
    },
}

/// The sign of a function value for bracket logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// Value is positive (or zero).
    Positive,
    /// Value is negative.
    Negative,
}

impl Sign {
    /// Returns the sign of a function value.
    #[must_use]
    pub fn of(value: f64) -> Self {
        if value >= 0.0 {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}

/// Ordered finite bounds, validated before any function evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bounds {
    pub(super) low: f64,
    pub(super) high: f64,
}

impl Bounds {
    /// Validates the endpoints.
    ///
    /// # Errors
    ///
    /// Returns `BracketError` if an endpoint is non-finite, the endpoints are
    /// equal, or `low` lies above `high`.
    pub(super) fn new(bracket: [f64; 2]) -> Result<Self, BracketError> {
        let [low, high] = bracket;

        if !low.is_finite() || !high.is_finite() {
            return Err(BracketError::NonFinite { low, high });
        }

        #[allow(clippy::float_cmp)]
        if low == high {
            return Err(BracketError::ZeroWidth { value: low });
        }

        if low > high {
            return Err(BracketError::Reversed { low, high });
        }

        Ok(Self { low, high })
    }
}

/// Returns the midpoint of `[low, high]` without overflowing near `f64::MAX`.
pub(super) fn midpoint(low: f64, high: f64) -> f64 {
    let mid = 0.5 * (low + high);
    if mid.is_finite() {
        mid
    } else {
        0.5 * low + 0.5 * high
    }
}

/// A search interval `[low, high]` known to contain a sign change.
///
/// The sign at `low` is stored so each midpoint only needs one comparison.
/// Bisecting returns a new bracket rather than mutating in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    low: f64,
    high: f64,
    low_sign: Sign,
}

impl Bracket {
    /// Creates a bracket from validated bounds and the function values there.
    ///
    /// # Errors
    ///
    /// Returns `BracketError::NoSignChange` if the values share a sign.
    pub(super) fn new(bounds: Bounds, f_low: f64, f_high: f64) -> Result<Self, BracketError> {
        let low_sign = Sign::of(f_low);

        if low_sign == Sign::of(f_high) {
            return Err(BracketError::NoSignChange {
                low: bounds.low,
                high: bounds.high,
                f_low,
                f_high,
            });
        }

        Ok(Self {
            low: bounds.low,
            high: bounds.high,
            low_sign,
        })
    }

    /// Returns the lower bound.
    #[must_use]
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Returns the upper bound.
    #[must_use]
    pub fn high(&self) -> f64 {
        self.high
    }

    /// Returns the bracket bounds as an array.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.low, self.high]
    }

    /// Returns the sign of the function at the lower bound.
    #[must_use]
    pub fn low_sign(&self) -> Sign {
        self.low_sign
    }

    /// Returns the midpoint of the bracket.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        midpoint(self.low, self.high)
    }

    /// Returns the bracket width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    /// Returns true once the width has dropped below `epsilon`.
    #[must_use]
    pub fn is_converged(&self, epsilon: f64) -> bool {
        self.width() < epsilon
    }

    /// Returns the half of the bracket that keeps the sign change.
    ///
    /// A midpoint sharing the sign at `low` becomes the new `low`,
    /// otherwise it becomes the new `high`.
    #[must_use]
    pub(super) fn bisect(self, mid: f64, sign: Sign) -> Self {
        if sign == self.low_sign {
            Self { low: mid, ..self }
        } else {
            Self { high: mid, ..self }
        }
    }
}
