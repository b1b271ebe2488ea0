use super::Bracket;

/// Event emitted by the bisection solver for each function evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Lower endpoint evaluation.
    Low {
        /// The x value that was evaluated.
        x: f64,
        /// The function value at `x`.
        value: f64,
    },
    /// Upper endpoint evaluation.
    High {
        /// The x value that was evaluated.
        x: f64,
        /// The function value at `x`.
        value: f64,
    },
    /// Midpoint evaluation within a validated bracket.
    Midpoint {
        /// Iteration counter, starting at 1.
        iter: usize,
        /// The midpoint that was evaluated.
        x: f64,
        /// The function value at `x`.
        value: f64,
        /// The bracket the midpoint was taken from.
        bracket: Bracket,
    },
}

impl Event {
    /// Returns the evaluated x value.
    #[must_use]
    pub fn x(&self) -> f64 {
        match self {
            Event::Low { x, .. } | Event::High { x, .. } | Event::Midpoint { x, .. } => *x,
        }
    }

    /// Returns the function value at [`Event::x`].
    #[must_use]
    pub fn value(&self) -> f64 {
        match self {
            Event::Low { value, .. }
            | Event::High { value, .. }
            | Event::Midpoint { value, .. } => *value,
        }
    }

    /// Returns the bracket for midpoint events.
    #[must_use]
    pub fn bracket(&self) -> Option<Bracket> {
        match self {
            Event::Midpoint { bracket, .. } => Some(*bracket),
            Event::Low { .. } | Event::High { .. } => None,
        }
    }

    /// Returns the iteration counter for midpoint events, or 0 for endpoints.
    #[must_use]
    pub fn iter(&self) -> usize {
        match self {
            Event::Midpoint { iter, .. } => *iter,
            Event::Low { .. } | Event::High { .. } => 0,
        }
    }
}
