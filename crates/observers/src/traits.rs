//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across solvers.
//!
//! # Event traits
//!
//! - [`HasValue`]: events that carry an evaluated point and function value
//! - [`HasBracket`]: events that may carry the current search bracket
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use halve_core::Observer;
//! use halve_observers::traits::{CanStopEarly, HasValue};
//!
//! struct StopAfter {
//!     evals: usize,
//!     seen: usize,
//! }
//!
//! impl<E: HasValue, A: CanStopEarly> Observer<E, A> for StopAfter {
//!     fn observe(&mut self, _event: &E) -> Option<A> {
//!         self.seen += 1;
//!         (self.seen >= self.evals).then(A::stop_early)
//!     }
//! }
//! ```

use halve_solvers::bisection;

/// An event that carries an evaluated point.
pub trait HasValue {
    /// Returns the x value that was evaluated.
    fn x(&self) -> f64;

    /// Returns the function value at [`HasValue::x`].
    fn value(&self) -> f64;
}

/// An event that may carry the current search bracket.
pub trait HasBracket {
    /// Returns the bracket as `[low, high]`, if the event has one.
    fn bracket(&self) -> Option<[f64; 2]>;

    /// Returns the iteration counter, or 0 for events outside the main loop.
    fn iter(&self) -> usize;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- bisection ---

impl HasValue for bisection::Event {
    fn x(&self) -> f64 {
        bisection::Event::x(self)
    }

    fn value(&self) -> f64 {
        bisection::Event::value(self)
    }
}

impl HasBracket for bisection::Event {
    fn bracket(&self) -> Option<[f64; 2]> {
        bisection::Event::bracket(self).map(|bracket| bracket.as_array())
    }

    fn iter(&self) -> usize {
        bisection::Event::iter(self)
    }
}

impl CanStopEarly for bisection::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
