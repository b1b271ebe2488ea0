//! Bisection root finding on a bracketed sign change.
//!
//! # Algorithm
//!
//! Given `[low, high]` with `f(low)` and `f(high)` of opposite sign, the
//! solver evaluates the midpoint and keeps the half whose endpoints still
//! disagree in sign. Each iteration halves the bracket, so after `n`
//! iterations its width is `(high - low) / 2ⁿ`.
//!
//! The solve ends in one of three ways:
//!
//! - the function is exactly zero at an evaluated point ([`Status::Exact`])
//! - the bracket width drops below [`Config::epsilon`] ([`Status::Converged`]),
//!   reporting the bracket midpoint
//! - the iteration budget runs out ([`Error::Convergence`]), carrying the best
//!   bracket found so far
//!
//! Bracket validity is checked once, before the first midpoint. The update
//! rule preserves the sign change, so it is never re-verified.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per function evaluation: [`Event::Low`] and
//! [`Event::High`] for the endpoints, then [`Event::Midpoint`] for each
//! iteration. Observers can return [`Action::StopEarly`] to halt and receive
//! the midpoint of the current bracket.

mod action;
mod bracket;
mod config;
mod error;
mod event;
mod solution;
mod state;


pub use action::Action;
pub use bracket::{Bracket, BracketError, Sign};
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use halve_core::{Function, Observer};

use bracket::Bounds;
use state::State;

/// Finds a root of `f` in `bracket` using the bisection method.
///
/// The observer receives an [`Event`] for every function evaluation.
/// See the [module docs](self) for details on termination and events.
///
/// # Errors
///
/// Returns an error if the bracket is invalid, the function returns a
/// non-finite value, or the iteration budget runs out before convergence.
pub fn solve<F, Obs>(
    f: &F,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Function,
    Obs: Observer<Event, Action>,
{
    let bounds = Bounds::new(bracket)?;
    let stopped = |iters| {
        Solution::from_bracket(
            [bounds.low, bounds.high],
            Status::StoppedByObserver,
            iters,
            config,
        )
    };

    let f_low = f.eval(bounds.low);
    if let Some(action) = observer.observe(&Event::Low {
        x: bounds.low,
        value: f_low,
    }) {
        match action {
            Action::StopEarly => return Ok(stopped(0)),
        }
    }
    check_finite(bounds.low, f_low)?;
    if is_zero(f_low) {
        return Ok(Solution::exact(bounds.low, 0, config));
    }

    let f_high = f.eval(bounds.high);
    if let Some(action) = observer.observe(&Event::High {
        x: bounds.high,
        value: f_high,
    }) {
        match action {
            Action::StopEarly => return Ok(stopped(0)),
        }
    }
    check_finite(bounds.high, f_high)?;
    if is_zero(f_high) {
        return Ok(Solution::exact(bounds.high, 0, config));
    }

    let mut iters = 0;
    let mut state = State::check(Bracket::new(bounds, f_low, f_high)?, iters, config);

    loop {
        state = match state {
            State::Searching(bracket) => {
                iters += 1;
                let mid = bracket.midpoint();
                let value = f.eval(mid);

                let event = Event::Midpoint {
                    iter: iters,
                    x: mid,
                    value,
                    bracket,
                };
                if let Some(action) = observer.observe(&event) {
                    match action {
                        Action::StopEarly => {
                            return Ok(Solution::from_bracket(
                                bracket.as_array(),
                                Status::StoppedByObserver,
                                iters,
                                config,
                            ));
                        }
                    }
                }

                check_finite(mid, value)?;
                match State::after_midpoint(bracket, mid, value) {
                    State::Searching(next) => State::check(next, iters, config),
                    other => other,
                }
            }
            State::ExactHit(x) => return Ok(Solution::exact(x, iters, config)),
            State::Converged(bracket) => return Ok(Solution::converged(&bracket, iters, config)),
            State::Exceeded(bracket) => {
                return Err(Error::Convergence {
                    iters,
                    low: bracket.low(),
                    high: bracket.high(),
                });
            }
        };
    }
}

/// Runs bisection without observation.
///
/// # Errors
///
/// Returns an error if the bracket is invalid, the function returns a
/// non-finite value, or the iteration budget runs out before convergence.
pub fn solve_unobserved<F: Function>(
    f: &F,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error> {
    solve(f, bracket, config, ())
}

/// Finds a root of `f` between `low` and `high`.
///
/// This is a convenience wrapper that builds a [`Config`] from the raw
/// tolerance, iteration budget and display precision.
///
/// # Errors
///
/// Returns [`Error::InvalidTolerance`] if `epsilon` is not finite and
/// positive, and otherwise the same errors as [`solve`].
pub fn find_root<F: Function>(
    f: &F,
    low: f64,
    high: f64,
    epsilon: f64,
    max_iters: usize,
    decimal_places: Option<u32>,
) -> Result<Solution, Error> {
    let config = Config::new(epsilon, max_iters)?;
    let config = match decimal_places {
        Some(places) => config.with_decimal_places(places),
        None => config,
    };
    solve_unobserved(f, [low, high], &config)
}

fn check_finite(x: f64, value: f64) -> Result<(), Error> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::NonFiniteValue { x, value })
    }
}

#[allow(clippy::float_cmp)]
fn is_zero(value: f64) -> bool {
    value == 0.0
}
