use halve_core::Observer;
use log::{Level, debug, info, log_enabled, warn};

use crate::traits::{HasBracket, HasValue};

/// Narrates solver progress through the [`log`] facade.
///
/// Endpoint and midpoint evaluations are logged at `debug`, exact zeros at
/// `info`, and non-finite function values at `warn`. The observer never
/// steers the solver.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver {
    evals: usize,
}

impl LogObserver {
    /// Creates a new log observer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns how many evaluations have been narrated.
    #[must_use]
    pub fn evals(&self) -> usize {
        self.evals
    }
}

impl<E, A> Observer<E, A> for LogObserver
where
    E: HasValue + HasBracket,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.evals += 1;

        let (x, value) = (event.x(), event.value());

        if !value.is_finite() {
            warn!("f({x}) = {value} is not finite");
            return None;
        }

        match event.bracket() {
            Some([low, high]) => {
                if log_enabled!(Level::Debug) {
                    let side = if value < 0.0 { "negative" } else { "positive" };
                    debug!(
                        "iter {}: bracket [{low}, {high}], f({x}) = {value} is {side}",
                        event.iter()
                    );
                }
            }
            None => debug!("endpoint f({x}) = {value}"),
        }

        #[allow(clippy::float_cmp)]
        if value == 0.0 {
            info!("f is exactly zero at x = {x}");
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use halve_solvers::bisection::{self, Config};

    #[test]
    fn counts_every_evaluation() {
        let mut observer = LogObserver::new();
        let config = Config::new(0.01, 100).expect("valid config");

        let solution = bisection::solve(
            &|x: f64| x * x - 2.0,
            [0.0, 2.0],
            &config,
            |event: &bisection::Event| -> Option<bisection::Action> { observer.observe(event) },
        )
        .expect("should solve");

        assert_eq!(observer.evals(), solution.iters + 2);
    }

    #[test]
    fn never_stops_the_solver() {
        let mut observer = LogObserver::new();
        let event = bisection::Event::Low {
            x: 1.0,
            value: f64::NAN,
        };

        let action: Option<bisection::Action> = observer.observe(&event);
        assert!(action.is_none());
    }
}
