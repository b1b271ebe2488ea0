use halve_core::Observer;

/// Records a copy of every event the solver emits.
///
/// Useful for printing an iteration trace after the solve, or for asserting
/// on solver behaviour in tests.
#[derive(Debug, Clone)]
pub struct Recorder<E> {
    events: Vec<E>,
}

impl<E> Default for Recorder<E> {
    fn default() -> Self {
        Self { events: Vec::new() }
    }
}

impl<E> Recorder<E> {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events in emission order.
    #[must_use]
    pub fn events(&self) -> &[E] {
        &self.events
    }

    /// Consumes the recorder and returns its events.
    #[must_use]
    pub fn into_events(self) -> Vec<E> {
        self.events
    }
}

impl<E: Clone, A> Observer<E, A> for Recorder<E> {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.events.push(event.clone());
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use halve_solvers::bisection::{self, Action, Config, Event};

    use crate::traits::HasBracket;

    #[test]
    fn records_events_in_order() {
        let mut recorder = Recorder::new();
        let config = Config::new(0.1, 100).expect("valid config");

        let solution = bisection::solve(
            &|x: f64| x - 0.3,
            [0.0, 1.0],
            &config,
            |event: &Event| -> Option<Action> { recorder.observe(event) },
        )
        .expect("should solve");

        let events = recorder.into_events();
        assert_eq!(events.len(), solution.iters + 2);
        assert!(matches!(events[0], Event::Low { .. }));
        assert!(matches!(events[1], Event::High { .. }));

        let widths: Vec<f64> = events
            .iter()
            .filter_map(HasBracket::bracket)
            .map(|[low, high]| high - low)
            .collect();
        assert_relative_eq!(widths[0], 1.0);
        assert_relative_eq!(widths[1], 0.5);
    }
}
