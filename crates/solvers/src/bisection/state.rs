use super::{Bracket, Config, Sign};

/// Where a bisection solve stands between evaluations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum State {
    /// The bracket is still too wide; evaluate its midpoint next.
    Searching(Bracket),

    /// The function evaluated to exactly zero at this x.
    ExactHit(f64),

    /// The bracket width dropped below the tolerance.
    Converged(Bracket),

    /// The iteration budget ran out before the bracket converged.
    Exceeded(Bracket),
}

impl State {
    /// Classifies a bracket before the next midpoint evaluation.
    ///
    /// Convergence is checked before the budget, so a bracket that converges
    /// on the final allowed iteration is reported as converged.
    pub(super) fn check(bracket: Bracket, iters: usize, config: &Config) -> Self {
        if bracket.is_converged(config.epsilon()) {
            State::Converged(bracket)
        } else if iters >= config.max_iters() {
            State::Exceeded(bracket)
        } else {
            State::Searching(bracket)
        }
    }

    /// Applies a finite midpoint evaluation to a searching bracket.
    #[allow(clippy::float_cmp)]
    pub(super) fn after_midpoint(bracket: Bracket, mid: f64, value: f64) -> Self {
        if value == 0.0 {
            State::ExactHit(mid)
        } else {
            State::Searching(bracket.bisect(mid, Sign::of(value)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::bisection::bracket::Bounds;

    fn bracket(low: f64, high: f64) -> Bracket {
        let bounds = Bounds::new([low, high]).expect("valid bounds");
        Bracket::new(bounds, 1.0, -1.0).expect("valid bracket")
    }

    #[test]
    fn check_prefers_convergence_over_budget() {
        let config = Config::new(0.5, 3).expect("valid config");
        let narrow = bracket(0.0, 0.25);

        assert_eq!(State::check(narrow, 3, &config), State::Converged(narrow));
    }

    #[test]
    fn check_reports_exceeded_budget() {
        let config = Config::new(0.5, 3).expect("valid config");
        let wide = bracket(0.0, 4.0);

        assert_eq!(State::check(wide, 2, &config), State::Searching(wide));
        assert_eq!(State::check(wide, 3, &config), State::Exceeded(wide));
    }

    #[test]
    fn zero_value_is_exact_hit() {
        let b = bracket(-1.0, 1.0);
        assert_eq!(State::after_midpoint(b, 0.0, 0.0), State::ExactHit(0.0));
        assert_eq!(State::after_midpoint(b, 0.0, -0.0), State::ExactHit(0.0));
    }

    #[test]
    fn midpoint_keeps_sign_change() {
        // Positive at low, negative at high.
        let b = bracket(0.0, 4.0);

        let State::Searching(next) = State::after_midpoint(b, 2.0, 3.0) else {
            panic!("expected searching state");
        };
        assert_eq!(next.as_array(), [2.0, 4.0]);

        let State::Searching(next) = State::after_midpoint(next, 3.0, -3.0) else {
            panic!("expected searching state");
        };
        assert_eq!(next.as_array(), [2.0, 3.0]);
    }
}
