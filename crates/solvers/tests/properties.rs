//! Property tests for the bisection solver.
//!
//! Brackets are built from small integers so every midpoint is exactly
//! representable, which keeps width comparisons exact.

use halve_solvers::bisection::{Action, Config, Event, Status, solve, solve_unobserved};
use proptest::prelude::*;

/// Generate `(low, width, root_fraction, decimal_exponent)` cases.
fn arb_case() -> impl Strategy<Value = (f64, f64, f64, i32)> {
    (-1000_i32..1000, 1_u32..=1024, 0.001_f64..0.999, 1_i32..=6).prop_map(
        |(low, width, fraction, exponent)| {
            (f64::from(low), f64::from(width), fraction, exponent)
        },
    )
}

proptest! {
    #[test]
    fn bracket_width_halves_each_iteration((low, width, fraction, exponent) in arb_case()) {
        let high = low + width;
        let root = low + width * fraction;
        let f = |x: f64| x - root;
        let config = Config::new(10_f64.powi(-exponent), 1000).expect("valid config");

        let mut widths = Vec::new();
        let observer = |event: &Event| -> Option<Action> {
            if let Some(bracket) = event.bracket() {
                widths.push(bracket.width());
            }
            None
        };
        let solution = solve(&f, [low, high], &config, observer).expect("should solve");

        prop_assert_eq!(widths.first().copied(), Some(width));
        for pair in widths.windows(2) {
            prop_assert_eq!(pair[1], pair[0] / 2.0);
        }
        if solution.status == Status::Converged {
            let last = widths.last().copied().unwrap_or(width);
            prop_assert_eq!(solution.width(), last / 2.0);
        }
    }

    #[test]
    fn terminates_within_log2_bound((low, width, fraction, exponent) in arb_case()) {
        let epsilon = 10_f64.powi(-exponent);
        let root = low + width * fraction;
        let config = Config::new(epsilon, 1000).expect("valid config");

        let solution = solve_unobserved(&|x: f64| x - root, [low, low + width], &config)
            .expect("should solve");

        // width / epsilon carries a factor of five, so it is never a power of two.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let bound = (width / epsilon).log2().ceil() as usize;
        prop_assert!(solution.iters <= bound, "{} > {}", solution.iters, bound);
        prop_assert!(solution.width() < epsilon);
        prop_assert!(solution.low <= root && root <= solution.high);
    }

    #[test]
    fn repeated_solves_are_bit_identical((low, width, fraction, exponent) in arb_case()) {
        let root = low + width * fraction;
        let f = |x: f64| (x - root).powi(3) + (x - root);
        let config = Config::new(10_f64.powi(-exponent), 1000).expect("valid config");

        let first = solve_unobserved(&f, [low, low + width], &config);
        let second = solve_unobserved(&f, [low, low + width], &config);

        match (first, second) {
            (Ok(a), Ok(b)) => {
                prop_assert_eq!(a.status, b.status);
                prop_assert_eq!(a.x.to_bits(), b.x.to_bits());
                prop_assert_eq!(a.low.to_bits(), b.low.to_bits());
                prop_assert_eq!(a.high.to_bits(), b.high.to_bits());
                prop_assert_eq!(a.iters, b.iters);
            }
            (a, b) => prop_assert_eq!(a, b),
        }
    }
}
