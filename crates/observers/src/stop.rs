use halve_core::Observer;

use crate::traits::{CanStopEarly, HasBracket, HasValue};

/// Stops the solver once a midpoint value is within a tolerance of zero.
///
/// Bisection only stops on its own for an exact zero or a narrow enough
/// bracket. Floating-point functions rarely hit zero exactly, so this
/// observer accepts any midpoint with `|f(x)| <= tolerance`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueTolerance {
    tolerance: f64,
    hit: Option<f64>,
}

impl ValueTolerance {
    /// Creates an observer that stops when `|f(x)| <= tolerance`.
    #[must_use]
    pub fn new(tolerance: f64) -> Self {
        Self {
            tolerance: tolerance.abs(),
            hit: None,
        }
    }

    /// Returns the midpoint that triggered the stop, if any.
    #[must_use]
    pub fn hit(&self) -> Option<f64> {
        self.hit
    }
}

impl<E, A> Observer<E, A> for ValueTolerance
where
    E: HasValue + HasBracket,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        // Endpoints are handled by the solver's bracket validation.
        event.bracket()?;

        if event.value().abs() <= self.tolerance {
            self.hit = Some(event.x());
            return Some(A::stop_early());
        }
        None
    }
}
