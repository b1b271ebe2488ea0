/// A scalar function that maps a real number to a real number.
///
/// Functions must be deterministic, always producing the same value for a
/// given input. Solvers rely on this to reason about sign changes without
/// re-evaluating points they have already seen.
///
/// Any `Fn(f64) -> f64` closure or function pointer implements this trait.
pub trait Function {
    /// Evaluates the function at `x`.
    fn eval(&self, x: f64) -> f64;
}

impl<F> Function for F
where
    F: Fn(f64) -> f64,
{
    fn eval(&self, x: f64) -> f64 {
        self(x)
    }
}
