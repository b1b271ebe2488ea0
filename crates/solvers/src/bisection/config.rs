use thiserror::Error;

/// Configuration for the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    epsilon: f64,
    max_iters: usize,
    decimal_places: Option<u32>,
}

/// Errors that can occur when validating a bisection solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("epsilon must be finite and positive")]
    Epsilon,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            epsilon: Self::DEFAULT_EPSILON,
            max_iters: Self::DEFAULT_MAX_ITERS,
            decimal_places: None,
        }
    }
}

impl Config {
    pub const DEFAULT_EPSILON: f64 = 1e-4;
    pub const DEFAULT_MAX_ITERS: usize = 1000;

    /// Creates a new config with a validated tolerance.
    ///
    /// The solver stops once the bracket width drops below `epsilon`,
    /// or fails after `max_iters` midpoint evaluations.
    ///
    /// # Errors
    ///
    /// Returns an error if `epsilon` is not finite and strictly positive.
    pub fn new(epsilon: f64, max_iters: usize) -> Result<Self, ConfigError> {
        if !epsilon.is_finite() || epsilon <= 0.0 {
            return Err(ConfigError::Epsilon);
        }

        Ok(Self {
            epsilon,
            max_iters,
            decimal_places: None,
        })
    }

    /// Rounds the reported root to `places` decimal places.
    #[must_use]
    pub fn with_decimal_places(self, places: u32) -> Self {
        Self {
            decimal_places: Some(places),
            ..self
        }
    }

    /// Returns the bracket width tolerance.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Returns the maximum number of midpoint evaluations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the number of decimal places for the reported root, if any.
    #[must_use]
    pub fn decimal_places(&self) -> Option<u32> {
        self.decimal_places
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_constants() {
        let config = Config::default();
        assert_eq!(config.max_iters(), 1000);
        assert!((config.epsilon() - 1e-4).abs() < f64::EPSILON);
        assert_eq!(config.decimal_places(), None);
    }

    #[test]
    fn rejects_non_positive_epsilon() {
        assert_eq!(Config::new(0.0, 10), Err(ConfigError::Epsilon));
        assert_eq!(Config::new(-1e-3, 10), Err(ConfigError::Epsilon));
    }

    #[test]
    fn rejects_non_finite_epsilon() {
        assert_eq!(Config::new(f64::NAN, 10), Err(ConfigError::Epsilon));
        assert_eq!(Config::new(f64::INFINITY, 10), Err(ConfigError::Epsilon));
    }

    #[test]
    fn decimal_places_builder() {
        let config = Config::new(0.01, 50)
            .expect("valid config")
            .with_decimal_places(2);
        assert_eq!(config.decimal_places(), Some(2));
        assert_eq!(config.max_iters(), 50);
    }
}
