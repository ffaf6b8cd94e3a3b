use thiserror::Error;

/// Iteration budget and convergence tolerance for a solver.
///
/// Each solver has its own recognized defaults, available as
/// [`Config::BISECTION`], [`Config::HERON`] and [`Config::STEFFENSEN`].
/// The plain solver functions always use these defaults.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Config {
    max_iters: usize,
    epsilon: f64,
}

/// Errors that can occur when validating a solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("epsilon must be finite and non-negative")]
    Epsilon,
}

impl Config {
    /// Bisection defaults: 64 iterations, tolerance of one machine epsilon.
    ///
    /// A 52-bit mantissa means a unit-width bracket cannot shrink further
    /// after about 52 halvings, so 64 leaves room for wider brackets.
    pub const BISECTION: Self = Self {
        max_iters: 64,
        epsilon: f64::EPSILON,
    };

    /// Heron defaults: 16 iterations, tolerance of one machine epsilon.
    pub const HERON: Self = Self {
        max_iters: 16,
        epsilon: f64::EPSILON,
    };

    /// Steffensen defaults: 16 iterations, tolerance of four machine epsilon.
    pub const STEFFENSEN: Self = Self {
        max_iters: 16,
        epsilon: 4.0 * f64::EPSILON,
    };

    /// Creates a new config with a validated tolerance.
    ///
    /// A `max_iters` of zero is allowed; the solver then returns its
    /// starting estimate with [`Status::MaxIters`](crate::Status::MaxIters).
    ///
    /// # Errors
    ///
    /// Returns an error if `epsilon` is negative or non-finite.
    pub fn new(max_iters: usize, epsilon: f64) -> Result<Self, ConfigError> {
        if !epsilon.is_finite() || epsilon < 0.0 {
            return Err(ConfigError::Epsilon);
        }

        Ok(Self { max_iters, epsilon })
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the convergence tolerance.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Returns true if `value` is within the tolerance of zero.
    #[must_use]
    pub(crate) fn is_within(&self, value: f64) -> bool {
        value.abs() <= self.epsilon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn defaults_match_machine_epsilon_multiples() {
        assert_eq!(Config::BISECTION.max_iters(), 64);
        assert_relative_eq!(Config::BISECTION.epsilon(), 2.220_446_049_250_313e-16);

        assert_eq!(Config::HERON.max_iters(), 16);
        assert_relative_eq!(Config::HERON.epsilon(), 2.220_446_049_250_313e-16);

        assert_eq!(Config::STEFFENSEN.max_iters(), 16);
        assert_relative_eq!(Config::STEFFENSEN.epsilon(), 8.881_784_197_001_252e-16);
    }

    #[test]
    fn new_accepts_valid_tolerances() {
        let config = Config::new(10, 1e-9).expect("valid config");
        assert_eq!(config.max_iters(), 10);
        assert_relative_eq!(config.epsilon(), 1e-9);

        let config = Config::new(0, 0.0).expect("zero is allowed");
        assert_eq!(config.max_iters(), 0);
        assert_relative_eq!(config.epsilon(), 0.0);
    }

    #[test]
    fn new_rejects_bad_epsilon() {
        assert_eq!(Config::new(10, -1e-9), Err(ConfigError::Epsilon));
        assert_eq!(Config::new(10, f64::NAN), Err(ConfigError::Epsilon));
        assert_eq!(Config::new(10, f64::INFINITY), Err(ConfigError::Epsilon));
    }

    #[test]
    fn is_within_is_inclusive() {
        let config = Config::new(1, 0.5).expect("valid config");
        assert!(config.is_within(0.5));
        assert!(config.is_within(-0.5));
        assert!(!config.is_within(0.500_000_1));
        assert!(!config.is_within(f64::NAN));
    }
}
