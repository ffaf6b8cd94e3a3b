//! Heron's (Babylonian) method for square roots.
//!
//! Starting from `approx = x`, each iteration replaces the estimate with the
//! average of `approx` and `x / approx`, which is Newton's method applied to
//! `approx² - x`. Convergence is quadratic once the estimate is close: the
//! number of correct digits roughly doubles per iteration.
//!
//! The convergence test is on the relative error `(x - approx²) / x`, checked
//! before each update.
//!
//! A starting estimate of `x` is far from the root for very large or very
//! small inputs, and the first iterations then only halve the error. The
//! default budget of 16 iterations covers inputs of moderate magnitude; pass
//! a larger [`Config`] for extreme ones.

mod error;
mod event;
mod solution;

pub use error::Error;
pub use event::Event;
pub use solution::Solution;

use fixpoint_core::Observer;

use crate::{Action, Config, Status};

/// Computes the square root of `x` using the default Heron config.
///
/// `x` is expected to be positive but is not validated: zero yields NaN and
/// a negative input yields a meaningless estimate, both propagated through
/// the arithmetic.
///
/// # Example
///
/// ```
/// use fixpoint_solvers::heron_sqrt;
///
/// let root = heron_sqrt(2.0);
/// assert!((root * root - 2.0).abs() / 2.0 <= f64::EPSILON);
/// ```
#[must_use]
pub fn heron_sqrt(x: f64) -> f64 {
    iterate(x, &Config::HERON, ()).root
}

/// Computes the square root of `x` using Heron's method.
///
/// The observer receives an [`Event`] before each convergence test and may
/// return [`Action::StopEarly`] to keep the estimate just tested.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `x` is not finite and positive.
pub fn solve<Obs>(x: f64, config: &Config, observer: Obs) -> Result<Solution, Error>
where
    Obs: Observer<Event, Action>,
{
    if !x.is_finite() || x <= 0.0 {
        return Err(Error::InvalidInput { x });
    }

    Ok(iterate(x, config, observer))
}

/// Runs Heron's method without observation.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `x` is not finite and positive.
pub fn solve_unobserved(x: f64, config: &Config) -> Result<Solution, Error> {
    solve(x, config, ())
}

fn iterate<Obs>(x: f64, config: &Config, mut observer: Obs) -> Solution
where
    Obs: Observer<Event, Action>,
{
    let mut approx = x;

    for iter in 1..=config.max_iters() {
        let relative_error = relative_error(x, approx);

        let event = Event {
            iter,
            approx,
            relative_error,
        };

        if let Some(action) = observer.observe(&event) {
            match action {
                Action::StopEarly => {
                    return Solution {
                        status: Status::StoppedByObserver,
                        x,
                        root: approx,
                        relative_error,
                        iters: iter,
                    };
                }
            }
        }

        if config.is_within(relative_error) {
            return Solution {
                status: Status::Converged,
                x,
                root: approx,
                relative_error,
                iters: iter,
            };
        }

        approx = 0.5 * (approx + x / approx);
    }

    Solution {
        status: Status::MaxIters,
        x,
        root: approx,
        relative_error: relative_error(x, approx),
        iters: config.max_iters(),
    }
}

/// Relative error of `approx` as a square root of `x`.
fn relative_error(x: f64, approx: f64) -> f64 {
    (x - approx * approx) / x
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::f64::consts::SQRT_2;

    use approx::assert_relative_eq;

    #[test]
    fn square_root_of_two() {
        let solution = solve_unobserved(2.0, &Config::HERON).expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert!(solution.iters < Config::HERON.max_iters());
        assert!(solution.relative_error.abs() <= f64::EPSILON);
        assert_relative_eq!(solution.root, SQRT_2, epsilon = 1e-15);
        assert_relative_eq!(solution.x, 2.0);
    }

    #[test]
    fn matches_std_sqrt_for_moderate_inputs() {
        for x in [0.25, 0.5, 3.0, 10.0, 100.0, 612.0, 12_345.678] {
            let root = heron_sqrt(x);
            assert!(root >= 0.0, "negative root for x={x}");
            assert_relative_eq!(root, x.sqrt(), max_relative = 1e-15);
        }
    }

    #[test]
    fn perfect_square_converges_exactly() {
        let solution = solve_unobserved(16.0, &Config::HERON).expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.root, 4.0);
        assert_relative_eq!(solution.relative_error, 0.0);
    }

    #[test]
    fn one_is_its_own_root() {
        let solution = solve_unobserved(1.0, &Config::HERON).expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert_eq!(solution.iters, 1);
        assert_relative_eq!(solution.root, 1.0);
    }

    #[test]
    fn observer_sees_every_estimate() {
        let mut estimates = Vec::new();
        let observer = |event: &Event| {
            estimates.push(event.approx);
            None
        };

        let solution = solve(2.0, &Config::HERON, observer).expect("should solve");

        assert_eq!(estimates.len(), solution.iters);
        assert_relative_eq!(estimates[0], 2.0);
        assert_relative_eq!(estimates[1], 1.5);
        assert_relative_eq!(estimates[2], 17.0 / 12.0);
    }

    #[test]
    fn observer_can_stop_iteration() {
        let observer = |event: &Event| (event.iter == 2).then_some(Action::StopEarly);

        let solution = solve(2.0, &Config::HERON, observer).expect("should stop cleanly");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.iters, 2);
        assert_relative_eq!(solution.root, 1.5);
        assert_relative_eq!(solution.relative_error, -0.125);
    }

    #[test]
    fn small_budget_reports_max_iters() {
        let config = Config::new(3, f64::EPSILON).expect("valid config");

        let solution = solve_unobserved(2.0, &config).expect("should finish");

        assert_eq!(solution.status, Status::MaxIters);
        assert_eq!(solution.iters, 3);
        // Three updates from 2.0: 1.5, 17/12, 577/408.
        assert_relative_eq!(solution.root, 577.0 / 408.0, epsilon = 1e-15);
        assert_relative_eq!(
            solution.relative_error,
            relative_error(2.0, solution.root)
        );
    }

    #[test]
    fn zero_iters_returns_input() {
        let config = Config::new(0, f64::EPSILON).expect("valid config");

        let solution = solve_unobserved(9.0, &config).expect("should finish");

        assert_eq!(solution.status, Status::MaxIters);
        assert_relative_eq!(solution.root, 9.0);
    }

    #[test]
    fn rejects_invalid_input() {
        for x in [0.0, -4.0, f64::NAN, f64::INFINITY] {
            let result = solve_unobserved(x, &Config::HERON);
            assert!(matches!(result, Err(Error::InvalidInput { .. })), "x={x}");
        }
    }

    #[test]
    fn plain_function_propagates_nan_for_zero() {
        assert!(heron_sqrt(0.0).is_nan());
    }
}
