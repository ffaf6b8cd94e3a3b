//! Bisection method for scalar root finding.
//!
//! # Algorithm
//!
//! Bisection needs two points whose residuals have opposite signs. It labels
//! the endpoint with the negative residual `left` and the one with the
//! positive residual `right`, then repeatedly evaluates the midpoint and
//! replaces whichever endpoint shares its sign. The endpoints may be given in
//! either order and `f` may be increasing or decreasing across them.
//!
//! After `n` iterations the estimate is within `|b - a| / 2^n` of a root, so
//! convergence is linear: one bit per iteration.
//!
//! # Termination
//!
//! - If either endpoint is an exact root (`f(x) == 0`) it is returned
//!   immediately without iterating.
//! - Otherwise the solver stops as soon as `|f(midpoint)| <= epsilon`.
//! - If the budget runs out first, the last midpoint is returned with
//!   [`Status::MaxIters`]. This is not an error.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per midpoint evaluation, before testing
//! for convergence. Observers can return [`Action::StopEarly`] to halt and
//! keep the midpoint just evaluated.

mod bracket;
mod error;
mod event;
mod solution;

pub use bracket::Bracket;
pub use error::Error;
pub use event::Event;
pub use solution::Solution;

use fixpoint_core::{Observer, RealFunction};

use crate::{Action, Config, Status};

/// Finds a root of `f` between `a` and `b` using the default bisection config.
///
/// This keeps the bare contract of the method: no validation beyond the sign
/// check, and a result that is always a plain `f64`.
///
/// Returns `a` or `b` unchanged if `f` is exactly zero there, and NaN if
/// `f(a)` and `f(b)` have the same sign. Callers must check for NaN.
///
/// # Example
///
/// ```
/// use fixpoint_solvers::bisect;
///
/// let pi = bisect(f64::sin, 3.0, 4.0);
/// assert!((pi - std::f64::consts::PI).abs() < 1e-15);
///
/// assert!(bisect(|x: f64| x * x + 1.0, -1.0, 1.0).is_nan());
/// ```
#[must_use]
pub fn bisect(f: impl RealFunction, a: f64, b: f64) -> f64 {
    let residuals = [f.eval(a), f.eval(b)];

    match iterate(&f, [a, b], residuals, &Config::BISECTION, ()) {
        Ok(solution) => solution.x,
        Err(_) => f64::NAN,
    }
}

/// Finds a root of `f` within `bracket` using the bisection method.
///
/// The observer receives an [`Event`] for each midpoint evaluation.
/// See the [module docs](self) for details on event timing.
///
/// # Errors
///
/// Returns an error if an endpoint or its residual is non-finite, or if the
/// endpoint residuals do not change sign.
pub fn solve<F, Obs>(
    f: &F,
    bracket: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    F: RealFunction + ?Sized,
    Obs: Observer<Event, Action>,
{
    for value in bracket {
        if !value.is_finite() {
            return Err(Error::NonFiniteBracket { value });
        }
    }

    let mut residuals = [0.0; 2];
    for (x, residual) in bracket.into_iter().zip(residuals.iter_mut()) {
        *residual = f.eval(x);
        if !residual.is_finite() {
            return Err(Error::NonFiniteResidual {
                x,
                residual: *residual,
            });
        }
    }

    iterate(f, bracket, residuals, config, observer)
}

/// Runs bisection without observation.
///
/// # Errors
///
/// Returns an error if an endpoint or its residual is non-finite, or if the
/// endpoint residuals do not change sign.
pub fn solve_unobserved<F>(f: &F, bracket: [f64; 2], config: &Config) -> Result<Solution, Error>
where
    F: RealFunction + ?Sized,
{
    solve(f, bracket, config, ())
}

/// Runs the bisection loop from already evaluated endpoints.
///
/// The only error is a missing sign change.
#[allow(clippy::float_cmp)]
fn iterate<F, Obs>(
    f: &F,
    [a, b]: [f64; 2],
    [a_residual, b_residual]: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: RealFunction + ?Sized,
    Obs: Observer<Event, Action>,
{
    if a_residual == 0.0 {
        return Ok(Solution::exact(a));
    }

    if b_residual == 0.0 {
        return Ok(Solution::exact(b));
    }

    let mut bracket =
        Bracket::orient(a, a_residual, b, b_residual).ok_or(Error::NoSignChange {
            a,
            b,
            a_residual,
            b_residual,
        })?;

    let mut x = bracket.midpoint();
    let mut residual = f64::NAN;

    for iter in 1..=config.max_iters() {
        residual = f.eval(x);

        let event = Event {
            iter,
            x,
            residual,
            bracket,
        };

        if let Some(action) = observer.observe(&event) {
            match action {
                Action::StopEarly => {
                    return Ok(Solution {
                        status: Status::StoppedByObserver,
                        x,
                        residual,
                        bracket,
                        iters: iter,
                    });
                }
            }
        }

        if config.is_within(residual) {
            return Ok(Solution {
                status: Status::Converged,
                x,
                residual,
                bracket,
                iters: iter,
            });
        }

        bracket.shrink(x, residual);
        x = bracket.midpoint();
    }

    Ok(Solution {
        status: Status::MaxIters,
        x,
        residual,
        bracket,
        iters: config.max_iters(),
    })
}
