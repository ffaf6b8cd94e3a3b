//! Steffensen's method for scalar root finding.
//!
//! # Algorithm
//!
//! From the current iterate `xn`, Steffensen's method evaluates
//! `f(xn)` and `f(xn + f(xn))` and forms the slope proxy
//!
//! ```text
//! g(xn) = f(xn + f(xn)) / f(xn) - 1
//! ```
//!
//! which stands in for the derivative, then takes a Newton-like step
//! `xn - f(xn) / g(xn)`. Near a simple root this converges quadratically
//! without requiring `f'`.
//!
//! # Limitations
//!
//! - **No bracket**: there is no safeguard against divergence, so the guess
//!   must already be reasonably close to a root.
//! - **Unguarded division**: away from convergence, a zero `f(xn)` or zero
//!   slope proxy produces Inf or NaN, which propagates to the result.
//!
//! # Termination
//!
//! The solver stops once `|f(xn)| <= epsilon`, tested on the residual of the
//! iterate before its update. The update from that iterate is kept only when
//! it is finite, otherwise the iterate itself is returned. That happens at an
//! exact root (`0 / NaN`) and when the residual is so small that
//! `xn + f(xn)` rounds to `xn`: the slope proxy is then exactly zero and the
//! step infinite. Outside the tolerance, non-finite steps are not guarded.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per iteration, after computing the step
//! and before testing for convergence. [`Action::StopEarly`] keeps the
//! iterate just evaluated, not the proposed step.

mod error;
mod event;
mod solution;

pub use error::Error;
pub use event::Event;
pub use solution::Solution;

use fixpoint_core::{Observer, RealFunction};

use crate::{Action, Config, Status};

/// Finds a root of `f` near `x` using the default Steffensen config.
///
/// No validation is performed. Poor guesses may diverge or produce NaN.
///
/// # Example
///
/// ```
/// use fixpoint_solvers::steffensen_root;
///
/// let root = steffensen_root(|x: f64| 2.0 - x * x, 2.0);
/// assert!((root - std::f64::consts::SQRT_2).abs() <= 4.0 * f64::EPSILON);
/// ```
#[must_use]
pub fn steffensen_root(f: impl RealFunction, x: f64) -> f64 {
    iterate(&f, x, &Config::STEFFENSEN, ()).x
}

/// Finds a root of `f` near the guess `x` using Steffensen's method.
///
/// # Errors
///
/// Returns [`Error::NonFiniteGuess`] if `x` is NaN or infinite.
pub fn solve<F, Obs>(f: &F, x: f64, config: &Config, observer: Obs) -> Result<Solution, Error>
where
    F: RealFunction + ?Sized,
    Obs: Observer<Event, Action>,
{
    if !x.is_finite() {
        return Err(Error::NonFiniteGuess { x });
    }

    Ok(iterate(f, x, config, observer))
}

/// Runs Steffensen's method without observation.
///
/// # Errors
///
/// Returns [`Error::NonFiniteGuess`] if `x` is NaN or infinite.
pub fn solve_unobserved<F>(f: &F, x: f64, config: &Config) -> Result<Solution, Error>
where
    F: RealFunction + ?Sized,
{
    solve(f, x, config, ())
}

fn iterate<F, Obs>(f: &F, x: f64, config: &Config, mut observer: Obs) -> Solution
where
    F: RealFunction + ?Sized,
    Obs: Observer<Event, Action>,
{
    let mut xn = x;
    let mut residual = f64::NAN;

    for iter in 1..=config.max_iters() {
        residual = f.eval(xn);
        let slope = f.eval(xn + residual) / residual - 1.0;
        let next = xn - residual / slope;

        let event = Event {
            iter,
            x: xn,
            residual,
            slope,
            next,
        };

        if let Some(action) = observer.observe(&event) {
            match action {
                Action::StopEarly => {
                    return Solution {
                        status: Status::StoppedByObserver,
                        x: xn,
                        residual,
                        iters: iter,
                    };
                }
            }
        }

        if config.is_within(residual) {
            return Solution {
                status: Status::Converged,
                x: if next.is_finite() { next } else { xn },
                residual,
                iters: iter,
            };
        }

        xn = next;
    }

    Solution {
        status: Status::MaxIters,
        x: xn,
        residual,
        iters: config.max_iters(),
    }
}
