//! Iterative solvers for scalar equations.
//!
//! Every solver here follows the same shape: iterate a scalar update rule
//! until a convergence test passes or the iteration budget runs out, then
//! return the final estimate. Running out of budget is not an error.
//!
//! # Solvers
//!
//! - [`bisection`] — halves a sign-changing bracket, linear convergence
//! - [`heron`] — Heron's (Babylonian) method for square roots
//! - [`steffensen`] — derivative-free root finding from a single guess,
//!   quadratic convergence
//!
//! Each solver module offers two entry points:
//!
//! - a plain function ([`bisect`], [`heron_sqrt`], [`steffensen_root`]) that
//!   uses the default [`Config`] and returns a bare `f64`, signalling an
//!   invalid bisection bracket with NaN;
//! - `solve` / `solve_unobserved`, which take a [`Config`] and an
//!   [`Observer`](fixpoint_core::Observer), validate their inputs, and report
//!   a [`Status`] alongside the estimate.
//!
//! # Example
//!
//! ```
//! use fixpoint_solvers::{bisect, heron_sqrt, steffensen_root};
//!
//! let pi = bisect(f64::sin, 3.0, 4.0);
//! assert!((pi - std::f64::consts::PI).abs() < 1e-15);
//!
//! let root_two = heron_sqrt(2.0);
//! assert!((root_two - std::f64::consts::SQRT_2).abs() < 1e-15);
//!
//! let root_two = steffensen_root(|x: f64| 2.0 - x * x, 2.0);
//! assert!((root_two - std::f64::consts::SQRT_2).abs() < 1e-15);
//! ```

mod action;
mod config;
mod status;

pub mod bisection;
pub mod heron;
pub mod steffensen;

pub use action::Action;
pub use bisection::bisect;
pub use config::{Config, ConfigError};
pub use heron::heron_sqrt;
pub use status::Status;
pub use steffensen::steffensen_root;
