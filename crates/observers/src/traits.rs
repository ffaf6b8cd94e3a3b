//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across different solvers.
//!
//! # Event traits
//!
//! - [`HasIter`] — events that carry a 1-based iteration counter
//! - [`HasX`] — events that carry the point just evaluated
//! - [`HasResidual`] — events that carry a residual value
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use fixpoint_core::Observer;
//! use fixpoint_observers::traits::{CanStopEarly, HasResidual};
//! use fixpoint_solvers::{Config, Status, heron};
//!
//! struct FirstBelow(f64);
//!
//! impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for FirstBelow {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.residual().abs() < self.0).then(A::stop_early)
//!     }
//! }
//!
//! let solution = heron::solve(2.0, &Config::HERON, FirstBelow(1e-3)).unwrap();
//! assert_eq!(solution.status, Status::StoppedByObserver);
//! ```

use fixpoint_solvers::{Action, bisection, heron, steffensen};

/// An event that carries the iteration it was emitted from.
pub trait HasIter {
    /// Returns the 1-based iteration counter.
    fn iter(&self) -> usize;
}

/// An event that carries the point the solver just evaluated.
pub trait HasX {
    /// Returns the evaluated point.
    fn x(&self) -> f64;
}

/// An event that carries a residual value.
pub trait HasResidual {
    /// Returns the residual for this event.
    ///
    /// Returns `f64::NAN` when no residual is available.
    fn residual(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- bisection::Event ---

impl HasIter for bisection::Event {
    fn iter(&self) -> usize {
        self.iter
    }
}

impl HasX for bisection::Event {
    fn x(&self) -> f64 {
        self.x
    }
}

impl HasResidual for bisection::Event {
    fn residual(&self) -> f64 {
        self.residual
    }
}

// --- heron::Event ---
//
// The evaluated point is the current estimate and the residual is its
// relative error.

impl HasIter for heron::Event {
    fn iter(&self) -> usize {
        self.iter
    }
}

impl HasX for heron::Event {
    fn x(&self) -> f64 {
        self.approx
    }
}

impl HasResidual for heron::Event {
    fn residual(&self) -> f64 {
        self.relative_error
    }
}

// --- steffensen::Event ---

impl HasIter for steffensen::Event {
    fn iter(&self) -> usize {
        self.iter
    }
}

impl HasX for steffensen::Event {
    fn x(&self) -> f64 {
        self.x
    }
}

impl HasResidual for steffensen::Event {
    fn residual(&self) -> f64 {
        self.residual
    }
}

// --- CanStopEarly ---

impl CanStopEarly for Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
