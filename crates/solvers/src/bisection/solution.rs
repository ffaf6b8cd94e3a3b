use crate::Status;

use super::Bracket;

/// The result of a bisection solve.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Estimate of the root.
    pub x: f64,

    /// Residual at the last evaluated midpoint.
    ///
    /// With [`Status::MaxIters`] the estimate has moved on to the next
    /// midpoint, which was never evaluated. NaN if no midpoint was evaluated.
    pub residual: f64,

    /// Bracket when the solver finished.
    pub bracket: Bracket,

    /// Iteration count when the solver finished.
    pub iters: usize,
}

impl Solution {
    /// Constructs a solution for an endpoint that is an exact root.
    pub(super) fn exact(x: f64) -> Self {
        Self {
            status: Status::Converged,
            x,
            residual: 0.0,
            bracket: Bracket::point(x),
            iters: 0,
        }
    }
}
