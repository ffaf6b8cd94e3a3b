use crate::Status;

/// The result of a Steffensen solve.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Estimate of the root.
    pub x: f64,

    /// Residual at the last iterate tested for convergence.
    ///
    /// On convergence the estimate is one step past that iterate.
    /// NaN if no iteration ran.
    pub residual: f64,

    /// Iteration count when the solver finished.
    pub iters: usize,
}
