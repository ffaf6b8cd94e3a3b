use crate::Status;

/// The result of a Heron square-root computation.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// The input whose square root was computed.
    pub x: f64,

    /// Estimate of the square root.
    pub root: f64,

    /// Relative error `(x - root²) / x` of the reported estimate.
    pub relative_error: f64,

    /// Iteration count when the solver finished.
    pub iters: usize,
}
