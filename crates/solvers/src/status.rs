/// Indicates whether a solver converged or hit the iteration limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Status {
    /// Converged according to the configured tolerance.
    Converged,

    /// Reached the iteration limit without converging.
    ///
    /// The estimate is still the best the solver produced; callers that need
    /// a guarantee should check the residual themselves.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}
