/// Iteration event emitted by the Steffensen solver.
#[derive(Debug, Clone, Copy)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// Iterate before the update.
    pub x: f64,

    /// Residual `f(x)`.
    pub residual: f64,

    /// Slope proxy `f(x + f(x)) / f(x) - 1`.
    pub slope: f64,

    /// Proposed next iterate `x - f(x) / slope`.
    pub next: f64,
}
