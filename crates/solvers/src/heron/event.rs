/// Iteration event emitted by Heron's method.
#[derive(Debug, Clone, Copy)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// Current estimate of the square root.
    pub approx: f64,

    /// Relative error `(x - approx²) / x` of the current estimate.
    pub relative_error: f64,
}
