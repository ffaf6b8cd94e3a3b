use super::Bracket;

/// Iteration event emitted by the bisection solver.
#[derive(Debug, Clone, Copy)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// The midpoint that was evaluated.
    pub x: f64,

    /// Residual `f(x)` at the midpoint.
    pub residual: f64,

    /// Bracket the midpoint was taken from.
    pub bracket: Bracket,
}
