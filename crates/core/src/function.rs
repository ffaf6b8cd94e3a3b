/// A real-valued function of one real variable.
///
/// Solvers call [`eval`](RealFunction::eval) an unbounded but finite number
/// of times per solve, so implementations should be pure and cheap.
/// Any cost or side effect of an evaluation is the caller's concern.
///
/// Every `Fn(f64) -> f64` implements this trait, so closures and function
/// items such as `f64::sin` can be passed to a solver directly.
pub trait RealFunction {
    /// Evaluates the function at `x`.
    fn eval(&self, x: f64) -> f64;
}

impl<F> RealFunction for F
where
    F: Fn(f64) -> f64,
{
    fn eval(&self, x: f64) -> f64 {
        self(x)
    }
}
