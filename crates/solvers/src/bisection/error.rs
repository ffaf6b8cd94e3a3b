use thiserror::Error;

/// Errors that can occur during bisection solving.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("bracket contains non-finite value: {value}")]
    NonFiniteBracket { value: f64 },

    #[error("non-finite residual {residual} at x = {x}")]
    NonFiniteResidual { x: f64, residual: f64 },

    #[error("no sign change in bracket: f({a})={a_residual}, f({b})={b_residual}")]
    NoSignChange {
        a: f64,
        b: f64,
        a_residual: f64,
        b_residual: f64,
    },
}
