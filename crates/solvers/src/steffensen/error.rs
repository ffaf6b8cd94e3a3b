use thiserror::Error;

/// Errors that can occur during Steffensen solving.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("initial guess must be finite, got {x}")]
    NonFiniteGuess { x: f64 },
}
