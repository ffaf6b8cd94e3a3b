use thiserror::Error;

/// Errors that can occur when computing a square root with Heron's method.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("input must be finite and positive, got {x}")]
    InvalidInput { x: f64 },
}
