//! Core traits for the fixpoint solvers.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`RealFunction`] — a pure mapping from one `f64` to one `f64`
//! - [`Observer`] — receives solver events and optionally returns control actions

mod function;
mod observer;

pub use function::RealFunction;
pub use observer::Observer;
