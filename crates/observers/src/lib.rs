//! Reusable observers for the fixpoint solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across every solver in `fixpoint-solvers`.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasIter`], [`HasX`], [`HasResidual`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`Trace`] records one [`Record`] per iteration, giving a structured log
//!   of how a solve progressed.
//! - [`StopWhen`] stops a solver once the residual is small enough for the
//!   caller, which may be looser than the solver's own tolerance.
//!
//! # Features
//!
//! - `serde` — derives `Serialize` for [`Record`] so traces can be exported.
//!
//! [`Observer`]: fixpoint_core::Observer
//! [`HasIter`]: traits::HasIter
//! [`HasX`]: traits::HasX
//! [`HasResidual`]: traits::HasResidual
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod stop_when;
mod trace;

pub use stop_when::StopWhen;
pub use trace::{Record, Trace};
