//! Reusable observers for Rootline solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with any solver whose events and actions implement them.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasIteration`], [`HasResidual`], [`HasStep`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`TracingObserver`] — emits one `tracing` event per iteration
//! - [`ResidualThreshold`] — stops a solve once the residuals are small enough
//!
//! [`Observer`]: rootline_core::Observer
//! [`HasIteration`]: traits::HasIteration
//! [`HasResidual`]: traits::HasResidual
//! [`HasStep`]: traits::HasStep
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod threshold;
mod trace;

pub use threshold::ResidualThreshold;
pub use trace::TracingObserver;
