//! Numerical solvers for the Rootline workspace.
//!
//! # Modules
//!
//! - [`equation`] — root finding for one or two equations in `x` and `y`

pub mod equation;
