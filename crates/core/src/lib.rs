//! Core types for the Rootline workspace.
//!
//! This crate defines the small vocabulary shared by the expression layer,
//! the solvers, and the observers:
//!
//! - [`Variable`] — one of the two unknowns, `x` or `y`
//! - [`Point`] — a pair of real coordinates `(x, y)`
//! - [`Observer`] — receives solver events and optionally returns control actions

mod observer;
mod point;

pub use observer::Observer;
pub use point::{Point, Variable};
