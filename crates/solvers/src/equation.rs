//! Solvers for equations in `x` and `y`.
//!
//! Each equation is an [`Expr`] understood as `expr = 0`. Solvers in this
//! module drive those residuals toward zero from an initial guess.
//!
//! # Solvers
//!
//! - [`newton`] — decoupled Newton iteration, one partial derivative per
//!   coordinate, with a full iteration history
//!
//! [`Expr`]: rootline_expr::Expr

pub mod newton;
