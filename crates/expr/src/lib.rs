//! Symbolic expressions over the two unknowns `x` and `y`.
//!
//! An [`Expr`] is an immutable formula built from `f64` constants, the
//! variables `x` and `y`, the operators `+ - * / ^`, and a handful of
//! elementary functions. Expressions support:
//!
//! - [`Expr::eval`] — numeric evaluation at a [`Point`]
//! - [`Expr::derivative`] — symbolic partial differentiation, producing a new
//!   expression
//! - [`parse`] and [`parse_equation`] — reading human-typed text, including
//!   caret powers (`x^2`) and `lhs = rhs` equations
//! - [`Display`](std::fmt::Display) — rendering back to parseable text
//!
//! Derivatives are simplified as they are built, so a partial derivative that
//! vanishes everywhere comes out as the constant `0` and [`Expr::is_zero`]
//! reports it.
//!
//! [`Point`]: rootline_core::Point

mod derivative;
mod display;
mod eval;
mod expr;
mod parser;
mod simplify;

pub use eval::EvalError;
pub use expr::{Expr, Func};
pub use parser::{ParseError, parse, parse_equation};
