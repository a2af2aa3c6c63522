//! Decoupled Newton iteration for one or two equations in `x` and `y`.
//!
//! # Algorithm
//!
//! Each equation is read as `f(x, y) = 0`. Instead of inverting a Jacobian,
//! every coordinate is corrected on its own using a single diagonal partial
//! derivative:
//!
//! - **One equation** `f`: `x ← x − f/∂f/∂x` and `y ← y − f/∂f/∂y`, both
//!   driven by the same residual.
//! - **Two equations** `f1`, `f2`: `x ← x − f1/∂f1/∂x` and
//!   `y ← y − f2/∂f2/∂y`. Off-diagonal derivatives are never formed.
//!
//! The diagonal derivatives are differentiated symbolically once per solve.
//! The iteration has converged when both coordinates move by less than the
//! configured tolerance in one step, and the root is the corrected point.
//!
//! In single-equation mode a coordinate whose partial derivative is
//! identically zero (for example `y` in `x^2 - 2`) is not an unknown of the
//! equation. It keeps its initial value and takes no part in the
//! zero-derivative guard.
//!
//! # Limitations
//!
//! - **Two unknowns at most**: systems of one or two equations only
//! - **No globalization**: no damping, line search, or trust region
//! - **Decoupled update**: coupled systems converge linearly at best
//!
//! # Outcomes
//!
//! Failing to find a root is a normal result, not an error. A [`Solution`]
//! always carries the full [`History`], and its [`Outcome`] is either
//! [`Outcome::Converged`] or [`Outcome::NotFound`] with a [`Reason`]:
//!
//! - [`Reason::DegenerateDerivative`]: a guarded derivative was exactly zero
//!   at the current point, so no step could be taken
//! - [`Reason::MaxIters`]: the iteration limit was reached
//! - [`Reason::StoppedByObserver`]: an observer returned [`Action::StopEarly`]
//!
//! Evaluation failures such as division by zero abort the solve with
//! [`Error::Eval`].
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per completed iteration, after its record
//! has been appended and before the convergence test.

mod action;
mod config;
mod diagonal;
mod error;
mod evaluate;
mod event;
mod history;
mod iterate;
mod record;
mod solution;
mod system;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use diagonal::Diagonal;
pub use error::Error;
pub use event::Event;
pub use history::History;
pub use record::{IterationRecord, Residuals};
pub use solution::{Outcome, Reason, Solution};
pub use system::{EquationSystem, Mode};

use rootline_core::{Observer, Point};
use rootline_expr::Expr;

/// Solves one or two equations with the decoupled Newton iteration.
///
/// Each expression is an equation equal to zero. One equation starts from
/// `guesses[0]`; two equations start from `(guesses[0].x, guesses[1].y)`, so
/// every equation contributes the guess for the coordinate it corrects.
/// Extra guesses are ignored.
///
/// The observer receives an [`Event`] for each completed iteration.
/// See the [module docs](self) for details.
///
/// # Errors
///
/// Returns an error if there are not one or two equations, there are fewer
/// guesses than equations, the starting point is not finite, or an equation
/// or derivative cannot be evaluated at an iterate.
pub fn solve<Obs>(
    equations: &[Expr],
    guesses: &[Point],
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    EquationSystem::new(equations.to_vec())?.solve(guesses, config, observer)
}

/// Solves one or two equations without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error under the same conditions as [`solve`].
pub fn solve_unobserved(
    equations: &[Expr],
    guesses: &[Point],
    config: &Config,
) -> Result<Solution, Error> {
    solve(equations, guesses, config, ())
}
