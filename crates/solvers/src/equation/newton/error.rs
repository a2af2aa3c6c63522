use rootline_core::Point;
use rootline_expr::EvalError;
use thiserror::Error;

/// Errors that can occur during a Newton solve.
///
/// Failing to find a root is not an error; see [`Outcome::NotFound`].
///
/// [`Outcome::NotFound`]: super::Outcome::NotFound
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("expected 1 or 2 equations, got {count}")]
    InvalidEquationCount { count: usize },

    #[error("{equations} equation(s) need at least {equations} initial guess(es), got {guesses}")]
    MissingGuesses { equations: usize, guesses: usize },

    #[error("initial guess is not finite: {point}")]
    NonFiniteGuess { point: Point },

    #[error("evaluation failed in iteration {iter} at {point}")]
    Eval {
        iter: usize,
        point: Point,
        #[source]
        source: EvalError,
    },
}
