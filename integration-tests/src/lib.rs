//! Shared fixtures for the Rootline integration tests.
//!
//! Known problems live in `fixtures/problems.toml`, one `[[problem]]` table
//! each, so new cases can be added without touching test code.

use rootline_core::Point;
use rootline_expr::{Expr, ParseError, parse_equation};
use serde::Deserialize;

/// The problems every solver run is checked against.
pub const PROBLEMS: &str = include_str!("../fixtures/problems.toml");

#[derive(Debug, Deserialize)]
struct Fixtures {
    problem: Vec<Problem>,
}

/// A known problem and what solving it must produce.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Problem {
    pub name: String,
    pub equations: Vec<String>,
    pub guesses: Vec<[f64; 2]>,
    #[serde(default = "default_max_iters")]
    pub max_iters: usize,
    pub expect: Expect,
}

/// Expected result of a [`Problem`].
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Expect {
    /// Root the solve converges to, if it converges.
    pub root: Option<[f64; 2]>,
    /// Exact number of completed iterations.
    pub iters: usize,
    /// Failure reason, as `degenerate`, `max_iters`, or `stopped`.
    pub reason: Option<String>,
}

fn default_max_iters() -> usize {
    100
}

impl Problem {
    /// Parses the equation texts.
    ///
    /// # Errors
    ///
    /// Returns the first parse error.
    pub fn parsed(&self) -> Result<Vec<Expr>, ParseError> {
        self.equations.iter().map(|text| parse_equation(text)).collect()
    }

    #[must_use]
    pub fn points(&self) -> Vec<Point> {
        self.guesses.iter().copied().map(Point::from).collect()
    }
}

/// Loads the problems from TOML text.
///
/// # Errors
///
/// Returns an error if the text does not describe a list of problems.
pub fn load(text: &str) -> Result<Vec<Problem>, toml::de::Error> {
    Ok(toml::from_str::<Fixtures>(text)?.problem)
}
