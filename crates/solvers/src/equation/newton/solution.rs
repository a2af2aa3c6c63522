use std::fmt;

use rootline_core::{Point, Variable};

use super::History;

/// Why a solve ended without a root.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Reason {
    /// A guarded derivative was exactly zero, so no step could be taken.
    DegenerateDerivative { at: Point, variable: Variable },

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::DegenerateDerivative { at, variable } => {
                write!(f, "derivative with respect to {variable} is zero at {at}")
            }
            Reason::MaxIters => f.write_str("iteration limit reached"),
            Reason::StoppedByObserver => f.write_str("stopped by observer"),
        }
    }
}

/// How a solve ended.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// Both coordinates moved by less than the tolerance in the last step.
    Converged { root: Point },

    /// No root was found.
    NotFound { reason: Reason },
}

/// The result of a Newton solve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// How the solve ended.
    pub outcome: Outcome,

    /// Every completed iteration, including those before a failure.
    pub history: History,
}

impl Solution {
    /// Returns the root if the solve converged.
    #[must_use]
    pub fn root(&self) -> Option<Point> {
        match self.outcome {
            Outcome::Converged { root } => Some(root),
            Outcome::NotFound { .. } => None,
        }
    }

    #[must_use]
    pub fn is_converged(&self) -> bool {
        matches!(self.outcome, Outcome::Converged { .. })
    }

    /// Returns the reason no root was found, if any.
    #[must_use]
    pub fn reason(&self) -> Option<Reason> {
        match self.outcome {
            Outcome::Converged { .. } => None,
            Outcome::NotFound { reason } => Some(reason),
        }
    }

    /// Returns the number of completed iterations.
    #[must_use]
    pub fn iters(&self) -> usize {
        self.history.len()
    }
}
