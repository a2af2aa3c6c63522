use rootline_core::{Point, Variable};

/// Function values of the equations at the start of an iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Residuals {
    /// Single-equation mode: one function value drives both coordinates.
    Single(f64),
    /// Two-equation mode: one function value per equation, in order.
    Pair([f64; 2]),
}

impl Residuals {
    /// Returns the residuals in equation order.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        match self {
            Residuals::Single(value) => std::slice::from_ref(value),
            Residuals::Pair(values) => values,
        }
    }

    /// Returns the residual that corrects `variable`.
    #[must_use]
    pub fn paired_with(&self, variable: Variable) -> f64 {
        match self {
            Residuals::Single(value) => *value,
            Residuals::Pair(values) => values[variable.index()],
        }
    }

    /// Returns the largest residual magnitude.
    #[must_use]
    pub fn max_abs(&self) -> f64 {
        self.as_slice().iter().fold(0.0, |acc, r| acc.max(r.abs()))
    }
}

/// One completed iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IterationRecord {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// The point the iteration started from.
    pub prev: Point,
    /// The corrected point.
    pub next: Point,
    /// Function values at `prev`.
    pub residuals: Residuals,
}

impl IterationRecord {
    /// Returns how far each coordinate moved, as `[|dx|, |dy|]`.
    #[must_use]
    pub fn step(&self) -> [f64; 2] {
        [
            (self.next.x - self.prev.x).abs(),
            (self.next.y - self.prev.y).abs(),
        ]
    }

    /// Returns true if both coordinates moved by less than `tolerance`.
    #[must_use]
    pub fn is_converged(&self, tolerance: f64) -> bool {
        let [dx, dy] = self.step();
        dx < tolerance && dy < tolerance
    }
}
