use std::fmt;

/// One of the two unknowns an equation can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Variable {
    X,
    Y,
}

impl Variable {
    /// Both variables, in coordinate order.
    pub const ALL: [Variable; 2] = [Variable::X, Variable::Y];

    /// Returns the variable's name as written in equations.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Variable::X => "x",
            Variable::Y => "y",
        }
    }

    /// Returns the coordinate index: `0` for `x`, `1` for `y`.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Variable::X => 0,
            Variable::Y => 1,
        }
    }

    /// Looks up a variable by name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "x" => Some(Variable::X),
            "y" => Some(Variable::Y),
            _ => None,
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A point in the `(x, y)` plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the coordinate for `variable`.
    #[must_use]
    pub fn get(&self, variable: Variable) -> f64 {
        match variable {
            Variable::X => self.x,
            Variable::Y => self.y,
        }
    }

    /// Returns a copy of this point with the `variable` coordinate replaced.
    #[must_use]
    pub fn with(self, variable: Variable, value: f64) -> Self {
        match variable {
            Variable::X => Self { x: value, ..self },
            Variable::Y => Self { y: value, ..self },
        }
    }

    /// Returns true if both coordinates are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(x = {}, y = {})", self.x, self.y)
    }
}
