use rootline_core::{Point, Variable};
use rootline_expr::EvalError;

use super::{Diagonal, EquationSystem, Mode, Residuals};

/// Residuals and diagonal derivative values at one point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Evaluation {
    pub(super) point: Point,
    pub(super) residuals: Residuals,
    pub(super) derivatives: [Option<f64>; 2],
}

/// Evaluates every equation and every active derivative at `point`.
pub(super) fn evaluate(
    system: &EquationSystem,
    diagonal: &Diagonal,
    point: Point,
) -> Result<Evaluation, EvalError> {
    let equations = system.equations();
    let residuals = match system.mode() {
        Mode::Single => Residuals::Single(equations[0].eval(point)?),
        Mode::Pair => Residuals::Pair([equations[0].eval(point)?, equations[1].eval(point)?]),
    };
    let derivatives = diagonal.eval(point)?;

    Ok(Evaluation {
        point,
        residuals,
        derivatives,
    })
}

impl Evaluation {
    /// Returns the first coordinate whose derivative is exactly zero.
    #[allow(clippy::float_cmp)]
    pub(super) fn degenerate(&self) -> Option<Variable> {
        Variable::ALL
            .into_iter()
            .find(|v| self.derivatives[v.index()] == Some(0.0))
    }

    /// Returns the corrected point.
    ///
    /// Each active coordinate moves by its paired residual over its
    /// derivative; held coordinates keep their value.
    pub(super) fn next_point(&self) -> Point {
        Variable::ALL
            .into_iter()
            .fold(self.point, |next, variable| {
                match self.derivatives[variable.index()] {
                    Some(slope) => {
                        let step = self.residuals.paired_with(variable) / slope;
                        next.with(variable, self.point.get(variable) - step)
                    }
                    None => next,
                }
            })
    }
}
