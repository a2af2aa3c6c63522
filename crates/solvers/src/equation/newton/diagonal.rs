use rootline_core::{Point, Variable};
use rootline_expr::{EvalError, Expr};

use super::{EquationSystem, Mode};

#[derive(Debug, Clone, PartialEq)]
enum Slot {
    /// The coordinate is corrected using this derivative.
    Active(Expr),
    /// The coordinate keeps its value.
    Held,
}

/// The diagonal partial derivatives of an equation system.
///
/// One equation contributes `∂f/∂x` and `∂f/∂y`. Two equations contribute
/// `∂f1/∂x` and `∂f2/∂y`; the off-diagonal terms are never formed.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagonal {
    slots: [Slot; 2],
}

impl Diagonal {
    pub(super) fn build(system: &EquationSystem) -> Self {
        let equations = system.equations();
        let slots = match system.mode() {
            Mode::Single => {
                let partials = Variable::ALL.map(|variable| equations[0].derivative(variable));
                // A constant equation has no coordinate to hold; both stay
                // guarded so the zero derivative stops the first step.
                let constant = partials.iter().all(Expr::is_zero);
                partials.map(|derivative| {
                    if derivative.is_zero() && !constant {
                        Slot::Held
                    } else {
                        Slot::Active(derivative)
                    }
                })
            }
            Mode::Pair => Variable::ALL
                .map(|variable| Slot::Active(equations[variable.index()].derivative(variable))),
        };
        Self { slots }
    }

    /// Returns the derivative that corrects `variable`, or `None` if the
    /// coordinate is held fixed.
    #[must_use]
    pub fn derivative(&self, variable: Variable) -> Option<&Expr> {
        match &self.slots[variable.index()] {
            Slot::Active(expr) => Some(expr),
            Slot::Held => None,
        }
    }

    /// Returns true if `variable` keeps its starting value for the whole solve.
    #[must_use]
    pub fn is_held(&self, variable: Variable) -> bool {
        matches!(self.slots[variable.index()], Slot::Held)
    }

    /// Evaluates the active derivatives at `point`, in coordinate order.
    pub(super) fn eval(&self, point: Point) -> Result<[Option<f64>; 2], EvalError> {
        let mut values = [None; 2];
        for variable in Variable::ALL {
            if let Some(derivative) = self.derivative(variable) {
                values[variable.index()] = Some(derivative.eval(point)?);
            }
        }
        Ok(values)
    }
}
