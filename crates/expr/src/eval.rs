use rootline_core::Point;
use thiserror::Error;

use crate::expr::Expr;

/// Errors that can occur when evaluating an expression at a point.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    /// A divisor evaluated to exactly zero, or zero was raised to a negative power.
    #[error("division by zero")]
    DivisionByZero,

    /// An operation produced no real value (for example `ln(-1)` or `sqrt(-1)`).
    #[error("{op} is undefined for the given arguments")]
    Undefined { op: &'static str },
}

impl Expr {
    /// Evaluates the expression with `x` and `y` taken from `point`.
    ///
    /// Infinite intermediate values propagate, and so does a NaN they produce
    /// (such as `inf - inf`). Only operations on finite operands without a
    /// real result are errors.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::DivisionByZero`] if a divisor is exactly zero, or
    /// [`EvalError::Undefined`] if an operation on finite operands yields NaN.
    pub fn eval(&self, point: Point) -> Result<f64, EvalError> {
        match self {
            Expr::Const(v) => Ok(*v),
            Expr::Var(variable) => Ok(point.get(*variable)),
            Expr::Neg(a) => Ok(-a.eval(point)?),
            Expr::Add(a, b) => {
                let (l, r) = (a.eval(point)?, b.eval(point)?);
                defined("addition", l + r, &[l, r])
            }
            Expr::Sub(a, b) => {
                let (l, r) = (a.eval(point)?, b.eval(point)?);
                defined("subtraction", l - r, &[l, r])
            }
            Expr::Mul(a, b) => {
                let (l, r) = (a.eval(point)?, b.eval(point)?);
                defined("multiplication", l * r, &[l, r])
            }
            Expr::Div(a, b) => {
                let (l, r) = (a.eval(point)?, b.eval(point)?);
                if r == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                defined("division", l / r, &[l, r])
            }
            Expr::Pow(a, b) => {
                let (base, exponent) = (a.eval(point)?, b.eval(point)?);
                if base == 0.0 && exponent < 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                defined("power", power(base, exponent), &[base, exponent])
            }
            Expr::Call(func, a) => {
                let arg = a.eval(point)?;
                defined(func.name(), func.apply(arg), &[arg])
            }
        }
    }
}

/// Raises `base` to `exponent`, using repeated multiplication for integer exponents.
#[allow(clippy::cast_possible_truncation)]
fn power(base: f64, exponent: f64) -> f64 {
    if exponent.fract() == 0.0 && exponent.abs() <= f64::from(i32::MAX) {
        base.powi(exponent as i32)
    } else {
        base.powf(exponent)
    }
}

fn defined(op: &'static str, result: f64, operands: &[f64]) -> Result<f64, EvalError> {
    if result.is_nan() && operands.iter().all(|v| v.is_finite()) {
        Err(EvalError::Undefined { op })
    } else {
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::expr::Func;

    fn at(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn substitutes_both_variables() {
        // 4x^2 - y^3 + 28
        let e = Expr::constant(4.0) * Expr::x().pow(Expr::constant(2.0))
            - Expr::y().pow(Expr::constant(3.0))
            + Expr::constant(28.0);

        assert_relative_eq!(e.eval(at(1.0, 2.0)).unwrap(), 24.0);
        assert_relative_eq!(e.eval(at(-2.0, 0.0)).unwrap(), 44.0);
    }

    #[test]
    fn integer_powers_of_negative_bases() {
        let e = Expr::x().pow(Expr::constant(3.0));
        assert_relative_eq!(e.eval(at(-2.0, 0.0)).unwrap(), -8.0);
    }

    #[test]
    fn fractional_power_of_negative_base_is_undefined() {
        let e = Expr::x().pow(Expr::constant(0.5));
        assert_eq!(
            e.eval(at(-4.0, 0.0)),
            Err(EvalError::Undefined { op: "power" })
        );
        assert_relative_eq!(e.eval(at(4.0, 0.0)).unwrap(), 2.0);
    }

    #[test]
    fn division_by_zero_is_an_error() {
        let e = Expr::one() / Expr::x();
        assert_eq!(e.eval(at(0.0, 1.0)), Err(EvalError::DivisionByZero));

        let e = Expr::x() / (Expr::y() - Expr::one());
        assert_eq!(e.eval(at(3.0, 1.0)), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn zero_to_negative_power_is_division_by_zero() {
        let e = Expr::x().pow(Expr::constant(-2.0));
        assert_eq!(e.eval(at(0.0, 0.0)), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn logarithm_outside_domain() {
        let e = Expr::call(Func::Ln, Expr::x());
        assert_eq!(e.eval(at(-1.0, 0.0)), Err(EvalError::Undefined { op: "ln" }));
        assert_relative_eq!(e.eval(at(1.0, 0.0)).unwrap(), 0.0);
    }

    #[test]
    fn infinities_propagate() {
        let e = Expr::call(Func::Exp, Expr::x());
        let value = e.eval(at(1e4, 0.0)).unwrap();
        assert!(value.is_infinite());
    }

    #[test]
    fn infinity_minus_infinity_propagates_nan() {
        let e = Expr::call(Func::Exp, Expr::x()) - Expr::call(Func::Exp, Expr::y());
        assert!(e.eval(at(1e4, 1e4)).unwrap().is_nan());

        let e = Expr::call(Func::Ln, Expr::x() - Expr::constant(f64::INFINITY));
        assert!(e.eval(at(0.0, 0.0)).unwrap().is_nan());
    }
}
