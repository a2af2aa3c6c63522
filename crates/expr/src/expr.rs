use std::ops;

use rootline_core::Variable;

use crate::simplify;

/// An immutable symbolic expression over `x` and `y`.
///
/// Build expressions with the [`Expr::x`], [`Expr::y`] and
/// [`Expr::constant`] leaves, the arithmetic operators, [`Expr::pow`] and
/// [`Expr::call`], or by parsing text with [`crate::parse`]. The operator
/// builders fold constants and drop identities (`0 + a`, `1 * a`, `a ^ 1`),
/// so trees stay small as derivatives are taken.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Const(f64),
    Var(Variable),
    Neg(Box<Expr>),
    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Pow(Box<Expr>, Box<Expr>),
    Call(Func, Box<Expr>),
}

/// Elementary functions of one argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Func {
    Sin,
    Cos,
    Tan,
    Exp,
    /// Natural logarithm.
    Ln,
    Sqrt,
    Abs,
}

impl Func {
    /// Returns the name the function is written with.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Func::Sin => "sin",
            Func::Cos => "cos",
            Func::Tan => "tan",
            Func::Exp => "exp",
            Func::Ln => "ln",
            Func::Sqrt => "sqrt",
            Func::Abs => "abs",
        }
    }

    /// Looks up a function by name. `log` is accepted as an alias for `ln`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let func = match name {
            "sin" => Func::Sin,
            "cos" => Func::Cos,
            "tan" => Func::Tan,
            "exp" => Func::Exp,
            "ln" | "log" => Func::Ln,
            "sqrt" => Func::Sqrt,
            "abs" => Func::Abs,
            _ => return None,
        };
        Some(func)
    }

    /// Applies the function to a number.
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Func::Sin => value.sin(),
            Func::Cos => value.cos(),
            Func::Tan => value.tan(),
            Func::Exp => value.exp(),
            Func::Ln => value.ln(),
            Func::Sqrt => value.sqrt(),
            Func::Abs => value.abs(),
        }
    }
}

impl Expr {
    /// The variable `x`.
    #[must_use]
    pub fn x() -> Self {
        Expr::Var(Variable::X)
    }

    /// The variable `y`.
    #[must_use]
    pub fn y() -> Self {
        Expr::Var(Variable::Y)
    }

    /// A numeric constant.
    #[must_use]
    pub fn constant(value: f64) -> Self {
        Expr::Const(value)
    }

    #[must_use]
    pub fn zero() -> Self {
        Expr::Const(0.0)
    }

    #[must_use]
    pub fn one() -> Self {
        Expr::Const(1.0)
    }

    /// Raises this expression to `exponent`.
    #[must_use]
    pub fn pow(self, exponent: Expr) -> Self {
        simplify::pow(self, exponent)
    }

    /// Applies `func` to `arg`.
    #[must_use]
    pub fn call(func: Func, arg: Expr) -> Self {
        simplify::call(func, arg)
    }

    /// Returns true if this expression is the constant `0`.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_zero(&self) -> bool {
        matches!(self, Expr::Const(v) if *v == 0.0)
    }

    /// Returns true if this expression is the constant `1`.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_one(&self) -> bool {
        matches!(self, Expr::Const(v) if *v == 1.0)
    }

    /// Returns the value if this expression is a constant.
    #[must_use]
    pub fn as_const(&self) -> Option<f64> {
        match self {
            Expr::Const(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns true if `variable` appears anywhere in the expression.
    #[must_use]
    pub fn depends_on(&self, variable: Variable) -> bool {
        match self {
            Expr::Const(_) => false,
            Expr::Var(v) => *v == variable,
            Expr::Neg(a) | Expr::Call(_, a) => a.depends_on(variable),
            Expr::Add(a, b)
            | Expr::Sub(a, b)
            | Expr::Mul(a, b)
            | Expr::Div(a, b)
            | Expr::Pow(a, b) => a.depends_on(variable) || b.depends_on(variable),
        }
    }

    /// Returns the variables that appear in the expression, in coordinate order.
    #[must_use]
    pub fn free_variables(&self) -> Vec<Variable> {
        Variable::ALL
            .into_iter()
            .filter(|v| self.depends_on(*v))
            .collect()
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Expr::Const(value)
    }
}

impl From<Variable> for Expr {
    fn from(variable: Variable) -> Self {
        Expr::Var(variable)
    }
}

impl ops::Add for Expr {
    type Output = Expr;

    fn add(self, rhs: Expr) -> Expr {
        simplify::add(self, rhs)
    }
}

impl ops::Sub for Expr {
    type Output = Expr;

    fn sub(self, rhs: Expr) -> Expr {
        simplify::sub(self, rhs)
    }
}

impl ops::Mul for Expr {
    type Output = Expr;

    fn mul(self, rhs: Expr) -> Expr {
        simplify::mul(self, rhs)
    }
}

impl ops::Div for Expr {
    type Output = Expr;

    fn div(self, rhs: Expr) -> Expr {
        simplify::div(self, rhs)
    }
}

impl ops::Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        simplify::neg(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operators_fold_constants() {
        let e = Expr::constant(2.0) * Expr::constant(3.0) + Expr::constant(1.0);
        assert_eq!(e, Expr::Const(7.0));
    }

    #[test]
    fn free_variables_in_coordinate_order() {
        let e = Expr::y() * Expr::x();
        assert_eq!(e.free_variables(), vec![Variable::X, Variable::Y]);

        let e = Expr::x().pow(Expr::constant(2.0)) - Expr::constant(2.0);
        assert_eq!(e.free_variables(), vec![Variable::X]);
        assert!(!e.depends_on(Variable::Y));
    }

    #[test]
    fn function_names_round_trip() {
        for func in [
            Func::Sin,
            Func::Cos,
            Func::Tan,
            Func::Exp,
            Func::Ln,
            Func::Sqrt,
            Func::Abs,
        ] {
            assert_eq!(Func::from_name(func.name()), Some(func));
        }
        assert_eq!(Func::from_name("log"), Some(Func::Ln));
        assert_eq!(Func::from_name("sinh"), None);
    }
}
