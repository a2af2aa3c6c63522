use rootline_core::Variable;

use crate::{
    expr::{Expr, Func},
    simplify::{add, call, div, mul, neg, pow, sub},
};

impl Expr {
    /// Returns the partial derivative with respect to `variable`.
    ///
    /// The result is a new expression; `self` is left untouched. Derivatives
    /// are simplified while they are built, so a derivative that vanishes
    /// identically is returned as the constant `0`.
    #[must_use]
    pub fn derivative(&self, variable: Variable) -> Expr {
        Differentiator { variable }.derive(self)
    }
}

struct Differentiator {
    variable: Variable,
}

impl Differentiator {
    fn derive(&self, expr: &Expr) -> Expr {
        match expr {
            Expr::Const(_) => Expr::zero(),
            Expr::Var(v) if *v == self.variable => Expr::one(),
            Expr::Var(_) => Expr::zero(),
            Expr::Neg(a) => neg(self.derive(a)),
            Expr::Add(a, b) => add(self.derive(a), self.derive(b)),
            Expr::Sub(a, b) => sub(self.derive(a), self.derive(b)),
            Expr::Mul(a, b) => self.product_rule(a, b),
            Expr::Div(a, b) => self.quotient_rule(a, b),
            Expr::Pow(base, exponent) => self.power_rule(base, exponent),
            Expr::Call(func, arg) => self.chain_rule(*func, arg),
        }
    }

    fn product_rule(&self, a: &Expr, b: &Expr) -> Expr {
        add(
            mul(self.derive(a), b.clone()),
            mul(a.clone(), self.derive(b)),
        )
    }

    fn quotient_rule(&self, a: &Expr, b: &Expr) -> Expr {
        let da = self.derive(a);
        let db = self.derive(b);
        if db.is_zero() {
            return div(da, b.clone());
        }
        div(
            sub(mul(da, b.clone()), mul(a.clone(), db)),
            pow(b.clone(), Expr::Const(2.0)),
        )
    }

    fn power_rule(&self, base: &Expr, exponent: &Expr) -> Expr {
        if !exponent.depends_on(self.variable) {
            // n * base^(n - 1) * base'
            let lowered = pow(base.clone(), sub(exponent.clone(), Expr::one()));
            return mul(mul(exponent.clone(), lowered), self.derive(base));
        }

        let whole = pow(base.clone(), exponent.clone());
        let ln_base = call(Func::Ln, base.clone());
        if !base.depends_on(self.variable) {
            // a^g = exp(g ln a), so the derivative is a^g * ln(a) * g'
            return mul(mul(whole, ln_base), self.derive(exponent));
        }

        // f^g * (g' ln f + g f' / f)
        mul(
            whole,
            add(
                mul(self.derive(exponent), ln_base),
                div(mul(exponent.clone(), self.derive(base)), base.clone()),
            ),
        )
    }

    fn chain_rule(&self, func: Func, arg: &Expr) -> Expr {
        let inner = self.derive(arg);
        if inner.is_zero() {
            return Expr::zero();
        }

        let outer = match func {
            Func::Sin => call(Func::Cos, arg.clone()),
            Func::Cos => neg(call(Func::Sin, arg.clone())),
            Func::Tan => div(
                Expr::one(),
                pow(call(Func::Cos, arg.clone()), Expr::Const(2.0)),
            ),
            Func::Exp => call(Func::Exp, arg.clone()),
            Func::Ln => div(Expr::one(), arg.clone()),
            Func::Sqrt => div(
                Expr::one(),
                mul(Expr::Const(2.0), call(Func::Sqrt, arg.clone())),
            ),
            Func::Abs => div(arg.clone(), call(Func::Abs, arg.clone())),
        };
        mul(inner, outer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use rootline_core::Point;

    fn c(v: f64) -> Expr {
        Expr::constant(v)
    }

    fn slope(e: &Expr, variable: Variable, x: f64, y: f64) -> f64 {
        e.derivative(variable).eval(Point::new(x, y)).unwrap()
    }

    #[test]
    fn constant_has_zero_derivative() {
        assert!(c(5.0).derivative(Variable::X).is_zero());
        assert!(c(5.0).derivative(Variable::Y).is_zero());
    }

    #[test]
    fn derivative_in_absent_variable_is_identically_zero() {
        // x^2 - 2
        let e = Expr::x().pow(c(2.0)) - c(2.0);
        assert!(e.derivative(Variable::Y).is_zero());
        assert!(!e.derivative(Variable::X).is_zero());
    }

    #[test]
    fn power_rule_simplifies() {
        // d/dx x^2 = 2 * x
        let e = Expr::x().pow(c(2.0));
        assert_eq!(e.derivative(Variable::X), c(2.0) * Expr::x());
    }

    #[test]
    fn source_expression_is_untouched() {
        let e = Expr::x() * Expr::y();
        let before = e.clone();
        let _ = e.derivative(Variable::X);
        assert_eq!(e, before);
    }

    #[test]
    fn partials_of_mixed_polynomial() {
        // f = 4x^2 - y^3 + 28, f_x = 8x, f_y = -3y^2
        let e = c(4.0) * Expr::x().pow(c(2.0)) - Expr::y().pow(c(3.0)) + c(28.0);

        assert_relative_eq!(slope(&e, Variable::X, 1.5, 2.0), 12.0);
        assert_relative_eq!(slope(&e, Variable::Y, 1.5, 2.0), -12.0);
    }

    #[test]
    fn product_and_quotient_rules() {
        // f = x*y / (x + 1), f_x = y / (x + 1)^2, f_y = x / (x + 1)
        let e = Expr::x() * Expr::y() / (Expr::x() + c(1.0));

        assert_relative_eq!(slope(&e, Variable::X, 1.0, 3.0), 0.75);
        assert_relative_eq!(slope(&e, Variable::Y, 1.0, 3.0), 0.5);
    }

    #[test]
    fn chain_rule_through_functions() {
        // d/dx sin(x^2) = 2x cos(x^2)
        let e = Expr::call(Func::Sin, Expr::x().pow(c(2.0)));
        let x = 0.7_f64;
        assert_relative_eq!(
            slope(&e, Variable::X, x, 0.0),
            2.0 * x * (x * x).cos(),
            epsilon = 1e-12
        );

        // d/dy exp(x*y) = x exp(x*y)
        let e = Expr::call(Func::Exp, Expr::x() * Expr::y());
        assert_relative_eq!(
            slope(&e, Variable::Y, 2.0, 0.5),
            2.0 * 1.0_f64.exp(),
            epsilon = 1e-12
        );

        // d/dx ln(x) = 1/x, d/dx sqrt(x) = 1 / (2 sqrt(x))
        assert_relative_eq!(slope(&Expr::call(Func::Ln, Expr::x()), Variable::X, 4.0, 0.0), 0.25);
        assert_relative_eq!(
            slope(&Expr::call(Func::Sqrt, Expr::x()), Variable::X, 4.0, 0.0),
            0.25
        );
    }

    #[test]
    fn trigonometric_derivatives() {
        let x = 0.3_f64;
        assert_relative_eq!(
            slope(&Expr::call(Func::Cos, Expr::x()), Variable::X, x, 0.0),
            -x.sin(),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            slope(&Expr::call(Func::Tan, Expr::x()), Variable::X, x, 0.0),
            1.0 / (x.cos() * x.cos()),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            slope(&Expr::call(Func::Abs, Expr::x()), Variable::X, -2.0, 0.0),
            -1.0
        );
    }

    #[test]
    fn variable_exponents() {
        // d/dy 2^y = 2^y ln 2
        let e = c(2.0).pow(Expr::y());
        assert_relative_eq!(
            slope(&e, Variable::Y, 0.0, 3.0),
            8.0 * 2.0_f64.ln(),
            epsilon = 1e-12
        );

        // d/dx x^x = x^x (ln x + 1)
        let e = Expr::x().pow(Expr::x());
        assert_relative_eq!(
            slope(&e, Variable::X, 2.0, 0.0),
            4.0 * (2.0_f64.ln() + 1.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn negative_exponent() {
        // d/dx x^-1 = -x^-2
        let e = Expr::x().pow(c(-1.0));
        assert_relative_eq!(slope(&e, Variable::X, 2.0, 0.0), -0.25);
    }
}
