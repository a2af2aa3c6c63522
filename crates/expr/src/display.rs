use std::fmt;

use crate::expr::Expr;

// Binding strength, loosest first. Negative constants print with a leading
// minus and so bind like a negation.
const SUM: u8 = 1;
const PRODUCT: u8 = 2;
const NEGATION: u8 = 3;
const POWER: u8 = 4;
const ATOM: u8 = 5;

fn precedence(expr: &Expr) -> u8 {
    match expr {
        Expr::Add(..) | Expr::Sub(..) => SUM,
        Expr::Mul(..) | Expr::Div(..) => PRODUCT,
        Expr::Neg(_) => NEGATION,
        Expr::Const(v) if v.is_sign_negative() => NEGATION,
        Expr::Pow(..) => POWER,
        Expr::Const(_) | Expr::Var(_) | Expr::Call(..) => ATOM,
    }
}

/// Writes `expr`, parenthesized when it binds looser than `min`.
fn operand(f: &mut fmt::Formatter<'_>, expr: &Expr, min: u8) -> fmt::Result {
    if precedence(expr) < min {
        write!(f, "({expr})")
    } else {
        write!(f, "{expr}")
    }
}

fn binary(
    f: &mut fmt::Formatter<'_>,
    (lhs, lhs_min): (&Expr, u8),
    op: &str,
    (rhs, rhs_min): (&Expr, u8),
) -> fmt::Result {
    operand(f, lhs, lhs_min)?;
    f.write_str(op)?;
    operand(f, rhs, rhs_min)
}

/// Renders with caret powers and only the parentheses the grammar needs,
/// so the output parses back to an expression with the same value.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Const(v) => write!(f, "{v}"),
            Expr::Var(variable) => write!(f, "{variable}"),
            Expr::Neg(a) => {
                f.write_str("-")?;
                operand(f, a, NEGATION)
            }
            Expr::Add(a, b) => binary(f, (a, SUM), " + ", (b, PRODUCT)),
            Expr::Sub(a, b) => binary(f, (a, SUM), " - ", (b, PRODUCT)),
            Expr::Mul(a, b) => binary(f, (a, PRODUCT), "*", (b, NEGATION)),
            Expr::Div(a, b) => binary(f, (a, PRODUCT), "/", (b, NEGATION)),
            // Right-associative: the base needs parentheses around anything
            // but an atom, the exponent only around sums and products.
            Expr::Pow(a, b) => binary(f, (a, ATOM), "^", (b, NEGATION)),
            Expr::Call(func, a) => write!(f, "{}({a})", func.name()),
        }
    }
}
