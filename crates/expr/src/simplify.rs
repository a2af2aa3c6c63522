//! Simplifying constructors.
//!
//! Every node built by the operator impls, the parser, and the differentiator
//! goes through these functions. They fold constant subtrees whose value is
//! finite and drop algebraic identities. Anything that would fold to an
//! undefined value (`1 / 0`, `ln(-1)`) is kept symbolic so evaluation reports
//! it.

use crate::expr::{Expr, Func};

fn folded(value: f64) -> Option<Expr> {
    value.is_finite().then_some(Expr::Const(value))
}

pub(crate) fn neg(a: Expr) -> Expr {
    match a {
        Expr::Const(v) => Expr::Const(-v),
        Expr::Neg(inner) => *inner,
        other => Expr::Neg(Box::new(other)),
    }
}

pub(crate) fn add(a: Expr, b: Expr) -> Expr {
    if let (Expr::Const(l), Expr::Const(r)) = (&a, &b)
        && let Some(c) = folded(l + r)
    {
        return c;
    }
    if a.is_zero() {
        return b;
    }
    if b.is_zero() {
        return a;
    }
    match b {
        Expr::Neg(inner) => Expr::Sub(Box::new(a), inner),
        b => Expr::Add(Box::new(a), Box::new(b)),
    }
}

pub(crate) fn sub(a: Expr, b: Expr) -> Expr {
    if let (Expr::Const(l), Expr::Const(r)) = (&a, &b)
        && let Some(c) = folded(l - r)
    {
        return c;
    }
    if a == b {
        return Expr::zero();
    }
    if b.is_zero() {
        return a;
    }
    if a.is_zero() {
        return neg(b);
    }
    match b {
        Expr::Neg(inner) => Expr::Add(Box::new(a), inner),
        b => Expr::Sub(Box::new(a), Box::new(b)),
    }
}

pub(crate) fn mul(a: Expr, b: Expr) -> Expr {
    if a.is_zero() || b.is_zero() {
        return Expr::zero();
    }
    if let (Expr::Const(l), Expr::Const(r)) = (&a, &b)
        && let Some(c) = folded(l * r)
    {
        return c;
    }
    if a.is_one() {
        return b;
    }
    if b.is_one() {
        return a;
    }
    if a.as_const() == Some(-1.0) {
        return neg(b);
    }
    if b.as_const() == Some(-1.0) {
        return neg(a);
    }
    Expr::Mul(Box::new(a), Box::new(b))
}

pub(crate) fn div(a: Expr, b: Expr) -> Expr {
    if b.is_one() {
        return a;
    }
    if let (Expr::Const(l), Expr::Const(r)) = (&a, &b)
        && *r != 0.0
        && let Some(c) = folded(l / r)
    {
        return c;
    }
    if a.is_zero() && b.as_const().is_none_or(|r| r != 0.0) {
        return Expr::zero();
    }
    Expr::Div(Box::new(a), Box::new(b))
}

pub(crate) fn pow(base: Expr, exponent: Expr) -> Expr {
    if exponent.is_zero() {
        return Expr::one();
    }
    if exponent.is_one() {
        return base;
    }
    if let (Expr::Const(b), Expr::Const(e)) = (&base, &exponent)
        && !(*b == 0.0 && *e < 0.0)
        && let Some(c) = folded(b.powf(*e))
    {
        return c;
    }
    Expr::Pow(Box::new(base), Box::new(exponent))
}

pub(crate) fn call(func: Func, arg: Expr) -> Expr {
    if let Expr::Const(v) = arg
        && let Some(c) = folded(func.apply(v))
    {
        return c;
    }
    Expr::Call(func, Box::new(arg))
}
