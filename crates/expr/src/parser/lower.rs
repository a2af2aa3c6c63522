use std::f64::consts;

use rootline_core::Variable;

use crate::expr::{Expr, Func};

use super::{
    ParseError,
    grammar::{BinOp, Node},
};

/// Resolves names and builds the expression.
pub(super) fn lower(source: &str, node: Node) -> Result<Expr, ParseError> {
    let offset = |rest: usize| source.len() - rest;

    match node {
        Node::Number(value) => Ok(Expr::Const(value)),
        Node::Name { name, rest } => match name.as_str() {
            "pi" => Ok(Expr::Const(consts::PI)),
            "e" => Ok(Expr::Const(consts::E)),
            _ => Variable::from_name(&name)
                .map(Expr::Var)
                .ok_or_else(|| ParseError::UnknownIdentifier {
                    name,
                    offset: offset(rest),
                }),
        },
        Node::Call { name, rest, arg } => {
            let Some(func) = Func::from_name(&name) else {
                return Err(ParseError::UnknownFunction {
                    name,
                    offset: offset(rest),
                });
            };
            Ok(Expr::call(func, lower(source, *arg)?))
        }
        Node::Neg(inner) => Ok(-lower(source, *inner)?),
        Node::Binary { op, lhs, rhs } => {
            let lhs = lower(source, *lhs)?;
            let rhs = lower(source, *rhs)?;
            Ok(match op {
                BinOp::Add => lhs + rhs,
                BinOp::Sub => lhs - rhs,
                BinOp::Mul => lhs * rhs,
                BinOp::Div => lhs / rhs,
                BinOp::Pow => lhs.pow(rhs),
            })
        }
    }
}
