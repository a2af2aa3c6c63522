//! `nom` parser for equation text.
//!
//! The grammar, loosest binding first:
//!
//! ```text
//! equation := expr ('=' expr)?
//! expr     := term (('+' | '-') term)*
//! term     := unary (('*' | '/') unary)*
//! unary    := '-' unary | power
//! power    := primary (('^' | '**') unary)?
//! primary  := number | '(' expr ')' | name '(' expr ')' | name
//! ```
//!
//! Powers are right-associative and bind tighter than unary minus, so
//! `-x^2` is `-(x^2)` and `x^-y^2` is `x^(-(y^2))`. The caret is the power
//! operator; `**` is accepted as well.
//!
//! Parsing happens in two passes: the grammar produces a syntax tree with
//! names still as text, then lowering resolves `x`, `y`, `pi`, `e`, and the
//! function names into an [`Expr`].

mod grammar;
mod lower;

use nom::error::{ErrorKind, VerboseError, VerboseErrorKind};
use thiserror::Error;

use crate::expr::Expr;

/// Errors that can occur when parsing equation text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("equation is empty")]
    Empty,

    #[error("syntax error at offset {offset}: expected {expected}")]
    Syntax { offset: usize, expected: String },

    #[error("unexpected input at offset {offset}")]
    TrailingInput { offset: usize },

    #[error("unknown identifier `{name}` at offset {offset}; equations are written in x and y")]
    UnknownIdentifier { name: String, offset: usize },

    #[error("unknown function `{name}` at offset {offset}")]
    UnknownFunction { name: String, offset: usize },
}

/// Parses an expression such as `4*x^2 - y^3 + 28`.
///
/// # Errors
///
/// Returns a [`ParseError`] if the text is empty, malformed, or names anything
/// other than `x`, `y`, the constants `pi` and `e`, and the known functions.
pub fn parse(text: &str) -> Result<Expr, ParseError> {
    if text.trim().is_empty() {
        return Err(ParseError::Empty);
    }
    let node = grammar::expression(text).map_err(|err| syntax_error(text, err))?;
    lower::lower(text, node)
}

/// Parses an equation, moving everything to the left-hand side.
///
/// `lhs = rhs` becomes `lhs - (rhs)`; text without `=` is taken to equal
/// zero, as is the conventional `... = 0` form.
///
/// # Errors
///
/// Returns a [`ParseError`] under the same conditions as [`parse`].
pub fn parse_equation(text: &str) -> Result<Expr, ParseError> {
    if text.trim().is_empty() {
        return Err(ParseError::Empty);
    }
    let (lhs, rhs) = grammar::equation(text).map_err(|err| syntax_error(text, err))?;
    let lhs = lower::lower(text, lhs)?;
    match rhs {
        Some(rhs) => Ok(lhs - lower::lower(text, rhs)?),
        None => Ok(lhs),
    }
}

/// Converts a `nom` verbose error into a [`ParseError`].
fn syntax_error(source: &str, err: nom::Err<VerboseError<&str>>) -> ParseError {
    let errors = match err {
        nom::Err::Incomplete(_) => {
            return ParseError::Syntax {
                offset: source.len(),
                expected: "more input".to_string(),
            };
        }
        nom::Err::Error(e) | nom::Err::Failure(e) => e.errors,
    };

    // The first entry is where parsing actually stopped; later entries are
    // the contexts it unwound through.
    let Some((rest, kind)) = errors.first() else {
        return ParseError::Syntax {
            offset: 0,
            expected: "an expression".to_string(),
        };
    };
    let offset = source.len() - rest.len();

    if matches!(kind, VerboseErrorKind::Nom(ErrorKind::Eof)) {
        return ParseError::TrailingInput { offset };
    }

    let expected = errors
        .iter()
        .find_map(|(_, kind)| match kind {
            VerboseErrorKind::Context(ctx) => Some((*ctx).to_string()),
            _ => None,
        })
        .unwrap_or_else(|| match kind {
            VerboseErrorKind::Char(c) => format!("'{c}'"),
            VerboseErrorKind::Nom(kind) => format!("{kind:?}"),
            VerboseErrorKind::Context(ctx) => (*ctx).to_string(),
        });

    ParseError::Syntax { offset, expected }
}
