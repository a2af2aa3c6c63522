use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag, take_while, take_while1},
    character::complete::{char, multispace0},
    combinator::{all_consuming, cut, map, map_res, opt, recognize},
    error::{VerboseError, context},
    number::complete::recognize_float,
    sequence::{delimited, pair, preceded},
};

type PResult<'a, O> = IResult<&'a str, O, VerboseError<&'a str>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

/// Syntax tree with names still unresolved.
///
/// `rest` is the length of the input remaining where a name starts, which
/// lowering turns back into an offset into the source.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Node {
    Number(f64),
    Name {
        name: String,
        rest: usize,
    },
    Call {
        name: String,
        rest: usize,
        arg: Box<Node>,
    },
    Neg(Box<Node>),
    Binary {
        op: BinOp,
        lhs: Box<Node>,
        rhs: Box<Node>,
    },
}

impl Node {
    fn binary(op: BinOp, lhs: Node, rhs: Node) -> Self {
        Node::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }
}

/// Parses a complete expression.
pub(super) fn expression(source: &str) -> Result<Node, nom::Err<VerboseError<&str>>> {
    all_consuming(expr)(source).map(|(_, node)| node)
}

/// Parses a complete equation: an expression with an optional `= rhs`.
pub(super) fn equation(
    source: &str,
) -> Result<(Node, Option<Node>), nom::Err<VerboseError<&str>>> {
    all_consuming(pair(expr, opt(preceded(ws_char('='), cut(expr)))))(source)
        .map(|(_, sides)| sides)
}

/// Parses left-associative `+`/`-`.
fn expr(input: &str) -> PResult<'_, Node> {
    let (mut input, mut lhs) = term(input)?;
    loop {
        let (next, op) = opt(alt((ws_char('+'), ws_char('-'))))(input)?;
        let Some(op) = op else {
            break;
        };
        let (next, rhs) = cut(term)(next)?;
        let op = if op == '+' { BinOp::Add } else { BinOp::Sub };
        lhs = Node::binary(op, lhs, rhs);
        input = next;
    }
    Ok((input, lhs))
}

/// Parses left-associative `*`/`/`.
fn term(input: &str) -> PResult<'_, Node> {
    let (mut input, mut lhs) = unary(input)?;
    loop {
        let (next, op) = opt(alt((ws_char('*'), ws_char('/'))))(input)?;
        let Some(op) = op else {
            break;
        };
        let (next, rhs) = cut(unary)(next)?;
        let op = if op == '*' { BinOp::Mul } else { BinOp::Div };
        lhs = Node::binary(op, lhs, rhs);
        input = next;
    }
    Ok((input, lhs))
}

/// Parses unary negation, recursively so `--x` works.
fn unary(input: &str) -> PResult<'_, Node> {
    if let Ok((rest, _)) = ws_char('-')(input) {
        let (rest, inner) = cut(unary)(rest)?;
        return Ok((rest, Node::Neg(Box::new(inner))));
    }
    power(input)
}

/// Parses a right-associative power. The exponent may carry its own sign.
fn power(input: &str) -> PResult<'_, Node> {
    let (input, base) = primary(input)?;
    let (input, exponent) = opt(preceded(
        alt((ws(tag("**")), ws(tag("^")))),
        cut(unary),
    ))(input)?;
    match exponent {
        Some(exponent) => Ok((input, Node::binary(BinOp::Pow, base, exponent))),
        None => Ok((input, base)),
    }
}

fn primary(input: &str) -> PResult<'_, Node> {
    context(
        "a number, name, or parenthesized expression",
        alt((parenthesized, number, name_or_call)),
    )(input)
}

fn parenthesized(input: &str) -> PResult<'_, Node> {
    delimited(
        ws_char('('),
        cut(expr),
        context("')'", cut(ws_char(')'))),
    )(input)
}

fn number(input: &str) -> PResult<'_, Node> {
    ws(map(
        map_res(recognize_float, |s: &str| s.parse::<f64>()),
        Node::Number,
    ))(input)
}

fn name_or_call(input: &str) -> PResult<'_, Node> {
    let (input, _) = multispace0(input)?;
    let rest = input.len();
    let (input, name) = identifier(input)?;
    let (input, arg) = opt(delimited(
        ws_char('('),
        cut(expr),
        context("')'", cut(ws_char(')'))),
    ))(input)?;
    let (input, _) = multispace0(input)?;

    let name = name.to_string();
    let node = match arg {
        Some(arg) => Node::Call {
            name,
            rest,
            arg: Box::new(arg),
        },
        None => Node::Name { name, rest },
    };
    Ok((input, node))
}

/// Parses identifiers (`[A-Za-z_][A-Za-z0-9_]*`).
fn identifier(input: &str) -> PResult<'_, &str> {
    recognize(pair(
        take_while1(|c: char| c == '_' || c.is_ascii_alphabetic()),
        take_while(|c: char| c == '_' || c.is_ascii_alphanumeric()),
    ))(input)
}

/// Wraps a parser with leading and trailing whitespace skipping.
fn ws<'a, O, P>(mut parser: P) -> impl FnMut(&'a str) -> PResult<'a, O>
where
    P: FnMut(&'a str) -> PResult<'a, O>,
{
    move |input| delimited(multispace0, &mut parser, multispace0)(input)
}

/// Parses a specific character with surrounding whitespace.
fn ws_char<'a>(c: char) -> impl FnMut(&'a str) -> PResult<'a, char> {
    ws(char(c))
}
