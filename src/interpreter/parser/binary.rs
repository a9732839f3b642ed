use std::iter::Peekable;

use log::trace;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{core::ParseResult, primary::parse_primary},
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream.
///
/// # Returns
/// An `Expr::Binary` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_multiplicative(tokens)?;
    while let Some(op) = next_operator(tokens, BinaryOperator::is_additive) {
        let right = parse_multiplicative(tokens)?;
        left = Expr::binary(op, left, right);
    }
    Ok(left)
}

/// Parses multiplication and division expressions.
///
/// Handles left-associative operators: `*` and `/`.
///
/// The rule is: `multiplicative := primary (("*" | "/") primary)*`
///
/// # Parameters
/// - `tokens`: Token stream.
///
/// # Returns
/// A binary expression tree combining primary expressions.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_primary(tokens)?;
    while let Some(op) = next_operator(tokens, BinaryOperator::is_multiplicative) {
        let right = parse_primary(tokens)?;
        left = Expr::binary(op, left, right);
    }
    Ok(left)
}

/// Consumes the next token if it is an operator accepted by `level`.
///
/// Anything else, including operator text that names no operator, is left
/// for the caller's caller to report.
fn next_operator<'a, I>(tokens: &mut Peekable<I>,
                        level: fn(BinaryOperator) -> bool)
                        -> Option<BinaryOperator>
    where I: Iterator<Item = &'a Token>
{
    let token = tokens.peek()?;
    if token.kind != TokenKind::BinaryOperator {
        return None;
    }
    let op = token.text.parse::<BinaryOperator>().ok()?;
    if !level(op) {
        return None;
    }
    trace!("operator {op} on line {}", token.line);
    tokens.next();
    Some(op)
}
