use std::iter::Peekable;

use log::debug;

use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{binary::parse_additive, statement::parse_statement},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, addition, and recursively descends through the
/// precedence hierarchy. The token iterator is the parser's cursor: every
/// token the expression consumes is taken from it, and the first token that
/// does not belong to the expression is left in place.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first token of the expression.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_additive(tokens)
}

/// Parses a token sequence that must hold exactly one expression.
///
/// # Errors
/// - [`ParseError::EmptyInput`] if the sequence holds only the end marker.
/// - [`ParseError::UnexpectedTrailingTokens`] if tokens follow the expression.
/// - Any error of [`parse_expression`].
///
/// # Examples
/// ```
/// use simpl::interpreter::{lexer::tokenize, parser::core::parse};
///
/// let tokens = tokenize("10 - 3 - 2").unwrap();
/// let tree = parse(&tokens).unwrap();
///
/// assert_eq!(tree.to_string(), "((10 - 3) - 2)");
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<Expr> {
    let mut iter = tokens.iter().peekable();

    match iter.peek() {
        Some(token) if token.is_end() => return Err(ParseError::EmptyInput),
        None => return Err(ParseError::EmptyInput),
        _ => {},
    }

    let expr = parse_expression(&mut iter)?;
    expect_end(&mut iter)?;

    debug!("parsed expression {expr}");
    Ok(expr)
}

/// Parses a token sequence into a program.
///
/// Statements are parsed back to back until the end marker. A sequence that
/// holds only the end marker is an empty program.
///
/// # Errors
/// Returns the first [`ParseError`] met; no partial program is returned.
///
/// # Examples
/// ```
/// use simpl::interpreter::{lexer::tokenize, parser::core::parse_program};
///
/// let tokens = tokenize("let x = 2\nx = x * 3\nx + 1").unwrap();
/// let program = parse_program(&tokens).unwrap();
///
/// assert_eq!(program.len(), 3);
/// assert_eq!(program[1].to_string(), "x = (x * 3)");
/// ```
pub fn parse_program(tokens: &[Token]) -> ParseResult<Program> {
    let mut iter = tokens.iter().peekable();
    let mut program = Vec::new();

    loop {
        match iter.peek() {
            Some(token) if token.is_end() => break,
            Some(_) => program.push(parse_statement(&mut iter)?),
            None => return Err(ParseError::UnexpectedEndOfInput),
        }
    }

    debug!("parsed {} statements", program.len());
    Ok(program)
}

/// Requires the cursor to sit on the end marker.
fn expect_end<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<()>
    where I: Iterator<Item = &'a Token>
{
    match tokens.peek() {
        Some(Token { kind: TokenKind::EndOfInput,
                     .. }) => Ok(()),
        Some(token) => Err(ParseError::UnexpectedTrailingTokens { token: token.text.clone(),
                                                                  line:  token.line, }),
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}
