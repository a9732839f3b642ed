use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses a primary expression.
///
/// Primary expressions are the atoms of the grammar: numbers, identifiers,
/// `null`, and parenthesized expressions.
///
/// Grammar: `primary := Number | Identifier | "null" | "(" expression ")"`
///
/// The current token is always consumed, also when it turns out to be
/// invalid, so the cursor advances on every path.
///
/// # Errors
/// Returns [`ParseError::UnexpectedToken`] naming the token's text and kind if
/// it cannot start an expression.
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let token = tokens.next().ok_or(ParseError::UnexpectedEndOfInput)?;

    match token.kind {
        TokenKind::Number => parse_number(token),
        TokenKind::Identifier => Ok(Expr::Identifier(token.text.clone())),
        TokenKind::Null => Ok(Expr::Null),
        TokenKind::LeftParen => parse_grouping(tokens, token.line),
        _ => Err(ParseError::UnexpectedToken { expected: "an expression".to_string(),
                                               found:    token.text.clone(),
                                               kind:     token.kind,
                                               line:     token.line, }),
    }
}

/// Converts the digit text of a number token into its value.
fn parse_number(token: &Token) -> ParseResult<Expr> {
    token.text
         .parse::<f64>()
         .map(Expr::Number)
         .map_err(|_| ParseError::InvalidNumber { text: token.text.clone(),
                                                  line: token.line, })
}

/// Parses a parenthesized expression.
///
/// Expected form `( expression )`, with the opening parenthesis already
/// consumed.
///
/// The function parses the enclosed expression and then requires a closing
/// `)`. Failure to find the closing parenthesis yields
/// `ParseError::ExpectedClosingParen`.
///
/// Grammar `grouping := "(" expression ")"`
///
/// # Returns
/// The inner expression as-is (no wrapper node).
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let expr = parse_expression(tokens)?;
    match tokens.peek() {
        Some(Token { kind: TokenKind::RightParen,
                     .. }) => {
            tokens.next();
            Ok(expr)
        },
        Some(token) => Err(ParseError::ExpectedClosingParen { found: token.text.clone(),
                                                              line:  token.line, }),
        None => Err(ParseError::ExpectedClosingParen { found: String::new(),
                                                       line }),
    }
}
