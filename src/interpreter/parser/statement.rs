use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - a variable declaration, `let name` or `let name = expression`.
/// - an assignment, `name = expression`.
/// - an expression used as a statement.
///
/// Parsing is attempted in that order; the first matching construct is
/// returned. If none match, the input is parsed as an expression statement.
///
/// The statement's source line is taken from its first token.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of the statement.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    if let Some(statement) = parse_variable_declaration(tokens)? {
        return Ok(statement);
    }
    if let Some(statement) = parse_assignment(tokens)? {
        return Ok(statement);
    }

    let line = tokens.peek().map_or(0, |t| t.line);
    let expr = parse_expression(tokens)?;

    Ok(Statement::Expression { expr, line })
}

/// Parses a variable declaration statement.
///
/// A declaration has the form `let <identifier>`, optionally followed by
/// `= <expression>`. Without an initializer the variable is declared as
/// `null`.
///
/// If the next token is not `let`, this function returns `Ok(None)` and does
/// not consume any input.
///
/// # Errors
/// Returns a `ParseError` if:
/// - `let` is not followed by an identifier,
/// - the initializer is malformed.
fn parse_variable_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a Token> + Clone
{
    let line = match tokens.peek() {
        Some(Token { kind: TokenKind::Let,
                     line,
                     .. }) => *line,
        _ => return Ok(None),
    };
    tokens.next();

    let name = match tokens.next() {
        Some(Token { kind: TokenKind::Identifier,
                     text,
                     .. }) => text.clone(),
        Some(token) => {
            return Err(ParseError::UnexpectedToken { expected:
                                                         "an identifier after 'let'".to_string(),
                                                     found:    token.text.clone(),
                                                     kind:     token.kind,
                                                     line:     token.line, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput),
    };

    let value = if let Some(Token { kind: TokenKind::Assign,
                                    .. }) = tokens.peek()
    {
        tokens.next();
        Some(parse_expression(tokens)?)
    } else {
        None
    };

    Ok(Some(Statement::Declaration { name, value, line }))
}

/// Parses an assignment statement of the form `<identifier> = <expression>`.
///
/// Looks two tokens ahead on a copy of the cursor; if they are not an
/// identifier followed by `=`, returns `Ok(None)` without consuming anything.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut lookahead = tokens.clone();
    let (name, line) = match (lookahead.next(), lookahead.next()) {
        (Some(Token { kind: TokenKind::Identifier,
                      text,
                      line, }),
         Some(Token { kind: TokenKind::Assign,
                      .. })) => (text.clone(), *line),
        _ => return Ok(None),
    };
    tokens.next();
    tokens.next();

    let value = parse_expression(tokens)?;

    Ok(Some(Statement::Assignment { name, value, line }))
}
