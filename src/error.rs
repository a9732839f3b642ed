/// Lexical errors.
///
/// Raised by the tokenizer when it meets a character that starts no token.
/// Tokenization stops at the first such character.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while turning a token sequence into
/// statements and expression trees: unexpected tokens, missing closing
/// parentheses, empty input and trailing garbage.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while evaluating a tree or
/// mutating the scope chain: undefined variables, type mismatches, division
/// by zero and invalid declarations or assignments.
pub mod eval_error;

use std::fmt;

pub use eval_error::EvalError;
pub use lex_error::LexError;
pub use parse_error::ParseError;

/// Any error produced while running a piece of source text.
///
/// Each phase of the pipeline has its own error type; this enum lets callers
/// that drive the whole pipeline handle them uniformly while still being able
/// to match on the phase that failed.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The tokenizer rejected the input.
    Lex(LexError),
    /// The token sequence did not form a valid program.
    Parse(ParseError),
    /// The program failed while being evaluated.
    Eval(EvalError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lex(e) => e.fmt(f),
            Self::Parse(e) => e.fmt(f),
            Self::Eval(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Eval(e) => Some(e),
        }
    }
}

impl From<LexError> for Error {
    fn from(value: LexError) -> Self {
        Self::Lex(value)
    }
}

impl From<ParseError> for Error {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<EvalError> for Error {
    fn from(value: EvalError) -> Self {
        Self::Eval(value)
    }
}
