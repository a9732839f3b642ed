use crate::interpreter::lexer::TokenKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing.
pub enum ParseError {
    /// Found a token that cannot appear at this point.
    UnexpectedToken {
        /// Description of what the parser was looking for.
        expected: String,
        /// Text of the token encountered.
        found:    String,
        /// Kind of the token encountered.
        kind:     TokenKind,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// Text of the token found instead.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The input held nothing to parse.
    EmptyInput,
    /// The token stream ended without an end-of-input marker.
    UnexpectedEndOfInput,
    /// Found extra tokens after a complete expression.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A number token whose text is not a number.
    ///
    /// [`crate::interpreter::lexer::tokenize`] only emits digit runs, which
    /// always convert, so this is raised only for hand-built tokens.
    InvalidNumber {
        /// The literal text.
        text: String,
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected,
                                    found,
                                    kind,
                                    line, } => {
                if found.is_empty() {
                    write!(f, "Error on line {line}: Expected {expected}, found {kind}.")
                } else {
                    write!(f,
                           "Error on line {line}: Expected {expected}, found {kind} '{found}'.")
                }
            },

            Self::ExpectedClosingParen { found, line } => {
                if found.is_empty() {
                    write!(f,
                           "Error on line {line}: Expected closing parenthesis ')' but reached the end of input.")
                } else {
                    write!(f,
                           "Error on line {line}: Expected closing parenthesis ')' but found '{found}'.")
                }
            },

            Self::EmptyInput => write!(f, "Error: Nothing to parse."),

            Self::UnexpectedEndOfInput => write!(f, "Error: Unexpected end of input."),

            Self::UnexpectedTrailingTokens { token, line } => write!(f,
                                                                     "Error on line {line}: Extra tokens after expression, starting at '{token}'."),

            Self::InvalidNumber { text, line } => {
                write!(f, "Error on line {line}: Invalid number literal '{text}'.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
