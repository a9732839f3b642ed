use std::fmt;

use log::{debug, trace};
use logos::Logos;

use crate::error::LexError;

/// The lexemes recognized by the scanner.
///
/// This is the `logos` view of the source: whitespace and newlines are skipped
/// here, and every match is turned into a public [`Token`] by [`tokenize`].
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(extras = LexerExtras)]
#[logos(skip r"[ \t\r]+")]
enum Lexeme {
    /// `let`
    #[token("let")]
    Let,
    /// `null`
    #[token("null")]
    Null,
    /// Alphabetic runs such as `x` or `total`.
    #[regex(r"[A-Za-z]+")]
    Identifier,
    /// Decimal digit runs such as `42`.
    #[regex(r"[0-9]+")]
    Number,
    /// `+`, `-`, `*` and `/`.
    #[regex(r"[+\-*/]")]
    BinaryOperator,
    /// `=`
    #[token("=")]
    Assign,
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// Line breaks; counted, never emitted.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
}

impl Lexeme {
    fn kind(self) -> TokenKind {
        match self {
            Self::Let => TokenKind::Let,
            Self::Null => TokenKind::Null,
            Self::Identifier => TokenKind::Identifier,
            Self::Number => TokenKind::Number,
            Self::BinaryOperator => TokenKind::BinaryOperator,
            Self::Assign => TokenKind::Assign,
            Self::LeftParen => TokenKind::LeftParen,
            Self::RightParen => TokenKind::RightParen,
            Self::NewLine => unreachable!("newlines are skipped by their callback"),
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line: 1 }
    }
}

/// The classification of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A run of decimal digits.
    Number,
    /// A run of letters that is not a keyword.
    Identifier,
    /// The `let` keyword.
    Let,
    /// The `null` literal.
    Null,
    /// One of `+`, `-`, `*`, `/`; the token text tells which.
    BinaryOperator,
    /// `=`
    Assign,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// Marks the end of the token sequence.
    EndOfInput,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Number => "number",
            Self::Identifier => "identifier",
            Self::Let => "keyword",
            Self::Null => "null literal",
            Self::BinaryOperator => "operator",
            Self::Assign => "assignment",
            Self::LeftParen => "opening parenthesis",
            Self::RightParen => "closing parenthesis",
            Self::EndOfInput => "end of input",
        };
        f.write_str(name)
    }
}

/// A classified lexeme.
///
/// Tokens own their text, so they stay valid independently of the source
/// buffer they were scanned from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What kind of lexeme this is.
    pub kind: TokenKind,
    /// The exact source text; empty for [`TokenKind::EndOfInput`].
    pub text: String,
    /// The source line the token starts on.
    pub line: usize,
}

impl Token {
    /// Creates a token of the given kind and text on line `line`.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize) -> Self {
        Self { kind,
               text: text.into(),
               line }
    }

    /// Returns `true` if this token terminates the sequence.
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_end() {
            write!(f, "[{}]", self.kind)
        } else {
            write!(f, "[{} '{}']", self.kind, self.text)
        }
    }
}

/// Converts source text into a token sequence.
///
/// Whitespace (spaces, tabs, carriage returns and newlines) separates tokens
/// and is otherwise ignored. Identifiers and numbers are scanned with maximal
/// munch, so `abc12` yields the identifier `abc` followed by the number `12`.
/// The returned sequence always ends with exactly one
/// [`TokenKind::EndOfInput`] token.
///
/// # Errors
/// Returns a [`LexError`] for the first character that starts no token. The
/// rest of the input is not scanned.
///
/// # Examples
/// ```
/// use simpl::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("let x = 5 + 5").unwrap();
/// let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Let,
///             TokenKind::Identifier,
///             TokenKind::Assign,
///             TokenKind::Number,
///             TokenKind::BinaryOperator,
///             TokenKind::Number,
///             TokenKind::EndOfInput]);
/// assert_eq!(tokens[4].text, "+");
///
/// let error = tokenize("1 @ 2").unwrap_err();
/// assert_eq!((error.character, error.position), ('@', 2));
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Lexeme::lexer_with_extras(source, LexerExtras::default());

    while let Some(lexeme) = lexer.next() {
        let line = lexer.extras.line;
        if let Ok(lexeme) = lexeme {
            let token = Token::new(lexeme.kind(), lexer.slice(), line);
            trace!("scanned {token}");
            tokens.push(token);
        } else {
            let start = lexer.span().start;
            let character = source[start..].chars()
                                           .next()
                                           .unwrap_or(char::REPLACEMENT_CHARACTER);
            let position = source[..start].chars().count();
            debug!("unexpected character {character:?} at position {position}");
            return Err(LexError { position,
                                  character,
                                  line });
        }
    }

    tokens.push(Token::new(TokenKind::EndOfInput, "", lexer.extras.line));
    debug!("tokenized {} bytes into {} tokens", source.len(), tokens.len());

    Ok(tokens)
}
