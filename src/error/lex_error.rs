/// An unrecognized character met during tokenization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    /// Zero-based character offset of the offending character in the input.
    pub position:  usize,
    /// The character that starts no token.
    pub character: char,
    /// The source line where the error occurred.
    pub line:      usize,
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,
               "Error on line {}: Unexpected character '{}' at position {}.",
               self.line, self.character, self.position)
    }
}

impl std::error::Error for LexError {}
