/// An unrecognized character found by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexError {
    /// The offending character.
    pub ch:   char,
    /// The source line where the character was found.
    pub line: usize,
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Line {}: ILLEGAL character {:?}", self.line, self.ch)
    }
}

impl std::error::Error for LexError {}
