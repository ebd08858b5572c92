#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing a statement.
pub enum ParseError {
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Found extra tokens after the statement should have ended.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, line } => {
                write!(f, "Syntax error at line {line}, token={token}")
            },

            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Syntax error at line {line}: unexpected end of input")
            },

            Self::ExpectedClosingParen { line } => {
                write!(f, "Syntax error at line {line}: expected closing parenthesis ')'")
            },

            Self::UnexpectedTrailingTokens { token, line } => write!(f,
                                                                     "Syntax error at line {line}: extra tokens after statement, starting at {token}"),
        }
    }
}

impl std::error::Error for ParseError {}
