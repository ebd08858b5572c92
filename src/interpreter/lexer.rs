use std::fmt;

use logos::Logos;

use crate::error::LexError;

/// Represents a lexical token in one line of input.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Tokens are immutable once produced and live for one input line.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.`, `3.14` or `2.1e-10`.
    #[regex(r"[0-9]+\.[0-9]*([eE][+-]?[0-9]+)?", parse_float)]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+", parse_float)]
    #[regex(r"[0-9]+", parse_integer)]
    Number(Number),
    /// String literals such as `"hello"`. The payload keeps its quotes.
    #[regex(r#""[^"\n]*""#, |lex| lex.slice().to_string(), allow_greedy = true)]
    Str(String),
    /// Reserved words. Matched before identifiers because logos prefers exact
    /// tokens over a regex of the same length.
    #[token("cls", |_| Keyword::Cls)]
    #[token("info", |_| Keyword::Info)]
    #[token("quit", |_| Keyword::Quit)]
    Keyword(Keyword),
    /// Identifier tokens; variable names such as `x` or `total_2`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `# Comments.`
    #[regex(r"#[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `//`
    #[token("//")]
    SlashSlash,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `=`
    #[token("=")]
    Equals,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `%`
    #[token("%")]
    Percent,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,

    /// Newlines only advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\f\r]+", logos::skip)]
    Ignored,
}

/// The payload of a numeric literal, typed at tokenize time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// A literal without a decimal point or exponent.
    Integer(i64),
    /// A literal with a decimal point or exponent.
    Float(f64),
}

/// Reserved zero-argument commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    /// `cls`: clear the terminal.
    Cls,
    /// `info`: print the interpreter version.
    Info,
    /// `quit`: say goodbye and end the session.
    Quit,
}

impl Keyword {
    /// Returns the reserved spelling of the keyword.
    #[must_use]
    pub const fn spelling(self) -> &'static str {
        match self {
            Self::Cls => "cls",
            Self::Info => "info",
            Self::Quit => "quit",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(Number::Integer(n)) => write!(f, "{n}"),
            Self::Number(Number::Float(x)) => write!(f, "{x:?}"),
            Self::Str(s) | Self::Identifier(s) => f.write_str(s),
            Self::Keyword(k) => f.write_str(k.spelling()),
            Self::EqualEqual => f.write_str("=="),
            Self::BangEqual => f.write_str("!="),
            Self::LessEqual => f.write_str("<="),
            Self::GreaterEqual => f.write_str(">="),
            Self::SlashSlash => f.write_str("//"),
            Self::Less => f.write_str("<"),
            Self::Greater => f.write_str(">"),
            Self::Equals => f.write_str("="),
            Self::Plus => f.write_str("+"),
            Self::Minus => f.write_str("-"),
            Self::Star => f.write_str("*"),
            Self::Slash => f.write_str("/"),
            Self::Caret => f.write_str("^"),
            Self::Percent => f.write_str("%"),
            Self::LParen => f.write_str("("),
            Self::RParen => f.write_str(")"),
            Self::LBrace => f.write_str("{"),
            Self::RBrace => f.write_str("}"),
            Self::Comment | Self::NewLine | Self::Ignored => Ok(()),
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Tokenizes `source`, numbering lines from `first_line`.
///
/// The returned iterator is lazy and yields each token with the line it was
/// found on. An unrecognized character yields a [`LexError`] and the lexer
/// resumes right after it, so one bad character never hides the rest of the
/// line.
///
/// # Example
/// ```
/// use reckon::interpreter::lexer::{Number, Token, tokenize};
///
/// let tokens: Vec<_> = tokenize("x = 2.5 $ 1", 1).collect();
///
/// assert_eq!(tokens[0], Ok((Token::Identifier("x".to_string()), 1)));
/// assert_eq!(tokens[2], Ok((Token::Number(Number::Float(2.5)), 1)));
/// assert!(tokens[3].is_err());
/// assert_eq!(tokens[4], Ok((Token::Number(Number::Integer(1)), 1)));
/// ```
pub fn tokenize(source: &str,
                first_line: usize)
                -> impl Iterator<Item = Result<(Token, usize), LexError>> + '_ {
    let mut offset = 0;
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: first_line });

    std::iter::from_fn(move || {
        let token = lexer.next()?;
        let line = lexer.extras.line;
        Some(match token {
                 Ok(tok) => {
                     tracing::trace!(line, token = ?tok, "token");
                     Ok((tok, line))
                 },
                 Err(()) => {
                     let ch = lexer.slice().chars().next().unwrap_or('\0');
                     // Only the offending character is consumed; a partial
                     // match such as an unterminated string is lexed again.
                     if lexer.slice().len() > ch.len_utf8() {
                         offset += lexer.span().start + ch.len_utf8();
                         lexer = Token::lexer_with_extras(&source[offset..], LexerExtras { line });
                     }
                     Err(LexError { ch, line })
                 },
             })
    })
}

/// Parses a floating-point literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(Number::Float)`: The parsed value if successful.
/// - `None`: If the token slice is not a valid float.
fn parse_float(lex: &logos::Lexer<Token>) -> Option<Number> {
    lex.slice().parse().ok().map(Number::Float)
}

/// Parses an integer literal from the current token slice.
///
/// Literals too large for `i64` are read as floats instead of failing.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<Number> {
    let slice = lex.slice();
    slice.parse()
         .map(Number::Integer)
         .or_else(|_| slice.parse().map(Number::Float))
         .ok()
}
