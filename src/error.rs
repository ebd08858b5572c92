/// Lexical errors.
///
/// An unrecognized character in the input. The lexer reports it and keeps
/// going with the rest of the line.
pub mod lex_error;
/// Parsing errors.
///
/// Defines the syntax errors that can occur while reading a statement. A parse
/// error abandons the rest of the current line and nothing else.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the soft errors raised while evaluating an expression, such as
/// division by zero or an undefined name. They are never fatal: the evaluator
/// prints them and continues with a fallback value.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
