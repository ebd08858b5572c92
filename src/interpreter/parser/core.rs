use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        evaluator::core::Context, lexer::Token, parser::binary::parse_comparison,
        value::core::Value,
    },
};

/// Why a statement stopped before completing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interrupt {
    /// The tokens do not form a statement. Only the current line is dropped.
    Syntax(ParseError),
    /// The `quit` command ran. The session is over.
    Quit,
}

impl From<ParseError> for Interrupt {
    fn from(error: ParseError) -> Self {
        Self::Syntax(error)
    }
}

pub type ParseResult<T> = Result<T, Interrupt>;

/// Parses and evaluates a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, comparison, and recursively descends through the
/// precedence hierarchy. Every production computes its value as soon as it is
/// recognized; there is no intermediate tree.
///
/// Grammar: `expression := comparison`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
/// - `ctx`: The evaluation context that grammar actions run against.
///
/// # Returns
/// The value of the expression.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, ctx: &mut Context) -> ParseResult<Value>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_comparison(tokens, ctx)
}

/// Requires that every token of the statement has been consumed.
///
/// # Errors
/// Returns `ParseError::UnexpectedTrailingTokens` naming the first leftover
/// token.
pub(in crate::interpreter::parser) fn expect_end<'a, I>(tokens: &mut Peekable<I>)
                                                        -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.peek() {
        None => Ok(()),
        Some((tok, line)) => {
            Err(ParseError::UnexpectedTrailingTokens { token: tok.to_string(),
                                                       line:  *line, }.into())
        },
    }
}
