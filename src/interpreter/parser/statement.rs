use std::iter::Peekable;

use crate::interpreter::{
    evaluator::core::Context,
    lexer::Token,
    parser::core::{ParseResult, expect_end, parse_expression},
    session::Outcome,
};

/// Parses and carries out a single statement.
///
/// A statement may be one of:
/// - an assignment, `name = expression`, which stores the value silently.
/// - an expression, whose value is printed.
/// - nothing at all (a blank or comment-only line).
///
/// Strings are ordinary expressions, so `name = "text"` stores the text with
/// its quotes removed. An expression that evaluates to unit, such as `info`,
/// prints nothing further.
///
/// Output happens only once the whole statement has parsed; a syntax error
/// leaves the environment unchanged.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
/// - `ctx`: The evaluation context.
///
/// # Returns
/// The [`Outcome`] of the statement.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>, ctx: &mut Context) -> ParseResult<Outcome>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if tokens.peek().is_none() {
        return Ok(Outcome::Silent);
    }

    if let Some(name) = parse_assignment_target(tokens) {
        let value = parse_expression(tokens, ctx)?;
        expect_end(tokens)?;
        ctx.assign(name, value);
        return Ok(Outcome::Stored(name.to_string()));
    }

    let value = parse_expression(tokens, ctx)?;
    expect_end(tokens)?;

    if value.is_printable() {
        ctx.print(&value.to_string());
        Ok(Outcome::Printed(value))
    } else {
        Ok(Outcome::Silent)
    }
}

/// Consumes `name =` when the statement is an assignment.
///
/// Looks two tokens ahead without consuming anything unless both match, so
/// an expression such as `x == 1` or `x + 1` is left untouched.
///
/// # Returns
/// - `Some(name)` if the statement starts with an identifier and `=`.
/// - `None` otherwise.
fn parse_assignment_target<'a, I>(tokens: &mut Peekable<I>) -> Option<&'a str>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut lookahead = tokens.clone();

    match (lookahead.next(), lookahead.next()) {
        (Some((Token::Identifier(name), _)), Some((Token::Equals, _))) => {
            tokens.next();
            tokens.next();
            Some(name.as_str())
        },
        _ => None,
    }
}
