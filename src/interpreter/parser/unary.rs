use std::{iter::Peekable, ops::ControlFlow};

use crate::{
    error::ParseError,
    interpreter::{
        evaluator::core::Context,
        lexer::Token,
        parser::core::{Interrupt, ParseResult, parse_expression},
        value::core::Value,
    },
    operator::UnaryOperator,
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `-`  (numeric negation)
/// - `+`  (numeric identity)
///
/// Unary operators are right-associative, so an input like `--x` is parsed as
/// `-( -x )`. They bind looser than `^`, so `-2 ^ 2` is `-(2 ^ 2)`.
///
/// Grammar:
/// ```text
///     unary := ("-" | "+") unary
///            | power
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `ctx`: The evaluation context.
///
/// # Returns
/// The value of the unary expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, ctx: &mut Context) -> ParseResult<Value>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let prefix = match tokens.peek() {
        Some((Token::Minus, line)) => Some((UnaryOperator::Negate, *line)),
        Some((Token::Plus, line)) => Some((UnaryOperator::Plus, *line)),
        _ => None,
    };

    if let Some((op, line)) = prefix {
        tokens.next();
        let operand = parse_unary(tokens, ctx)?;
        Ok(ctx.recover(Context::eval_unary(op, &operand, line)))
    } else {
        parse_power(tokens, ctx)
    }
}

/// Parses exponentiation.
///
/// The exponent is itself a unary expression, which makes `^`
/// right-associative (`2 ^ 3 ^ 2` is `2 ^ 9`) and allows a signed exponent
/// (`2 ^ -1`).
///
/// Grammar: `power := primary ("^" unary)?`
fn parse_power<'a, I>(tokens: &mut Peekable<I>, ctx: &mut Context) -> ParseResult<Value>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let base = parse_primary(tokens, ctx)?;

    if let Some((Token::Caret, line)) = tokens.peek() {
        let line = *line;
        tokens.next();
        let exponent = parse_unary(tokens, ctx)?;
        return Ok(ctx.recover(Context::eval_pow(&base, &exponent, line)));
    }

    Ok(base)
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - numeric and string literals
/// - identifiers, looked up in the environment
/// - the built-in commands `cls`, `info` and `quit`
/// - parenthesized expressions
///
/// An undefined identifier is reported and evaluates to the fallback value.
/// `quit` interrupts the statement.
///
/// Grammar (simplified):
/// ```text
///     primary := NUMBER
///              | STRING
///              | IDENT
///              | "cls" | "info" | "quit"
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
/// - `ctx`: The evaluation context.
///
/// # Returns
/// The value of the primary, or an [`Interrupt`] on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, ctx: &mut Context) -> ParseResult<Value>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Number(number), _)) => Ok(Value::from(*number)),
        Some((Token::Str(literal), _)) => Ok(Value::Text(strip_quotes(literal).to_string())),
        Some((Token::Identifier(name), line)) => Ok(ctx.recover(ctx.eval_variable(name, *line))),
        Some((Token::Keyword(keyword), _)) => match ctx.eval_keyword(*keyword) {
            ControlFlow::Continue(value) => Ok(value),
            ControlFlow::Break(()) => Err(Interrupt::Quit),
        },
        Some((Token::LParen, line)) => parse_grouping(tokens, ctx, *line),
        Some((tok, line)) => Err(ParseError::UnexpectedToken { token: tok.to_string(),
                                                               line:  *line, }.into()),
        None => Err(ParseError::UnexpectedEndOfInput { line: ctx.last_line }.into()),
    }
}

/// Parses the inside of `( expression )` after the opening parenthesis.
///
/// # Errors
/// Returns `ParseError::ExpectedClosingParen` if the group is not closed.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>,
                         ctx: &mut Context,
                         open_line: usize)
                         -> ParseResult<Value>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let value = parse_expression(tokens, ctx)?;

    match tokens.next() {
        Some((Token::RParen, _)) => Ok(value),
        Some((_, line)) => Err(ParseError::ExpectedClosingParen { line: *line }.into()),
        None => Err(ParseError::ExpectedClosingParen { line: open_line }.into()),
    }
}

/// Removes the surrounding double quotes from a string literal.
///
/// # Example
/// ```
/// use reckon::interpreter::parser::unary::strip_quotes;
///
/// assert_eq!(strip_quotes("\"hello\""), "hello");
/// assert_eq!(strip_quotes("\"\""), "");
/// assert_eq!(strip_quotes("bare"), "bare");
/// ```
#[must_use]
pub fn strip_quotes(literal: &str) -> &str {
    literal.strip_prefix('"')
           .and_then(|inner| inner.strip_suffix('"'))
           .unwrap_or(literal)
}
