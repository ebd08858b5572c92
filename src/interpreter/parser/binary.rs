use std::iter::Peekable;

use crate::{
    interpreter::{
        evaluator::core::Context,
        lexer::Token,
        parser::{core::ParseResult, unary::parse_unary},
        value::core::Value,
    },
    operator::BinaryOperator,
};

/// Parses relational and equality operators.
///
/// Handles the left-associative comparison operators
/// `<`, `>`, `<=`, `>=`, `==`, `!=`. They bind loosest of all operators, so
/// `1 + 1 == 2` compares the sum.
///
/// The rule is: `comparison := additive (("==" | "!=" | "<" | "<=" | ">" |
/// ">=") additive)*`
///
/// # Parameters
/// - `tokens`: Token stream (token + line number) wrapped in a `Peekable`.
/// - `ctx`: The evaluation context.
///
/// # Returns
/// The boolean result, or the additive value if no comparison follows.
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>, ctx: &mut Context) -> ParseResult<Value>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_additive(tokens, ctx)?;

    while let Some((token, line)) = tokens.peek() {
        let op = match token_to_binary_operator(token) {
            Some(op) if is_relational_op(op) => op,
            _ => break,
        };

        let line = *line;
        tokens.next(); // consume operator

        let right = parse_additive(tokens, ctx)?;
        left = ctx.recover(Context::eval_binary(op, &left, &right, line));
    }

    Ok(left)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
/// - `ctx`: The evaluation context.
///
/// # Returns
/// The value of the additive chain.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, ctx: &mut Context) -> ParseResult<Value>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_multiplicative(tokens, ctx)?;
    loop {
        if let Some((token, line)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            let line = *line;
            tokens.next();
            let right = parse_multiplicative(tokens, ctx)?;
            left = ctx.recover(Context::eval_binary(op, &left, &right, line));
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators: `*`, `/`, `//` and `%`.
///
/// The rule is: `multiplicative := unary (("*" | "/" | "//" | "%") unary)*`
///
/// A zero divisor does not stop the chain: the failed step is reported and
/// the remaining operators apply to the fallback value.
///
/// # Parameters
/// - `tokens`: Token stream with line information.
/// - `ctx`: The evaluation context.
///
/// # Returns
/// The value of the multiplicative chain.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>,
                                   ctx: &mut Context)
                                   -> ParseResult<Value>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_unary(tokens, ctx)?;
    loop {
        if let Some((token, line)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op,
                       BinaryOperator::Mul
                       | BinaryOperator::Div
                       | BinaryOperator::FloorDiv
                       | BinaryOperator::Mod)
        {
            let line = *line;
            tokens.next();
            let right = parse_unary(tokens, ctx)?;
            left = ctx.recover(Context::eval_binary(op, &left, &right, line));
            continue;
        }
        break;
    }
    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents a binary operator
/// (`+`, `-`, `*`, `/`, `//`, `%`, `^` and the comparison operators).
/// Returns `None` for all other tokens.
///
/// # Example
/// ```
/// use reckon::{
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
///     operator::BinaryOperator,
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::SlashSlash),
///            Some(BinaryOperator::FloorDiv));
/// assert_eq!(token_to_binary_operator(&Token::Equals), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::SlashSlash => Some(BinaryOperator::FloorDiv),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::Caret => Some(BinaryOperator::Pow),
        Token::Less => Some(BinaryOperator::Less),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        Token::EqualEqual => Some(BinaryOperator::Equal),
        Token::BangEqual => Some(BinaryOperator::NotEqual),
        _ => None,
    }
}

/// Determines whether a binary operator belongs to the relational class.
///
/// # Example
/// ```
/// use reckon::{interpreter::parser::binary::is_relational_op, operator::BinaryOperator};
///
/// assert!(is_relational_op(BinaryOperator::Less));
/// assert!(is_relational_op(BinaryOperator::NotEqual));
/// assert!(!is_relational_op(BinaryOperator::Add));
/// ```
#[must_use]
pub const fn is_relational_op(op: BinaryOperator) -> bool {
    matches!(op,
             BinaryOperator::Less
             | BinaryOperator::Greater
             | BinaryOperator::LessEqual
             | BinaryOperator::GreaterEqual
             | BinaryOperator::Equal
             | BinaryOperator::NotEqual)
}
