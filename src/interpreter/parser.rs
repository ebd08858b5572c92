/// Entry point for expressions and the parser's result type.
///
/// Declares `ParseResult` and `Interrupt`, the two ways a statement can stop
/// early: a syntax error or the `quit` command.
pub mod core;

/// Unary, power and primary productions.
///
/// Handles prefix `-`/`+`, right-associative `^`, literals, names,
/// built-in commands and parenthesized groups.
pub mod unary;

/// Binary productions.
///
/// One left-associative loop per precedence level: comparison, additive and
/// multiplicative.
pub mod binary;

/// Statement parsing.
///
/// Decides between an assignment and a bare expression, and carries out the
/// store or print that ends the statement.
pub mod statement;
