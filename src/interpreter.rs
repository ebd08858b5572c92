/// The evaluator module computes the results of operators, names and
/// commands.
///
/// The parser calls into it from every grammar action. It owns the runtime
/// context and the variable environment, implements numeric promotion, and
/// turns soft errors such as division by zero into a printed diagnostic and a
/// fallback value.
///
/// # Responsibilities
/// - Evaluates unary and binary operators on runtime values.
/// - Stores and looks up variables.
/// - Runs the built-in commands.
pub mod evaluator;
/// The lexer module tokenizes one line of input.
///
/// The lexer (tokenizer) reads the raw text and produces a stream of tokens:
/// numbers, strings, identifiers, keywords and operators. This is the first
/// stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with line numbers.
/// - Classifies numeric literals as integers or floats.
/// - Reports illegal characters without stopping.
pub mod lexer;
/// The parser module evaluates a line as it recognizes it.
///
/// The parser processes the token stream with one recursive-descent function
/// per precedence level. Each production computes its value immediately by
/// calling the evaluator; no syntax tree outlives the line.
///
/// # Responsibilities
/// - Applies precedence and associativity.
/// - Distinguishes assignments from expressions.
/// - Reports syntax errors with line information.
pub mod parser;
/// The session module drives one line at a time through lexer and parser.
pub mod session;
/// Output capability for sessions: results, diagnostics and screen clearing.
pub mod terminal;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum and its printed form.
/// - Provides promotion between integer and float operands.
pub mod value;
