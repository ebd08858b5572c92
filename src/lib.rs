//! # reckon
//!
//! reckon is an interactive arithmetic expression interpreter written in
//! Rust. It reads one line at a time, evaluates it at once, and prints or
//! stores the result. It supports integers, floats, strings, comparisons,
//! variables and a handful of built-in commands.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{session::Session, terminal::BufferTerminal};

/// Provides error types for lexing, parsing and evaluation.
///
/// This module defines every error that can be raised while reading or
/// evaluating a line. None of them ends a session: lexical errors skip a
/// character, syntax errors skip the rest of a line, and runtime errors are
/// replaced by a fallback value.
///
/// # Responsibilities
/// - Defines error types for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers for context.
/// - Renders the exact diagnostic texts users see.
pub mod error;
/// Orchestrates the entire process of evaluating a line.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations and output to provide a complete interpreter session.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides the `Session` entry point for evaluating input line by line.
/// - Abstracts the terminal so sessions can run headless.
pub mod interpreter;
/// Operators shared by the parser and the evaluator.
pub mod operator;
/// General utilities for numeric conversion, floor arithmetic and logging.
pub mod util;

/// Evaluates `source` line by line in a fresh session and returns everything
/// it printed.
///
/// Results and diagnostics appear in the order they were produced. Evaluation
/// stops after a line that runs `quit`.
///
/// # Examples
/// ```
/// use reckon::evaluate;
///
/// assert_eq!(evaluate("2 + 3 * 4"), vec!["14"]);
///
/// // Soft errors are reported, and evaluation carries on with zero.
/// assert_eq!(evaluate("x = 1 / 0\nx + 1"),
///            vec!["ERR: Division by zero attempted.", "1"]);
/// ```
#[must_use]
pub fn evaluate(source: &str) -> Vec<String> {
    let out = BufferTerminal::default();
    let mut session = Session::new(Box::new(out.clone()));

    session.run_script(source);

    out.take_lines()
}
