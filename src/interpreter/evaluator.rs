/// Binary operator evaluation logic.
///
/// Handles arithmetic with numeric promotion, the zero-divisor policy,
/// exponentiation, and comparisons.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements numeric negation and the unary plus.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the runtime context, variable lookup, assignment, and the
/// recovery step that turns soft errors into the fallback value.
pub mod core;

/// The variable environment.
///
/// A case-sensitive map from names to values that lives for the whole
/// session.
pub mod environment;

/// Built-in commands.
///
/// Evaluates the reserved `cls`, `info` and `quit` keywords.
pub mod builtin;
