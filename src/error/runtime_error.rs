use crate::operator::{BinaryOperator, UnaryOperator};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all soft errors that can occur during evaluation.
///
/// None of these end the session. The evaluator prints the error and uses
/// the fallback value in place of the failed operation.
pub enum RuntimeError {
    /// Divided, floor-divided, took a modulo by zero, or raised zero to a
    /// negative power.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Looked up a name that was never assigned.
    UndefinedName {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Integer arithmetic overflowed.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A binary operator was applied to operand kinds it does not support.
    TypeMismatch {
        /// The operator.
        op:    BinaryOperator,
        /// Kind of the left operand.
        left:  &'static str,
        /// Kind of the right operand.
        right: &'static str,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A unary operator was applied to an operand kind it does not support.
    UnsupportedOperand {
        /// The operator.
        op:      UnaryOperator,
        /// Kind of the operand.
        operand: &'static str,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl RuntimeError {
    /// The source line the error was raised on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::DivisionByZero { line }
            | Self::UndefinedName { line, .. }
            | Self::Overflow { line }
            | Self::TypeMismatch { line, .. }
            | Self::UnsupportedOperand { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { .. } => write!(f, "ERR: Division by zero attempted."),
            Self::UndefinedName { name, .. } => write!(f, "Undefined name '{name}'"),
            Self::Overflow { .. } => write!(f, "ERR: Integer overflow."),
            Self::TypeMismatch { op, left, right, .. } => write!(f,
                                                                "ERR: Unsupported operand types for {op}: '{left}' and '{right}'."),
            Self::UnsupportedOperand { op, operand, .. } => {
                write!(f, "ERR: Bad operand type for unary {op}: '{operand}'.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
