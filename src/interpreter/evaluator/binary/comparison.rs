use std::cmp::Ordering;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::{Operands, Value},
    },
    operator::BinaryOperator,
};

impl Context {
    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// Numbers compare by value across integer and float kinds. Texts compare
    /// lexicographically. Values of unrelated kinds are never equal, and
    /// ordering them is a type mismatch.
    ///
    /// # Parameters
    /// - `op`: The comparison operator.
    /// - `left`: The left-hand value.
    /// - `right`: The right-hand value.
    /// - `line`: Current line number used for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing a boolean result.
    ///
    /// # Example
    /// ```
    /// use reckon::{
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    ///     operator::BinaryOperator,
    /// };
    ///
    /// let a = Value::Integer(3);
    /// let b = Value::Float(3.0);
    ///
    /// let result = Context::eval_comparison(BinaryOperator::Equal, &a, &b, 1);
    /// assert_eq!(result.unwrap(), Value::Bool(true));
    ///
    /// let text = Value::from("3");
    /// let result = Context::eval_comparison(BinaryOperator::Equal, &a, &text, 1);
    /// assert_eq!(result.unwrap(), Value::Bool(false));
    /// ```
    pub fn eval_comparison(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
        let ordering = match (left, right) {
            (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
            (Value::Unit, Value::Unit) => Some(Ordering::Equal),
            _ => match left.promote(right) {
                Some(Operands::Integers(a, b)) => Some(a.cmp(&b)),
                // NaN is unordered.
                Some(Operands::Floats(a, b)) => a.partial_cmp(&b),
                // Unrelated kinds are unordered, so only `!=` holds.
                None if matches!(op, BinaryOperator::Equal | BinaryOperator::NotEqual) => None,
                None => {
                    return Err(RuntimeError::TypeMismatch { op,
                                                            left: left.kind(),
                                                            right: right.kind(),
                                                            line });
                },
            },
        };

        Ok(Value::Bool(comparison_result(op, ordering)))
    }
}

/// Maps a comparison operator and the ordering of its operands to the final
/// boolean. An unordered pair satisfies only `!=`.
#[must_use]
pub fn comparison_result(op: BinaryOperator, ordering: Option<Ordering>) -> bool {
    match op {
        BinaryOperator::Equal => ordering == Some(Ordering::Equal),
        BinaryOperator::NotEqual => ordering != Some(Ordering::Equal),
        BinaryOperator::Less => ordering == Some(Ordering::Less),
        BinaryOperator::LessEqual => matches!(ordering, Some(Ordering::Less | Ordering::Equal)),
        BinaryOperator::Greater => ordering == Some(Ordering::Greater),
        BinaryOperator::GreaterEqual => {
            matches!(ordering, Some(Ordering::Greater | Ordering::Equal))
        },
        _ => unreachable!("comparison_result used with non comparison operator"),
    }
}
