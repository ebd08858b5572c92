use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
    operator::UnaryOperator,
};

impl Context {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Negate`: numeric negation that keeps the integer or float kind.
    ///   Negating `i64::MIN` overflows.
    /// - `Plus`: the numeric identity.
    ///
    /// Booleans are treated as the integers `0` and `1`. Text and unit are
    /// rejected.
    ///
    /// # Parameters
    /// - `op`: Unary operator.
    /// - `value`: Input value.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The computed `Value` wrapped in `EvalResult`.
    ///
    /// # Example
    /// ```
    /// use reckon::{
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    ///     operator::UnaryOperator,
    /// };
    ///
    /// let v = Context::eval_unary(UnaryOperator::Negate, &Value::Integer(5), 1).unwrap();
    /// assert_eq!(v, Value::Integer(-5));
    ///
    /// let v = Context::eval_unary(UnaryOperator::Negate, &Value::Float(2.5), 1).unwrap();
    /// assert_eq!(v, Value::Float(-2.5));
    ///
    /// assert!(Context::eval_unary(UnaryOperator::Negate, &Value::from("a"), 1).is_err());
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value, line: usize) -> EvalResult<Value> {
        match (op, value) {
            (UnaryOperator::Negate, Value::Integer(n)) => {
                n.checked_neg()
                 .map(Value::Integer)
                 .ok_or(RuntimeError::Overflow { line })
            },
            (UnaryOperator::Negate, Value::Float(x)) => Ok(Value::Float(-x)),
            (UnaryOperator::Negate, Value::Bool(b)) => Ok(Value::Integer(-i64::from(*b))),
            (UnaryOperator::Plus, Value::Integer(_) | Value::Float(_)) => Ok(value.clone()),
            (UnaryOperator::Plus, Value::Bool(b)) => Ok(Value::Integer(i64::from(*b))),
            (_, Value::Text(_) | Value::Unit) => {
                Err(RuntimeError::UnsupportedOperand { op,
                                                       operand: value.kind(),
                                                       line })
            },
        }
    }
}
