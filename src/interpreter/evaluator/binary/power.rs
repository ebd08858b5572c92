use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::{Operands, Value},
    },
    operator::BinaryOperator,
    util::num::i64_to_f64,
};

impl Context {
    /// Evaluates an exponentiation operation.
    ///
    /// Integer–integer exponentiation with a non-negative exponent uses
    /// checked arithmetic and stays an integer. Negative integer exponents
    /// are computed in floating-point form. Any float operand promotes both
    /// operands to floats and uses `powf`.
    ///
    /// Raising zero to a negative power is reported as division by zero.
    ///
    /// # Parameters
    /// - `base`: The base value.
    /// - `exponent`: The exponent value.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the result of `base ^ exponent`.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let b = Value::Integer(2);
    ///
    /// let result = Context::eval_pow(&b, &Value::Integer(10), 1).unwrap();
    /// assert_eq!(result, Value::Integer(1024));
    ///
    /// let result = Context::eval_pow(&b, &Value::Integer(-1), 1).unwrap();
    /// assert_eq!(result, Value::Float(0.5));
    /// ```
    pub fn eval_pow(base: &Value, exponent: &Value, line: usize) -> EvalResult<Value> {
        let operands =
            base.promote(exponent)
                .ok_or_else(|| RuntimeError::TypeMismatch { op: BinaryOperator::Pow,
                                                            left: base.kind(),
                                                            right: exponent.kind(),
                                                            line })?;

        match operands {
            Operands::Integers(0, e) if e < 0 => Err(RuntimeError::DivisionByZero { line }),
            Operands::Integers(b, e) if e < 0 => {
                Ok(Value::Float(i64_to_f64(b).powf(i64_to_f64(e))))
            },
            Operands::Integers(b, e) => checked_int_pow(b, e).map(Value::Integer)
                                                             .ok_or(RuntimeError::Overflow { line }),
            Operands::Floats(b, e) if b == 0.0 && e < 0.0 => {
                Err(RuntimeError::DivisionByZero { line })
            },
            Operands::Floats(b, e) => Ok(Value::Float(b.powf(e))),
        }
    }
}

/// Raises `base` to a non-negative `exponent`, returning `None` on overflow.
///
/// Exponents beyond `u32::MAX` only fit for the bases `0`, `1` and `-1`.
fn checked_int_pow(base: i64, exponent: i64) -> Option<i64> {
    match u32::try_from(exponent) {
        Ok(e) => base.checked_pow(e),
        Err(_) => match base {
            0 | 1 => Some(base),
            -1 => Some(if exponent % 2 == 0 { 1 } else { -1 }),
            _ => None,
        },
    }
}
