use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::{Operands, Value},
    },
    operator::BinaryOperator,
    util::num::{floor_div_f64, floor_div_i64, floor_mod_f64, floor_mod_i64, i64_to_f64},
};

impl Context {
    /// Evaluates a scalar arithmetic operation.
    ///
    /// Integer with integer stays an integer (with overflow checked); any
    /// float operand makes the result a float. Booleans take part as `0` and
    /// `1`. True division always yields a float. `//` and `%` round toward
    /// negative infinity, so a remainder takes the sign of the divisor.
    ///
    /// A zero divisor for `/`, `//` or `%` is reported as
    /// `RuntimeError::DivisionByZero`. Two texts can be joined with `+`; any
    /// other use of text or unit is a type mismatch.
    ///
    /// # Parameters
    /// - `op`: One of `Add`, `Sub`, `Mul`, `Div`, `FloorDiv` or `Mod`.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Example
    /// ```
    /// use reckon::{
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    ///     operator::BinaryOperator,
    /// };
    ///
    /// let x = Value::Integer(7);
    /// let y = Value::Integer(2);
    ///
    /// let half = Context::eval_scalar_op(BinaryOperator::Div, &x, &y, 1).unwrap();
    /// assert_eq!(half, Value::Float(3.5));
    ///
    /// let floor = Context::eval_scalar_op(BinaryOperator::FloorDiv, &x, &y, 1).unwrap();
    /// assert_eq!(floor, Value::Integer(3));
    /// ```
    pub fn eval_scalar_op(op: BinaryOperator,
                          left: &Value,
                          right: &Value,
                          line: usize)
                          -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, FloorDiv, Mod, Mul, Sub};

        if let (Add, Value::Text(a), Value::Text(b)) = (op, left, right) {
            return Ok(Value::Text(format!("{a}{b}")));
        }

        let operands =
            left.promote(right)
                .ok_or_else(|| RuntimeError::TypeMismatch { op,
                                                            left: left.kind(),
                                                            right: right.kind(),
                                                            line })?;

        if op.is_division() && operands.divisor_is_zero() {
            return Err(RuntimeError::DivisionByZero { line });
        }

        match operands {
            Operands::Integers(a, b) => {
                let result = match op {
                    Add => a.checked_add(b),
                    Sub => a.checked_sub(b),
                    Mul => a.checked_mul(b),
                    Div => return Ok(Value::Float(i64_to_f64(a) / i64_to_f64(b))),
                    FloorDiv => floor_div_i64(a, b),
                    Mod => floor_mod_i64(a, b),
                    _ => unreachable!("eval_scalar_op used with non arithmetic operator"),
                };
                result.map(Value::Integer)
                      .ok_or(RuntimeError::Overflow { line })
            },
            Operands::Floats(a, b) => {
                let result = match op {
                    Add => a + b,
                    Sub => a - b,
                    Mul => a * b,
                    Div => a / b,
                    FloorDiv => floor_div_f64(a, b),
                    Mod => floor_mod_f64(a, b),
                    _ => unreachable!("eval_scalar_op used with non arithmetic operator"),
                };
                Ok(Value::Float(result))
            },
        }
    }
}
