use crate::{
    error::EvalError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        lexer::Operator,
        value::Value,
    },
};

impl Interpreter {
    /// Evaluates a binary operation between two values.
    ///
    /// `+` concatenates the textual forms when either side is a string and
    /// adds otherwise. `- * / %` parse both sides as integers first, so
    /// `"12" - 2` is `10`. Division and remainder truncate toward zero.
    ///
    /// # Errors
    /// - `EvalError::ExpectedInteger` if an operand does not parse.
    /// - `EvalError::DivisionByZero` for a zero divisor.
    /// - `EvalError::Overflow` if the result leaves the 64-bit range.
    /// - `EvalError::UnknownOperator` for comparison and assignment operators.
    ///
    /// # Example
    /// ```
    /// use chapa::{
    ///     Interpreter,
    ///     interpreter::{lexer::Operator, value::Value},
    /// };
    ///
    /// let diff = Interpreter::eval_binary(Operator::Minus, &Value::from("12"), &Value::Integer(2));
    /// assert_eq!(diff.unwrap(), Value::Integer(10));
    ///
    /// let joined = Interpreter::eval_binary(Operator::Plus, &Value::from("a"), &Value::Integer(1));
    /// assert_eq!(joined.unwrap(), Value::from("a1"));
    ///
    /// let quotient = Interpreter::eval_binary(Operator::Slash, &Value::Integer(-7), &Value::Integer(2));
    /// assert_eq!(quotient.unwrap(), Value::Integer(-3));
    /// ```
    pub fn eval_binary(op: Operator, left: &Value, right: &Value) -> EvalResult<Value> {
        if !matches!(op,
                     Operator::Plus
                     | Operator::Minus
                     | Operator::Star
                     | Operator::Slash
                     | Operator::Percent)
        {
            return Err(EvalError::UnknownOperator { operator: op.to_string() });
        }

        if op == Operator::Plus && (left.is_str() || right.is_str()) {
            return Ok(Value::Str(format!("{left}{right}")));
        }

        let context = format!("Operator '{op}'");
        let a = left.coerce_integer(&context)?;
        let b = right.coerce_integer(&context)?;

        if matches!(op, Operator::Slash | Operator::Percent) && b == 0 {
            return Err(EvalError::DivisionByZero);
        }

        let result = match op {
            Operator::Plus => a.checked_add(b),
            Operator::Minus => a.checked_sub(b),
            Operator::Star => a.checked_mul(b),
            Operator::Slash => a.checked_div(b),
            _ => a.checked_rem(b),
        };

        result.map(Value::Integer)
              .ok_or_else(|| EvalError::Overflow { operator: op.to_string() })
    }
}
