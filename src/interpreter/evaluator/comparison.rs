use crate::{
    ast::Condition,
    error::EvalError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        lexer::Operator,
    },
};

/// Applies a comparison operator to two integers.
///
/// Only `< > <= >= ==` compare; every other operator, `!=` included, is
/// rejected.
///
/// # Errors
/// `EvalError::UnknownOperator` for anything that is not a comparison.
///
/// # Example
/// ```
/// use chapa::interpreter::{evaluator::comparison::compare, lexer::Operator};
///
/// assert!(compare(Operator::LessEqual, 2, 2).unwrap());
/// assert!(!compare(Operator::EqualEqual, 2, 3).unwrap());
/// assert!(compare(Operator::BangEqual, 2, 3).is_err());
/// ```
pub fn compare(op: Operator, left: i64, right: i64) -> EvalResult<bool> {
    match op {
        Operator::Less => Ok(left < right),
        Operator::Greater => Ok(left > right),
        Operator::LessEqual => Ok(left <= right),
        Operator::GreaterEqual => Ok(left >= right),
        Operator::EqualEqual => Ok(left == right),
        other => Err(EvalError::UnknownOperator { operator: other.to_string() }),
    }
}

impl Interpreter {
    /// Evaluates the condition of an `if`, `while` or `for` header.
    ///
    /// Both comparands are evaluated before the operator is checked, and both
    /// must already be integers.
    ///
    /// # Errors
    /// - `EvalError::UndefinedVariable` for an unknown comparand.
    /// - `EvalError::ExpectedInteger` when a comparand holds a string.
    /// - `EvalError::UnknownOperator` from [`compare`].
    pub fn eval_condition(&mut self, condition: &Condition) -> EvalResult<bool> {
        let left = self.eval(&condition.left)?.as_integer("Condition")?;
        let right = self.eval(&condition.right)?.as_integer("Condition")?;

        compare(condition.op, left, right)
    }
}
