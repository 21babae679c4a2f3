use crate::{
    ast::{Block, Condition, Statement},
    interpreter::evaluator::core::{EvalResult, Flow, Interpreter},
};

impl Interpreter {
    /// Runs a `joparyant` loop.
    ///
    /// The condition is checked before every iteration. A `parat` inside the
    /// body leaves the loop and keeps travelling outward.
    ///
    /// # Errors
    /// The first `EvalError` raised by the condition or the body.
    ///
    /// # Example
    /// ```
    /// use chapa::{Interpreter, ast::Statement, interpreter::value::Value, parse, scan};
    ///
    /// let program = parse(&scan("joparyant (x < 3) chapa(x); x = x + 1; sampel").unwrap()).unwrap();
    /// let Statement::While { condition, body } = &program.statements[0] else { unreachable!() };
    ///
    /// let mut interpreter = Interpreter::new();
    /// interpreter.variables.insert("x".into(), Value::Integer(0));
    /// interpreter.exec_while(condition, body).unwrap();
    ///
    /// assert_eq!(interpreter.output(), "0\n1\n2\n");
    /// ```
    pub fn exec_while(&mut self, condition: &Condition, body: &Block) -> EvalResult<Flow> {
        while self.eval_condition(condition)? {
            if let Flow::Return(value) = self.exec_block(body)? {
                return Ok(Flow::Return(value));
            }
        }
        Ok(Flow::Normal)
    }

    /// Runs a `paryant` loop.
    ///
    /// `init` runs once. Then, while the condition holds, the body runs
    /// followed by `increment`. The loop variable lives in the shared store
    /// and stays visible after the loop.
    ///
    /// # Errors
    /// The first `EvalError` raised by any of the four parts.
    pub fn exec_for(&mut self,
                    init: &Statement,
                    condition: &Condition,
                    increment: &Statement,
                    body: &Block)
                    -> EvalResult<Flow> {
        if let Flow::Return(value) = self.exec_statement(init)? {
            return Ok(Flow::Return(value));
        }

        while self.eval_condition(condition)? {
            if let Flow::Return(value) = self.exec_block(body)? {
                return Ok(Flow::Return(value));
            }
            self.exec_statement(increment)?;
        }
        Ok(Flow::Normal)
    }
}
