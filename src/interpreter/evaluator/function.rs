use std::rc::Rc;

use crate::{
    ast::{Expr, FunctionDecl},
    error::EvalError,
    interpreter::{
        evaluator::core::{EvalResult, Flow, Interpreter},
        value::Value,
    },
};

impl Interpreter {
    /// Registers a function, replacing any earlier one with the same name.
    ///
    /// Declarations are global no matter where they run, including inside
    /// another function's body.
    pub fn declare_function(&mut self, decl: &FunctionDecl) {
        log::debug!("declaring {}({})", decl.name, decl.params.join(", "));
        self.functions.insert(decl.name.clone(), Rc::new(decl.clone()));
    }

    /// Calls a user-defined function.
    ///
    /// The whole store is saved first. Arguments are then evaluated left to
    /// right, each bound to its parameter right away, and the body runs. The
    /// saved store is put back afterwards, so nothing the call assigns
    /// survives it.
    ///
    /// # Returns
    /// `Some(value)` if the body executed `parat`, `None` if it ran to the
    /// end.
    ///
    /// # Errors
    /// - `EvalError::UndefinedFunction` if no such function was declared.
    /// - `EvalError::ArgumentCountMismatch` naming the function.
    /// - `EvalError::CallDepthExceeded` past the configured nesting limit.
    /// - Any error of an argument or of the body.
    ///
    /// # Example
    /// ```
    /// use chapa::{Interpreter, ast::Expr, interpreter::value::Value, parse, scan};
    ///
    /// let mut interpreter = Interpreter::new();
    /// let program = parse(&scan("karya twice(n) { parat n * 2; }").unwrap()).unwrap();
    /// interpreter.run(&program).unwrap();
    ///
    /// let result = interpreter.call_function("twice", &[Expr::NumberLiteral("21".into())]);
    /// assert_eq!(result.unwrap(), Some(Value::Integer(42)));
    /// assert!(interpreter.variables.is_empty());
    /// ```
    pub fn call_function(&mut self, name: &str, arguments: &[Expr]) -> EvalResult<Option<Value>> {
        let function = self.functions
                           .get(name)
                           .cloned()
                           .ok_or_else(|| EvalError::UndefinedFunction { name: name.to_string() })?;

        if arguments.len() != function.params.len() {
            return Err(EvalError::ArgumentCountMismatch { name:     name.to_string(),
                                                          expected: function.params.len(),
                                                          found:    arguments.len(), });
        }

        if self.call_depth >= self.settings.max_call_depth {
            return Err(EvalError::CallDepthExceeded { function: name.to_string(),
                                                      limit:    self.settings.max_call_depth, });
        }

        log::debug!("calling {name} at depth {}", self.call_depth + 1);

        let saved = self.variables.clone();
        self.call_depth += 1;
        let outcome = self.bind_and_run(&function, arguments);
        self.call_depth -= 1;
        self.variables = saved;

        match outcome? {
            Flow::Return(value) => Ok(Some(value)),
            Flow::Normal => Ok(None),
        }
    }

    /// Binds each parameter as soon as its argument is evaluated, then runs
    /// the body. A later argument sees the parameters bound before it.
    fn bind_and_run(&mut self, function: &FunctionDecl, arguments: &[Expr]) -> EvalResult<Flow> {
        for (param, argument) in function.params.iter().zip(arguments) {
            let value = self.eval(argument)?;
            self.variables.insert(param.clone(), value);
        }

        self.exec_block(&function.body)
    }
}
