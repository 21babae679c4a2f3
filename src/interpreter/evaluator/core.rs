use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::{Block, Expr, FunctionDecl, Statement},
    error::{EvalError, Failure},
    interpreter::value::Value,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Default limit on nested function calls.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 200;

/// Tunable limits of an [`Interpreter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// How many calls may be active at once before evaluation stops with
    /// `EvalError::CallDepthExceeded`.
    pub max_call_depth: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self { max_call_depth: DEFAULT_MAX_CALL_DEPTH }
    }
}

/// How a statement finished.
///
/// `Return` travels outward through enclosing blocks and loops until the
/// function call that is running them consumes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    /// Continue with the next statement.
    Normal,
    /// A `parat` ran with this value.
    Return(Value),
}

/// Stores the runtime state of one program run.
///
/// ## Usage
///
/// An `Interpreter` is created once per run. Declarations, assignments and
/// function declarations mutate it; `chapa` appends to its output. After an
/// error the output written so far is still available through
/// [`Interpreter::output`].
///
/// # Example
/// ```
/// use chapa::{Interpreter, Settings, parse, scan};
///
/// let program = parse(&scan("he aahe x = 2; chapa(x * 21);").unwrap()).unwrap();
/// let mut interpreter = Interpreter::with_settings(Settings::default());
///
/// interpreter.run(&program).unwrap();
/// assert_eq!(interpreter.output(), "42\n");
/// ```
#[derive(Debug)]
pub struct Interpreter {
    /// The single flat variable store shared by the program and every call.
    pub variables: HashMap<String, Value>,
    /// Declared functions by name. A later declaration replaces an earlier
    /// one.
    pub functions: HashMap<String, Rc<FunctionDecl>>,
    output:        String,
    pub(crate) call_depth: usize,
    pub(crate) settings:   Settings,
}

#[allow(clippy::new_without_default)]
impl Interpreter {
    /// Creates an interpreter with empty stores and default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Creates an interpreter with empty stores and the given settings.
    #[must_use]
    pub fn with_settings(settings: Settings) -> Self {
        Self { variables: HashMap::new(),
               functions: HashMap::new(),
               output: String::new(),
               call_depth: 0,
               settings }
    }

    /// Everything printed so far, one line per `chapa`.
    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Runs a whole program.
    ///
    /// # Errors
    /// Any `EvalError` raised by a statement, or
    /// `EvalError::ReturnOutsideFunction` when a `parat` runs at the top level.
    pub fn run(&mut self, program: &Block) -> EvalResult<()> {
        log::debug!("running {} top-level statements", program.statements.len());

        match self.exec_block(program)? {
            Flow::Normal => Ok(()),
            Flow::Return(_) => Err(EvalError::ReturnOutsideFunction),
        }
    }

    /// Runs a whole program and hands back its output, consuming the
    /// interpreter.
    ///
    /// # Errors
    /// A [`Failure`] carrying the `EvalError` and the output printed before
    /// it.
    pub fn execute(mut self, program: &Block) -> Result<String, Failure> {
        match self.run(program) {
            Ok(()) => Ok(self.output),
            Err(error) => Err(Failure { error:  error.into(),
                                        output: self.output, }),
        }
    }

    /// Executes statements in order until one of them returns.
    ///
    /// # Errors
    /// The first `EvalError` raised by a statement; later statements do not
    /// run.
    pub fn exec_block(&mut self, block: &Block) -> EvalResult<Flow> {
        for statement in &block.statements {
            if let Flow::Return(value) = self.exec_statement(statement)? {
                return Ok(Flow::Return(value));
            }
        }
        Ok(Flow::Normal)
    }

    /// Executes a single statement.
    ///
    /// # Errors
    /// Propagates every `EvalError` raised while evaluating the statement's
    /// expressions, conditions and nested blocks.
    pub fn exec_statement(&mut self, statement: &Statement) -> EvalResult<Flow> {
        log::trace!("executing {}", statement_kind(statement));

        match statement {
            Statement::VariableDeclaration { name, value } | Statement::Assignment { name, value } => {
                let value = self.eval(value)?;
                self.variables.insert(name.clone(), value);
                Ok(Flow::Normal)
            },
            Statement::Print(expr) => {
                let value = self.eval(expr)?;
                self.output.push_str(&value.to_string());
                self.output.push('\n');
                Ok(Flow::Normal)
            },
            Statement::If { condition,
                            then_branch,
                            else_branch, } => {
                if self.eval_condition(condition)? {
                    self.exec_block(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.exec_block(else_branch)
                } else {
                    Ok(Flow::Normal)
                }
            },
            Statement::While { condition, body } => self.exec_while(condition, body),
            Statement::For { init,
                             condition,
                             increment,
                             body, } => self.exec_for(init, condition, increment, body),
            Statement::Function(decl) => {
                self.declare_function(decl);
                Ok(Flow::Normal)
            },
            Statement::Return(expr) => Ok(Flow::Return(self.eval(expr)?)),
        }
    }

    /// Evaluates an expression to a runtime value.
    ///
    /// # Errors
    /// - `EvalError::UndefinedVariable` for an unknown name.
    /// - `EvalError::LiteralTooLarge` for digits that do not fit in 64 bits.
    /// - `EvalError::MissingValue` when a called function finished without
    ///   `parat`.
    /// - Any error of the operator or the call.
    ///
    /// # Example
    /// ```
    /// use chapa::{
    ///     Interpreter,
    ///     ast::Expr,
    ///     interpreter::{lexer::Operator, value::Value},
    /// };
    ///
    /// let mut interpreter = Interpreter::new();
    /// let expr = Expr::binary(Expr::StringLiteral("n=".into()),
    ///                         Operator::Plus,
    ///                         Expr::NumberLiteral("7".into()));
    ///
    /// assert_eq!(interpreter.eval(&expr).unwrap(), Value::from("n=7"));
    /// ```
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::NumberLiteral(digits) => {
                digits.parse::<i64>()
                      .map(Value::Integer)
                      .map_err(|_| EvalError::LiteralTooLarge { literal: digits.clone() })
            },
            Expr::StringLiteral(text) => Ok(Value::Str(text.clone())),
            Expr::Variable(name) => {
                self.variables
                    .get(name)
                    .cloned()
                    .ok_or_else(|| EvalError::UndefinedVariable { name: name.clone() })
            },
            Expr::BinaryOp { left, op, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, &left, &right)
            },
            Expr::FunctionCall { name, arguments } => {
                self.call_function(name, arguments)?
                    .ok_or_else(|| EvalError::MissingValue { function: name.clone() })
            },
        }
    }
}

fn statement_kind(statement: &Statement) -> &'static str {
    match statement {
        Statement::VariableDeclaration { .. } => "declaration",
        Statement::Assignment { .. } => "assignment",
        Statement::Print(_) => "print",
        Statement::If { .. } => "if",
        Statement::While { .. } => "while",
        Statement::For { .. } => "for",
        Statement::Function(_) => "function declaration",
        Statement::Return(_) => "return",
    }
}

/// Runs a program in a fresh interpreter and returns what it printed.
///
/// # Errors
/// A [`Failure`] carrying the `EvalError` together with the output printed
/// before it.
///
/// # Example
/// ```
/// use chapa::{parse, run, scan};
///
/// let program = parse(&scan("chapa(1); chapa(y);").unwrap()).unwrap();
/// let failure = run(&program).unwrap_err();
///
/// assert_eq!(failure.output, "1\n");
/// assert!(failure.to_string().contains("'y'"));
/// ```
pub fn run(program: &Block) -> Result<String, Failure> {
    Interpreter::new().execute(program)
}
