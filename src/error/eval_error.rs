#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum EvalError {
    /// Read a variable that was never declared.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// Called a function that was never declared.
    UndefinedFunction {
        /// The name of the function.
        name: String,
    },
    /// Called a function with the wrong number of arguments.
    ArgumentCountMismatch {
        /// The name of the function.
        name:     String,
        /// Number of declared parameters.
        expected: usize,
        /// Number of supplied arguments.
        found:    usize,
    },
    /// A value could not be used as an integer.
    ExpectedInteger {
        /// Where the integer was needed.
        context: String,
        /// Textual form of the offending value.
        found:   String,
    },
    /// A number literal that does not fit in 64 bits.
    LiteralTooLarge {
        /// The digits as written.
        literal: String,
    },
    /// An operator that has no meaning in its position.
    UnknownOperator {
        /// The operator as written.
        operator: String,
    },
    /// Division or remainder with a zero divisor.
    DivisionByZero,
    /// Integer arithmetic left the 64-bit range.
    Overflow {
        /// The operator that overflowed.
        operator: String,
    },
    /// Used the result of a call that returned nothing.
    MissingValue {
        /// The function whose call produced no value.
        function: String,
    },
    /// `parat` was executed at the top level of the program.
    ReturnOutsideFunction,
    /// Nested calls went deeper than the configured limit.
    CallDepthExceeded {
        /// The function whose call crossed the limit.
        function: String,
        /// The configured limit.
        limit:    usize,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name } => write!(f, "Runtime error: Undefined variable '{name}'."),
            Self::UndefinedFunction { name } => write!(f, "Runtime error: Function not defined: '{name}'."),
            Self::ArgumentCountMismatch { name, expected, found } => write!(f,
                                                                            "Runtime error: Argument count mismatch for function '{name}': expected {expected}, found {found}."),
            Self::ExpectedInteger { context, found } => {
                write!(f, "Runtime error: {context} needs an integer, found \"{found}\".")
            },
            Self::LiteralTooLarge { literal } => {
                write!(f, "Runtime error: Number literal {literal} is too large.")
            },
            Self::UnknownOperator { operator } => write!(f, "Runtime error: Unknown operator '{operator}'."),
            Self::DivisionByZero => write!(f, "Runtime error: Division by zero."),
            Self::Overflow { operator } => write!(f,
                                                  "Runtime error: Integer overflow while evaluating '{operator}'."),
            Self::MissingValue { function } => write!(f,
                                                      "Runtime error: Function '{function}' did not return a value."),
            Self::ReturnOutsideFunction => write!(f, "Runtime error: 'parat' outside of a function."),
            Self::CallDepthExceeded { function, limit } => write!(f,
                                                                  "Runtime error: Calling '{function}' exceeded the maximum call depth of {limit}."),
        }
    }
}

impl std::error::Error for EvalError {}
