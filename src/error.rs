/// Lexing errors.
///
/// Raised by the scanner when it meets a character that starts no token or a
/// string literal that never closes.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree from
/// the token stream: missing or misplaced tokens, premature end of input and
/// leftover tokens after the program.
pub mod syntax_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Every one
/// of them aborts the run; output produced before the failure is kept.
pub mod eval_error;

pub use eval_error::EvalError;
pub use lex_error::LexError;
pub use syntax_error::SyntaxError;

/// Any error produced by one of the three pipeline stages.
#[derive(Debug)]
pub enum Error {
    /// The scanner rejected the source text.
    Lex(LexError),
    /// The parser rejected the token stream.
    Syntax(SyntaxError),
    /// Evaluation aborted.
    Eval(EvalError),
}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<SyntaxError> for Error {
    fn from(e: SyntaxError) -> Self {
        Self::Syntax(e)
    }
}

impl From<EvalError> for Error {
    fn from(e: EvalError) -> Self {
        Self::Eval(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Syntax(e) => write!(f, "{e}"),
            Self::Eval(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Syntax(e) => Some(e),
            Self::Eval(e) => Some(e),
        }
    }
}

/// A failed run together with everything the program printed before it
/// failed.
///
/// Output is never discarded on error; callers decide whether to show it.
#[derive(Debug)]
pub struct Failure {
    /// What went wrong.
    pub error:  Error,
    /// Output captured up to the point of failure.
    pub output: String,
}

impl Failure {
    /// Wraps an error that happened before any output could be produced.
    pub fn new(error: impl Into<Error>) -> Self {
        Self { error:  error.into(),
               output: String::new(), }
    }
}

impl std::fmt::Display for Failure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for Failure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}
