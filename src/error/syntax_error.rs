#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing a token stream.
///
/// `expected` and `found` are human readable token descriptions such as
/// `';'` or `identifier 'x'`.
pub enum SyntaxError {
    /// Found a token other than the one the grammar requires.
    UnexpectedToken {
        /// What the grammar required at this point.
        expected: String,
        /// The token that was actually there.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Reached the end of input while a construct was still open.
    UnexpectedEndOfInput {
        /// What the grammar required at this point.
        expected: String,
        /// The last line of the source.
        line:     usize,
    },
    /// Found tokens after the top-level block had ended.
    UnexpectedTrailingTokens {
        /// The first leftover token.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl SyntaxError {
    /// Gets the line the error was raised on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::UnexpectedEndOfInput { line, .. }
            | Self::UnexpectedTrailingTokens { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected, found, line } => {
                write!(f, "Error on line {line}: Expected {expected} but found {found}.")
            },
            Self::UnexpectedEndOfInput { expected, line } => write!(f,
                                                                    "Error on line {line}: Unexpected end of input. Expected {expected}."),
            Self::UnexpectedTrailingTokens { found, line } => write!(f,
                                                                     "Error on line {line}: Unexpected {found} after the end of the program."),
        }
    }
}

impl std::error::Error for SyntaxError {}
