#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while scanning source text.
pub enum LexError {
    /// A character that does not begin any token.
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A `"` with no closing quote before the end of the line.
    UnterminatedString {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl LexError {
    /// Gets the line the error was raised on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { line, .. } | Self::UnterminatedString { line } => *line,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { character, line } => {
                write!(f, "Error on line {line}: Unexpected character '{character}'.")
            },
            Self::UnterminatedString { line } => {
                write!(f, "Error on line {line}: Unterminated string literal.")
            },
        }
    }
}

impl std::error::Error for LexError {}
