use crate::{error::EvalError, interpreter::evaluator::core::EvalResult};

/// Represents a runtime value in the interpreter.
///
/// Every expression evaluates to one of these two kinds; there are no other
/// runtime types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A string of text.
    Str(String),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl Value {
    /// Returns the integer if the value already is one.
    ///
    /// Strings are rejected even when their text looks like a number; use
    /// [`Value::coerce_integer`] where text should be parsed.
    ///
    /// # Parameters
    /// - `context`: What needed the integer, used in the error message.
    ///
    /// # Example
    /// ```
    /// use chapa::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Integer(4).as_integer("condition").unwrap(), 4);
    /// assert!(Value::from("4").as_integer("condition").is_err());
    /// ```
    pub fn as_integer(&self, context: &str) -> EvalResult<i64> {
        match self {
            Self::Integer(n) => Ok(*n),
            Self::Str(s) => Err(EvalError::ExpectedInteger { context: context.to_string(),
                                                             found:   s.clone(), }),
        }
    }

    /// Converts the value to an integer by parsing its textual form.
    ///
    /// This is how `- * / %` see their operands: `"12"` becomes `12`, while
    /// `"abc"` is an error.
    ///
    /// # Example
    /// ```
    /// use chapa::interpreter::value::Value;
    ///
    /// assert_eq!(Value::from("12").coerce_integer("'-'").unwrap(), 12);
    /// assert!(Value::from("abc").coerce_integer("'-'").is_err());
    /// ```
    pub fn coerce_integer(&self, context: &str) -> EvalResult<i64> {
        match self {
            Self::Integer(n) => Ok(*n),
            Self::Str(s) => s.parse().map_err(|_| EvalError::ExpectedInteger {
                context: context.to_string(),
                found: s.clone(),
            }),
        }
    }

    /// Checks whether the value is a string.
    #[must_use]
    pub const fn is_str(&self) -> bool {
        matches!(self, Self::Str(_))
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s}"),
        }
    }
}
