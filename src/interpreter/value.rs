use std::fmt;

use crate::error::EvalError;

/// A runtime value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// The absence of a value.
    Null,
    /// A 64-bit floating-point number.
    Number(f64),
}

impl Value {
    /// Returns a short name of the value's kind, used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Number(_) => "number",
        }
    }

    /// Extracts the number held by this value.
    ///
    /// # Errors
    /// Returns [`EvalError::TypeMismatch`] if the value is not a number.
    ///
    /// # Examples
    /// ```
    /// use simpl::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Number(2.5).as_number(), Ok(2.5));
    /// assert!(Value::Null.as_number().is_err());
    /// ```
    pub fn as_number(&self) -> Result<f64, EvalError> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Null => Err(EvalError::TypeMismatch { expected: "number",
                                                        got:      "null", }),
        }
    }

    /// Returns `true` if the value is [`Value::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}
