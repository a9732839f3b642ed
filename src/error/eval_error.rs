#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum EvalError {
    /// A name was not bound in any scope of the chain.
    UndefinedVariable(String),
    /// An operand had the wrong kind of value.
    TypeMismatch {
        /// The kind of value the operation needs.
        expected: &'static str,
        /// The kind of value it received.
        got:      &'static str,
    },
    /// Attempted division by zero.
    DivisionByZero,
    /// Operator text that names no arithmetic operator.
    UnknownOperator(String),
    /// A name was declared twice in the same scope.
    AlreadyDeclared(String),
    /// Tried to assign to a constant binding.
    ConstantReassignment(String),
    /// A scope handle that no longer refers to a live scope.
    InvalidScope(usize),
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable(name) => write!(f, "Error: Undefined variable '{name}'."),
            Self::TypeMismatch { expected, got } => {
                write!(f, "Error: Type mismatch: expected {expected}, got {got}.")
            },
            Self::DivisionByZero => write!(f, "Error: Division by zero."),
            Self::UnknownOperator(op) => write!(f, "Error: Unknown operator '{op}'."),
            Self::AlreadyDeclared(name) => {
                write!(f, "Error: Variable '{name}' is already declared in this scope.")
            },
            Self::ConstantReassignment(name) => {
                write!(f, "Error: Cannot reassign constant '{name}'.")
            },
            Self::InvalidScope(index) => write!(f, "Error: Scope {index} no longer exists."),
        }
    }
}

impl std::error::Error for EvalError {}
