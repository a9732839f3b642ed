use std::{fmt, str::FromStr};

use crate::error::EvalError;

/// The arithmetic operators of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`).
    Add,
    /// Subtraction (`-`).
    Sub,
    /// Multiplication (`*`).
    Mul,
    /// Division (`/`).
    Div,
}

impl BinaryOperator {
    /// Returns the source symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }

    /// Returns `true` for `+` and `-`, the operators of the additive level.
    #[must_use]
    pub const fn is_additive(self) -> bool {
        matches!(self, Self::Add | Self::Sub)
    }

    /// Returns `true` for `*` and `/`, the operators of the multiplicative
    /// level.
    #[must_use]
    pub const fn is_multiplicative(self) -> bool {
        matches!(self, Self::Mul | Self::Div)
    }
}

impl FromStr for BinaryOperator {
    type Err = EvalError;

    /// Maps operator text to an operator.
    ///
    /// # Examples
    /// ```
    /// use simpl::{ast::BinaryOperator, error::EvalError};
    ///
    /// assert_eq!("*".parse::<BinaryOperator>(), Ok(BinaryOperator::Mul));
    /// assert_eq!("%".parse::<BinaryOperator>(),
    ///            Err(EvalError::UnknownOperator("%".to_string())));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Self::Add),
            "-" => Ok(Self::Sub),
            "*" => Ok(Self::Mul),
            "/" => Ok(Self::Div),
            _ => Err(EvalError::UnknownOperator(s.to_string())),
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// An expression tree node.
///
/// Trees are built bottom-up by the parser and never modified afterwards. A
/// [`Expr::Binary`] node exclusively owns both operands, so a tree has no
/// sharing and no back-references.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Number(f64),
    /// Reference to a variable by name.
    Identifier(String),
    /// The `null` literal.
    Null,
    /// A binary operation.
    Binary {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
}

impl Expr {
    /// Builds a binary node that takes ownership of both operands.
    ///
    /// # Examples
    /// ```
    /// use simpl::ast::{BinaryOperator, Expr};
    ///
    /// let sum = Expr::binary(BinaryOperator::Add, Expr::Number(1.0), Expr::Number(2.0));
    /// assert_eq!(sum.to_string(), "(1 + 2)");
    /// ```
    #[must_use]
    pub fn binary(op: BinaryOperator, left: Self, right: Self) -> Self {
        Self::Binary { op,
                       left: Box::new(left),
                       right: Box::new(right) }
    }
}

/// Renders the tree fully parenthesized, which makes grouping visible:
/// `1 - 2 - 3` prints as `((1 - 2) - 3)`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Identifier(name) => f.write_str(name),
            Self::Null => f.write_str("null"),
            Self::Binary { op, left, right } => write!(f, "({left} {op} {right})"),
        }
    }
}

/// A single statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `let name` or `let name = value`.
    Declaration {
        /// Name of the declared variable.
        name:  String,
        /// Initial value; `None` declares `null`.
        value: Option<Expr>,
        /// Line number in the source code.
        line:  usize,
    },
    /// `name = value`, writing to an existing binding.
    Assignment {
        /// Name of the assigned variable.
        name:  String,
        /// The new value.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// An expression whose value is the statement's result.
    Expression {
        /// The expression.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
}

impl Statement {
    /// Returns the source line the statement starts on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Declaration { line, .. }
            | Self::Assignment { line, .. }
            | Self::Expression { line, .. } => *line,
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Declaration { name,
                                value: Some(value),
                                .. } => write!(f, "let {name} = {value}"),
            Self::Declaration { name, value: None, .. } => write!(f, "let {name}"),
            Self::Assignment { name, value, .. } => write!(f, "{name} = {value}"),
            Self::Expression { expr, .. } => write!(f, "{expr}"),
        }
    }
}

/// A parsed source text: statements in source order.
pub type Program = Vec<Statement>;
