/// Parser entry points.
///
/// Provides [`core::parse_expression`] (the expression rule itself),
/// [`core::parse`] for a complete single-expression input, and
/// [`core::parse_program`] for a sequence of statements.
pub mod core;
/// Parsing of binary operations.
///
/// Implements the additive and multiplicative precedence levels as
/// left-folding loops.
pub mod binary;
/// Parsing of primary expressions.
///
/// Literals, identifiers and parenthesized sub-expressions.
pub mod primary;
/// Parsing of statements.
///
/// Declarations, assignments and expression statements.
pub mod statement;
