/// Core evaluation logic for expressions and values.
///
/// Contains the expression dispatcher, the evaluation session ([`core::Context`])
/// and the entry points that run source text end to end.
pub mod core;

/// Binary operator evaluation.
///
/// Implements the arithmetic operators on runtime values, including the
/// division-by-zero check.
pub mod binary;

/// Statement evaluation.
///
/// Implements declarations, assignments and expression statements, and the
/// evaluation of whole programs.
pub mod statement;
