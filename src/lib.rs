//! # simpl
//!
//! simpl is a small calculator language with variables, written in Rust.
//! Source text is tokenized, parsed into expression trees that honor operator
//! precedence and parentheses, and evaluated against a chain of lexical
//! scopes.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums that represent the
/// syntactic structure of source code as a tree. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Renders trees in a fully parenthesized form for inspection.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while running code. Each
/// phase has its own error type; [`error::Error`] wraps all of them.
///
/// # Responsibilities
/// - Defines error types for all failure modes (lexer, parser, evaluator).
/// - Attaches positions and line numbers where they are known.
/// - Implements the standard error traits for reporting.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations and the scope chain to provide a complete runtime for
/// source code evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, environment
///   and value types.
/// - Provides entry points for parsing and evaluating user code.
pub mod interpreter;
/// The interactive read-eval-print loop and its configuration.
///
/// # Responsibilities
/// - Reads one line per iteration and evaluates it in a persistent session.
/// - Prints values, errors and, on request, tokens and trees.
/// - Keeps going after errors; stops on `exit`, `quit` or end of input.
pub mod repl;

pub use crate::{
    error::Error,
    interpreter::{
        evaluator::core::{Context, evaluate_source},
        value::Value,
    },
};
