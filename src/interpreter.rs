/// The environment module implements the scope chain.
///
/// Scopes are stored in an arena and linked to their parents by index.
/// Lookups walk from the innermost scope to the root; declarations shadow
/// outer bindings; assignments write through to the declaring scope.
///
/// # Responsibilities
/// - Creates the root scope with its predefined constants.
/// - Opens and discards child scopes.
/// - Declares, resolves, reads and assigns bindings.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// performs arithmetic, manages variable state through the environment, and
/// produces results. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles variable declaration and assignment.
/// - Reports runtime errors such as undefined variables or division by zero.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a sequence of
/// tokens, each corresponding to a number, identifier, keyword, operator or
/// parenthesis, terminated by an end-of-input marker. This is the first stage
/// of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind, text and
///   line.
/// - Reports lexical errors for unrecognized characters.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token sequence produced by the lexer and
/// constructs expression trees with correct precedence and associativity, and
/// statements around them.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates grammar and syntax, reporting errors with location info.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum.
/// - Provides checked access to the number inside a value.
pub mod value;
