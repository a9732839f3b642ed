use log::{debug, trace};

use crate::{
    ast::Expr,
    error::{Error, EvalError},
    interpreter::{
        environment::{Environment, ScopeId},
        evaluator::binary::eval_binary,
        lexer::tokenize,
        parser::core::parse_program,
        value::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates an expression against a scope chain.
///
/// The evaluator dispatches on the node variant: literals evaluate to
/// themselves, identifiers are looked up from `scope` outward to the root, and
/// binary nodes evaluate their left operand, then their right operand, then
/// apply the operator. The environment is only read.
///
/// # Errors
/// - [`EvalError::UndefinedVariable`] for a name bound in no scope of the
///   chain.
/// - [`EvalError::InvalidScope`] if `scope` has been discarded.
/// - Any error of [`eval_binary`].
///
/// # Example
/// ```
/// use simpl::{
///     ast::{BinaryOperator, Expr},
///     interpreter::{environment::Environment, evaluator::core::eval_expr, value::Value},
/// };
///
/// let mut env = Environment::new();
/// let root = env.root();
/// env.declare(root, "x", Value::Number(5.0)).unwrap();
///
/// let expr = Expr::binary(BinaryOperator::Add,
///                         Expr::Identifier("x".to_string()),
///                         Expr::Number(1.0));
///
/// assert_eq!(eval_expr(&expr, &env, root), Ok(Value::Number(6.0)));
/// ```
pub fn eval_expr(expr: &Expr, env: &Environment, scope: ScopeId) -> EvalResult<Value> {
    match expr {
        Expr::Number(value) => Ok(Value::Number(*value)),
        Expr::Null => Ok(Value::Null),
        Expr::Identifier(name) => {
            trace!("resolving '{name}' from scope {}", scope.index());
            if let Some(value) = env.lookup(scope, name) {
                Ok(*value)
            } else if env.contains(scope) {
                Err(EvalError::UndefinedVariable(name.clone()))
            } else {
                Err(EvalError::InvalidScope(scope.index()))
            }
        },
        Expr::Binary { op, left, right } => {
            let left = eval_expr(left, env, scope)?;
            let right = eval_expr(right, env, scope)?;
            eval_binary(*op, &left, &right)
        },
    }
}

/// Stores the runtime evaluation context.
///
/// This struct holds the state of one evaluation session: the scope chain and
/// the scope that declarations and lookups currently start from.
///
/// ## Usage
///
/// `Context` is created once and reused for evaluating expressions and
/// statements, so declarations made by one input stay visible to the next.
/// Nested evaluation contexts are opened with [`Context::enter_scope`] or
/// [`Context::scoped`] and discarded when they end.
#[derive(Debug)]
pub struct Context {
    environment: Environment,
    scope:       ScopeId,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Creates a new evaluation context positioned at the root scope.
    #[must_use]
    pub fn new() -> Self {
        let environment = Environment::new();
        let scope = environment.root();
        Self { environment,
               scope }
    }

    /// Returns the scope chain of this session, read-only.
    ///
    /// Scopes are opened and closed through [`Context::enter_scope`],
    /// [`Context::exit_scope`] and [`Context::scoped`] so the current scope
    /// always stays live.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Returns the scope evaluation currently starts from.
    #[must_use]
    pub const fn current_scope(&self) -> ScopeId {
        self.scope
    }

    /// Evaluates an expression in the current scope.
    ///
    /// # Errors
    /// See [`eval_expr`].
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        eval_expr(expr, &self.environment, self.scope)
    }

    /// Looks a variable up from the current scope outward.
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<&Value> {
        self.environment.lookup(self.scope, name)
    }

    /// Declares a variable in the current scope.
    ///
    /// # Errors
    /// [`EvalError::AlreadyDeclared`] if the current scope already binds
    /// `name`.
    pub fn declare(&mut self, name: &str, value: Value) -> EvalResult<()> {
        self.environment.declare(self.scope, name, value)
    }

    /// Assigns to the nearest existing binding of `name`.
    ///
    /// # Errors
    /// See [`Environment::assign`].
    pub fn assign(&mut self, name: &str, value: Value) -> EvalResult<()> {
        self.environment.assign(self.scope, name, value)
    }

    /// Opens a child scope of the current scope and makes it current.
    ///
    /// # Example
    /// ```
    /// use simpl::interpreter::{evaluator::core::Context, value::Value};
    ///
    /// let mut context = Context::new();
    /// context.declare("x", Value::Number(1.0)).unwrap();
    ///
    /// context.enter_scope();
    /// context.declare("x", Value::Number(2.0)).unwrap();
    /// assert_eq!(context.get_variable("x"), Some(&Value::Number(2.0)));
    ///
    /// context.exit_scope();
    /// assert_eq!(context.get_variable("x"), Some(&Value::Number(1.0)));
    /// ```
    pub fn enter_scope(&mut self) -> ScopeId {
        self.scope = self.environment.push_scope(self.scope);
        self.scope
    }

    /// Discards the current scope and returns to its parent.
    ///
    /// Does nothing at the root scope.
    pub fn exit_scope(&mut self) {
        if let Some(parent) = self.environment.parent(self.scope) {
            self.environment.discard(self.scope);
            self.scope = parent;
        }
    }

    /// Runs `f` inside a fresh child scope.
    ///
    /// The child scope is discarded when `f` returns, whatever it returns, so
    /// bindings made inside never leak into the enclosing scope.
    ///
    /// # Example
    /// ```
    /// use simpl::{
    ///     ast::Expr,
    ///     interpreter::{evaluator::core::Context, value::Value},
    /// };
    ///
    /// let mut context = Context::new();
    /// context.declare("x", Value::Number(5.0)).unwrap();
    ///
    /// let shadowed = context.scoped(|inner| {
    ///                           inner.declare("x", Value::Number(9.0))?;
    ///                           inner.eval(&Expr::Identifier("x".to_string()))
    ///                       });
    ///
    /// assert_eq!(shadowed, Ok(Value::Number(9.0)));
    /// assert_eq!(context.get_variable("x"), Some(&Value::Number(5.0)));
    /// ```
    pub fn scoped<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        let outer = self.scope;
        let inner = self.enter_scope();
        let result = f(self);
        self.environment.discard(inner);
        self.scope = outer;
        result
    }

    /// Tokenizes, parses and evaluates `source` in this session.
    ///
    /// The source is a program: statements are evaluated in order and the
    /// value of the last one is returned (`null` for an empty program).
    /// Tokenizing and parsing complete before anything is evaluated, so a
    /// lexical or syntax error leaves the session untouched.
    ///
    /// # Errors
    /// Returns the first lexical, parse or evaluation error.
    ///
    /// # Example
    /// ```
    /// use simpl::interpreter::{evaluator::core::Context, value::Value};
    ///
    /// let mut context = Context::new();
    /// context.run("let x = 5").unwrap();
    ///
    /// assert_eq!(context.run("x + 1").unwrap(), Value::Number(6.0));
    /// assert!(context.run("y").is_err());
    /// ```
    pub fn run(&mut self, source: &str) -> Result<Value, Error> {
        let tokens = tokenize(source)?;
        let program = parse_program(&tokens)?;
        let value = self.eval_program(&program)?;
        debug!("program of {} statements produced {value}", program.len());
        Ok(value)
    }
}

/// Evaluates `source` in a fresh session and returns its value.
///
/// # Errors
/// Returns the first lexical, parse or evaluation error.
///
/// # Examples
/// ```
/// use simpl::interpreter::{evaluator::core::evaluate_source, value::Value};
///
/// assert_eq!(evaluate_source("2 + 3 * 4").unwrap(), Value::Number(14.0));
/// assert_eq!(evaluate_source("null").unwrap(), Value::Null);
/// ```
pub fn evaluate_source(source: &str) -> Result<Value, Error> {
    Context::new().run(source)
}
