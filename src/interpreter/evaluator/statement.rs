use log::debug;

use crate::{
    ast::Statement,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
};

impl Context {
    /// Evaluates a single statement.
    ///
    /// Handles variable declarations, assignments and plain expression
    /// statements:
    /// - a declaration binds the name in the current scope and yields the
    ///   bound value (`null` without an initializer);
    /// - an assignment writes through to the nearest scope that declares the
    ///   name and yields the new value;
    /// - an expression statement yields the expression's value.
    ///
    /// The value is computed before the environment is touched, so a failing
    /// initializer declares nothing.
    ///
    /// # Errors
    /// Any [`crate::error::EvalError`] raised by the expression or by the
    /// declaration or assignment itself.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<Value> {
        match statement {
            Statement::Declaration { name, value, line } => {
                let value = match value {
                    Some(expr) => self.eval(expr)?,
                    None => Value::Null,
                };
                debug!("line {line}: declaring '{name}' = {value}");
                self.declare(name, value)?;
                Ok(value)
            },
            Statement::Assignment { name, value, line } => {
                let value = self.eval(value)?;
                debug!("line {line}: assigning '{name}' = {value}");
                self.assign(name, value)?;
                Ok(value)
            },
            Statement::Expression { expr, .. } => self.eval(expr),
        }
    }

    /// Evaluates statements in order and returns the last value.
    ///
    /// An empty program yields `null`. Evaluation stops at the first failing
    /// statement; statements before it keep their effects.
    ///
    /// # Errors
    /// The error of the first failing statement.
    ///
    /// # Example
    /// ```
    /// use simpl::interpreter::{
    ///     evaluator::core::Context, lexer::tokenize, parser::core::parse_program, value::Value,
    /// };
    ///
    /// let tokens = tokenize("let a = 4 let b = a * 2 b - a").unwrap();
    /// let program = parse_program(&tokens).unwrap();
    ///
    /// let mut context = Context::new();
    /// assert_eq!(context.eval_program(&program), Ok(Value::Number(4.0)));
    /// ```
    pub fn eval_program(&mut self, statements: &[Statement]) -> EvalResult<Value> {
        let mut result = Value::Null;
        for statement in statements {
            result = self.eval_statement(statement)?;
        }
        Ok(result)
    }
}
