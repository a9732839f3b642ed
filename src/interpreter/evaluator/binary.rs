use crate::{
    ast::BinaryOperator,
    error::EvalError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// Applies an arithmetic operator to two evaluated operands.
///
/// Both operands must be numbers. Arithmetic follows `f64` semantics, except
/// that dividing by zero (of either sign) is an error rather than an
/// infinity.
///
/// # Errors
/// - [`EvalError::TypeMismatch`] if either operand is not a number; the left
///   operand is checked first.
/// - [`EvalError::DivisionByZero`] for `/` with a zero right operand.
///
/// # Example
/// ```
/// use simpl::{
///     ast::BinaryOperator,
///     error::EvalError,
///     interpreter::{evaluator::binary::eval_binary, value::Value},
/// };
///
/// let seven = eval_binary(BinaryOperator::Add, &Value::Number(3.0), &Value::Number(4.0));
/// assert_eq!(seven, Ok(Value::Number(7.0)));
///
/// let zero = eval_binary(BinaryOperator::Div, &Value::Number(1.0), &Value::Number(0.0));
/// assert_eq!(zero, Err(EvalError::DivisionByZero));
/// ```
pub fn eval_binary(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
    let l = left.as_number()?;
    let r = right.as_number()?;

    let result = match op {
        BinaryOperator::Add => l + r,
        BinaryOperator::Sub => l - r,
        BinaryOperator::Mul => l * r,
        BinaryOperator::Div => {
            if r == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            l / r
        },
    };

    Ok(Value::Number(result))
}
