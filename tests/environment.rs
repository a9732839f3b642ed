use simpl::{
    ast::{BinaryOperator, Expr},
    error::EvalError,
    interpreter::{
        environment::{Environment, NULL_CONSTANT},
        evaluator::core::{Context, eval_expr},
        value::Value,
    },
};

fn x_plus_one() -> Expr {
    Expr::binary(BinaryOperator::Add, Expr::Identifier("x".to_string()), Expr::Number(1.0))
}

#[test]
fn root_holds_null_constant() {
    let env = Environment::new();
    let binding = env.binding(env.root(), NULL_CONSTANT).unwrap();

    assert_eq!(binding.value, Value::Null);
    assert!(binding.constant);
    assert_eq!(env.parent(env.root()), None);
}

#[test]
fn lookup_walks_up_to_outer_scope() {
    let mut env = Environment::new();
    let root = env.root();
    env.declare(root, "x", Value::Number(5.0)).unwrap();
    let inner = env.push_scope(root);

    assert_eq!(eval_expr(&x_plus_one(), &env, inner), Ok(Value::Number(6.0)));
}

#[test]
fn inner_declaration_shadows_outer() {
    let mut env = Environment::new();
    let root = env.root();
    env.declare(root, "x", Value::Number(5.0)).unwrap();
    let inner = env.push_scope(root);
    env.declare(inner, "x", Value::Number(9.0)).unwrap();

    assert_eq!(eval_expr(&x_plus_one(), &env, inner), Ok(Value::Number(10.0)));
    assert_eq!(eval_expr(&x_plus_one(), &env, root), Ok(Value::Number(6.0)));
}

#[test]
fn shadow_disappears_with_its_scope() {
    let mut context = Context::new();
    context.declare("x", Value::Number(5.0)).unwrap();

    context.enter_scope();
    context.declare("x", Value::Number(9.0)).unwrap();
    assert_eq!(context.eval(&x_plus_one()), Ok(Value::Number(10.0)));
    context.exit_scope();

    assert_eq!(context.eval(&x_plus_one()), Ok(Value::Number(6.0)));
    assert_eq!(context.environment().depth(), 1);
}

#[test]
fn undefined_anywhere_in_chain() {
    let mut env = Environment::new();
    let inner = env.push_scope(env.root());
    let innermost = env.push_scope(inner);

    assert_eq!(eval_expr(&Expr::Identifier("ghost".to_string()), &env, innermost),
               Err(EvalError::UndefinedVariable("ghost".to_string())));
}

#[test]
fn declare_checks_only_own_scope() {
    let mut env = Environment::new();
    let root = env.root();
    env.declare(root, "x", Value::Number(1.0)).unwrap();

    assert_eq!(env.declare(root, "x", Value::Number(2.0)),
               Err(EvalError::AlreadyDeclared("x".to_string())));

    let inner = env.push_scope(root);
    assert_eq!(env.declare(inner, "x", Value::Number(2.0)), Ok(()));
}

#[test]
fn assign_writes_to_declaring_scope() {
    let mut env = Environment::new();
    let root = env.root();
    env.declare(root, "x", Value::Number(1.0)).unwrap();
    let middle = env.push_scope(root);
    let inner = env.push_scope(middle);

    env.assign(inner, "x", Value::Number(3.0)).unwrap();

    assert_eq!(env.resolve(inner, "x"), Some(root));
    env.discard(middle);
    assert_eq!(env.lookup(root, "x"), Some(&Value::Number(3.0)));
}

#[test]
fn assign_hits_nearest_shadow() {
    let mut env = Environment::new();
    let root = env.root();
    env.declare(root, "x", Value::Number(1.0)).unwrap();
    let inner = env.push_scope(root);
    env.declare(inner, "x", Value::Number(2.0)).unwrap();

    env.assign(inner, "x", Value::Number(7.0)).unwrap();

    assert_eq!(env.lookup(inner, "x"), Some(&Value::Number(7.0)));
    assert_eq!(env.lookup(root, "x"), Some(&Value::Number(1.0)));
}

#[test]
fn assign_without_declaration_fails() {
    let mut env = Environment::new();
    let inner = env.push_scope(env.root());

    assert_eq!(env.assign(inner, "y", Value::Number(1.0)),
               Err(EvalError::UndefinedVariable("y".to_string())));
    assert_eq!(env.lookup(inner, "y"), None);
}

#[test]
fn constants_reject_assignment() {
    let mut env = Environment::new();
    let root = env.root();
    env.declare_constant(root, "answer", Value::Number(42.0)).unwrap();

    assert_eq!(env.assign(root, "answer", Value::Number(0.0)),
               Err(EvalError::ConstantReassignment("answer".to_string())));
    assert_eq!(env.assign(root, NULL_CONSTANT, Value::Number(0.0)),
               Err(EvalError::ConstantReassignment(NULL_CONSTANT.to_string())));
    assert_eq!(env.lookup(root, "answer"), Some(&Value::Number(42.0)));
}

#[test]
fn constants_can_be_shadowed() {
    let mut env = Environment::new();
    let inner = env.push_scope(env.root());

    env.declare(inner, NULL_CONSTANT, Value::Number(0.0)).unwrap();
    env.assign(inner, NULL_CONSTANT, Value::Number(1.0)).unwrap();

    assert_eq!(env.lookup(inner, NULL_CONSTANT), Some(&Value::Number(1.0)));
}

#[test]
fn discarded_scope_handles_are_rejected() {
    let mut env = Environment::new();
    let inner = env.push_scope(env.root());
    env.discard(inner);

    assert!(!env.contains(inner));
    assert_eq!(env.declare(inner, "x", Value::Null),
               Err(EvalError::InvalidScope(inner.index())));
    assert_eq!(env.assign(inner, "x", Value::Null),
               Err(EvalError::InvalidScope(inner.index())));
    assert_eq!(env.lookup(inner, NULL_CONSTANT), None);
}

#[test]
fn root_cannot_be_discarded() {
    let mut env = Environment::new();
    env.discard(env.root());

    assert_eq!(env.depth(), 1);
    assert!(env.lookup(env.root(), NULL_CONSTANT).is_some());
}

#[test]
fn scoped_discards_child_on_error() {
    let mut context = Context::new();
    let before = context.current_scope();

    let result = context.scoped(|inner| {
                            inner.declare("temp", Value::Number(1.0))?;
                            inner.eval(&Expr::Identifier("missing".to_string()))
                        });

    assert_eq!(result, Err(EvalError::UndefinedVariable("missing".to_string())));
    assert_eq!(context.current_scope(), before);
    assert_eq!(context.get_variable("temp"), None);
    assert_eq!(context.environment().depth(), 1);
}

#[test]
fn scoped_assignment_writes_through() {
    let mut context = Context::new();
    context.run("let total = 1").unwrap();

    context.scoped(|inner| inner.run("total = total + 41")).unwrap();

    assert_eq!(context.run("total").unwrap(), Value::Number(42.0));
}

#[test]
fn exit_scope_at_root_is_noop() {
    let mut context = Context::new();
    context.exit_scope();

    assert_eq!(context.current_scope(), context.environment().root());
}

#[test]
fn stale_handle_stays_dead_after_index_reuse() {
    let mut env = Environment::new();
    let root = env.root();
    let stale = env.push_scope(root);
    env.discard(stale);
    let fresh = env.push_scope(root);
    env.declare(fresh, "z", Value::Number(1.0)).unwrap();

    assert_eq!(stale.index(), fresh.index());
    assert_ne!(stale, fresh);
    assert!(!env.contains(stale));
    assert_eq!(env.assign(stale, "z", Value::Number(99.0)),
               Err(EvalError::InvalidScope(stale.index())));
    assert_eq!(env.declare(stale, "w", Value::Null),
               Err(EvalError::InvalidScope(stale.index())));
    assert_eq!(env.lookup(stale, "z"), None);
    assert_eq!(env.parent(stale), None);
    assert_eq!(eval_expr(&Expr::Identifier("z".to_string()), &env, stale),
               Err(EvalError::InvalidScope(stale.index())));

    env.discard(stale);
    assert!(env.contains(fresh));
    assert_eq!(env.lookup(fresh, "z"), Some(&Value::Number(1.0)));
}

#[test]
fn child_of_stale_parent_attaches_to_root() {
    let mut env = Environment::new();
    let root = env.root();
    let stale = env.push_scope(root);
    env.discard(stale);
    let fresh = env.push_scope(root);

    let child = env.push_scope(stale);

    assert_eq!(env.parent(child), Some(root));
    assert_ne!(env.parent(child), Some(fresh));
}
