use std::fs::{self};

use simpl::{Error, Value, error::EvalError, evaluate_source};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_dsl_blocks(&content).into_iter().enumerate() {
            count += 1;
            if let Err(e) = evaluate_source(&code) {
                panic!("Example {} in {:?} failed:\n{}\nError: {:?}", i + 1, path, code, e);
            }
        }
    }

    assert!(count > 0, "No examples found in book/src");
}

fn extract_dsl_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```simpl") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn assert_value(src: &str, expected: f64) {
    match evaluate_source(src) {
        Ok(Value::Number(n)) => assert_eq!(n, expected, "{src}"),
        other => panic!("Script {src:?} produced {other:?}, expected {expected}"),
    }
}

fn assert_eval_error(src: &str, expected: &EvalError) {
    match evaluate_source(src) {
        Err(Error::Eval(e)) => assert_eq!(&e, expected, "{src}"),
        other => panic!("Script {src:?} produced {other:?}, expected {expected:?}"),
    }
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_value("2 + 3 * 4", 14.0);
    assert_value("2 * 3 + 4", 10.0);
    assert_value("8 - 6 / 2", 5.0);
}

#[test]
fn same_level_operators_associate_left() {
    assert_value("10 - 3 - 2", 5.0);
    assert_value("100 / 10 / 5", 2.0);
    assert_value("2 * 6 / 3", 4.0);
}

#[test]
fn parentheses_override_precedence() {
    assert_value("(2 + 3) * 4", 20.0);
    assert_value("((1 + 2)) * 3", 9.0);
    assert_value("10 - (3 - 2)", 9.0);
}

#[test]
fn literals_evaluate_to_themselves() {
    assert_eq!(evaluate_source("42"), Ok(Value::Number(42.0)));
    assert_eq!(evaluate_source("null"), Ok(Value::Null));
}

#[test]
fn division_produces_fractions() {
    assert_value("7 / 2", 3.5);
}

#[test]
fn declarations_and_assignments() {
    assert_value("let x = 1 + 2\nx", 3.0);
    assert_value("let x = 5\nx = x + 1\nx", 6.0);
    assert_value("let a = 2 let b = a * a b * b", 16.0);
    assert_eq!(evaluate_source("let nothing"), Ok(Value::Null));
    assert_eq!(evaluate_source("let nothing\nnothing"), Ok(Value::Null));
}

#[test]
fn statements_yield_their_values() {
    assert_value("let x = 4", 4.0);
    assert_value("let x = 4\nx = 9", 9.0);
    assert_eq!(evaluate_source(""), Ok(Value::Null));
}

#[test]
fn undefined_variable_is_error() {
    assert_eval_error("foo", &EvalError::UndefinedVariable("foo".to_string()));
    assert_eval_error("y = 1", &EvalError::UndefinedVariable("y".to_string()));
}

#[test]
fn redeclaration_is_error() {
    assert_eval_error("let x = 1\nlet x = 2",
                      &EvalError::AlreadyDeclared("x".to_string()));
}

#[test]
fn division_by_zero_is_error() {
    assert_eval_error("1 / 0", &EvalError::DivisionByZero);
    assert_eval_error("let z = 0\n5 / (z * 1)", &EvalError::DivisionByZero);
}

#[test]
fn null_in_arithmetic_is_type_mismatch() {
    let expected = EvalError::TypeMismatch { expected: "number",
                                             got:      "null", };
    assert_eval_error("null + 1", &expected);
    assert_eval_error("let n\n2 * n", &expected);
}

#[test]
fn failing_statement_stops_the_program() {
    assert_eval_error("let x = 1\nx = 1 / 0\nx", &EvalError::DivisionByZero);
}

#[test]
fn lexical_and_parse_errors_are_reported() {
    assert!(matches!(evaluate_source("1 @ 2"), Err(Error::Lex(_))));
    assert!(matches!(evaluate_source("(1 + 2"), Err(Error::Parse(_))));
    assert!(matches!(evaluate_source("let = 4"), Err(Error::Parse(_))));
}

#[test]
fn example_script_works() {
    let contents = fs::read_to_string("tests/example.simpl").unwrap();
    assert_value(&contents, 42.0);
}
