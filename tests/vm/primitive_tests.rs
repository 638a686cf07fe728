use crate::helpers::*;
use brackets::vm::value::error::RuntimeError;
use brackets::vm::value::Value;
use brackets::vm::VM;

#[test]
fn test_vm_arithmetic() {
    let mut vm = VM::default();

    assert_result_eq(&mut vm, "(+)", Value::number(0.0));
    assert_result_eq(&mut vm, "(+ 1 2 3)", Value::number(6.0));
    assert_result_eq(&mut vm, "(*)", Value::number(1.0));
    assert_result_eq(&mut vm, "(* 2 3 4)", Value::number(24.0));
    assert_result_eq(&mut vm, "(- 10 4)", Value::number(6.0));
    assert_result_eq(&mut vm, "(/ 1 4)", Value::number(0.25));
    assert_result_eq(&mut vm, "(/ 1 0)", Value::number(f64::INFINITY));

    assert_matches!(
        run_code(&mut vm, "(+ 1 'a)"),
        Err(Error::RuntimeError(RuntimeError::TypeError(_)))
    );
    assert_matches!(
        run_code(&mut vm, "(- 1 2 3)"),
        Err(Error::RuntimeError(RuntimeError::TypeError(_)))
    );
}

#[test]
fn test_vm_comparison() {
    let mut vm = VM::default();

    assert_result_eq(&mut vm, "(< 1 2)", Value::boolean(true));
    assert_result_eq(&mut vm, "(> 1 2)", Value::boolean(false));
    assert_result_eq(&mut vm, "(= 2 2)", Value::boolean(true));
    assert_result_eq(&mut vm, "(= 2 'a)", Value::boolean(false));
    assert_result_eq(&mut vm, "(< \"a\" \"b\")", Value::boolean(true));
    assert_result_eq(&mut vm, "(> \"a\" \"b\")", Value::boolean(false));
    assert_matches!(
        run_code(&mut vm, "(< 1 \"2\")"),
        Err(Error::RuntimeError(RuntimeError::TypeError(_)))
    );
}

#[test]
fn test_vm_booleans() {
    let mut vm = VM::default();

    assert_result_eq(&mut vm, "(not #f)", Value::boolean(true));
    assert_result_eq(&mut vm, "(not 0)", Value::boolean(false));
    assert_result_eq(&mut vm, "(and #t #f)", Value::boolean(false));
    assert_result_eq(&mut vm, "(or #t #f)", Value::boolean(true));
    assert_matches!(
        run_code(&mut vm, "(and 1 #t)"),
        Err(Error::RuntimeError(RuntimeError::TypeError(_)))
    );
}

#[test]
fn test_vm_equality() {
    let mut vm = VM::default();

    assert_result_eq(&mut vm, "(eq? 'a 'a)", Value::boolean(true));
    assert_result_eq(&mut vm, "(eq? 1 1)", Value::boolean(true));
    assert_result_eq(&mut vm, "(eq? '() '())", Value::boolean(true));
    assert_result_eq(&mut vm, "(eq? 'a \"a\")", Value::boolean(false));
    assert_result_eq(&mut vm, "(eq? '(1) '(1))", Value::boolean(false));
    assert_result_eq(&mut vm, "(= '(1 2) '(1 2))", Value::boolean(true));
    assert_result_eq(&mut vm, "(= '(1 2) '(1 3))", Value::boolean(false));
    assert_result_eq(&mut vm, "(= car car)", Value::boolean(true));
    assert_result_eq(
        &mut vm,
        "(= (lambda (x) x) (lambda (x) x))",
        Value::boolean(false),
    );
    assert_result_eq(
        &mut vm,
        "(string=? \"foo\" \"foo\")",
        Value::boolean(true),
    );
}

#[test]
fn test_vm_lists() {
    let mut vm = VM::default();

    assert_result_eq(&mut vm, "(car (cons 1 2))", Value::number(1.0));
    assert_result_eq(&mut vm, "(cdr (list 1))", Value::empty_list());
    assert_result_eq(&mut vm, "(pair? (list))", Value::boolean(false));
    assert_result_eq(&mut vm, "(pair? '(a))", Value::boolean(true));
    assert_matches!(
        run_code(&mut vm, "(car '())"),
        Err(Error::RuntimeError(RuntimeError::TypeError(_)))
    );
}

#[test]
fn test_vm_type_predicates() {
    let mut vm = VM::default();

    assert_result_eq(
        &mut vm,
        "(list (number? 1) (boolean? #f) (symbol? 'a) (string? \"s\") (symbol? \"s\"))",
        Value::proper_list(vec![
            Value::boolean(true),
            Value::boolean(true),
            Value::boolean(true),
            Value::boolean(true),
            Value::boolean(false),
        ]),
    );
}
