use crate::helpers::*;
use brackets::vm::value::error::RuntimeError;
use brackets::vm::value::procedure::Arity;
use brackets::vm::value::Value;
use brackets::vm::VM;

#[test]
fn test_vm_lexical_scope() {
    let mut vm = VM::default();

    assert_result_eq(
        &mut vm,
        "((lambda (x) ((lambda (x) x) 'foo)) 'bar)",
        Value::symbol("foo"),
    );
    assert_result_eq(
        &mut vm,
        "((lambda (x) ((lambda (x) x) 'foo) x) 'bar)",
        Value::symbol("bar"),
    );
}

#[test]
fn test_vm_closures_capture_their_environment() {
    let mut vm = VM::default();

    assert_result_eq(
        &mut vm,
        r#"
        (define make-adder (lambda (n) (lambda (x) (+ x n))))
        (define add2 (make-adder 2))
        (let ((n 100)) (add2 1))
        "#,
        Value::number(3.0),
    );
}

#[test]
fn test_vm_let() {
    let mut vm = VM::default();

    assert_result_eq(&mut vm, "(let ((x 1) (y 2)) (+ x y))", Value::number(3.0));
    assert_result_eq(
        &mut vm,
        "(define x 10) (let ((x 1) (y x)) y)",
        Value::number(10.0),
    );
}

#[test]
fn test_vm_arity() {
    let mut vm = VM::default();

    assert_matches!(
        run_code(&mut vm, "((lambda (x) #t))"),
        Err(Error::RuntimeError(RuntimeError::ArityError(Arity::Exactly(1), 0)))
    );
    assert_result_eq(&mut vm, "((lambda () #t))", Value::boolean(true));
}

#[test]
fn test_vm_primitives_are_values() {
    let mut vm = VM::default();

    assert_result_eq(&mut vm, "((lambda (f) (f 1 2)) +)", Value::number(3.0));
    assert_result_eq(&mut vm, "((if #t car cdr) '(1 . 2))", Value::number(1.0));
}

#[test]
fn test_vm_undefined_and_noncallable() {
    let mut vm = VM::default();

    assert_matches!(
        run_code(&mut vm, "(undefined-thing 1)"),
        Err(Error::RuntimeError(RuntimeError::UndefinedVariable(_)))
    );
    assert_matches!(
        run_code(&mut vm, "(#t 1)"),
        Err(Error::RuntimeError(RuntimeError::NoncallableError(_)))
    );
}
