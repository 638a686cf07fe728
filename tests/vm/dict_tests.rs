use crate::helpers::*;
use brackets::vm::value::error::RuntimeError;
use brackets::vm::value::{Symbol, Value};
use brackets::vm::VM;

#[test]
fn test_vm_dict_lookup() {
    let mut vm = VM::default();
    let mut native = native_vm();

    for vm in [&mut vm, &mut native] {
        assert_result_eq(vm, "((dict (a 1) (b 2)) 'b)", Value::number(2.0));
        assert_result_eq(vm, "((dict (a 1) (b (+ 1 1))) 'a)", Value::number(1.0));
    }
}

#[test]
fn test_vm_desugared_values_are_data() {
    let mut vm = VM::default();
    let mut native = native_vm();

    // desugaring quotes the value expressions
    assert_result_eq(
        &mut vm,
        "((dict (a (+ 1 1))) 'a)",
        Value::proper_list(vec![
            Value::symbol("+"),
            Value::number(1.0),
            Value::number(1.0),
        ]),
    );
    assert_result_eq(&mut native, "((dict (a (+ 1 1))) 'a)", Value::number(2.0));
}

#[test]
fn test_vm_missing_key() {
    let mut vm = VM::default();
    let mut native = native_vm();

    assert_result_eq(&mut vm, "((dict (a 1)) 'b)", Value::boolean(false));
    assert_result_eq(&mut vm, "((dict) 'a)", Value::boolean(false));
    assert_matches!(
        run_code(&mut native, "((dict (a 1)) 'b)"),
        Err(Error::RuntimeError(RuntimeError::KeyNotFound(k))) if k == Symbol::from("b")
    );
}

#[test]
fn test_vm_dict_primitive() {
    let mut vm = VM::default();

    assert_result_eq(&mut vm, "(dict? (dict '((a . 1))))", Value::boolean(true));
    assert_result_eq(&mut vm, "(dict? '((a . 1) (a . 2)))", Value::boolean(false));
    assert_result_eq(&mut vm, "(dict? '())", Value::boolean(true));
    assert_result_eq(&mut vm, "(get '((a . 1) (b . 2)) 'b)", Value::number(2.0));

    assert_matches!(
        run_code(&mut vm, "(dict '((a . 1) (a . 2)))"),
        Err(Error::RuntimeError(RuntimeError::DomainError(_)))
    );
    assert_matches!(
        run_code(&mut vm, "(get '((a . 1)) 'b)"),
        Err(Error::RuntimeError(RuntimeError::KeyNotFound(_)))
    );
    assert_matches!(
        run_code(&mut vm, "(get 1 'b)"),
        Err(Error::RuntimeError(RuntimeError::DomainError(_)))
    );
    assert_matches!(
        run_code(&mut vm, "(get '() \"b\")"),
        Err(Error::RuntimeError(RuntimeError::TypeError(_)))
    );
}

#[test]
fn test_vm_synthesized_dict_is_a_global() {
    let mut vm = VM::default();

    run_code(&mut vm, "(define d (dict (x 1) (y 2)))").unwrap();
    assert!(vm.binding_names().contains(&String::from("dict")));

    // later programs keep using the earlier definition
    assert_result_eq(&mut vm, "(d 'y)", Value::number(2.0));
    assert_result_eq(
        &mut vm,
        "((dict (z 3)) 'z)",
        Value::number(3.0),
    );
}

#[test]
fn test_vm_nested_dicts() {
    let mut native = native_vm();

    assert_result_eq(
        &mut native,
        "(((dict (outer (dict (inner 1)))) 'outer) 'inner)",
        Value::number(1.0),
    );
}

#[test]
fn test_vm_duplicate_literal_keys() {
    let mut vm = VM::default();

    assert_matches!(
        run_code(&mut vm, "(dict (a 1) (a 2))"),
        Err(Error::CompilerError(_))
    );
}

#[test]
fn test_vm_dict_is_not_a_local_name() {
    let mut vm = VM::default();
    let mut native = native_vm();

    for vm in [&mut vm, &mut native] {
        assert_matches!(
            run_code(vm, "(let ((dict 5)) ((dict (a 1)) 'a))"),
            Err(Error::CompilerError(_))
        );
        assert_matches!(
            run_code(vm, "((lambda (dict) ((dict (a 1)) 'a)) 7)"),
            Err(Error::CompilerError(_))
        );
        assert_result_eq(vm, "(let ((d 5)) ((dict (a 1)) 'a))", Value::number(1.0));
    }
}
