use crate::helpers::*;
use brackets::vm::value::Value;
use brackets::vm::VM;

#[test]
fn test_vm_literal() {
    let mut vm = VM::default();

    assert_result_eq(&mut vm, "#t", Value::boolean(true));
    assert_result_eq(&mut vm, "#false", Value::boolean(false));
    assert_result_eq(&mut vm, "\"foo\"", Value::string("foo"));
    assert_result_eq(&mut vm, "'foo", Value::symbol("foo"));
    assert_result_eq(&mut vm, "3.5", Value::number(3.5));
    assert_result_eq(&mut vm, "-2", Value::number(-2.0));
    assert_result_eq(
        &mut vm,
        "'(#t #f)",
        Value::proper_list(vec![Value::boolean(true), Value::boolean(false)]),
    );
    assert_result_eq(
        &mut vm,
        "'(1 . 2)",
        Value::cons(Value::number(1.0), Value::number(2.0)),
    );
    assert_result_eq(&mut vm, "'()", Value::empty_list());
}

#[test]
fn test_vm_program_value_is_last_form() {
    let mut vm = VM::default();

    assert_result_eq(&mut vm, "1 2 3", Value::number(3.0));
    assert_result_eq(&mut vm, "", Value::void());
    assert_result_eq(&mut vm, "(define x 1)", Value::void());
}

#[test]
fn test_vm_choose_dictionary() {
    let mut vm = VM::default();

    assert_result_eq(
        &mut vm,
        r#"
        (define x 1)
        ((if (< x 0)
             (dict (a 1) (b 2))
             (dict (a 2) (b 1)))
         'a)
        "#,
        Value::number(2.0),
    );
}

#[test]
fn test_vm_smoke_test() {
    let mut vm = VM::default();

    assert_result_eq(
        &mut vm,
        r#"
        (define fib-iter
          (lambda (a b count)
            (if (= count 0)
                b
                (fib-iter (+ a b) a (- count 1)))))

        (define fib (lambda (n) (fib-iter 1 0 n)))

        ; comments are skipped
        (fib 20)
        "#,
        Value::number(6765.0),
    );
}

#[test]
fn test_vm_writer() {
    let mut vm = VM::default();

    let value = run_code(&mut vm, "(list 1 \"two\" 'three (dict? 1) '(a . b))").unwrap();
    assert_eq!(vm.write(&value), "(1 \"two\" three #f (a . b))");

    let value = run_code(&mut vm, "(lambda (x y) x)").unwrap();
    assert_eq!(vm.write(&value), "#<closure (x y)>");

    let value = run_code(&mut vm, "car").unwrap();
    assert_eq!(vm.write(&value), "#<primitive car>");
}
