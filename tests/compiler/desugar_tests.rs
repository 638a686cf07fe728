use brackets::compiler::desugar::{self, quotation};
use brackets::compiler::source::StringSource;
use brackets::compiler::Compiler;

fn expand(code: &str) -> Vec<String> {
    let program = Compiler::new()
        .compile_program(&mut StringSource::new(code))
        .unwrap();

    quotation::program_to_data(&program)
        .iter()
        .map(|datum| datum.to_string())
        .collect()
}

const DICT_DEFINITION: &str = "(define dict (lambda (pairs) (lambda (key) (if (pair? pairs) (if (eq? key (car (car pairs))) (cdr (car pairs)) ((dict (cdr pairs)) key)) #f))))";

#[test]
fn test_expand_dict_literal() {
    assert_eq!(
        expand("((dict (a 1) (b 2)) 'a)"),
        vec![
            DICT_DEFINITION.to_string(),
            String::from("((dict ((a . 1) (b . 2))) a)")
        ]
    );
}

#[test]
fn test_expand_without_dicts() {
    assert_eq!(
        expand("(define x 1) (+ x 1)"),
        vec![String::from("(define x 1)"), String::from("(+ x 1)")]
    );
}

#[test]
fn test_expand_keeps_definitions_in_place() {
    let expanded = expand("(define x 1) (define d (dict (k (lambda (y) y))))");

    assert_eq!(expanded.len(), 3);
    assert_eq!(expanded[0], DICT_DEFINITION);
    assert_eq!(expanded[1], "(define x 1)");
    assert_eq!(expanded[2], "(define d (dict ((k lambda (y) y))))");
}

#[test]
fn test_compiled_programs_are_dict_free() {
    let program = Compiler::new()
        .compile_program(&mut StringSource::new(
            "(let ((d (dict (a (dict (b 1)))))) (if (dict? d) d (dict)))",
        ))
        .unwrap();

    assert!(!program.iter().any(desugar::form_contains_dict));
}
