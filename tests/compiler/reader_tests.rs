use brackets::compiler::frontend::parser::expression::Expression;
use brackets::compiler::frontend::parser::Parser;
use brackets::compiler::frontend::reader;
use brackets::compiler::source::StringSource;
use brackets::compiler::{Compiler, Error};
use brackets::vm::primitive::PrimOp;
use brackets::vm::value::Value;

fn parse_error(code: &str) -> Error {
    match Compiler::new().parse_program(&mut StringSource::new(code)) {
        Err(e) => e,
        Ok(program) => panic!("expected an error, got {:?}", program),
    }
}

#[test]
fn test_read_sequence() {
    let data = reader::parse_sequence("1 'a ; comment\n (b . c) #;(skipped) \"s\"").unwrap();

    assert_eq!(
        data,
        vec![
            Value::number(1.0),
            Value::proper_list(vec![Value::symbol("quote"), Value::symbol("a")]),
            Value::cons(Value::symbol("b"), Value::symbol("c")),
            Value::string("s"),
        ]
    );
}

#[test]
fn test_incomplete_input() {
    assert_matches!(parse_error("(+ 1"), Error::IncompleteInput);
    assert_matches!(parse_error("\"open"), Error::IncompleteInput);
}

#[test]
fn test_read_errors() {
    assert_matches!(parse_error(")"), Error::ReadError(_));
    assert_matches!(parse_error("(a . )"), Error::ReadError(_));
}

#[test]
fn test_parse_errors() {
    assert_matches!(parse_error("(if 1 2)"), Error::ParseError(_));
    assert_matches!(parse_error("(lambda (x x) x)"), Error::ParseError(_));
    assert_matches!(parse_error("(let ((x 1)))"), Error::ParseError(_));
    assert_matches!(parse_error("(define car 1)"), Error::ParseError(_));
    assert_matches!(parse_error("(lambda () (define x 1))"), Error::ParseError(_));
    assert_matches!(parse_error("(dict (a 1) (a 2))"), Error::ParseError(_));
    assert_matches!(parse_error("()"), Error::ParseError(_));
}

#[test]
fn test_vocabulary_parses_as_primitives() {
    let parser = Parser::new();
    let datum = reader::parse("(dict? x)").unwrap();

    assert_matches!(
        parser.parse_expression(&datum),
        Ok(Expression::Apply(app)) if *app.operator == Expression::primitive(PrimOp::DictP)
    );
}

#[test]
fn test_dict_literal_or_application() {
    let parser = Parser::new();

    assert_matches!(
        parser.parse_expression(&reader::parse("(dict (a 1) (b x))").unwrap()),
        Ok(Expression::Dict(_))
    );
    assert_matches!(
        parser.parse_expression(&reader::parse("(dict '((a . 1)))").unwrap()),
        Ok(Expression::Apply(_))
    );
    assert_matches!(
        parser.parse_expression(&reader::parse("(dict alist)").unwrap()),
        Ok(Expression::Apply(_))
    );
}
