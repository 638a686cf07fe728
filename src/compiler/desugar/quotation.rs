// Expressions as data.
//
// The inverse of the parser, up to primitive references: primitives and
// variables both turn into symbols, quoted literals into the quoted value.

use crate::compiler::frontend::parser::ast::{Form, Program};
use crate::compiler::frontend::parser::expression::Expression;
use crate::vm::value::{list, Value};

pub fn expression_to_datum(expr: &Expression) -> Value {
    match expr {
        Expression::Number(n) => Value::number(*n),
        Expression::Bool(b) => Value::boolean(*b),
        Expression::String(s) => Value::string(s.clone()),
        Expression::Variable(sym) => Value::Symbol(sym.clone()),
        Expression::Primitive(op) => Value::symbol(op.name()),
        Expression::Literal(value) => value.clone(),
        Expression::Apply(app) => Value::cons(
            expression_to_datum(&app.operator),
            sequence(&app.operands),
        ),
        Expression::If(cond) => list::proper_list(vec![
            Value::symbol("if"),
            expression_to_datum(&cond.test),
            expression_to_datum(&cond.consequent),
            expression_to_datum(&cond.alternate),
        ]),
        Expression::Lambda(lambda) => {
            let formals = lambda.formals.iter().cloned().map(Value::Symbol);
            let formals = list::proper_list(formals.collect::<Vec<_>>());

            special_form("lambda", formals, &lambda.body)
        }
        Expression::Let(letexp) => {
            let bindings = letexp.bindings.iter().map(|(name, value)| {
                list::proper_list(vec![Value::Symbol(name.clone()), expression_to_datum(value)])
            });
            let bindings = list::proper_list(bindings.collect::<Vec<_>>());

            special_form("let", bindings, &letexp.body)
        }
        Expression::Dict(dict) => {
            let entries = dict.entries.iter().map(|(key, value)| {
                list::proper_list(vec![Value::Symbol(key.clone()), expression_to_datum(value)])
            });

            Value::cons(
                Value::symbol("dict"),
                list::proper_list(entries.collect::<Vec<_>>()),
            )
        }
    }
}

/// `(define name value)` for definitions, the expression's datum otherwise
pub fn form_to_datum(form: &Form) -> Value {
    match form {
        Form::Definition(def) => list::proper_list(vec![
            Value::symbol("define"),
            Value::Symbol(def.name.clone()),
            expression_to_datum(&def.value),
        ]),
        Form::Expression(expr) => expression_to_datum(expr),
    }
}

pub fn program_to_data(program: &Program) -> Vec<Value> {
    program.iter().map(form_to_datum).collect()
}

fn sequence(exprs: &[Expression]) -> Value {
    list::proper_list(exprs.iter().map(expression_to_datum).collect::<Vec<_>>())
}

// (<keyword> <head> <body>...)
fn special_form(keyword: &str, head: Value, body: &[Expression]) -> Value {
    Value::cons(
        Value::symbol(keyword),
        Value::cons(head, sequence(body)),
    )
}
