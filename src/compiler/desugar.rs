//! Dictionary elimination.
//!
//! Rewrites every dictionary literal of a program into a call of a `dict`
//! procedure on a quoted association list:
//!
//! ```scheme
//! (dict (a 1) (b (+ 1 1)))  =>  (dict '((a . 1) (b . (+ 1 1))))
//! ```
//!
//! The called `dict` is not the primitive but a procedure defined in terms of
//! `pair?`, `eq?`, `car` and `cdr` (see [`lookup`]). Its definition is put in
//! front of every program that contained at least one literal.
//!
//! The pass is total. It builds a new program and leaves its input alone.

pub mod lookup;
pub mod quotation;

use crate::compiler::frontend::parser::ast::{Form, Program};
use crate::compiler::frontend::parser::expression::apply::ApplicationExpression;
use crate::compiler::frontend::parser::expression::conditional::IfExpression;
use crate::compiler::frontend::parser::expression::define::{self, Definition};
use crate::compiler::frontend::parser::expression::dict::DictExpression;
use crate::compiler::frontend::parser::expression::lambda::LambdaExpression;
use crate::compiler::frontend::parser::expression::letexp::LetExpression;
use crate::compiler::frontend::parser::expression::Expression;
use crate::vm::value::{list, Value};

pub fn eliminate_dicts(program: &Program) -> Program {
    let mut forms: Vec<Form> = program.iter().map(desugar_form).collect();

    if program.iter().any(form_contains_dict) {
        log::debug!("program contains dict literals, defining `{}`", lookup::DICT_PROCEDURE);
        forms.insert(0, Form::Definition(lookup::definition()));
    }

    Program::new(forms)
}

pub fn desugar_form(form: &Form) -> Form {
    match form {
        Form::Definition(def) => {
            Form::Definition(define::build(def.name.clone(), desugar_expression(&def.value)))
        }
        Form::Expression(expr) => Form::Expression(desugar_expression(expr)),
    }
}

pub fn desugar_expression(expr: &Expression) -> Expression {
    match expr {
        Expression::Number(_)
        | Expression::Bool(_)
        | Expression::String(_)
        | Expression::Variable(_)
        | Expression::Literal(_)
        | Expression::Primitive(_) => expr.clone(),
        Expression::Apply(app) => desugar_apply(app),
        Expression::If(cond) => desugar_if(cond),
        Expression::Lambda(lambda) => desugar_lambda(lambda),
        Expression::Let(letexp) => desugar_let(letexp),
        Expression::Dict(dict) => rewrite_dict(dict),
    }
}

fn desugar_apply(app: &ApplicationExpression) -> Expression {
    Expression::apply(
        desugar_expression(&app.operator),
        app.operands.iter().map(desugar_expression).collect(),
    )
}

fn desugar_if(cond: &IfExpression) -> Expression {
    Expression::conditional(
        desugar_expression(&cond.test),
        desugar_expression(&cond.consequent),
        desugar_expression(&cond.alternate),
    )
}

fn desugar_lambda(lambda: &LambdaExpression) -> Expression {
    Expression::lambda(
        lambda.formals.clone(),
        lambda.body.iter().map(desugar_expression).collect(),
    )
}

fn desugar_let(letexp: &LetExpression) -> Expression {
    Expression::let_bindings(
        letexp
            .bindings
            .iter()
            .map(|(name, value)| (name.clone(), desugar_expression(value)))
            .collect(),
        letexp.body.iter().map(desugar_expression).collect(),
    )
}

/// `(dict (k e) ...)` becomes `(dict '((k . e') ...))` where `e'` is the
/// desugared `e` turned back into data.
fn rewrite_dict(dict: &DictExpression) -> Expression {
    let entries = dict.entries.iter().map(|(key, value)| {
        let value = desugar_expression(value);
        debug_assert!(!contains_dict(&value), "dict literal left after desugaring");

        Value::cons(Value::Symbol(key.clone()), quotation::expression_to_datum(&value))
    });
    let alist = list::proper_list(entries.collect::<Vec<_>>());

    log::trace!("rewriting dict literal with {} entries", dict.entries.len());
    Expression::apply(lookup::procedure_reference(), vec![Expression::quoted(alist)])
}

pub fn form_contains_dict(form: &Form) -> bool {
    match form {
        Form::Definition(Definition { value, .. }) => contains_dict(value),
        Form::Expression(expr) => contains_dict(expr),
    }
}

pub fn contains_dict(expr: &Expression) -> bool {
    match expr {
        Expression::Number(_)
        | Expression::Bool(_)
        | Expression::String(_)
        | Expression::Variable(_)
        | Expression::Literal(_)
        | Expression::Primitive(_) => false,
        Expression::Apply(app) => {
            contains_dict(&app.operator) || app.operands.iter().any(contains_dict)
        }
        Expression::If(cond) => {
            contains_dict(&cond.test)
                || contains_dict(&cond.consequent)
                || contains_dict(&cond.alternate)
        }
        Expression::Lambda(lambda) => lambda.body.iter().any(contains_dict),
        Expression::Let(letexp) => {
            letexp.bindings.iter().any(|(_, value)| contains_dict(value))
                || letexp.body.iter().any(contains_dict)
        }
        Expression::Dict(_) => true,
    }
}
