// Tree walking evaluator
//
// Evaluates expressions call-by-value in an environment. Primitive
// applications are handed off to `primitive::apply`; everything else
// (closures, conditionals, let, definitions) is handled here.

use super::dict;
use super::environment::Environment;
use super::primitive::{self, PrimOp};
use super::value::closure::Closure;
use super::value::error::{self, RuntimeError};
use super::value::{list, Value};
use crate::compiler::frontend::parser::ast::{Form, Program};
use crate::compiler::frontend::parser::expression::define::Definition;
use crate::compiler::frontend::parser::expression::dict::DictExpression;
use crate::compiler::frontend::parser::expression::Expression;
use crate::vm::value::procedure::Arity;

pub type Result<T> = std::result::Result<T, RuntimeError>;

/// Evaluate all forms in order. The result is the value of the last form,
/// or the unspecified value for an empty program.
pub fn eval_program(program: &Program, env: &Environment) -> Result<Value> {
    let mut result = Value::Void;

    for form in program.iter() {
        result = eval_form(form, env)?;
    }

    Ok(result)
}

pub fn eval_form(form: &Form, env: &Environment) -> Result<Value> {
    match form {
        Form::Definition(def) => eval_definition(def, env),
        Form::Expression(expr) => eval(expr, env),
    }
}

fn eval_definition(def: &Definition, env: &Environment) -> Result<Value> {
    let value = eval(&def.value, env)?;

    log::trace!("define {} = {}", def.name, value);
    env.define(def.name.clone(), value);
    Ok(Value::Void)
}

pub fn eval(expr: &Expression, env: &Environment) -> Result<Value> {
    match expr {
        Expression::Number(n) => Ok(Value::Number(*n)),
        Expression::Bool(b) => Ok(Value::Bool(*b)),
        Expression::String(s) => Ok(Value::String(s.clone())),
        Expression::Literal(v) => Ok(v.clone()),
        Expression::Primitive(op) => Ok(Value::PrimitiveOp(*op)),
        Expression::Variable(sym) => env
            .get(sym)
            .ok_or_else(|| error::undefined_variable(sym.clone())),
        Expression::If(cond) => {
            if eval(&cond.test, env)?.is_true() {
                eval(&cond.consequent, env)
            } else {
                eval(&cond.alternate, env)
            }
        }
        Expression::Lambda(lambda) => Ok(Value::closure(Closure::new(
            lambda.formals.clone(),
            lambda.body.clone(),
            env.clone(),
        ))),
        Expression::Let(letexp) => {
            let mut bindings = Vec::with_capacity(letexp.bindings.len());

            for (name, value) in &letexp.bindings {
                bindings.push((name.clone(), eval(value, env)?));
            }

            eval_body(&letexp.body, &env.extend(bindings))
        }
        Expression::Apply(app) => {
            let operator = eval(&app.operator, env)?;
            let operands = app
                .operands
                .iter()
                .map(|operand| eval(operand, env))
                .collect::<Result<Vec<Value>>>()?;

            apply(&operator, &operands)
        }
        Expression::Dict(dict) => eval_dict(dict, env),
    }
}

fn eval_body(body: &[Expression], env: &Environment) -> Result<Value> {
    let mut result = Value::Void;

    for expr in body {
        result = eval(expr, env)?;
    }

    Ok(result)
}

// A literal evaluated without desugaring is an association list of the
// evaluated entries, checked by the `dict` primitive.
fn eval_dict(dict: &DictExpression, env: &Environment) -> Result<Value> {
    let mut entries = Vec::with_capacity(dict.entries.len());

    for (key, value) in &dict.entries {
        entries.push(Value::cons(Value::Symbol(key.clone()), eval(value, env)?));
    }

    primitive::apply(PrimOp::Dict, &[list::proper_list(entries)])
}

/// Apply a procedure to already evaluated arguments.
///
/// Dictionaries are applicable too: applying one to a key looks the key up
/// and fails when it is missing.
pub fn apply(operator: &Value, args: &[Value]) -> Result<Value> {
    match operator {
        Value::PrimitiveOp(op) => primitive::apply(*op, args),
        Value::Closure(closure) => apply_closure(closure, args),
        v if dict::is_dict(v) => match args {
            [Value::Symbol(key)] => dict::lookup(v, key),
            [other] => Err(error::type_error(format!(
                "dict key is not a symbol {}",
                other
            ))),
            _ => Err(error::arity_mismatch(Arity::Exactly(1), args.len())),
        },
        _ => Err(error::non_callable(operator.clone())),
    }
}

fn apply_closure(closure: &Closure, args: &[Value]) -> Result<Value> {
    let arity = closure.arity();

    if !arity.accepts(args.len()) {
        return Err(error::arity_mismatch(arity, args.len()));
    }

    log::trace!("applying closure with {} argument(s)", args.len());
    let bindings = closure.formals().iter().cloned().zip(args.iter().cloned());

    eval_body(closure.body(), &closure.env().extend(bindings))
}
