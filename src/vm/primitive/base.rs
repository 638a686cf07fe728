use super::arguments::*;
use crate::vm::value::equality::SchemeEqual;
use crate::vm::value::{error, Value};

// predicates
define_predicate!(number_p, Value::Number(_));
define_predicate!(boolean_p, Value::Bool(_));
define_predicate!(symbol_p, Value::Symbol(_));
define_predicate!(string_p, Value::String(_));

// `not` accepts any value, `and` / `or` insist on booleans.
pub fn bool_not(args: &[Value]) -> FunctionResult<Value> {
    let v = unary_procedure(args)?;
    Ok(Value::Bool(!v.is_true()))
}

pub fn bool_and(args: &[Value]) -> FunctionResult<Value> {
    match args {
        [Value::Bool(lhs), Value::Bool(rhs)] => Ok(Value::Bool(*lhs && *rhs)),
        _ => Err(error::type_error(format!(
            "Arguments to \"and\" not booleans: {}",
            describe(args)
        ))),
    }
}

pub fn bool_or(args: &[Value]) -> FunctionResult<Value> {
    match args {
        [Value::Bool(lhs), Value::Bool(rhs)] => Ok(Value::Bool(*lhs || *rhs)),
        _ => Err(error::type_error(format!(
            "Arguments to \"or\" not booleans: {}",
            describe(args)
        ))),
    }
}

pub fn eq(args: &[Value]) -> FunctionResult<Value> {
    let (lhs, rhs) = binary_procedure(args)?;
    Ok(Value::Bool(lhs.is_eq(rhs)))
}

pub fn string_eq(args: &[Value]) -> FunctionResult<Value> {
    let (lhs, rhs) = binary_procedure(args)?;
    Ok(Value::Bool(lhs == rhs))
}
