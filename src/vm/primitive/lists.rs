use super::arguments::*;
use crate::vm::value::{error, Value};

define_predicate!(pair_p, Value::Pair(_));

pub fn cons(args: &[Value]) -> FunctionResult<Value> {
    let (car, cdr) = binary_procedure(args)?;
    Ok(Value::cons(car.clone(), cdr.clone()))
}

pub fn car(args: &[Value]) -> FunctionResult<Value> {
    match unary_procedure(args)? {
        Value::Pair(pair) => Ok(pair.car().clone()),
        v => Err(error::type_error(format!("car: param is not a pair {}", v))),
    }
}

pub fn cdr(args: &[Value]) -> FunctionResult<Value> {
    match unary_procedure(args)? {
        Value::Pair(pair) => Ok(pair.cdr().clone()),
        v => Err(error::type_error(format!("cdr: param is not a pair {}", v))),
    }
}

pub fn list(args: &[Value]) -> FunctionResult<Value> {
    Ok(Value::proper_list(args.iter().cloned()))
}
