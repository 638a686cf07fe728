use super::arguments::*;
use crate::vm::dict;
use crate::vm::value::{error, Value};

pub fn dict_p(args: &[Value]) -> FunctionResult<Value> {
    let v = unary_procedure(args)?;
    Ok(Value::Bool(dict::is_dict(v)))
}

/// Validates its argument and hands it back unchanged
pub fn make_dict(args: &[Value]) -> FunctionResult<Value> {
    match unary_procedure(args)? {
        v if dict::is_dict(v) => Ok(v.clone()),
        v => Err(error::domain_error(format!("param is not a dict {}", v))),
    }
}

pub fn get(args: &[Value]) -> FunctionResult<Value> {
    match binary_procedure(args)? {
        (d, _) if !dict::is_dict(d) => Err(error::domain_error(format!(
            "get: param is not a dict {}",
            d
        ))),
        (d, Value::Symbol(key)) => dict::lookup(d, key),
        (_, key) => Err(error::type_error(format!(
            "get: key is not a symbol {}",
            key
        ))),
    }
}
