use crate::vm::value::procedure::Arity;
use crate::vm::value::{error, Value};

pub type FunctionResult<T> = std::result::Result<T, error::RuntimeError>;

// Helpers

pub fn binary_procedure(args: &[Value]) -> FunctionResult<(&Value, &Value)> {
    match args {
        [first, second] => Ok((first, second)),
        _ => Err(error::arity_mismatch(Arity::Exactly(2), args.len())),
    }
}

pub fn unary_procedure(args: &[Value]) -> FunctionResult<&Value> {
    match args {
        [first] => Ok(first),
        _ => Err(error::arity_mismatch(Arity::Exactly(1), args.len())),
    }
}

/// External representation of an argument list, for error messages
pub fn describe(args: &[Value]) -> String {
    let elements: Vec<String> = args.iter().map(|v| v.to_string()).collect();
    format!("({})", elements.join(" "))
}
