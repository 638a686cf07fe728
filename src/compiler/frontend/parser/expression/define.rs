use super::{parse_binder, Expression};
use crate::compiler::error::Error;
use crate::compiler::frontend::parser::Result;
use crate::vm::value::{Symbol, Value};

/// A top level definition
#[derive(Clone, PartialEq, Debug)]
pub struct Definition {
    pub name: Symbol,
    pub value: Box<Expression>,
}

pub fn build(name: Symbol, value: Expression) -> Definition {
    Definition {
        name,
        value: Box::new(value),
    }
}

/// True for `(define ...)` forms, well formed or not
pub fn is_definition(datum: &Value) -> bool {
    match datum.as_pair().map(|pair| pair.car()) {
        Some(Value::Symbol(head)) => head.as_str() == "define",
        _ => false,
    }
}

/// Parse a definition
///
/// ```grammar
/// <definition> -> (define <identifier> <expression>)
/// ```
///
/// Primitive names can't be redefined since they never parse as variables.
pub fn parse(datum: &Value) -> Result<Definition> {
    match datum.list_to_vec().as_deref() {
        Some([_, name, value]) => {
            let name = parse_binder(name, "define")?;

            Ok(build(name, Expression::parse(value)?))
        }
        _ => Err(Error::parse_error("Expected (define <identifier> <expression>)")),
    }
}
