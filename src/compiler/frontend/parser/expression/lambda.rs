use super::{parse_binder, parse_body, Expression};
use crate::compiler::error::Error;
use crate::compiler::frontend::parser::Result;
use crate::vm::value::procedure::Arity;
use crate::vm::value::{Symbol, Value};
use rustc_hash::FxHashSet;

#[derive(Clone, PartialEq, Debug)]
pub struct LambdaExpression {
    pub formals: Vec<Symbol>,
    pub body: Vec<Expression>,
}

impl LambdaExpression {
    pub fn arity(&self) -> Arity {
        Arity::Exactly(self.formals.len())
    }
}

pub fn build(formals: Vec<Symbol>, body: Vec<Expression>) -> LambdaExpression {
    LambdaExpression { formals, body }
}

/// Parse a procedure
///
/// ```grammar
/// <lambda expression> -> (lambda (<identifier>*) <expression>+)
/// ```
pub fn parse(operands: &[Value]) -> Result<Expression> {
    match operands {
        [formals, body @ ..] => {
            let formals = parse_formals(formals)?;
            let body = parse_body(body, "lambda")?;

            Ok(Expression::Lambda(build(formals, body)))
        }
        _ => Err(Error::parse_error("Expected (lambda <formals> <body>)")),
    }
}

fn parse_formals(datum: &Value) -> Result<Vec<Symbol>> {
    let elements = datum.list_to_vec().ok_or_else(|| {
        Error::parse_error(format!("Expected a list of formals but got {}", datum))
    })?;
    let formals: Vec<Symbol> = elements
        .iter()
        .map(|formal| parse_binder(formal, "lambda"))
        .collect::<Result<_>>()?;

    let mut seen = FxHashSet::default();
    for formal in &formals {
        if !seen.insert(formal.as_str()) {
            return Err(Error::parse_error(format!(
                "Duplicate formal `{}` in lambda expression",
                formal
            )));
        }
    }

    Ok(formals)
}
