use super::Expression;
use crate::compiler::error::Error;
use crate::compiler::frontend::parser::Result;
use crate::vm::value::Value;

#[derive(Clone, PartialEq, Debug)]
pub struct IfExpression {
    pub test: Box<Expression>,
    pub consequent: Box<Expression>,
    pub alternate: Box<Expression>,
}

pub fn build(test: Expression, consequent: Expression, alternate: Expression) -> IfExpression {
    IfExpression {
        test: Box::new(test),
        consequent: Box::new(consequent),
        alternate: Box::new(alternate),
    }
}

/// Parse an if-expression
///
/// ```grammar
/// <conditional> -> (if <test> <consequent> <alternate>)
/// ```
pub fn parse(operands: &[Value]) -> Result<Expression> {
    match operands {
        [test, consequent, alternate] => {
            let test_expr = Expression::parse(test)?;
            let consequent_expr = Expression::parse(consequent)?;
            let alternate_expr = Expression::parse(alternate)?;

            Ok(Expression::If(build(test_expr, consequent_expr, alternate_expr)))
        }
        _ => Err(Error::parse_error(
            "Expected (if <test> <consequent> <alternate>)",
        )),
    }
}
