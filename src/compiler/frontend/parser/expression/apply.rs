use super::Expression;
use crate::compiler::error::Error;
use crate::compiler::frontend::parser::Result;
use crate::vm::value::Value;

#[derive(Clone, PartialEq, Debug)]
pub struct ApplicationExpression {
    pub operator: Box<Expression>,
    pub operands: Vec<Expression>,
}

pub fn build(operator: Expression, operands: Vec<Expression>) -> ApplicationExpression {
    ApplicationExpression {
        operator: Box::new(operator),
        operands,
    }
}

/// Parse a procedure call
///
/// ```grammar
/// <procedure call> -> (<operator> <operand>*)
/// ```
pub fn parse(elements: &[Value]) -> Result<Expression> {
    match elements {
        [operator, operands @ ..] => {
            let operator_expr = Expression::parse(operator)?;
            let operands_expr: Result<Vec<Expression>> =
                operands.iter().map(Expression::parse).collect();

            Ok(Expression::Apply(build(operator_expr, operands_expr?)))
        }
        _ => Err(Error::parse_error("Expected (<operator> <operand>*)")),
    }
}
