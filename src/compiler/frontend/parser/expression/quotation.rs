use super::Expression;
use crate::compiler::error::Error;
use crate::compiler::frontend::parser::Result;
use crate::vm::value::Value;

/// Parse a quotation
///
/// ```grammar
/// <quotation> -> '<datum> | (quote <datum>)
/// ```
#[inline]
pub fn parse(operands: &[Value]) -> Result<Expression> {
    match operands {
        [datum] => Ok(Expression::quoted(datum.clone())),
        _ => Err(Error::parse_error("Expected (quote <datum>)")),
    }
}
