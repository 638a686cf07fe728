pub mod ast;
pub mod expression;

use crate::compiler::error::Error;
use crate::vm::value::Value;
use ast::{Form, Program};
use expression::{define, Expression};

pub type Result<T> = std::result::Result<T, Error>;

/// Turns data produced by the reader into expressions
#[derive(Debug, Clone, Default)]
pub struct Parser;

impl Parser {
    pub fn new() -> Self {
        Parser
    }

    pub fn parse_program(&self, data: &[Value]) -> Result<Program> {
        let forms: Result<Vec<Form>> = data.iter().map(|d| self.parse_form(d)).collect();

        Ok(Program::new(forms?))
    }

    /// Definitions are only valid here, not inside expressions
    pub fn parse_form(&self, datum: &Value) -> Result<Form> {
        if define::is_definition(datum) {
            Ok(Form::Definition(define::parse(datum)?))
        } else {
            Ok(Form::Expression(self.parse_expression(datum)?))
        }
    }

    pub fn parse_expression(&self, datum: &Value) -> Result<Expression> {
        Expression::parse(datum)
    }
}
