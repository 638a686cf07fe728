pub mod apply;
pub mod conditional;
pub mod define;
pub mod dict;
pub mod lambda;
pub mod letexp;
pub mod quotation;

use super::Result;
use crate::compiler::error::Error;
use crate::vm::primitive::PrimOp;
use crate::vm::value::{Symbol, Value};
use apply::ApplicationExpression;
use conditional::IfExpression;
use dict::DictExpression;
use lambda::LambdaExpression;
use letexp::LetExpression;

#[derive(Clone, PartialEq, Debug)]
pub enum Expression {
    Number(f64),
    Bool(bool),
    String(String),
    Variable(Symbol),
    Literal(Value),
    Primitive(PrimOp),
    Apply(ApplicationExpression),
    If(IfExpression),
    Lambda(LambdaExpression),
    Let(LetExpression),
    Dict(DictExpression),
}

impl Expression {
    pub fn number(n: f64) -> Expression {
        Expression::Number(n)
    }

    pub fn boolean(b: bool) -> Expression {
        Expression::Bool(b)
    }

    pub fn string(s: impl Into<String>) -> Expression {
        Expression::String(s.into())
    }

    pub fn variable(name: impl Into<Symbol>) -> Expression {
        Expression::Variable(name.into())
    }

    pub fn quoted(value: Value) -> Expression {
        Expression::Literal(value)
    }

    pub fn primitive(op: PrimOp) -> Expression {
        Expression::Primitive(op)
    }

    pub fn apply(operator: Expression, operands: Vec<Expression>) -> Expression {
        Expression::Apply(apply::build(operator, operands))
    }

    pub fn conditional(test: Expression, consequent: Expression, alternate: Expression) -> Expression {
        Expression::If(conditional::build(test, consequent, alternate))
    }

    pub fn lambda(formals: Vec<Symbol>, body: Vec<Expression>) -> Expression {
        Expression::Lambda(lambda::build(formals, body))
    }

    pub fn let_bindings(bindings: Vec<(Symbol, Expression)>, body: Vec<Expression>) -> Expression {
        Expression::Let(letexp::build(bindings, body))
    }

    pub fn dict(entries: Vec<(Symbol, Expression)>) -> Expression {
        Expression::Dict(dict::build(entries))
    }

    /// Parse a datum as an expression
    ///
    /// ```grammar
    /// <expression> -> <number> | <boolean> | <string> | <symbol>
    ///               | (quote <datum>)
    ///               | (if <test> <consequent> <alternate>)
    ///               | (lambda (<symbol>*) <body>)
    ///               | (let ((<symbol> <expression>)*) <body>)
    ///               | (dict (<symbol> <expression>)*)
    ///               | (<operator> <operand>*)
    /// ```
    pub fn parse(datum: &Value) -> Result<Expression> {
        match datum {
            Value::Number(n) => Ok(Expression::number(*n)),
            Value::Bool(b) => Ok(Expression::boolean(*b)),
            Value::String(s) => Ok(Expression::string(s.clone())),
            Value::Symbol(sym) => Ok(Self::parse_symbol(sym)),
            Value::Pair(_) => Self::parse_compound(datum),
            Value::EmptyList => Err(Error::parse_error(
                "Unexpected empty application: ()",
            )),
            Value::PrimitiveOp(_) | Value::Closure(_) | Value::Void => Err(Error::parse_error(
                format!("Not a datum: {}", datum),
            )),
        }
    }

    /// Names in the primitive vocabulary are primitive references,
    /// everything else is a variable.
    fn parse_symbol(sym: &Symbol) -> Expression {
        match PrimOp::lookup(sym.as_str()) {
            Some(op) => Expression::primitive(op),
            None => Expression::variable(sym.clone()),
        }
    }

    fn parse_compound(datum: &Value) -> Result<Expression> {
        let elements = datum
            .list_to_vec()
            .ok_or_else(|| Error::parse_error(format!("Expected a proper list but got {}", datum)))?;

        match elements.split_first() {
            Some((Value::Symbol(head), operands)) => match head.as_str() {
                "quote" => quotation::parse(operands),
                "if" => conditional::parse(operands),
                "lambda" => lambda::parse(operands),
                "let" => letexp::parse(operands),
                "define" => Err(Error::parse_error(
                    "define is only allowed at the top level",
                )),
                "dict" if dict::is_dict_literal(operands) => dict::parse(operands),
                _ => apply::parse(&elements),
            },
            _ => apply::parse(&elements),
        }
    }
}

/// A sequence of one or more expressions, as found in procedure and let bodies
pub fn parse_body(data: &[Value], form: &str) -> Result<Vec<Expression>> {
    if data.is_empty() {
        return Err(Error::parse_error(format!(
            "Expected at least one expression in the body of {}",
            form
        )));
    }

    data.iter().map(Expression::parse).collect()
}

pub fn parse_identifier(datum: &Value) -> Result<Symbol> {
    match datum {
        Value::Symbol(sym) => Ok(sym.clone()),
        other => Err(Error::parse_error(format!(
            "Expected an identifier but got {}",
            other
        ))),
    }
}

/// An identifier introduced by `define`, `lambda` or `let`.
///
/// Vocabulary names always parse as primitive references, so binding one
/// could never be observed except by the variable the dictionary rewrite
/// introduces.
pub fn parse_binder(datum: &Value, form: &str) -> Result<Symbol> {
    let name = parse_identifier(datum)?;

    if PrimOp::lookup(name.as_str()).is_some() {
        return Err(Error::parse_error(format!(
            "Can't bind primitive `{}` in {}",
            name, form
        )));
    }

    Ok(name)
}
