use super::Expression;
use crate::compiler::error::Error;
use crate::compiler::frontend::parser::Result;
use crate::vm::value::{Symbol, Value};
use rustc_hash::FxHashSet;

/// A dictionary literal. Entries keep their source order.
#[derive(Clone, PartialEq, Debug)]
pub struct DictExpression {
    pub entries: Vec<(Symbol, Expression)>,
}

impl DictExpression {
    pub fn keys(&self) -> impl Iterator<Item = &Symbol> {
        self.entries.iter().map(|(key, _)| key)
    }
}

pub fn build(entries: Vec<(Symbol, Expression)>) -> DictExpression {
    DictExpression { entries }
}

/// `(dict ...)` is a literal when every operand looks like an entry,
/// otherwise it is an ordinary call of the `dict` primitive:
///
/// ```scheme
/// (dict (a 1) (b (+ 1 1)))   ; literal
/// (dict '((a . 1)))          ; primitive call
/// ```
pub fn is_dict_literal(operands: &[Value]) -> bool {
    operands.iter().all(is_entry)
}

fn is_entry(datum: &Value) -> bool {
    match datum.list_to_vec().as_deref() {
        Some([Value::Symbol(key), _]) => key.as_str() != "quote",
        _ => false,
    }
}

/// Parse a dictionary literal
///
/// ```grammar
/// <dict literal> -> (dict <entry>*)
/// <entry>        -> (<symbol> <expression>)
/// ```
///
/// Keys have to be unique.
pub fn parse(operands: &[Value]) -> Result<Expression> {
    let mut seen = FxHashSet::default();
    let mut entries = Vec::with_capacity(operands.len());

    for operand in operands {
        match operand.list_to_vec().as_deref() {
            Some([Value::Symbol(key), value]) => {
                if !seen.insert(key.clone()) {
                    return Err(Error::parse_error(format!(
                        "Duplicate key `{}` in dict literal",
                        key
                    )));
                }
                entries.push((key.clone(), Expression::parse(value)?));
            }
            _ => {
                return Err(Error::parse_error(format!(
                    "Expected (<symbol> <expression>) but got {}",
                    operand
                )))
            }
        }
    }

    Ok(Expression::Dict(build(entries)))
}
