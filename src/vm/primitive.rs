// Built-in operators.
//
// Every operator is a plain function from its (already evaluated) arguments
// to a result. Nothing here evaluates expressions or panics; failures are
// reported as `RuntimeError`s and left to the caller.

macro_rules! define_predicate {
    ($name:ident, $pattern:pat) => {
        pub fn $name(args: &[Value]) -> FunctionResult<Value> {
            match unary_procedure(args)? {
                $pattern => Ok(Value::Bool(true)),
                _ => Ok(Value::Bool(false)),
            }
        }
    };
}

pub mod arguments;
pub mod base;
pub mod dicts;
pub mod lists;
pub mod numbers;

use crate::vm::value::error::{self, RuntimeError};
use crate::vm::value::Value;
use arguments::FunctionResult;
use lazy_static::lazy_static;
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimOp {
    Add,
    Sub,
    Mul,
    Div,
    Gt,
    Lt,
    NumEq,
    Not,
    And,
    Or,
    Eq,
    StringEq,
    Cons,
    Car,
    Cdr,
    List,
    PairP,
    NumberP,
    BooleanP,
    SymbolP,
    StringP,
    DictP,
    Dict,
    Get,
}

lazy_static! {
    static ref VOCABULARY: FxHashMap<&'static str, PrimOp> =
        PrimOp::ALL.iter().map(|op| (op.name(), *op)).collect();
}

impl PrimOp {
    pub const ALL: [PrimOp; 24] = [
        PrimOp::Add,
        PrimOp::Sub,
        PrimOp::Mul,
        PrimOp::Div,
        PrimOp::Gt,
        PrimOp::Lt,
        PrimOp::NumEq,
        PrimOp::Not,
        PrimOp::And,
        PrimOp::Or,
        PrimOp::Eq,
        PrimOp::StringEq,
        PrimOp::Cons,
        PrimOp::Car,
        PrimOp::Cdr,
        PrimOp::List,
        PrimOp::PairP,
        PrimOp::NumberP,
        PrimOp::BooleanP,
        PrimOp::SymbolP,
        PrimOp::StringP,
        PrimOp::DictP,
        PrimOp::Dict,
        PrimOp::Get,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PrimOp::Add => "+",
            PrimOp::Sub => "-",
            PrimOp::Mul => "*",
            PrimOp::Div => "/",
            PrimOp::Gt => ">",
            PrimOp::Lt => "<",
            PrimOp::NumEq => "=",
            PrimOp::Not => "not",
            PrimOp::And => "and",
            PrimOp::Or => "or",
            PrimOp::Eq => "eq?",
            PrimOp::StringEq => "string=?",
            PrimOp::Cons => "cons",
            PrimOp::Car => "car",
            PrimOp::Cdr => "cdr",
            PrimOp::List => "list",
            PrimOp::PairP => "pair?",
            PrimOp::NumberP => "number?",
            PrimOp::BooleanP => "boolean?",
            PrimOp::SymbolP => "symbol?",
            PrimOp::StringP => "string?",
            PrimOp::DictP => "dict?",
            PrimOp::Dict => "dict",
            PrimOp::Get => "get",
        }
    }

    pub fn lookup(name: &str) -> Option<PrimOp> {
        VOCABULARY.get(name).copied()
    }
}

impl std::str::FromStr for PrimOp {
    type Err = RuntimeError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::lookup(name).ok_or_else(|| error::unknown_primitive(name))
    }
}

impl std::fmt::Display for PrimOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

pub fn apply(op: PrimOp, args: &[Value]) -> FunctionResult<Value> {
    log::trace!("applying primitive {} to {} argument(s)", op, args.len());

    match op {
        PrimOp::Add => numbers::add(args),
        PrimOp::Sub => numbers::sub(args),
        PrimOp::Mul => numbers::mul(args),
        PrimOp::Div => numbers::div(args),
        PrimOp::Gt => numbers::gt(args),
        PrimOp::Lt => numbers::lt(args),
        PrimOp::NumEq => numbers::num_eq(args),
        PrimOp::Not => base::bool_not(args),
        PrimOp::And => base::bool_and(args),
        PrimOp::Or => base::bool_or(args),
        PrimOp::Eq => base::eq(args),
        PrimOp::StringEq => base::string_eq(args),
        PrimOp::Cons => lists::cons(args),
        PrimOp::Car => lists::car(args),
        PrimOp::Cdr => lists::cdr(args),
        PrimOp::List => lists::list(args),
        PrimOp::PairP => lists::pair_p(args),
        PrimOp::NumberP => base::number_p(args),
        PrimOp::BooleanP => base::boolean_p(args),
        PrimOp::SymbolP => base::symbol_p(args),
        PrimOp::StringP => base::string_p(args),
        PrimOp::DictP => dicts::dict_p(args),
        PrimOp::Dict => dicts::make_dict(args),
        PrimOp::Get => dicts::get(args),
    }
}

/// Resolve the operator by name first. Names outside the vocabulary fail
/// with an `UnknownPrimitive` error.
pub fn apply_named(name: &str, args: &[Value]) -> FunctionResult<Value> {
    apply(name.parse()?, args)
}
