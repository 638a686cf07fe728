#[cfg(test)]
pub mod arbitrary;
pub mod closure;
pub mod equality;
pub mod error;
pub mod list;
pub mod procedure;
pub mod symbol;

use crate::vm::primitive::PrimOp;
use crate::vm::writer::Writer;
use std::rc::Rc;

pub use list::Pair;
pub use symbol::Symbol;

// Scheme values used at runtime by the interpreter.
// Every expression eventually evaluates to a value of this kind. Values are
// immutable once built; pairs and closures are shared through `Rc`.
#[derive(Debug, Clone)]
pub enum Value {
    Number(f64),
    Bool(bool),
    String(String),
    Symbol(Symbol),
    EmptyList,
    Pair(Rc<Pair>),
    PrimitiveOp(PrimOp),
    Closure(Rc<closure::Closure>),
    Void,
}

impl Value {
    pub fn number(n: f64) -> Value {
        Self::Number(n)
    }

    pub fn boolean(val: bool) -> Value {
        Self::Bool(val)
    }

    pub fn string(s: impl Into<String>) -> Value {
        Self::String(s.into())
    }

    pub fn symbol(name: impl Into<String>) -> Value {
        Self::Symbol(Symbol::new(name))
    }

    pub fn empty_list() -> Value {
        Self::EmptyList
    }

    pub fn cons(car: Value, cdr: Value) -> Value {
        Self::Pair(Rc::new(Pair::new(car, cdr)))
    }

    pub fn primitive(op: PrimOp) -> Value {
        Self::PrimitiveOp(op)
    }

    pub fn closure(closure: closure::Closure) -> Value {
        Self::Closure(Rc::new(closure))
    }

    pub fn void() -> Value {
        Self::Void
    }

    /// Build a proper list from the given elements
    pub fn proper_list<I>(elements: I) -> Value
    where
        I: IntoIterator<Item = Value>,
        I::IntoIter: DoubleEndedIterator,
    {
        list::proper_list(elements)
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_symbol(&self) -> bool {
        matches!(self, Value::Symbol(_))
    }

    pub fn is_empty_list(&self) -> bool {
        matches!(self, Value::EmptyList)
    }

    pub fn is_pair(&self) -> bool {
        matches!(self, Value::Pair(_))
    }

    pub fn is_procedure(&self) -> bool {
        matches!(self, Value::PrimitiveOp(_) | Value::Closure(_))
    }

    /// True for the empty list and every pair chain ending in it
    pub fn is_list(&self) -> bool {
        list::is_list(self)
    }

    /// Only `#f` is false
    pub fn is_true(&self) -> bool {
        !matches!(self, Value::Bool(false))
    }

    pub fn as_pair(&self) -> Option<&Pair> {
        match self {
            Value::Pair(pair) => Some(pair),
            _ => None,
        }
    }

    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            Value::Symbol(sym) => Some(sym),
            _ => None,
        }
    }

    /// The elements of a proper list, `None` for anything else
    pub fn list_to_vec(&self) -> Option<Vec<Value>> {
        if self.is_list() {
            Some(list::iter(self).cloned().collect())
        } else {
            None
        }
    }
}

// Raw value equality as used by `=` and `string=?`.
// Data compares structurally, procedures compare by identity.
impl PartialEq for Value {
    fn eq(&self, rhs: &Value) -> bool {
        match (self, rhs) {
            (Value::Number(l), Value::Number(r)) => l == r,
            (Value::Bool(l), Value::Bool(r)) => l == r,
            (Value::String(l), Value::String(r)) => l == r,
            (Value::Symbol(l), Value::Symbol(r)) => l == r,
            (Value::EmptyList, Value::EmptyList) => true,
            (Value::Pair(l), Value::Pair(r)) => l == r,
            (Value::PrimitiveOp(l), Value::PrimitiveOp(r)) => l == r,
            (Value::Closure(l), Value::Closure(r)) => Rc::ptr_eq(l, r),
            (Value::Void, Value::Void) => true,
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Value {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Value {
        Value::Number(n)
    }
}

impl From<Symbol> for Value {
    fn from(sym: Symbol) -> Value {
        Value::Symbol(sym)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&Writer::new().write(self))
    }
}
