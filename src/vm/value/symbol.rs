use super::equality::SchemeEqual;
use std::rc::Rc;

/// Symbols are compared by name. The name is shared, so cloning a symbol
/// never copies the underlying string.
#[repr(transparent)]
#[derive(Clone, PartialEq, Hash, Eq, PartialOrd, Ord)]
pub struct Symbol(Rc<str>);

impl Symbol {
    pub fn new(name: impl Into<String>) -> Self {
        Symbol(Rc::from(name.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Symbol(Rc::from(name))
    }
}

impl std::fmt::Debug for Symbol {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_fmt(format_args!("sym#({})", self.as_str()))
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl SchemeEqual<Symbol> for Symbol {
    fn is_eq(&self, other: &Symbol) -> bool {
        self.0 == other.0
    }
}
