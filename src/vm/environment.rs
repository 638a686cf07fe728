use super::value::{Symbol, Value};
use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::rc::Rc;

type Bindings = im_rc::HashMap<Symbol, Value>;
type Globals = Rc<RefCell<FxHashMap<Symbol, Value>>>;

/// Lexical bindings live in a persistent map, so extending a scope is cheap
/// and a closure keeps exactly the bindings it was created with.
/// Top level definitions go into a table shared by every environment derived
/// from the same root, which is what lets a procedure refer to itself by name.
#[derive(Clone)]
pub struct Environment {
    locals: Bindings,
    globals: Globals,
}

impl Environment {
    pub fn empty() -> Self {
        Environment {
            locals: Bindings::new(),
            globals: Rc::new(RefCell::new(FxHashMap::default())),
        }
    }

    pub fn get(&self, sym: &Symbol) -> Option<Value> {
        match self.locals.get(sym) {
            Some(value) => Some(value.clone()),
            None => self.globals.borrow().get(sym).cloned(),
        }
    }

    /// A new scope on top of this one. The receiver is left untouched.
    pub fn extend<I>(&self, bindings: I) -> Environment
    where
        I: IntoIterator<Item = (Symbol, Value)>,
    {
        let mut locals = self.locals.clone();

        for (sym, val) in bindings {
            locals.insert(sym, val);
        }

        Environment {
            locals,
            globals: self.globals.clone(),
        }
    }

    pub fn define(&self, sym: Symbol, val: Value) {
        self.globals.borrow_mut().insert(sym, val);
    }

    pub fn global_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .globals
            .borrow()
            .keys()
            .map(|sym| sym.as_str().to_string())
            .collect();
        names.sort();
        names
    }
}

impl std::fmt::Debug for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Environment")
            .field("locals", &self.locals.keys().collect::<Vec<_>>())
            .field("globals", &self.global_names())
            .finish()
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::empty()
    }
}
