use super::procedure::Arity;
use super::Symbol;
use crate::compiler::frontend::parser::expression::Expression;
use crate::vm::environment::Environment;

/// A procedure value: formals and body of a lambda expression together with
/// the environment it was evaluated in.
#[derive(Clone)]
pub struct Closure {
    formals: Vec<Symbol>,
    body: Vec<Expression>,
    env: Environment,
}

impl Closure {
    pub fn new(formals: Vec<Symbol>, body: Vec<Expression>, env: Environment) -> Self {
        Self { formals, body, env }
    }

    pub fn formals(&self) -> &[Symbol] {
        &self.formals
    }

    pub fn body(&self) -> &[Expression] {
        &self.body
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn arity(&self) -> Arity {
        Arity::Exactly(self.formals.len())
    }
}

// The captured environment may reach this closure again through the global
// table, so it is left out.
impl std::fmt::Debug for Closure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Closure")
            .field("formals", &self.formals)
            .field("body", &self.body)
            .finish()
    }
}
