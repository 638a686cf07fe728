use super::expression::define::Definition;
use super::expression::Expression;

/// A whole program: top level forms in source order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub forms: Vec<Form>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Form {
    Definition(Definition),
    Expression(Expression),
}

impl Program {
    pub fn new(forms: Vec<Form>) -> Self {
        Program { forms }
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Form> {
        self.forms.iter()
    }
}

impl From<Expression> for Form {
    fn from(expr: Expression) -> Self {
        Form::Expression(expr)
    }
}

impl From<Definition> for Form {
    fn from(def: Definition) -> Self {
        Form::Definition(def)
    }
}
