use super::Value;

pub trait SchemeEqual<T> {
    fn is_eq(&self, other: &T) -> bool;
}

// `eq?` is tag aware: atoms of the same kind compare by value, everything
// else (pairs included, even with identical contents) is never `eq?`.
impl SchemeEqual<Value> for Value {
    fn is_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Symbol(lhs), Value::Symbol(rhs)) => lhs.is_eq(rhs),
            (Value::EmptyList, Value::EmptyList) => true,
            (Value::Number(lhs), Value::Number(rhs)) => lhs == rhs,
            (Value::String(lhs), Value::String(rhs)) => lhs == rhs,
            (Value::Bool(lhs), Value::Bool(rhs)) => lhs == rhs,
            _ => false,
        }
    }
}
