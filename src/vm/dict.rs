//! Structural checks for dict-shaped values.
//!
//! A dict is an association list: a proper list of `(key . value)` pairs whose
//! keys are symbols, no two of them with the same name.

use super::value::equality::SchemeEqual;
use super::value::error::{self, RuntimeError};
use super::value::{Symbol, Value};
use rustc_hash::FxHashSet;

/// True for the empty list and for a pair chain whose every element is a pair
/// with a symbol in its car. Key uniqueness is not checked here.
pub fn is_dict_shaped(v: &Value) -> bool {
    let mut current = v;

    loop {
        match current {
            Value::EmptyList => return true,
            Value::Pair(pair) => match pair.car() {
                Value::Pair(entry) if entry.car().is_symbol() => current = pair.cdr(),
                _ => return false,
            },
            _ => return false,
        }
    }
}

/// Walks the chain left to right and stops at the first key seen twice.
pub fn keys_unique(v: &Value) -> bool {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let mut current = v;

    loop {
        match current {
            Value::EmptyList => return true,
            Value::Pair(pair) => match pair.car() {
                Value::Pair(entry) => match entry.car() {
                    Value::Symbol(key) if seen.insert(key.as_str()) => current = pair.cdr(),
                    _ => return false,
                },
                _ => return false,
            },
            _ => return false,
        }
    }
}

pub fn is_dict(v: &Value) -> bool {
    is_dict_shaped(v) && keys_unique(v)
}

/// Ordered linear search, keys compared with `eq?`.
pub fn lookup(dict: &Value, key: &Symbol) -> Result<Value, RuntimeError> {
    let mut current = dict;

    while let Value::Pair(pair) = current {
        if let Value::Pair(entry) = pair.car() {
            if let Value::Symbol(candidate) = entry.car() {
                if candidate.is_eq(key) {
                    return Ok(entry.cdr().clone());
                }
            }
        }
        current = pair.cdr();
    }

    Err(error::key_not_found(key.clone()))
}
