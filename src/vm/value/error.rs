use super::procedure::Arity;
use super::{Symbol, Value};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RuntimeError {
    #[error("TypeError: {0}")]
    TypeError(String),
    #[error("DomainError: {0}")]
    DomainError(String),
    #[error("KeyNotFoundError: Key `{0}` not found")]
    KeyNotFound(Symbol),
    #[error("UnknownPrimitiveError: Bad primitive op `{0}`")]
    UnknownPrimitive(String),
    #[error("ArityError: Function expected {0} arguments but received {1}")]
    ArityError(Arity, usize),
    #[error("UndefinedVariableError: Variable `{0}` is undefined")]
    UndefinedVariable(Symbol),
    #[error("ApplicationError: `{0}` is not callable")]
    NoncallableError(Value),
}

pub fn type_error<I: Into<String>>(message: I) -> RuntimeError {
    RuntimeError::TypeError(message.into())
}

pub fn domain_error<I: Into<String>>(message: I) -> RuntimeError {
    RuntimeError::DomainError(message.into())
}

pub fn key_not_found(key: Symbol) -> RuntimeError {
    RuntimeError::KeyNotFound(key)
}

pub fn unknown_primitive<I: Into<String>>(name: I) -> RuntimeError {
    RuntimeError::UnknownPrimitive(name.into())
}

pub fn arity_mismatch(arity: Arity, arg_count: usize) -> RuntimeError {
    RuntimeError::ArityError(arity, arg_count)
}

pub fn undefined_variable(id: Symbol) -> RuntimeError {
    RuntimeError::UndefinedVariable(id)
}

pub fn non_callable(v: Value) -> RuntimeError {
    RuntimeError::NoncallableError(v)
}
