use super::arguments::*;
use crate::vm::value::{error, Value};
use std::cmp::Ordering;

pub fn add(args: &[Value]) -> FunctionResult<Value> {
    fold_numbers("+", args, 0.0, |acc, n| acc + n)
}

pub fn mul(args: &[Value]) -> FunctionResult<Value> {
    fold_numbers("*", args, 1.0, |acc, n| acc * n)
}

// `-` and `/` take exactly two numbers. Anything else, a single argument
// included, is a type error. Division by zero yields an infinity or NaN.
pub fn sub(args: &[Value]) -> FunctionResult<Value> {
    binary_numeric("-", args, |x, y| x - y)
}

pub fn div(args: &[Value]) -> FunctionResult<Value> {
    binary_numeric("/", args, |x, y| x / y)
}

pub fn lt(args: &[Value]) -> FunctionResult<Value> {
    compare("<", args, Ordering::Less)
}

pub fn gt(args: &[Value]) -> FunctionResult<Value> {
    compare(">", args, Ordering::Greater)
}

pub fn num_eq(args: &[Value]) -> FunctionResult<Value> {
    let (lhs, rhs) = binary_procedure(args)?;
    Ok(Value::Bool(lhs == rhs))
}

fn fold_numbers<F>(name: &str, args: &[Value], identity: f64, op: F) -> FunctionResult<Value>
where
    F: Fn(f64, f64) -> f64,
{
    let mut result = identity;

    for n in args {
        match n {
            Value::Number(n) => result = op(result, *n),
            _ => {
                return Err(error::type_error(format!(
                    "{} expects numbers only: {}",
                    name,
                    describe(args)
                )))
            }
        }
    }

    Ok(Value::Number(result))
}

fn binary_numeric<F>(name: &str, args: &[Value], op: F) -> FunctionResult<Value>
where
    F: Fn(f64, f64) -> f64,
{
    match args {
        [Value::Number(x), Value::Number(y)] => Ok(Value::Number(op(*x, *y))),
        _ => Err(error::type_error(format!(
            "{} expects two numbers: {}",
            name,
            describe(args)
        ))),
    }
}

// Numbers compare numerically (NaN is unordered), strings lexicographically.
// Mixing the two, or any other kind of argument, is a type error.
fn compare(name: &str, args: &[Value], expected: Ordering) -> FunctionResult<Value> {
    let ordering = match binary_procedure(args)? {
        (Value::Number(x), Value::Number(y)) => x.partial_cmp(y),
        (Value::String(x), Value::String(y)) => Some(x.cmp(y)),
        _ => {
            return Err(error::type_error(format!(
                "{} expects two numbers or two strings: {}",
                name,
                describe(args)
            )))
        }
    };

    Ok(Value::Bool(ordering == Some(expected)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vm::value::error::RuntimeError;

    fn num(n: f64) -> Value {
        Value::number(n)
    }

    #[test]
    fn test_add() {
        assert_eq!(add(&[num(1.0), num(2.0)]), Ok(num(3.0)));
        assert_eq!(add(&[num(1.0), num(2.0), num(3.5)]), Ok(num(6.5)));
        assert_eq!(add(&[]), Ok(num(0.0)));
        assert_matches!(
            add(&[num(1.0), Value::string("2")]),
            Err(RuntimeError::TypeError(_))
        );
    }

    #[test]
    fn test_mul() {
        assert_eq!(mul(&[num(2.0), num(3.0)]), Ok(num(6.0)));
        assert_eq!(mul(&[]), Ok(num(1.0)));
        assert_matches!(mul(&[Value::boolean(true)]), Err(RuntimeError::TypeError(_)));
    }

    #[test]
    fn test_sub_is_binary() {
        assert_eq!(sub(&[num(5.0), num(3.0)]), Ok(num(2.0)));
        assert_matches!(sub(&[num(5.0)]), Err(RuntimeError::TypeError(_)));
        assert_matches!(
            sub(&[num(5.0), num(3.0), num(1.0)]),
            Err(RuntimeError::TypeError(_))
        );
        assert_matches!(
            sub(&[num(5.0), Value::symbol("a")]),
            Err(RuntimeError::TypeError(_))
        );
    }

    #[test]
    fn test_div() {
        assert_eq!(div(&[num(6.0), num(3.0)]), Ok(num(2.0)));
        assert_matches!(div(&[num(6.0)]), Err(RuntimeError::TypeError(_)));
        assert_matches!(
            div(&[Value::string("6"), num(3.0)]),
            Err(RuntimeError::TypeError(_))
        );
    }

    #[test]
    fn test_division_by_zero_is_not_an_error() {
        assert_eq!(div(&[num(1.0), num(0.0)]), Ok(num(f64::INFINITY)));
        assert_matches!(div(&[num(0.0), num(0.0)]), Ok(Value::Number(n)) if n.is_nan());
    }

    #[test]
    fn test_comparisons() {
        assert_eq!(lt(&[num(1.0), num(2.0)]), Ok(Value::Bool(true)));
        assert_eq!(gt(&[num(1.0), num(2.0)]), Ok(Value::Bool(false)));
        assert_eq!(lt(&[num(2.0), num(2.0)]), Ok(Value::Bool(false)));
        assert_eq!(gt(&[num(f64::NAN), num(1.0)]), Ok(Value::Bool(false)));
        assert_matches!(lt(&[num(1.0), Value::boolean(true)]), Err(RuntimeError::TypeError(_)));
        assert_matches!(gt(&[num(1.0)]), Err(RuntimeError::ArityError(_, 1)));
    }

    #[test]
    fn test_string_comparisons() {
        let s = |v: &str| Value::string(v);

        assert_eq!(lt(&[s("a"), s("b")]), Ok(Value::Bool(true)));
        assert_eq!(gt(&[s("a"), s("b")]), Ok(Value::Bool(false)));
        assert_eq!(gt(&[s("ab"), s("a")]), Ok(Value::Bool(true)));
        assert_eq!(lt(&[s("a"), s("a")]), Ok(Value::Bool(false)));
        assert_matches!(lt(&[s("1"), num(2.0)]), Err(RuntimeError::TypeError(_)));
        assert_matches!(
            gt(&[Value::symbol("a"), Value::symbol("b")]),
            Err(RuntimeError::TypeError(_))
        );
    }

    #[test]
    fn test_num_eq_is_raw_equality() {
        assert_eq!(num_eq(&[num(1.0), num(1.0)]), Ok(Value::Bool(true)));
        assert_eq!(
            num_eq(&[Value::string("a"), Value::string("a")]),
            Ok(Value::Bool(true))
        );
        assert_eq!(
            num_eq(&[num(1.0), Value::string("1")]),
            Ok(Value::Bool(false))
        );
    }

    #[quickcheck]
    fn add_is_numeric_sum(a: f64, b: f64) -> bool {
        let expected = a + b;
        match add(&[num(a), num(b)]) {
            Ok(Value::Number(n)) => n == expected || (n.is_nan() && expected.is_nan()),
            _ => false,
        }
    }
}
