use super::Value;

/// A cons cell. Pairs are immutable, so a list is always built from the
/// tail towards the head and can never become cyclic.
#[derive(Debug, PartialEq, Clone)]
pub struct Pair {
    car: Value,
    cdr: Value,
}

impl Pair {
    pub fn new(car: Value, cdr: Value) -> Self {
        Self { car, cdr }
    }

    #[inline]
    pub fn car(&self) -> &Value {
        &self.car
    }

    #[inline]
    pub fn cdr(&self) -> &Value {
        &self.cdr
    }
}

/// Fold the elements right to left into a list terminated by the empty list
pub fn proper_list<I>(elements: I) -> Value
where
    I: IntoIterator<Item = Value>,
    I::IntoIter: DoubleEndedIterator,
{
    improper_list(elements, Value::EmptyList)
}

pub fn improper_list<I>(elements: I, tail: Value) -> Value
where
    I: IntoIterator<Item = Value>,
    I::IntoIter: DoubleEndedIterator,
{
    elements
        .into_iter()
        .rev()
        .fold(tail, |tail, head| Value::cons(head, tail))
}

pub fn is_list(v: &Value) -> bool {
    let mut current = v;

    loop {
        match current {
            Value::EmptyList => return true,
            Value::Pair(pair) => current = pair.cdr(),
            _ => return false,
        }
    }
}

/// Iterate over the cars of a pair chain. Iteration stops at the first
/// element that is not a pair, so an improper tail is never yielded.
pub fn iter(v: &Value) -> Iter<'_> {
    Iter { current: v }
}

pub struct Iter<'a> {
    current: &'a Value,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<Self::Item> {
        match self.current {
            Value::Pair(pair) => {
                self.current = pair.cdr();
                Some(pair.car())
            }
            _ => None,
        }
    }
}
