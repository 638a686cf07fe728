use super::Value;
use quickcheck::Arbitrary;

#[derive(Clone, Debug)]
struct SymbolString(String);

impl Arbitrary for Value {
    fn arbitrary(gen: &mut quickcheck::Gen) -> Self {
        match gen.choose(&[1, 2, 3, 4, 5, 6]) {
            Some(1) => Value::number(f64::arbitrary(gen)),
            Some(2) => Value::boolean(bool::arbitrary(gen)),
            Some(3) => Value::string(String::arbitrary(gen)),
            Some(4) => Value::symbol(SymbolString::arbitrary(gen).0),
            Some(5) => Value::cons(
                Value::symbol(SymbolString::arbitrary(gen).0),
                Value::number(f64::arbitrary(gen)),
            ),
            _ => Value::empty_list(),
        }
    }
}

impl Arbitrary for SymbolString {
    fn arbitrary(gen: &mut quickcheck::Gen) -> Self {
        let names = ["a", "b", "key", "foo-bar", "x1", "list->vector"];

        match gen.choose(&names) {
            Some(v) => SymbolString(v.to_string()),
            None => SymbolString("foo".to_owned()),
        }
    }
}
