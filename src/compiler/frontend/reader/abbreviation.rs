use super::{parse_datum, Input, ParseResult};
use crate::vm::value::Value;
use nom::character::complete::char;
use nom::combinator::{cut, map};
use nom::sequence::preceded;

////////////////////////////
// abbreviation
////////////////////////////

/// `'<datum>` reads as `(quote <datum>)`
#[inline]
pub fn parse(input: Input) -> ParseResult<Value> {
    let abbrev = preceded(char('\''), cut(parse_datum));

    map(abbrev, |datum| {
        Value::proper_list(vec![Value::symbol("quote"), datum])
    })(input)
}
