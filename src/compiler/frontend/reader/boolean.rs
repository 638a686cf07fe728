use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::combinator::{map, peek, value};
use nom::sequence::terminated;

use super::whitespace::parse_delimiter;
use super::{Input, ParseResult};
use crate::vm::value::Value;

/// Boolean parser
///
/// ```grammar
/// <BOOLEAN> -> #t | #f | #true | #false
/// ```
pub fn parse(input: Input) -> ParseResult<Value> {
    let bool_literal = alt((
        value(true, tag("#true")),
        value(false, tag("#false")),
        value(true, tag("#t")),
        value(false, tag("#f")),
    ));

    map(terminated(bool_literal, peek(parse_delimiter)), Value::boolean)(input)
}
