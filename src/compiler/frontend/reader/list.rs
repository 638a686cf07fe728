use nom::character::complete::char;
use nom::combinator::{cut, map, opt, peek, verify};
use nom::multi::many0;
use nom::sequence::{delimited, pair, preceded, terminated};

use super::whitespace::{parse_delimiter, parse_inter_token_space};
use super::{parse_datum, Input, ParseResult};
use crate::vm::value::{list, Value};

/// Parse proper and improper lists
///
/// ```grammar
/// <list> -> (<datum>*)  | (<datum>+ . <datum>)
/// ```
///
/// Both shapes share the prefix, so the elements are read once and the
/// optional dotted tail decides the shape.
pub fn parse(input: Input) -> ParseResult<Value> {
    let dot = terminated(char('.'), peek(parse_delimiter));
    let tail = preceded(pair(parse_inter_token_space, dot), cut(parse_datum));
    let elements = verify(
        pair(many0(parse_datum), opt(tail)),
        |(head, tail): &(Vec<Value>, Option<Value>)| {
            !(head.is_empty() && tail.is_some())
        },
    );
    let close = preceded(parse_inter_token_space, cut(char(')')));

    map(delimited(char('('), elements, close), build_list)(input)
}

fn build_list((head, tail): (Vec<Value>, Option<Value>)) -> Value {
    match tail {
        Some(tail) => list::improper_list(head, tail),
        None => list::proper_list(head),
    }
}
