use nom::branch::alt;
use nom::bytes::complete::is_not;
use nom::character::complete::char;
use nom::combinator::{cut, map, value};
use nom::error::context;
use nom::multi::fold_many0;
use nom::sequence::{delimited, preceded};

use super::{Input, ParseResult};
use crate::vm::value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StringElement<'a> {
    Literal(&'a str),
    EscapedChar(char),
}

/// A double quoted string. Known escapes are `\"`, `\\`, `\n`, `\t` and `\r`.
pub fn parse(input: Input) -> ParseResult<Value> {
    let string_elements = fold_many0(
        parse_string_element,
        String::new(),
        |mut string, element| {
            match element {
                StringElement::Literal(s) => string.push_str(s),
                StringElement::EscapedChar(c) => string.push(c),
            }
            string
        },
    );

    let string_literal = delimited(char('"'), string_elements, cut(char('"')));

    map(string_literal, Value::String)(input)
}

fn parse_string_element(input: Input) -> ParseResult<StringElement> {
    alt((
        map(parse_string_escape, StringElement::EscapedChar),
        map(parse_string_literal, StringElement::Literal),
    ))(input)
}

fn parse_string_escape(input: Input) -> ParseResult<char> {
    context(
        "escaped character",
        preceded(
            char('\\'),
            alt((
                value('"', char('"')),
                value('\\', char('\\')),
                value('\n', char('n')),
                value('\t', char('t')),
                value('\r', char('r')),
            )),
        ),
    )(input)
}

#[inline]
fn parse_string_literal(input: Input) -> ParseResult<&str> {
    let (s, v) = is_not("\\\"")(input)?;

    Ok((s, *v.fragment()))
}
