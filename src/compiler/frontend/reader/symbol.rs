use nom::branch::alt;
use nom::bytes::complete::{is_not, tag};
use nom::character::complete::{char, one_of, satisfy};
use nom::combinator::{cut, map, opt, recognize, value};
use nom::multi::{fold_many0, many0};
use nom::sequence::{delimited, pair};

use super::{Input, ParseResult};
use crate::vm::value::Value;

//////////////////////////////////////////
// Identifier / Symbol
/////////////////////////////////////////

pub const SYMBOL_SPECIAL_INITIAL: &str = "!$%&*/:<=>?^_~";
pub const SYMBOL_SPECIAL_SUBSEQUENT: &str = "+-.@";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SymbolElement<'a> {
    Literal(&'a str),
    EscapedChar(char),
}

/// ```grammar
/// <identifier> -> <initial> <subsequent>*
///               | | <symbol element>* |
///               | <peculiar identifier>
/// ```
pub fn parse(input: Input) -> ParseResult<Value> {
    let symbol_literal = alt((
        parse_identifier,
        parse_delimited_identifier,
        parse_peculiar_identifier,
    ));

    map(symbol_literal, Value::symbol)(input)
}

#[inline]
fn parse_identifier(input: Input) -> ParseResult<String> {
    let identifier = recognize(pair(parse_initial, many0(parse_subsequent)));

    map(identifier, |s: Input| s.fragment().to_string())(input)
}

/// ```grammar
/// <peculiar identifier> -> <explicit sign>
///                        | <explicit sign> <sign subsequent> <subsequent>*
///                        | ...
/// ```
#[inline]
fn parse_peculiar_identifier(input: Input) -> ParseResult<String> {
    let with_sign = recognize(pair(
        one_of("+-"),
        opt(pair(parse_sign_subsequent, many0(parse_subsequent))),
    ));
    let peculiar = alt((tag("..."), with_sign));

    map(peculiar, |s: Input| s.fragment().to_string())(input)
}

#[inline]
fn parse_initial(input: Input) -> ParseResult<char> {
    alt((
        satisfy(|c| c.is_alphabetic()),
        one_of(SYMBOL_SPECIAL_INITIAL),
    ))(input)
}

#[inline]
fn parse_subsequent(input: Input) -> ParseResult<char> {
    alt((
        parse_initial,
        satisfy(|c| c.is_ascii_digit()),
        one_of(SYMBOL_SPECIAL_SUBSEQUENT),
    ))(input)
}

#[inline]
fn parse_sign_subsequent(input: Input) -> ParseResult<char> {
    alt((parse_initial, one_of("+-@")))(input)
}

#[inline]
fn parse_delimited_identifier(input: Input) -> ParseResult<String> {
    let symbol_elements = fold_many0(
        parse_symbol_element,
        String::new(),
        |mut string, element| {
            match element {
                SymbolElement::Literal(s) => string.push_str(s),
                SymbolElement::EscapedChar(c) => string.push(c),
            }
            string
        },
    );

    delimited(char('|'), symbol_elements, cut(char('|')))(input)
}

#[inline]
fn parse_symbol_element(input: Input) -> ParseResult<SymbolElement> {
    let parse_symbol_escape = alt((value('|', tag("\\|")), value('\\', tag("\\\\"))));

    alt((
        map(parse_symbol_escape, SymbolElement::EscapedChar),
        map(parse_symbol_literal, SymbolElement::Literal),
    ))(input)
}

#[inline]
fn parse_symbol_literal(input: Input) -> ParseResult<&str> {
    let (s, v) = is_not("|\\")(input)?;

    Ok((s, *v.fragment()))
}
