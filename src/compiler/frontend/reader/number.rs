use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{char, digit0, digit1, one_of};
use nom::combinator::{map, map_res, opt, peek, recognize, value};
use nom::sequence::{pair, terminated, tuple};

use super::whitespace::parse_delimiter;
use super::{Input, ParseResult};
use crate::vm::value::Value;

// Numbers are all flonums.
//
// <number>  -> <decimal> | <infnan>
// <decimal> -> <sign> <digit>+ (. <digit>*)? <suffix>
//            | <sign> . <digit>+ <suffix>
// <suffix>  -> <empty> | e <sign> <digit>+
// <infnan>  -> +inf.0 | -inf.0 | +nan.0 | -nan.0
//
// A number has to end at a delimiter, so `1+` is not read as `1`
// followed by the symbol `+`.

pub fn parse(input: Input) -> ParseResult<Value> {
    let number = alt((parse_inf_nan, parse_decimal));

    map(terminated(number, peek(parse_delimiter)), Value::number)(input)
}

fn parse_decimal(input: Input) -> ParseResult<f64> {
    let mantissa = alt((
        recognize(pair(digit1, opt(pair(char('.'), digit0)))),
        recognize(pair(char('.'), digit1)),
    ));
    let suffix = opt(tuple((one_of("eE"), opt(one_of("+-")), digit1)));
    let decimal = recognize(tuple((opt(one_of("+-")), mantissa, suffix)));

    map_res(decimal, |s: Input| s.fragment().parse::<f64>())(input)
}

fn parse_inf_nan(input: Input) -> ParseResult<f64> {
    alt((
        value(f64::INFINITY, tag("+inf.0")),
        value(f64::NEG_INFINITY, tag("-inf.0")),
        value(f64::NAN, tag("+nan.0")),
        value(f64::NAN, tag("-nan.0")),
    ))(input)
}
