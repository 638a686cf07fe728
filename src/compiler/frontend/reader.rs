// S-expression reader
//
// The reader turns program text into data. There is no separate datum type:
// what the reader produces are ordinary values, the same ones a quoted
// literal evaluates to.

pub mod abbreviation;
pub mod boolean;
pub mod list;
pub mod number;
pub mod string;
pub mod symbol;
pub mod whitespace;

use crate::compiler::error::Error;
use crate::vm::value::Value;
use nom::branch::alt;
use nom::combinator::{all_consuming, value};
use nom::error::{context, VerboseError};
use nom::multi::many0;
use nom::sequence::{preceded, terminated};
use nom::IResult;
use nom_locate::LocatedSpan;

pub type Input<'a> = LocatedSpan<&'a str>;

pub type ParseResult<'a, T> = IResult<Input<'a>, T, VerboseError<Input<'a>>>;

/// Read a single datum, skipping leading whitespace and comments
pub fn parse_datum(input: Input) -> ParseResult<Value> {
    let datum = context("datum", alt((parse_simple_datum, parse_compound_datum)));
    preceded(whitespace::parse_inter_token_space, datum)(input)
}

#[inline]
fn parse_simple_datum(input: Input) -> ParseResult<Value> {
    context(
        "simple datum",
        alt((
            context("number", number::parse),
            context("boolean", boolean::parse),
            context("symbol", symbol::parse),
            context("string", string::parse),
        )),
    )(input)
}

#[inline]
fn parse_compound_datum(input: Input) -> ParseResult<Value> {
    context(
        "compound datum",
        alt((
            context("list", list::parse),
            context("abbreviation", abbreviation::parse),
        )),
    )(input)
}

#[inline]
pub fn unit<'a, O, F>(parser: F) -> impl FnMut(Input<'a>) -> ParseResult<'a, ()>
where
    F: FnMut(Input<'a>) -> ParseResult<'a, O>,
{
    value((), parser)
}

/// Read all data in `text`. Anything that is not a datum, whitespace or a
/// comment is an error.
pub fn parse_sequence(text: &str) -> std::result::Result<Vec<Value>, Error> {
    let data = terminated(many0(parse_datum), whitespace::parse_inter_token_space);
    let (_, data) = context("program", all_consuming(data))(Input::new(text))?;

    log::trace!("read {} datum(s)", data.len());
    Ok(data)
}

/// Read exactly one datum
pub fn parse(text: &str) -> std::result::Result<Value, Error> {
    let data = parse_sequence(text)?;

    match &data[..] {
        [datum] => Ok(datum.clone()),
        [] => Err(Error::IncompleteInput),
        _ => Err(Error::parse_error(format!(
            "Expected a single datum but found {}",
            data.len()
        ))),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub fn assert_parse_as(inp: &str, expected: Value) {
        let (rest, actual) = parse_datum(Input::new(inp)).unwrap();

        assert!(
            rest.fragment().trim().is_empty(),
            "expected whole input to be parsed, leftover: {:?}",
            rest.fragment()
        );
        assert_eq!(actual, expected);
    }

    pub fn assert_parse_error(inp: &str) {
        assert!(parse_sequence(inp).is_err(), "expected {:?} not to parse", inp)
    }

    #[test]
    fn test_parse_sequence() {
        let data = parse_sequence("(define x 1) ; one\n (+ x 2)\n").unwrap();

        assert_eq!(data.len(), 2);
        assert_eq!(data[1].to_string(), "(+ x 2)");
    }

    #[test]
    fn test_parse_sequence_empty() {
        assert_eq!(parse_sequence("   ; nothing here\n").unwrap(), vec![]);
    }

    #[test]
    fn test_parse_sequence_rejects_garbage() {
        assert_matches!(parse_sequence("(+ 1 2) )"), Err(Error::ReadError(_)));
    }

    #[test]
    fn test_unterminated_list_is_incomplete() {
        assert_matches!(parse_sequence("(+ 1 (* 2"), Err(Error::IncompleteInput));
    }

    #[test]
    fn test_parse_single() {
        assert_eq!(parse("  foo ").unwrap(), Value::symbol("foo"));
        assert_matches!(parse("a b"), Err(Error::ParseError(_)));
    }
}
