use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{char, multispace1, not_line_ending, one_of};
use nom::combinator::eof;
use nom::error::context;
use nom::multi::many0;
use nom::sequence::{pair, preceded};

use super::{parse_datum, unit, Input, ParseResult};

/// Characters that end a number or boolean token
pub const DELIMITERS: &str = " \t\r\n()\";'";

#[inline]
pub fn parse_inter_token_space(input: Input) -> ParseResult<()> {
    let atmosphere = alt((parse_white_space, parse_comment));
    unit(many0(atmosphere))(input)
}

#[inline]
pub fn parse_white_space(input: Input) -> ParseResult<()> {
    unit(multispace1)(input)
}

#[inline]
pub fn parse_comment(input: Input) -> ParseResult<()> {
    context(
        "comment",
        alt((parse_line_comment, parse_datum_comment)),
    )(input)
}

#[inline]
fn parse_line_comment(input: Input) -> ParseResult<()> {
    unit(pair(char(';'), not_line_ending))(input)
}

#[inline]
fn parse_datum_comment(input: Input) -> ParseResult<()> {
    unit(preceded(tag("#;"), parse_datum))(input)
}

/// A single delimiter character or the end of input. Use with `peek`.
#[inline]
pub fn parse_delimiter(input: Input) -> ParseResult<()> {
    alt((unit(one_of(DELIMITERS)), unit(eof)))(input)
}
