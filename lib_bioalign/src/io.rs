use nom::{
    IResult, Parser,
    bytes::complete::{tag, take_till1},
    character::complete::{char, multispace0, space0, space1},
    number::complete::double,
};

use crate::error::Error;

/// Parses a `# title` line, possibly preceded by empty lines.
pub fn parse_title(input: &str) -> IResult<&str, &str> {
    let input = multispace0(input)?.0;
    let input = char('#').parse(input)?.0;
    let input = space0(input)?.0;
    let (input, title) = take_till1(is_line_break).parse(input)?;
    Ok((input, title.trim()))
}

/// Parses a line of the form `<keyword> <number>`, possibly preceded by empty lines.
pub fn parse_keyword_value<'input>(
    keyword: &'static str,
    input: &'input str,
) -> IResult<&'input str, f64> {
    let input = multispace0(input)?.0;
    let input = tag(keyword).parse(input)?.0;
    let input = space1(input)?.0;
    double(input)
}

fn is_line_break(c: char) -> bool {
    c == '\n' || c == '\r'
}

pub fn translate_nom_error(error: nom::Err<nom::error::Error<&str>>) -> Error {
    match error {
        nom::Err::Incomplete(needed) => Error::ParserIncomplete(needed),
        nom::Err::Error(error) | nom::Err::Failure(error) => Error::Parser {
            input: error.input.to_string(),
            kind: error.code,
        },
    }
}
