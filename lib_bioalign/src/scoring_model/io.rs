use std::io::{Read, Write};

use log::trace;
use nom::{IResult, Parser, character::complete::multispace0, combinator::opt};

use super::ScoringModel;
use crate::{
    error::Result,
    io::{parse_keyword_value, parse_title, translate_nom_error},
};


const MATCH_KEYWORD: &str = "Match";
const MISMATCH_KEYWORD: &str = "Mismatch";
const GAP_OPEN_KEYWORD: &str = "GapOpen";
const GAP_EXTEND_KEYWORD: &str = "GapExtend";

impl ScoringModel {
    /// Reads a scoring model in plain text format.
    ///
    /// The format is an optional `# title` line followed by the four parameters in fixed order:
    ///
    /// ```text
    /// # Default Scoring
    ///
    /// Match 2
    /// Mismatch -3
    /// GapOpen -3
    /// GapExtend -3
    /// ```
    ///
    /// The parsed model is verified before it is returned.
    pub fn read_plain(mut reader: impl Read) -> Result<Self> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;

        let (_, (title, scoring)) = Self::parse_plain(&input).map_err(translate_nom_error)?;
        if let Some(title) = title {
            trace!("Read scoring model '{title}'");
        }

        scoring.verify()?;
        Ok(scoring)
    }

    pub fn write_plain(&self, mut writer: impl Write, title: Option<&str>) -> Result<()> {
        if let Some(title) = title {
            writeln!(writer, "# {title}")?;
            writeln!(writer)?;
        }

        writeln!(writer, "{MATCH_KEYWORD} {}", self.match_score)?;
        writeln!(writer, "{MISMATCH_KEYWORD} {}", self.mismatch_score)?;
        writeln!(writer, "{GAP_OPEN_KEYWORD} {}", self.gap_open_score)?;
        writeln!(writer, "{GAP_EXTEND_KEYWORD} {}", self.gap_extend_score)?;

        Ok(())
    }

    pub(crate) fn parse_plain(input: &str) -> IResult<&str, (Option<&str>, Self)> {
        let (input, title) = opt(parse_title).parse(input)?;
        let (input, match_score) = parse_keyword_value(MATCH_KEYWORD, input)?;
        let (input, mismatch_score) = parse_keyword_value(MISMATCH_KEYWORD, input)?;
        let (input, gap_open_score) = parse_keyword_value(GAP_OPEN_KEYWORD, input)?;
        let (input, gap_extend_score) = parse_keyword_value(GAP_EXTEND_KEYWORD, input)?;
        let input = multispace0(input)?.0;

        if !input.is_empty() {
            return Err(nom::Err::Failure(nom::error::Error {
                input,
                code: nom::error::ErrorKind::Eof,
            }));
        }

        Ok((
            input,
            (
                title,
                Self {
                    match_score,
                    mismatch_score,
                    gap_open_score,
                    gap_extend_score,
                },
            ),
        ))
    }
}
