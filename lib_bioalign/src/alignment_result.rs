use std::{
    fmt::{Display, Formatter, Result, Write},
    ops::Range,
};

use crate::{aligner::AlignmentMode, score::Score};

/// Marks a gap inside the aligned core.
pub const GAP_CHARACTER: char = '-';

/// Pads the shorter unaligned flank of a local alignment. It never marks an alignment gap.
pub const FILLER_CHARACTER: char = '.';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignmentType {
    Match,
    Substitution,
    /// A query character aligned to a gap.
    Insertion,
    /// A subject character aligned to a gap.
    Deletion,
    /// An unaligned column outside of the core of a local alignment.
    Flank,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub struct AlignmentResult {
    pub mode: AlignmentMode,
    pub aligned_query: String,
    pub aligned_subject: String,
    pub score: Score,
    /// The query characters covered by the aligned core.
    pub query_range: Range<usize>,
    /// The subject characters covered by the aligned core.
    pub subject_range: Range<usize>,
    /// The columns of the aligned strings that form the aligned core.
    pub core_columns: Range<usize>,
}

impl AlignmentResult {
    /// The number of columns.
    pub fn len(&self) -> usize {
        self.aligned_query.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.aligned_query.is_empty()
    }

    /// Classifies each column of the alignment.
    pub fn columns(&self) -> impl Iterator<Item = AlignmentType> + '_ {
        self.aligned_query
            .chars()
            .zip(self.aligned_subject.chars())
            .enumerate()
            .map(|(column, (query_character, subject_character))| {
                if !self.core_columns.contains(&column) {
                    AlignmentType::Flank
                } else if query_character == GAP_CHARACTER {
                    AlignmentType::Deletion
                } else if subject_character == GAP_CHARACTER {
                    AlignmentType::Insertion
                } else if query_character == subject_character {
                    AlignmentType::Match
                } else {
                    AlignmentType::Substitution
                }
            })
    }

    pub fn count(&self, alignment_type: AlignmentType) -> usize {
        self.columns()
            .filter(|column| *column == alignment_type)
            .count()
    }

    /// The fraction of core columns that are matches.
    pub fn identity(&self) -> f64 {
        if self.core_columns.is_empty() {
            0.0
        } else {
            self.count(AlignmentType::Match) as f64 / self.core_columns.len() as f64
        }
    }

    /// The run-length encoded core.
    pub fn cigar(&self) -> String {
        let mut result = String::new();
        self.write_cigar(&mut result)
            .unwrap_or_else(|_| unreachable!("writing to a string does not fail"));
        result
    }

    pub fn write_cigar(&self, writer: &mut impl Write) -> Result {
        let mut runs: Vec<(usize, AlignmentType)> = Vec::new();
        for column in self.columns() {
            if column == AlignmentType::Flank {
                continue;
            }

            match runs.last_mut() {
                Some((amount, alignment_type)) if *alignment_type == column => *amount += 1,
                _ => runs.push((1, column)),
            }
        }

        for (amount, alignment_type) in runs {
            write!(writer, "{amount}{alignment_type}")?;
        }

        Ok(())
    }
}

impl Display for AlignmentType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            AlignmentType::Match => write!(f, "M"),
            AlignmentType::Substitution => write!(f, "S"),
            AlignmentType::Insertion => write!(f, "I"),
            AlignmentType::Deletion => write!(f, "D"),
            AlignmentType::Flank => write!(f, "F"),
        }
    }
}

impl Display for AlignmentResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Mode: {}", self.mode)?;
        writeln!(f, "Query:   {}", self.aligned_query)?;
        writeln!(f, "Subject: {}", self.aligned_subject)?;
        write!(f, "CIGAR: ")?;
        self.write_cigar(f)?;
        writeln!(f)?;
        writeln!(
            f,
            "Query range: {}..{}",
            self.query_range.start, self.query_range.end
        )?;
        writeln!(
            f,
            "Subject range: {}..{}",
            self.subject_range.start, self.subject_range.end
        )?;
        writeln!(f, "Identity: {:.2}", self.identity())?;
        write!(f, "Score: {}", self.score)
    }
}
