use std::{fmt::Display, str::FromStr};

use crate::{
    alignment_result::AlignmentResult,
    error::{Error, Result},
    scoring_model::ScoringModel,
};

pub use global::GlobalAligner;
pub use local::LocalAligner;

mod global;
mod local;

/// A pairwise alignment algorithm.
///
/// Implementations share the scoring contract and the shape of [`AlignmentResult`],
/// so an accelerated backend can replace the matrix-based aligners transparently.
pub trait Aligner {
    fn mode(&self) -> AlignmentMode;

    /// Aligns `query` against `subject`.
    ///
    /// Characters are compared exactly, so case and alphabet are the caller's responsibility.
    fn align(&self, query: &str, subject: &str, scoring: &ScoringModel)
    -> Result<AlignmentResult>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AlignmentMode {
    /// Needleman-Wunsch alignment of both sequences end to end.
    Global,
    /// Smith-Waterman alignment of the best scoring pair of substrings.
    Local,
}

impl AlignmentMode {
    pub fn align(
        self,
        query: &str,
        subject: &str,
        scoring: &ScoringModel,
    ) -> Result<AlignmentResult> {
        match self {
            AlignmentMode::Global => GlobalAligner.align(query, subject, scoring),
            AlignmentMode::Local => LocalAligner.align(query, subject, scoring),
        }
    }
}

/// Computes the optimal global alignment of `query` and `subject`.
pub fn align_global(
    query: &str,
    subject: &str,
    scoring: &ScoringModel,
) -> Result<AlignmentResult> {
    GlobalAligner.align(query, subject, scoring)
}

/// Computes the optimal local alignment of `query` and `subject`, keeping the unaligned flanks.
pub fn align_local(query: &str, subject: &str, scoring: &ScoringModel) -> Result<AlignmentResult> {
    LocalAligner.align(query, subject, scoring)
}

impl TryFrom<u8> for AlignmentMode {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            1 => Ok(Self::Global),
            2 => Ok(Self::Local),
            other => Err(Error::UnsupportedAlignmentMode(other)),
        }
    }
}

impl FromStr for AlignmentMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "global" | "1" => Ok(Self::Global),
            "local" | "2" => Ok(Self::Local),
            _ => Err(Error::UnsupportedAlignmentModeName(s.to_string())),
        }
    }
}

impl Display for AlignmentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlignmentMode::Global => write!(f, "global"),
            AlignmentMode::Local => write!(f, "local"),
        }
    }
}
