use std::iter;

use log::debug;
use num_traits::Zero;

use crate::{
    alignment_matrix::AlignmentMatrix,
    alignment_result::{AlignmentResult, FILLER_CHARACTER},
    error::Result,
    score::Score,
    scoring_model::ScoringModel,
    traceback::traceback,
};

use super::{Aligner, AlignmentMode};

/// Smith-Waterman alignment with affine gaps.
///
/// The result keeps the unaligned flanks of both sequences around the aligned core.
/// The shorter leading flank is padded on its left and the shorter trailing flank on its right,
/// so that the core columns line up.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalAligner;

impl Aligner for LocalAligner {
    fn mode(&self) -> AlignmentMode {
        AlignmentMode::Local
    }

    fn align(
        &self,
        query: &str,
        subject: &str,
        scoring: &ScoringModel,
    ) -> Result<AlignmentResult> {
        scoring.verify()?;

        let query: Vec<_> = query.chars().collect();
        let subject: Vec<_> = subject.chars().collect();
        let mut matrix =
            AlignmentMatrix::new(self.mode(), *scoring, query.len(), subject.len());
        let score = matrix.align(&query, &subject);

        let end = matrix.max_index();
        debug!("Starting local traceback at {end} with score {score}");
        let traceback = traceback(&matrix, &query, &subject, end, |lane_score, _| {
            lane_score == Score::zero()
        });

        let query_range = traceback.start.query_index()..end.query_index();
        let subject_range = traceback.start.subject_index()..end.subject_index();
        let leading_length = query_range.start.max(subject_range.start);
        let trailing_length = (query.len() - query_range.end).max(subject.len() - subject_range.end);
        let core_length = traceback.aligned_query.chars().count();

        Ok(AlignmentResult {
            mode: self.mode(),
            aligned_query: with_flanks(
                &query,
                &query_range,
                &traceback.aligned_query,
                leading_length,
                trailing_length,
            ),
            aligned_subject: with_flanks(
                &subject,
                &subject_range,
                &traceback.aligned_subject,
                leading_length,
                trailing_length,
            ),
            score,
            query_range,
            subject_range,
            core_columns: leading_length..leading_length + core_length,
        })
    }
}

fn with_flanks(
    sequence: &[char],
    core_range: &std::ops::Range<usize>,
    aligned_core: &str,
    leading_length: usize,
    trailing_length: usize,
) -> String {
    let prefix = &sequence[..core_range.start];
    let suffix = &sequence[core_range.end..];

    iter::repeat_n(FILLER_CHARACTER, leading_length - prefix.len())
        .chain(prefix.iter().copied())
        .chain(aligned_core.chars())
        .chain(suffix.iter().copied())
        .chain(iter::repeat_n(
            FILLER_CHARACTER,
            trailing_length - suffix.len(),
        ))
        .collect()
}
