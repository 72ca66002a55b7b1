use log::debug;

use crate::{
    alignment_matrix::AlignmentMatrix, alignment_result::AlignmentResult, error::Result,
    scoring_model::ScoringModel, traceback::traceback,
};

use super::{Aligner, AlignmentMode};

/// Needleman-Wunsch alignment with affine gaps.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalAligner;

impl Aligner for GlobalAligner {
    fn mode(&self) -> AlignmentMode {
        AlignmentMode::Global
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

        let end = matrix.last_index();
        debug!("Starting global traceback at {end} with score {score}");
        let traceback = traceback(&matrix, &query, &subject, end, |_, index| {
            index.is_origin()
        });
        debug_assert!(traceback.start.is_origin());

        let core_columns = 0..traceback.aligned_query.chars().count();
        Ok(AlignmentResult {
            mode: self.mode(),
            aligned_query: traceback.aligned_query,
            aligned_subject: traceback.aligned_subject,
            score,
            query_range: 0..query.len(),
            subject_range: 0..subject.len(),
            core_columns,
        })
    }
}
