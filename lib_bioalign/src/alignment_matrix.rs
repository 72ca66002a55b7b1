use cell::Cell;
use index::{
    AlignmentMatrixIndex,
    iterators::{AlignmentMatrixEdgeIterator, AlignmentMatrixInnerIterator, Axis},
};
use log::debug;
use ndarray::Array2;

use crate::{
    aligner::AlignmentMode, score::Score, scoring_model::ScoringModel, traceback::TracebackStep,
};

pub mod cell;
pub mod index;

/// The dynamic programming matrix of one alignment call.
///
/// It has `query.len() + 1` rows and `subject.len() + 1` columns.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignmentMatrix {
    matrix: Array2<Cell>,
    scoring: ScoringModel,
    mode: AlignmentMode,
    /// The first cell in fill order that holds the maximum score.
    max_index: AlignmentMatrixIndex,
}

impl AlignmentMatrix {
    /// The scoring model is expected to be verified.
    pub fn new(
        mode: AlignmentMode,
        scoring: ScoringModel,
        query_length: usize,
        subject_length: usize,
    ) -> Self {
        debug_assert!(scoring.verify().is_ok());

        Self {
            matrix: Array2::default((query_length + 1, subject_length + 1)),
            scoring,
            mode,
            max_index: AlignmentMatrixIndex::new(0, 0),
        }
    }

    pub fn rows(&self) -> usize {
        self.matrix.dim().0
    }

    pub fn columns(&self) -> usize {
        self.matrix.dim().1
    }

    pub fn cell(&self, index: AlignmentMatrixIndex) -> &Cell {
        &self.matrix[index]
    }

    pub fn last_index(&self) -> AlignmentMatrixIndex {
        AlignmentMatrixIndex::new(self.rows() - 1, self.columns() - 1)
    }

    pub fn max_index(&self) -> AlignmentMatrixIndex {
        self.max_index
    }

    /// Iterates over the cells of a column.
    pub fn query_index_iter(&self, subject_index: usize) -> AlignmentMatrixEdgeIterator {
        AlignmentMatrixEdgeIterator::new(Axis::Query, subject_index, self.rows())
    }

    /// Iterates over the cells of a row.
    pub fn subject_index_iter(&self, query_index: usize) -> AlignmentMatrixEdgeIterator {
        AlignmentMatrixEdgeIterator::new(Axis::Subject, query_index, self.columns())
    }

    pub fn inner_index_iter(&self) -> AlignmentMatrixInnerIterator {
        AlignmentMatrixInnerIterator::new(AlignmentMatrixIndex::new(self.rows(), self.columns()))
    }

    /// Fills the whole matrix and returns the score of the terminal cell of the alignment mode.
    ///
    /// For global alignments this is the bottom-right cell, for local alignments the maximum cell.
    pub fn align(&mut self, query: &[char], subject: &[char]) -> Score {
        debug_assert_eq!(query.len() + 1, self.rows());
        debug_assert_eq!(subject.len() + 1, self.columns());
        debug!(
            "Filling {}x{} {} alignment matrix",
            self.rows(),
            self.columns(),
            self.mode
        );

        self.initialise();
        self.align_inner(query, subject);

        match self.mode {
            AlignmentMode::Global => self.matrix[self.last_index()].score,
            AlignmentMode::Local => self.matrix[self.max_index].score,
        }
    }

    fn initialise(&mut self) {
        self.max_index = AlignmentMatrixIndex::new(0, 0);

        match self.mode {
            AlignmentMode::Global => {
                self.matrix[[0, 0]] = Cell::origin();

                // Edges are a single gap starting at the origin.
                // They follow the gap recurrence, so the traceback can recompute every edge lane exactly.
                for index in self.query_index_iter(0).skip(1) {
                    let up_score = self.compute_up_score(index);
                    self.matrix[index] = Cell {
                        up_score,
                        score: up_score,
                        came_from_up: true,
                        ..Default::default()
                    };
                }
                for index in self.subject_index_iter(0).skip(1) {
                    let left_score = self.compute_left_score(index);
                    self.matrix[index] = Cell {
                        left_score,
                        score: left_score,
                        came_from_left: true,
                        ..Default::default()
                    };
                }
            }
            AlignmentMode::Local => {
                for index in self.query_index_iter(0) {
                    self.matrix[index] = Cell::reset_point();
                }
                for index in self.subject_index_iter(0) {
                    self.matrix[index] = Cell::reset_point();
                }
            }
        }
    }

    fn align_inner(&mut self, query: &[char], subject: &[char]) {
        for index in self.inner_index_iter() {
            self.set_max_score(index, query, subject);

            if self.matrix[index].score > self.matrix[self.max_index].score {
                self.max_index = index;
            }
        }
    }

    fn set_max_score(&mut self, index: AlignmentMatrixIndex, query: &[char], subject: &[char]) {
        let mut cell = Cell {
            match_score: self.compute_match_or_mismatch_score(index, query, subject),
            up_score: self.compute_up_score(index),
            left_score: self.compute_left_score(index),
            ..Default::default()
        };

        match self.mode {
            AlignmentMode::Global => cell.resolve(),
            AlignmentMode::Local => cell.resolve_with_zero_floor(),
        }

        self.matrix[index] = cell;
    }

    fn compute_up_score(&self, index: AlignmentMatrixIndex) -> Score {
        let predecessor = &self.matrix[index.up_predecessor()];

        (predecessor.match_score + self.scoring.gap_open_score())
            .max(predecessor.up_score + self.scoring.gap_extend_score())
    }

    fn compute_left_score(&self, index: AlignmentMatrixIndex) -> Score {
        let predecessor = &self.matrix[index.left_predecessor()];

        (predecessor.match_score + self.scoring.gap_open_score())
            .max(predecessor.left_score + self.scoring.gap_extend_score())
    }

    fn compute_match_or_mismatch_score(
        &self,
        index: AlignmentMatrixIndex,
        query: &[char],
        subject: &[char],
    ) -> Score {
        let predecessor = &self.matrix[index.diagonal_predecessor()];
        let predecessor_score = predecessor
            .match_score
            .max(predecessor.up_score)
            .max(predecessor.left_score);

        predecessor_score
            + self
                .scoring
                .match_or_mismatch_score(query[index.query_index - 1], subject[index.subject_index - 1])
    }

    /// The lane of the predecessor of `index` from which the `lane` score of `index` was computed.
    ///
    /// Gap lanes prefer opening the gap over extending it.
    /// The match lane prefers the predecessor lanes in the order left, diagonal, up.
    pub fn predecessor_lane(
        &self,
        index: AlignmentMatrixIndex,
        lane: TracebackStep,
        query: &[char],
        subject: &[char],
    ) -> Option<TracebackStep> {
        let score = self.matrix[index].lane_score(lane);

        match lane {
            TracebackStep::Up => {
                let predecessor = &self.matrix[index.up_predecessor()];
                if predecessor.match_score + self.scoring.gap_open_score() == score {
                    Some(TracebackStep::Diagonal)
                } else if predecessor.up_score + self.scoring.gap_extend_score() == score {
                    Some(TracebackStep::Up)
                } else {
                    None
                }
            }
            TracebackStep::Left => {
                let predecessor = &self.matrix[index.left_predecessor()];
                if predecessor.match_score + self.scoring.gap_open_score() == score {
                    Some(TracebackStep::Diagonal)
                } else if predecessor.left_score + self.scoring.gap_extend_score() == score {
                    Some(TracebackStep::Left)
                } else {
                    None
                }
            }
            TracebackStep::Diagonal => {
                let predecessor = &self.matrix[index.diagonal_predecessor()];
                let match_or_mismatch_score = self.scoring.match_or_mismatch_score(
                    query[index.query_index - 1],
                    subject[index.subject_index - 1],
                );

                [
                    TracebackStep::Left,
                    TracebackStep::Diagonal,
                    TracebackStep::Up,
                ]
                .into_iter()
                .find(|&predecessor_lane| {
                    predecessor.lane_score(predecessor_lane) + match_or_mismatch_score == score
                })
            }
        }
    }

    #[cfg(test)]
    fn scores(&self) -> Vec<Vec<f64>> {
        self.matrix
            .rows()
            .into_iter()
            .map(|row| row.iter().map(|cell| cell.score.as_f64()).collect())
            .collect()
    }
}

impl core::fmt::Display for AlignmentMatrix {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut score_column_widths = vec![0; self.columns()];
        for row in self.matrix.rows() {
            for (cell, score_column_width) in row.iter().zip(score_column_widths.iter_mut()) {
                *score_column_width = cell.score.to_string().len().max(*score_column_width);
            }
        }

        for row in self.matrix.rows() {
            write!(f, "[ ")?;
            for (cell, score_column_width) in row.iter().zip(&score_column_widths) {
                write!(
                    f,
                    "{: >width$}{}{}{} ",
                    cell.score.to_string(),
                    if cell.came_from_left { "L" } else { "." },
                    if cell.came_from_diagonal { "D" } else { "." },
                    if cell.came_from_up { "U" } else { "." },
                    width = *score_column_width,
                )?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        aligner::AlignmentMode, score::Score, scoring_model::ScoringModel, traceback::TracebackStep,
    };

    use super::{AlignmentMatrix, index::AlignmentMatrixIndex};

    fn chars(sequence: &str) -> Vec<char> {
        sequence.chars().collect()
    }

    fn fill(
        mode: AlignmentMode,
        scoring: ScoringModel,
        query: &str,
        subject: &str,
    ) -> (AlignmentMatrix, Score) {
        let query = chars(query);
        let subject = chars(subject);
        let mut matrix = AlignmentMatrix::new(mode, scoring, query.len(), subject.len());
        let score = matrix.align(&query, &subject);
        (matrix, score)
    }

    #[test]
    fn global_edges_pay_the_gap_opening_once() {
        let scoring = ScoringModel::new(2.0, -3.0, -5.0, -1.0).unwrap();
        let (matrix, _) = fill(AlignmentMode::Global, scoring, "AAA", "AA");

        assert_eq!(
            matrix.scores()[0],
            vec![0.0, -5.0, -6.0],
            "matrix:\n{matrix}"
        );
        assert_eq!(
            matrix.scores().iter().map(|row| row[0]).collect::<Vec<_>>(),
            vec![0.0, -5.0, -6.0, -7.0],
            "matrix:\n{matrix}"
        );
        assert!(matrix.cell(AlignmentMatrixIndex::new(3, 0)).came_from_up);
        assert!(matrix.cell(AlignmentMatrixIndex::new(0, 2)).came_from_left);
        assert!(!matrix.cell(AlignmentMatrixIndex::new(0, 0)).has_predecessor());
    }

    #[test]
    fn global_scores() {
        let (matrix, score) = fill(AlignmentMode::Global, ScoringModel::default(), "ACG", "AG");
        assert_eq!(score, Score::new(1.0), "matrix:\n{matrix}");
        assert_eq!(
            matrix.scores(),
            vec![
                vec![0.0, -3.0, -6.0],
                vec![-3.0, 2.0, -1.0],
                vec![-6.0, -1.0, -1.0],
                vec![-9.0, -4.0, 1.0],
            ],
            "matrix:\n{matrix}"
        );
    }

    #[test]
    fn gap_extension_uses_its_own_lane() {
        // Two separate gaps cost 2 * -5, one long gap -5 + -1.
        let scoring = ScoringModel::new(2.0, -3.0, -5.0, -1.0).unwrap();
        let (matrix, score) = fill(AlignmentMode::Global, scoring, "ACGT", "AT");
        assert_eq!(score, Score::new(-2.0), "matrix:\n{matrix}");

        let cell = matrix.cell(AlignmentMatrixIndex::new(3, 1));
        assert_eq!(cell.up_score, Score::new(-4.0), "matrix:\n{matrix}");
        assert!(cell.came_from_up);

        let query = chars("ACGT");
        let subject = chars("AT");
        let lane = |query_index, subject_index, lane| {
            matrix.predecessor_lane(
                AlignmentMatrixIndex::new(query_index, subject_index),
                lane,
                &query,
                &subject,
            )
        };
        // The gap of (3, 1) is extended from (2, 1), which opened it after the A/A column.
        assert_eq!(lane(3, 1, TracebackStep::Up), Some(TracebackStep::Up));
        assert_eq!(lane(2, 1, TracebackStep::Up), Some(TracebackStep::Diagonal));
        assert_eq!(lane(4, 2, TracebackStep::Diagonal), Some(TracebackStep::Up));
        assert_eq!(lane(1, 1, TracebackStep::Diagonal), Some(TracebackStep::Diagonal));
        assert_eq!(lane(0, 2, TracebackStep::Left), Some(TracebackStep::Left));
        assert_eq!(lane(0, 1, TracebackStep::Left), Some(TracebackStep::Diagonal));
    }

    #[test]
    fn local_scores_never_drop_below_zero() {
        let (matrix, score) = fill(AlignmentMode::Local, ScoringModel::default(), "XAC", "YAC");
        assert_eq!(score, Score::new(4.0), "matrix:\n{matrix}");
        assert_eq!(matrix.max_index(), AlignmentMatrixIndex::new(3, 3));
        assert!(
            matrix
                .scores()
                .iter()
                .flatten()
                .all(|&score| score >= 0.0),
            "matrix:\n{matrix}"
        );
        assert!(!matrix.cell(AlignmentMatrixIndex::new(1, 1)).has_predecessor());
    }

    #[test]
    fn local_maximum_prefers_first_cell_in_fill_order() {
        let (matrix, score) = fill(AlignmentMode::Local, ScoringModel::default(), "AC", "CA");
        assert_eq!(score, Score::new(2.0), "matrix:\n{matrix}");
        // (1, 2) is A/A, (2, 1) is C/C. Row 1 is filled first.
        assert_eq!(matrix.max_index(), AlignmentMatrixIndex::new(1, 2));
    }

    #[test]
    fn local_without_positive_cell() {
        let (matrix, score) = fill(AlignmentMode::Local, ScoringModel::default(), "AAA", "CC");
        assert_eq!(score, Score::new(0.0));
        assert_eq!(matrix.max_index(), AlignmentMatrixIndex::new(0, 0));
    }

    #[test]
    fn empty_sequences() {
        let (matrix, score) = fill(AlignmentMode::Global, ScoringModel::default(), "", "ACG");
        assert_eq!(score, Score::new(-9.0), "matrix:\n{matrix}");
        assert_eq!(matrix.rows(), 1);

        let (_, score) = fill(AlignmentMode::Global, ScoringModel::default(), "", "");
        assert_eq!(score, Score::new(0.0));

        let (_, score) = fill(AlignmentMode::Local, ScoringModel::default(), "ACG", "");
        assert_eq!(score, Score::new(0.0));
    }
}
