use log::trace;

use crate::{
    alignment_matrix::{AlignmentMatrix, index::AlignmentMatrixIndex},
    alignment_result::GAP_CHARACTER,
    score::Score,
};

/// A single move of the traceback, named after the matrix neighbour it moves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TracebackStep {
    /// Consumes a subject character and aligns it to a gap.
    Left,
    /// Consumes one character of each sequence.
    Diagonal,
    /// Consumes a query character and aligns it to a gap.
    Up,
}

/// Builds the aligned strings column by column, from the end towards the start.
pub struct Reconstructor<'sequences> {
    query: &'sequences [char],
    subject: &'sequences [char],
    reversed_query: Vec<char>,
    reversed_subject: Vec<char>,
}

/// The aligned core of an alignment, as recovered from the matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Traceback {
    pub aligned_query: String,
    pub aligned_subject: String,
    /// The cell where the traceback stopped.
    pub start: AlignmentMatrixIndex,
    /// The cell where the traceback started.
    pub end: AlignmentMatrixIndex,
}

impl<'sequences> Reconstructor<'sequences> {
    pub fn new(query: &'sequences [char], subject: &'sequences [char]) -> Self {
        Self {
            query,
            subject,
            reversed_query: Vec::new(),
            reversed_subject: Vec::new(),
        }
    }

    /// Emits the column of `step` ending at `cursor` and moves the cursor to the predecessor.
    pub fn step(&mut self, cursor: &mut AlignmentMatrixIndex, step: TracebackStep) {
        let (query_character, subject_character) = match step {
            TracebackStep::Left => (GAP_CHARACTER, self.subject[cursor.subject_index() - 1]),
            TracebackStep::Diagonal => (
                self.query[cursor.query_index() - 1],
                self.subject[cursor.subject_index() - 1],
            ),
            TracebackStep::Up => (self.query[cursor.query_index() - 1], GAP_CHARACTER),
        };
        self.reversed_query.push(query_character);
        self.reversed_subject.push(subject_character);

        *cursor = cursor.predecessor(step);
    }

    pub(crate) fn len(&self) -> usize {
        self.reversed_query.len()
    }

    /// Returns the aligned query and subject in reading order.
    pub fn finish(self) -> (String, String) {
        (
            self.reversed_query.into_iter().rev().collect(),
            self.reversed_subject.into_iter().rev().collect(),
        )
    }
}

/// Walks back from `end` along the lanes that produced its score, until `stop` holds.
///
/// `stop` receives the score of the current lane and the current cell.
/// The first lane is chosen from the flags of `end`, so a cell without flags yields an empty traceback.
/// Every further lane is the one its successor was computed from,
/// which makes the emitted columns score exactly the score of the first lane.
pub fn traceback(
    matrix: &AlignmentMatrix,
    query: &[char],
    subject: &[char],
    end: AlignmentMatrixIndex,
    stop: impl Fn(Score, AlignmentMatrixIndex) -> bool,
) -> Traceback {
    let mut reconstructor = Reconstructor::new(query, subject);
    let mut cursor = end;
    let mut lane = matrix.cell(end).traceback_step();

    while let Some(step) = lane {
        if stop(matrix.cell(cursor).lane_score(step), cursor) {
            break;
        }

        trace!("Traceback {step:?} from {cursor}");
        lane = matrix.predecessor_lane(cursor, step, query, subject);
        debug_assert!(lane.is_some(), "no predecessor lane for {step:?} at {cursor}");
        reconstructor.step(&mut cursor, step);
        debug_assert!(reconstructor.len() <= query.len() + subject.len());
    }

    trace!(
        "Traceback of {} columns stopped at {cursor}",
        reconstructor.len()
    );
    let (aligned_query, aligned_subject) = reconstructor.finish();

    Traceback {
        aligned_query,
        aligned_subject,
        start: cursor,
        end,
    }
}
