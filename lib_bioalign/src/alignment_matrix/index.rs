use std::ops::{Index, IndexMut};

use ndarray::Array2;

use crate::traceback::TracebackStep;

pub mod iterators;

/// A position in the alignment matrix.
///
/// Row `i` stands for the first `i` query characters, column `j` for the first `j` subject characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignmentMatrixIndex {
    pub(in crate::alignment_matrix) query_index: usize,
    pub(in crate::alignment_matrix) subject_index: usize,
}

impl AlignmentMatrixIndex {
    pub fn new(query_index: usize, subject_index: usize) -> Self {
        Self {
            query_index,
            subject_index,
        }
    }

    pub fn query_index(&self) -> usize {
        self.query_index
    }

    pub fn subject_index(&self) -> usize {
        self.subject_index
    }

    pub fn is_origin(&self) -> bool {
        self.query_index == 0 && self.subject_index == 0
    }

    /// The predecessor of a vertical move, i.e. a gap in the subject.
    pub fn up_predecessor(&self) -> Self {
        debug_assert!(self.query_index > 0);

        Self {
            query_index: self.query_index - 1,
            subject_index: self.subject_index,
        }
    }

    /// The predecessor of a horizontal move, i.e. a gap in the query.
    pub fn left_predecessor(&self) -> Self {
        debug_assert!(self.subject_index > 0);

        Self {
            query_index: self.query_index,
            subject_index: self.subject_index - 1,
        }
    }

    pub fn diagonal_predecessor(&self) -> Self {
        debug_assert!(self.query_index > 0);
        debug_assert!(self.subject_index > 0);

        Self {
            query_index: self.query_index - 1,
            subject_index: self.subject_index - 1,
        }
    }

    pub fn predecessor(&self, step: TracebackStep) -> Self {
        match step {
            TracebackStep::Left => self.left_predecessor(),
            TracebackStep::Diagonal => self.diagonal_predecessor(),
            TracebackStep::Up => self.up_predecessor(),
        }
    }
}

impl<T> Index<AlignmentMatrixIndex> for Array2<T> {
    type Output = <Array2<T> as Index<[usize; 2]>>::Output;

    fn index(&self, index: AlignmentMatrixIndex) -> &Self::Output {
        &self[[index.query_index, index.subject_index]]
    }
}

impl<T> IndexMut<AlignmentMatrixIndex> for Array2<T> {
    fn index_mut(&mut self, index: AlignmentMatrixIndex) -> &mut Self::Output {
        &mut self[[index.query_index, index.subject_index]]
    }
}

impl std::fmt::Display for AlignmentMatrixIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.query_index, self.subject_index)
    }
}
