use super::AlignmentMatrixIndex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Along a column, i.e. over the rows.
    Query,
    /// Along a row, i.e. over the columns.
    Subject,
}

/// Walks along one axis of the matrix, starting at position zero of that axis.
pub struct AlignmentMatrixEdgeIterator {
    next: AlignmentMatrixIndex,
    axis: Axis,
    limit: usize,
}

/// An iterator over the alignment matrix indices skipping row and column zero.
///
/// The order is row-major, so every cell comes after its upper, left and diagonal neighbours.
pub struct AlignmentMatrixInnerIterator {
    next: Option<AlignmentMatrixIndex>,
    limit: AlignmentMatrixIndex,
}

impl AlignmentMatrixEdgeIterator {
    /// `fixed` is the position on the other axis.
    pub(in crate::alignment_matrix) fn new(axis: Axis, fixed: usize, limit: usize) -> Self {
        Self {
            next: match axis {
                Axis::Query => AlignmentMatrixIndex::new(0, fixed),
                Axis::Subject => AlignmentMatrixIndex::new(fixed, 0),
            },
            axis,
            limit,
        }
    }
}

impl AlignmentMatrixInnerIterator {
    pub(in crate::alignment_matrix) fn new(limit: AlignmentMatrixIndex) -> Self {
        debug_assert!(limit.query_index > 0);
        debug_assert!(limit.subject_index > 0);

        Self {
            next: (limit.query_index > 1 && limit.subject_index > 1)
                .then(|| AlignmentMatrixIndex::new(1, 1)),
            limit,
        }
    }
}

impl Iterator for AlignmentMatrixEdgeIterator {
    type Item = AlignmentMatrixIndex;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.next;
        let position = match self.axis {
            Axis::Query => &mut self.next.query_index,
            Axis::Subject => &mut self.next.subject_index,
        };

        if *position < self.limit {
            *position += 1;
            Some(result)
        } else {
            None
        }
    }
}

impl Iterator for AlignmentMatrixInnerIterator {
    type Item = AlignmentMatrixIndex;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.next?;

        let mut next = result;
        next.subject_index += 1;
        if next.subject_index == self.limit.subject_index {
            next.subject_index = 1;
            next.query_index += 1;
        }
        self.next = (next.query_index < self.limit.query_index).then_some(next);

        Some(result)
    }
}
