use num_traits::Zero;

use crate::{score::Score, traceback::TracebackStep};

/// One node of the alignment matrix.
///
/// Each lane holds the best score of an alignment prefix ending in the respective kind of column.
/// The flags mark every lane whose score equals the final score of the cell, so ties keep all of their origins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Ends with a match or mismatch column.
    pub match_score: Score,
    /// Ends with a vertical move, i.e. a query character aligned to a gap.
    pub up_score: Score,
    /// Ends with a horizontal move, i.e. a subject character aligned to a gap.
    pub left_score: Score,
    pub score: Score,

    pub came_from_diagonal: bool,
    pub came_from_left: bool,
    pub came_from_up: bool,
}

impl Cell {
    /// The global matrix origin.
    pub fn origin() -> Self {
        Self {
            match_score: Score::zero(),
            score: Score::zero(),
            ..Default::default()
        }
    }

    /// A cell that starts a fresh local alignment.
    pub fn reset_point() -> Self {
        Self {
            match_score: Score::zero(),
            up_score: Score::zero(),
            left_score: Score::zero(),
            score: Score::zero(),
            came_from_diagonal: false,
            came_from_left: false,
            came_from_up: false,
        }
    }

    /// Sets the final score to the maximum lane score and flags all lanes that reach it.
    pub fn resolve(&mut self) {
        self.score = self.match_score.max(self.up_score).max(self.left_score);
        self.came_from_diagonal = self.match_score == self.score;
        self.came_from_left = self.left_score == self.score;
        self.came_from_up = self.up_score == self.score;
    }

    /// Like [`Self::resolve`], but no lane drops below zero.
    ///
    /// If the final score is zero, no flag is set and the cell becomes a reset point.
    pub fn resolve_with_zero_floor(&mut self) {
        let zero = Score::zero();
        self.match_score = self.match_score.max(zero);
        self.up_score = self.up_score.max(zero);
        self.left_score = self.left_score.max(zero);
        self.resolve();

        if self.score == zero {
            self.came_from_diagonal = false;
            self.came_from_left = false;
            self.came_from_up = false;
        }
    }

    /// The score of the lane that is left by `step`.
    pub fn lane_score(&self, step: TracebackStep) -> Score {
        match step {
            TracebackStep::Left => self.left_score,
            TracebackStep::Diagonal => self.match_score,
            TracebackStep::Up => self.up_score,
        }
    }

    pub fn has_predecessor(&self) -> bool {
        self.came_from_diagonal || self.came_from_left || self.came_from_up
    }

    /// The lane in which the traceback starts at this cell.
    ///
    /// Ties are broken in the fixed order left, diagonal, up.
    pub fn traceback_step(&self) -> Option<TracebackStep> {
        if self.came_from_left {
            Some(TracebackStep::Left)
        } else if self.came_from_diagonal {
            Some(TracebackStep::Diagonal)
        } else if self.came_from_up {
            Some(TracebackStep::Up)
        } else {
            None
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            match_score: Score::neg_infinity(),
            up_score: Score::neg_infinity(),
            left_score: Score::neg_infinity(),
            score: Score::neg_infinity(),
            came_from_diagonal: false,
            came_from_left: false,
            came_from_up: false,
        }
    }
}
