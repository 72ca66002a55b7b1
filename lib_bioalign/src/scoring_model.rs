use crate::{
    error::{Error, Result},
    score::Score,
};

pub mod io;

/// Match, mismatch and affine gap scores for one alignment call.
///
/// Gap scores are added to the alignment score, so penalties are usually negative.
/// The signs are not enforced.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoringModel {
    pub match_score: f64,
    pub mismatch_score: f64,
    /// Added for the first character of a gap.
    pub gap_open_score: f64,
    /// Added for every further character of the same gap.
    pub gap_extend_score: f64,
}

impl ScoringModel {
    pub fn new(
        match_score: f64,
        mismatch_score: f64,
        gap_open_score: f64,
        gap_extend_score: f64,
    ) -> Result<Self> {
        let result = Self {
            match_score,
            mismatch_score,
            gap_open_score,
            gap_extend_score,
        };
        result.verify()?;
        Ok(result)
    }

    /// Returns an error if any parameter is not finite.
    pub fn verify(&self) -> Result<()> {
        for (parameter, value) in [
            ("match", self.match_score),
            ("mismatch", self.mismatch_score),
            ("gap open", self.gap_open_score),
            ("gap extend", self.gap_extend_score),
        ] {
            if !value.is_finite() {
                return Err(Error::InvalidScoringParameters { parameter, value });
            }
        }

        Ok(())
    }

    pub fn match_or_mismatch_score(&self, a: char, b: char) -> Score {
        if a == b {
            self.match_score()
        } else {
            self.mismatch_score()
        }
    }

    pub fn match_score(&self) -> Score {
        self.match_score.into()
    }

    pub fn mismatch_score(&self) -> Score {
        self.mismatch_score.into()
    }

    pub fn gap_open_score(&self) -> Score {
        self.gap_open_score.into()
    }

    pub fn gap_extend_score(&self) -> Score {
        self.gap_extend_score.into()
    }

    /// The score of a single gap of the given length.
    pub fn gap_score(&self, length: usize) -> Score {
        if length == 0 {
            Score::new(0.0)
        } else {
            Score::new(self.gap_open_score + (length - 1) as f64 * self.gap_extend_score)
        }
    }
}

impl Default for ScoringModel {
    fn default() -> Self {
        Self {
            match_score: 2.0,
            mismatch_score: -3.0,
            gap_open_score: -3.0,
            gap_extend_score: -3.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{error::Error, score::Score};

    use super::ScoringModel;

    #[test]
    fn default_scores() {
        let scoring = ScoringModel::default();
        assert_eq!(scoring.match_or_mismatch_score('A', 'A'), Score::new(2.0));
        assert_eq!(scoring.match_or_mismatch_score('A', 'C'), Score::new(-3.0));
        assert_eq!(scoring.gap_score(0), Score::new(0.0));
        assert_eq!(scoring.gap_score(4), Score::new(-12.0));
        assert!(scoring.verify().is_ok());
    }

    #[test]
    fn matching_is_case_sensitive() {
        let scoring = ScoringModel::default();
        assert_eq!(scoring.match_or_mismatch_score('a', 'A'), Score::new(-3.0));
    }

    #[test]
    fn non_finite_parameters_are_rejected() {
        assert!(matches!(
            ScoringModel::new(2.0, f64::NAN, -3.0, -1.0),
            Err(Error::InvalidScoringParameters {
                parameter: "mismatch",
                ..
            })
        ));
        assert!(matches!(
            ScoringModel::new(2.0, -3.0, -3.0, f64::NEG_INFINITY),
            Err(Error::InvalidScoringParameters {
                parameter: "gap extend",
                ..
            })
        ));

        // Positive gap scores are unusual, but allowed.
        assert!(ScoringModel::new(1.0, 1.0, 5.0, 5.0).is_ok());
    }
}
