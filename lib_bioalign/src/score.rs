use std::ops::Add;

use noisy_float::types::{N64, n64};
use num_traits::Zero;

/// The score of an alignment.
///
/// Higher scores are better, and scores may be negative.
/// A score is never NaN, which makes it totally ordered.
/// Negative infinity marks an unreachable matrix lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Score(N64);

impl Score {
    /// Panics if `value` is NaN.
    pub fn new(value: f64) -> Self {
        Self(n64(value))
    }

    pub fn neg_infinity() -> Self {
        Self::new(f64::NEG_INFINITY)
    }

    pub fn as_f64(&self) -> f64 {
        self.0.raw()
    }

    pub fn is_finite(&self) -> bool {
        self.0.raw().is_finite()
    }
}

impl From<f64> for Score {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl Add for Score {
    type Output = Score;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Zero for Score {
    fn zero() -> Self {
        Self::new(0.0)
    }

    fn is_zero(&self) -> bool {
        self.0.raw() == 0.0
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.raw().fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use num_traits::Zero;

    use super::Score;

    #[test]
    fn unreachable_lanes_stay_unreachable() {
        let unreachable = Score::neg_infinity() + Score::new(-3.0);
        assert_eq!(unreachable, Score::neg_infinity());
        assert!(unreachable < Score::new(-1e300));
        assert!(!unreachable.is_finite());
    }

    #[test]
    fn display_omits_trailing_zeroes() {
        assert_eq!(Score::new(-4.0).to_string(), "-4");
        assert_eq!(Score::new(2.5).to_string(), "2.5");
        assert_eq!(Score::zero().to_string(), "0");
    }
}
