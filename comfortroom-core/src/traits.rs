//! Core traits for scorers
//!
//! These traits define the interface every per-criterion scorer implements.
//! Kept deliberately small: a scorer is a pure function of a reading and an
//! optional ideal, parameterised by a borrowed threshold table.

use crate::criteria::{ComfortBand, Criterion};
use crate::errors::ScoringResult;

/// Per-criterion comfort scorer - implement this for each criterion
pub trait CriterionScorer {
    /// Criterion this scorer rates
    fn criterion(&self) -> Criterion;

    /// Score a single reading on the 0-100 scale
    ///
    /// `ideal` overrides the default ideal from the threshold table. Returns
    /// an error only for non-finite readings or ideals; every finite reading
    /// produces a score in `[0, 100]`.
    fn score(&self, value: f64, ideal: Option<f64>) -> ScoringResult<f64>;

    /// Qualitative band of a reading against the default ideal
    fn band(&self, value: f64) -> ComfortBand;
}

/// Trait for values that can be scored
pub trait Scorable {
    /// Check if the value is a usable number (not NaN, infinite, etc)
    fn is_scorable(&self) -> bool;
}

impl Scorable for f64 {
    fn is_scorable(&self) -> bool {
        self.is_finite()
    }
}

impl Scorable for f32 {
    fn is_scorable(&self) -> bool {
        self.is_finite()
    }
}
