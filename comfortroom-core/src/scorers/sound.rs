//! Sound level scorer
//!
//! One-sided, lower is better. Quiet study rooms sit around 30 dB; normal
//! conversation is ~55-60 dB, which is where this curve bottoms out.
//!
//! Unlike the other criteria, the poor band is a linear ramp over a fixed
//! width (45 → 55 dB maps 50 → 0) rather than a per-unit decay.

use crate::{
    constants::comfort::{SCORE_ACCEPTABLE_FLOOR, SCORE_GOOD_FLOOR, SCORE_MAX, SCORE_MIN},
    criteria::{ComfortBand, Criterion, SoundThresholds},
    errors::ScoringResult,
    traits::CriterionScorer,
};

use super::utils;

/// Sound scorer for dB readings
#[derive(Debug, Clone, Copy)]
pub struct SoundScorer<'a> {
    thresholds: &'a SoundThresholds,
}

impl<'a> SoundScorer<'a> {
    /// Create a scorer over the given table
    pub fn new(thresholds: &'a SoundThresholds) -> Self {
        Self { thresholds }
    }
}

impl CriterionScorer for SoundScorer<'_> {
    fn criterion(&self) -> Criterion {
        Criterion::Sound
    }

    fn score(&self, value: f64, ideal: Option<f64>) -> ScoringResult<f64> {
        utils::check_value(Criterion::Sound, value)?;
        let t = self.thresholds;
        let ideal = utils::resolve_ideal(Criterion::Sound, ideal, t.ideal, 0.0, t.good_max)?;

        let score = if value <= ideal {
            SCORE_MAX
        } else if value <= t.good_max {
            utils::interpolate(value - ideal, t.good_max - ideal, SCORE_MAX, SCORE_GOOD_FLOOR)
        } else if value <= t.acceptable_max {
            utils::interpolate(
                value - t.good_max,
                t.acceptable_max - t.good_max,
                SCORE_GOOD_FLOOR,
                SCORE_ACCEPTABLE_FLOOR,
            )
        } else {
            let ramp = utils::interpolate(
                value - t.acceptable_max,
                t.poor_threshold - t.acceptable_max,
                SCORE_ACCEPTABLE_FLOOR,
                SCORE_MIN,
            );
            ramp.max(SCORE_MIN)
        };

        Ok(utils::clamp_score(score))
    }

    fn band(&self, value: f64) -> ComfortBand {
        self.thresholds.band(value)
    }
}
