//! Temperature scorer
//!
//! Two-sided curve around an ideal point:
//! - Good band `[20, 24]` scores 80-100 by distance from the ideal
//! - Acceptable bands `[18, 20)` and `(24, 26]` score 50-80
//! - Beyond 18/26 the score drops 10 points per degree
//!
//! A custom ideal moves only the reference point inside the good band. The
//! band edges stay where they are, so a warm-preferring user at 23°C still
//! sees 24.5°C scored on the standard acceptable curve.

use crate::{
    constants::comfort::{SCORE_ACCEPTABLE_FLOOR, SCORE_GOOD_FLOOR, SCORE_MAX},
    criteria::{ComfortBand, Criterion, TemperatureThresholds},
    errors::ScoringResult,
    traits::CriterionScorer,
};

use super::utils;

/// Temperature scorer for Celsius readings
#[derive(Debug, Clone, Copy)]
pub struct TemperatureScorer<'a> {
    thresholds: &'a TemperatureThresholds,
}

impl<'a> TemperatureScorer<'a> {
    /// Create a scorer over the given table
    pub fn new(thresholds: &'a TemperatureThresholds) -> Self {
        Self { thresholds }
    }
}

impl CriterionScorer for TemperatureScorer<'_> {
    fn criterion(&self) -> Criterion {
        Criterion::Temperature
    }

    fn score(&self, value: f64, ideal: Option<f64>) -> ScoringResult<f64> {
        utils::check_value(Criterion::Temperature, value)?;
        let t = self.thresholds;

        // Ideals outside the good band would put the reference point in a
        // band that never reaches 100
        let ideal = utils::resolve_ideal(
            Criterion::Temperature,
            ideal,
            t.ideal,
            t.good_min,
            t.good_max,
        )?;

        let score = if value == ideal {
            SCORE_MAX
        } else if t.good_min <= value && value <= t.good_max {
            let distance = libm::fabs(value - ideal);
            let max_distance = (ideal - t.good_min).max(t.good_max - ideal);
            utils::interpolate(distance, max_distance, SCORE_MAX, SCORE_GOOD_FLOOR)
        } else if t.acceptable_min <= value && value < t.good_min {
            utils::interpolate(
                t.good_min - value,
                t.good_min - t.acceptable_min,
                SCORE_GOOD_FLOOR,
                SCORE_ACCEPTABLE_FLOOR,
            )
        } else if t.good_max < value && value <= t.acceptable_max {
            utils::interpolate(
                value - t.good_max,
                t.acceptable_max - t.good_max,
                SCORE_GOOD_FLOOR,
                SCORE_ACCEPTABLE_FLOOR,
            )
        } else if value < t.acceptable_min {
            utils::decay(SCORE_ACCEPTABLE_FLOOR, t.acceptable_min - value, t.poor_decay)
        } else {
            utils::decay(SCORE_ACCEPTABLE_FLOOR, value - t.acceptable_max, t.poor_decay)
        };

        Ok(utils::clamp_score(score))
    }

    fn band(&self, value: f64) -> ComfortBand {
        self.thresholds.band(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ScoringError;

    fn scorer() -> TemperatureScorer<'static> {
        static TABLE: TemperatureThresholds = TemperatureThresholds::standard();
        TemperatureScorer::new(&TABLE)
    }

    fn score(value: f64) -> f64 {
        scorer().score(value, None).unwrap()
    }

    #[test]
    fn reference_points() {
        assert_eq!(score(20.0), 80.0);
        assert_eq!(score(22.0), 100.0);
        assert_eq!(score(24.0), 80.0);
        assert_eq!(score(26.0), 50.0);
        assert_eq!(score(28.0), 30.0);
        assert_eq!(score(18.0), 50.0);
    }

    #[test]
    fn interior_interpolation() {
        assert!((score(21.0) - 90.0).abs() < 1e-9);
        assert!((score(24.5) - 72.5).abs() < 1e-9);
        assert!((score(19.0) - 65.0).abs() < 1e-9);
    }

    #[test]
    fn poor_decay_floors_at_zero() {
        assert_eq!(score(10.0), 0.0);
        assert_eq!(score(40.0), 0.0);
        assert!((score(17.0) - 40.0).abs() < 1e-9);
    }

    #[test]
    fn custom_ideal_shifts_reference_point_only() {
        let s = scorer();
        assert_eq!(s.score(23.0, Some(23.0)).unwrap(), 100.0);
        // max distance becomes max(3, 1) = 3
        assert!((s.score(20.0, Some(23.0)).unwrap() - 80.0).abs() < 1e-9);
        assert!((s.score(24.0, Some(23.0)).unwrap() - (100.0 - 20.0 / 3.0)).abs() < 1e-9);
        // acceptable band is unchanged
        assert!((s.score(25.0, Some(23.0)).unwrap() - 65.0).abs() < 1e-9);
    }

    #[test]
    fn custom_ideal_outside_good_band_is_clamped() {
        let s = scorer();
        // 30°C is clamped to the good band edge at 24°C
        assert_eq!(s.score(24.0, Some(30.0)).unwrap(), 100.0);
        assert!((s.score(30.0, Some(30.0)).unwrap() - 10.0).abs() < 1e-9);
        assert!((s.score(20.0, Some(30.0)).unwrap() - 80.0).abs() < 1e-9);
    }

    #[test]
    fn invalid_inputs() {
        let s = scorer();
        assert_eq!(
            s.score(f64::NAN, None),
            Err(ScoringError::InvalidValue { criterion: Criterion::Temperature })
        );
        assert_eq!(
            s.score(22.0, Some(f64::INFINITY)),
            Err(ScoringError::InvalidIdeal { criterion: Criterion::Temperature })
        );
    }
}
