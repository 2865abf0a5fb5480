//! CO2 Scorer
//!
//! ## Background
//!
//! Indoor CO2 is a proxy for ventilation: people exhale roughly 40,000 ppm,
//! so a poorly ventilated meeting room climbs from the ~420 ppm outdoor
//! background to well over 1,000 ppm within an hour. Cognitive test scores
//! drop measurably above ~1,000 ppm, which is why the curve here is steep
//! past that point.
//!
//! ## Curve
//!
//! Lower is always better, so the curve is one-sided:
//!
//! ```text
//! ppm     ≤600   (600,800]   (800,1000]   (1000,1400]   >1400
//! score   100    100 → 90    90 → 70      70 → 50       50 - 0.1/ppm
//! ```
//!
//! The good band only costs 10 points (other criteria lose 20), since
//! 600-800 ppm is normal for an occupied room.
//!
//! ## Custom Ideal
//!
//! A custom ideal replaces the 600 ppm reference point. Readings at or below
//! it score 100 and the good band interpolates from it to 800 ppm. The ideal
//! is clamped to `[0, 800]`: beyond the good band the good branch can never
//! be entered anyway, and the clamp keeps the interpolation span positive.

use crate::{
    constants::comfort::{SCORE_ACCEPTABLE_FLOOR, SCORE_MAX},
    criteria::{ComfortBand, Co2Thresholds, Criterion},
    errors::ScoringResult,
    traits::CriterionScorer,
};

use super::utils;

/// CO2 scorer for ppm readings
#[derive(Debug, Clone, Copy)]
pub struct Co2Scorer<'a> {
    thresholds: &'a Co2Thresholds,
}

impl<'a> Co2Scorer<'a> {
    /// Create a scorer over the given table
    pub fn new(thresholds: &'a Co2Thresholds) -> Self {
        Self { thresholds }
    }
}

impl CriterionScorer for Co2Scorer<'_> {
    fn criterion(&self) -> Criterion {
        Criterion::Co2
    }

    fn score(&self, value: f64, ideal: Option<f64>) -> ScoringResult<f64> {
        utils::check_value(Criterion::Co2, value)?;
        let t = self.thresholds;
        let ideal = utils::resolve_ideal(Criterion::Co2, ideal, t.ideal, 0.0, t.good_max)?;

        let score = if value <= ideal {
            SCORE_MAX
        } else if value <= t.good_max {
            utils::interpolate(value - ideal, t.good_max - ideal, SCORE_MAX, t.good_floor)
        } else if value <= t.acceptable_max {
            utils::interpolate(
                value - t.good_max,
                t.acceptable_max - t.good_max,
                t.good_floor,
                t.acceptable_floor,
            )
        } else if value <= t.poor_threshold {
            utils::interpolate(
                value - t.acceptable_max,
                t.poor_threshold - t.acceptable_max,
                t.acceptable_floor,
                SCORE_ACCEPTABLE_FLOOR,
            )
        } else {
            utils::decay(SCORE_ACCEPTABLE_FLOOR, value - t.poor_threshold, t.poor_decay)
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

    fn scorer() -> Co2Scorer<'static> {
        static TABLE: Co2Thresholds = Co2Thresholds::standard();
        Co2Scorer::new(&TABLE)
    }

    fn score(value: f64) -> f64 {
        scorer().score(value, None).unwrap()
    }

    #[test]
    fn reference_points() {
        assert_eq!(score(400.0), 100.0);
        assert_eq!(score(600.0), 100.0);
        assert_eq!(score(800.0), 90.0);
        assert_eq!(score(1000.0), 70.0);
        assert_eq!(score(1200.0), 60.0);
        assert_eq!(score(1400.0), 50.0);
        assert_eq!(score(1600.0), 30.0);
    }

    #[test]
    fn interior_points() {
        assert!((score(650.0) - 97.5).abs() < 1e-9);
        assert!((score(850.0) - 85.0).abs() < 1e-9);
        assert_eq!(score(1900.0), 0.0);
        assert_eq!(score(5000.0), 0.0);
    }

    #[test]
    fn custom_ideal() {
        let s = scorer();
        // tolerant user: 700 ppm is fine
        assert_eq!(s.score(700.0, Some(700.0)).unwrap(), 100.0);
        assert!((s.score(750.0, Some(700.0)).unwrap() - 95.0).abs() < 1e-9);
        // stricter user: 500 ppm reference
        assert!((s.score(600.0, Some(500.0)).unwrap() - 96.6666666).abs() < 1e-6);
        // acceptable band unchanged
        assert!((s.score(900.0, Some(500.0)).unwrap() - 80.0).abs() < 1e-9);
    }

    #[test]
    fn custom_ideal_above_good_band_is_clamped() {
        let s = scorer();
        assert_eq!(s.score(800.0, Some(1200.0)).unwrap(), 100.0);
        // 1100 ppm is past the clamped ideal and scored on the medium band
        assert!((s.score(1100.0, Some(1200.0)).unwrap() - 65.0).abs() < 1e-9);
    }
}
