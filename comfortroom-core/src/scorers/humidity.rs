//! Humidity Scorer
//!
//! ## Background
//!
//! Relative humidity affects comfort indirectly: below ~30% RH mucous
//! membranes dry out and static builds up; above ~70% RH mould and dust
//! mites thrive and warm rooms start to feel oppressive. Between 45% and 55%
//! nobody notices humidity at all, which is why this criterion has an ideal
//! *range* rather than an ideal point.
//!
//! ## Curve
//!
//! ```text
//!   %RH   <30    [30,40)   [40,45)   [45,55]   (55,60]   (60,70]   >70
//! score  decay   50→80     80→100     100      100→80    80→50    decay
//! ```
//!
//! Decay beyond the acceptable band is 2.5 points per percentage point.
//!
//! ## Custom Ideal
//!
//! Unlike the other criteria, a custom humidity ideal replaces the whole
//! ideal range with a ±5% window centred on it. The good and acceptable
//! edges stay fixed at 40/60 and 30/70. Consequences worth knowing:
//!
//! - A window that reaches past a good edge swallows that part of the good
//!   band (everything inside the window scores 100).
//! - Good-band interpolation runs from the window edge to the fixed good
//!   edge, so a shifted window makes one side steeper and the other
//!   shallower.
//!
//! - A window past a good edge (ideal above 65 or below 35) leaves only the
//!   acceptable and decay branches on that side.
//!
//! The custom ideal is not clamped. Each good branch is only entered when
//! the window edge lies strictly inside the good band, so its interpolation
//! span is always positive whatever the ideal. A non-finite ideal is
//! rejected.
//!
//! ## Usage
//!
//! ```rust
//! use comfortroom_core::{CriterionScorer, HumidityScorer, STANDARD_THRESHOLDS};
//!
//! let scorer = HumidityScorer::new(&STANDARD_THRESHOLDS.humidity);
//!
//! assert_eq!(scorer.score(50.0, None)?, 100.0);
//! // A user who likes drier air
//! assert_eq!(scorer.score(42.0, Some(42.0))?, 100.0);
//! # Ok::<(), comfortroom_core::ScoringError>(())
//! ```

use crate::{
    constants::comfort::{SCORE_ACCEPTABLE_FLOOR, SCORE_GOOD_FLOOR, SCORE_MAX},
    criteria::{ComfortBand, Criterion, HumidityThresholds},
    errors::ScoringResult,
    traits::CriterionScorer,
};

use super::utils;

/// Humidity scorer for relative humidity percentage
#[derive(Debug, Clone, Copy)]
pub struct HumidityScorer<'a> {
    thresholds: &'a HumidityThresholds,
}

impl<'a> HumidityScorer<'a> {
    /// Create a scorer over the given table
    pub fn new(thresholds: &'a HumidityThresholds) -> Self {
        Self { thresholds }
    }

    /// Ideal window for an optional custom ideal
    fn ideal_window(&self, ideal: Option<f64>) -> ScoringResult<(f64, f64)> {
        let t = self.thresholds;
        match ideal {
            None => Ok((t.ideal_min, t.ideal_max)),
            Some(centre) => {
                let centre = utils::check_ideal(Criterion::Humidity, centre)?;
                Ok((centre - t.custom_half_width, centre + t.custom_half_width))
            }
        }
    }
}

impl CriterionScorer for HumidityScorer<'_> {
    fn criterion(&self) -> Criterion {
        Criterion::Humidity
    }

    fn score(&self, value: f64, ideal: Option<f64>) -> ScoringResult<f64> {
        utils::check_value(Criterion::Humidity, value)?;
        let t = self.thresholds;
        let (ideal_min, ideal_max) = self.ideal_window(ideal)?;

        let score = if ideal_min <= value && value <= ideal_max {
            SCORE_MAX
        } else if t.good_min <= value && value < ideal_min {
            utils::interpolate(ideal_min - value, ideal_min - t.good_min, SCORE_MAX, SCORE_GOOD_FLOOR)
        } else if ideal_max < value && value <= t.good_max {
            utils::interpolate(value - ideal_max, t.good_max - ideal_max, SCORE_MAX, SCORE_GOOD_FLOOR)
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

    fn scorer() -> HumidityScorer<'static> {
        static TABLE: HumidityThresholds = HumidityThresholds::standard();
        HumidityScorer::new(&TABLE)
    }

    fn score(value: f64) -> f64 {
        scorer().score(value, None).unwrap()
    }

    #[test]
    fn reference_points() {
        assert_eq!(score(25.0), 37.5);
        assert_eq!(score(35.0), 65.0);
        assert_eq!(score(45.0), 100.0);
        assert_eq!(score(50.0), 100.0);
        assert_eq!(score(55.0), 100.0);
        assert_eq!(score(65.0), 65.0);
        assert_eq!(score(75.0), 37.5);
    }

    #[test]
    fn band_edges() {
        assert_eq!(score(40.0), 80.0);
        assert_eq!(score(60.0), 80.0);
        assert_eq!(score(30.0), 50.0);
        assert_eq!(score(70.0), 50.0);
        assert!((score(42.5) - 90.0).abs() < 1e-9);
        assert_eq!(score(0.0), 0.0);
        assert_eq!(score(100.0), 0.0);
    }

    #[test]
    fn custom_ideal_replaces_the_whole_range() {
        let s = scorer();
        // window [45, 55] -> [50, 60]
        assert_eq!(s.score(58.0, Some(55.0)).unwrap(), 100.0);
        assert_eq!(s.score(60.0, Some(55.0)).unwrap(), 100.0);
        // good lower branch now spans 40..50
        assert!((s.score(45.0, Some(55.0)).unwrap() - 90.0).abs() < 1e-9);
        // acceptable band is fixed
        assert!((s.score(65.0, Some(55.0)).unwrap() - 65.0).abs() < 1e-9);
    }

    #[test]
    fn custom_ideal_outside_good_band_is_kept() {
        let s = scorer();
        // window [60, 70]
        assert_eq!(s.score(68.0, Some(65.0)).unwrap(), 100.0);
        assert_eq!(s.score(70.0, Some(65.0)).unwrap(), 100.0);
        assert!((s.score(50.0, Some(65.0)).unwrap() - 90.0).abs() < 1e-9);

        // window [15, 25]; upper good branch spans 25..60
        assert_eq!(s.score(20.0, Some(20.0)).unwrap(), 100.0);
        assert!((s.score(28.0, Some(20.0)).unwrap() - 98.285_714_285_714_29).abs() < 1e-9);
        assert!((s.score(33.0, Some(20.0)).unwrap() - 95.428_571_428_571_43).abs() < 1e-9);
        assert!((s.score(36.0, Some(20.0)).unwrap() - 93.714_285_714_285_71).abs() < 1e-9);
        assert_eq!(s.score(60.0, Some(20.0)).unwrap(), 80.0);
    }

    #[test]
    fn non_finite_custom_ideal_is_rejected() {
        assert_eq!(
            scorer().score(50.0, Some(f64::NAN)),
            Err(ScoringError::InvalidIdeal { criterion: Criterion::Humidity })
        );
    }
}
