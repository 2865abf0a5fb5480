//! Score Aggregation
//!
//! ## Overview
//!
//! [`ComfortScorer`] combines the four per-criterion scorers into one final
//! comfort score per room. Only criteria present in the reading contribute,
//! and the weighted sum is renormalised by the weights of those criteria:
//!
//! ```text
//! final = Σ score(c) × weight(c) / Σ weight(c)      over present c
//! ```
//!
//! A room with only a CO2 sensor is therefore scored on CO2 alone, on the
//! same 0-100 scale as a fully instrumented room.
//!
//! Weights are divided by the power of two just above the largest present
//! weight before summing. Only the exponent changes, so the quotient is the
//! same as with the raw weights, and weights near `f64::MAX` cannot overflow
//! the sums. Non-finite weights count as zero.
//!
//! ## Rounding
//!
//! Individual scores are rounded to one decimal before they enter the
//! weighted sum, and the final score is rounded again. Both round the
//! stored decimal value of the score, with genuine ties going to even.
//! Interpolation inside each scorer runs at full precision.
//!
//! ## Failure Handling
//!
//! Aggregation never fails. A non-finite reading is dropped as if the sensor
//! were offline; a non-finite desired ideal falls back to the default. Both
//! are logged at warn level.
//!
//! ## Usage Example
//!
//! ```rust
//! use comfortroom_core::{score_room, Criterion, SensorReading, Weights};
//!
//! let reading = SensorReading::new(22.0, 650.0, 50.0, 32.0);
//! let result = score_room(&reading, &Weights::default(), None);
//!
//! assert_eq!(result.score(Criterion::Co2), Some(97.5));
//! assert_eq!(result.final_score, 97.2);
//! ```

use alloc::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    criteria::{ComfortBand, CriteriaThresholds, Criterion, STANDARD_THRESHOLDS},
    errors::{ScoringError, ScoringResult},
    reading::{DesiredProfile, SensorReading, Weights},
    scorers::{utils, Co2Scorer, HumidityScorer, SoundScorer, TemperatureScorer},
    traits::CriterionScorer,
};

/// Scores for one room
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScoreResult {
    /// Rounded score per present criterion
    pub individual_scores: BTreeMap<Criterion, f64>,
    /// Rounded weighted score, 0.0 when nothing was scored
    pub final_score: f64,
    /// Weights the caller supplied
    pub weights_used: Weights,
}

impl ScoreResult {
    /// Score of one criterion, if it was present
    pub fn score(&self, criterion: Criterion) -> Option<f64> {
        self.individual_scores.get(&criterion).copied()
    }

    /// True when no criterion could be scored
    pub fn is_empty(&self) -> bool {
        self.individual_scores.is_empty()
    }
}

/// Multi-criteria comfort scorer over a borrowed threshold table
#[derive(Debug, Clone, Copy)]
pub struct ComfortScorer<'a> {
    thresholds: &'a CriteriaThresholds,
}

impl Default for ComfortScorer<'static> {
    fn default() -> Self {
        Self::new(&STANDARD_THRESHOLDS)
    }
}

impl<'a> ComfortScorer<'a> {
    /// Create a scorer over the given threshold table
    pub fn new(thresholds: &'a CriteriaThresholds) -> Self {
        Self { thresholds }
    }

    /// Threshold table in use
    pub fn thresholds(&self) -> &'a CriteriaThresholds {
        self.thresholds
    }

    /// Score one criterion at full precision
    ///
    /// Errors are returned as-is; see [`ComfortScorer::score_room`] for the
    /// lenient path.
    pub fn score_criterion(
        &self,
        criterion: Criterion,
        value: f64,
        ideal: Option<f64>,
    ) -> ScoringResult<f64> {
        let t = self.thresholds;
        match criterion {
            Criterion::Temperature => TemperatureScorer::new(&t.temperature).score(value, ideal),
            Criterion::Co2 => Co2Scorer::new(&t.co2).score(value, ideal),
            Criterion::Humidity => HumidityScorer::new(&t.humidity).score(value, ideal),
            Criterion::Sound => SoundScorer::new(&t.sound).score(value, ideal),
        }
    }

    /// Comfort band of a raw value
    pub fn band(&self, criterion: Criterion, value: f64) -> ComfortBand {
        self.thresholds.band(criterion, value)
    }

    /// Score a criterion, recovering from bad input
    ///
    /// An invalid ideal is retried with the default; an invalid value yields
    /// `None`.
    fn score_lenient(&self, criterion: Criterion, value: f64, ideal: Option<f64>) -> Option<f64> {
        match self.score_criterion(criterion, value, ideal) {
            Ok(score) => Some(score),
            Err(ScoringError::InvalidIdeal { .. }) => {
                log_warn!("ignoring non-finite {} ideal, using default", criterion);
                self.score_lenient(criterion, value, None)
            }
            Err(err) => {
                log_warn!("skipping {}: {}", criterion, err);
                None
            }
        }
    }

    /// Score a room from its latest reading
    pub fn score_room(
        &self,
        reading: &SensorReading,
        weights: &Weights,
        profile: Option<&DesiredProfile>,
    ) -> ScoreResult {
        if let Err(err) = weights.validate() {
            log_warn!("scoring with suspicious weights: {}", err);
        }

        let mut individual_scores = BTreeMap::new();
        let mut largest_weight: f64 = 0.0;

        for (criterion, value) in reading.present() {
            let ideal = profile.and_then(|p| p.get(criterion));
            let Some(score) = self.score_lenient(criterion, value, ideal) else {
                continue;
            };

            individual_scores.insert(criterion, utils::round_one_decimal(score));
            largest_weight = largest_weight.max(libm::fabs(finite_weight(weights, criterion)));
        }

        let exponent = if largest_weight > 0.0 {
            libm::frexp(largest_weight).1
        } else {
            0
        };

        let mut weighted_sum = 0.0;
        let mut total_weight = 0.0;
        for (&criterion, &score) in &individual_scores {
            let weight = libm::ldexp(finite_weight(weights, criterion), -exponent);
            weighted_sum += score * weight;
            total_weight += weight;
        }

        let final_score = if total_weight > 0.0 {
            utils::clamp_score(utils::round_one_decimal(weighted_sum / total_weight))
        } else {
            0.0
        };

        ScoreResult {
            individual_scores,
            final_score,
            weights_used: *weights,
        }
    }
}

fn finite_weight(weights: &Weights, criterion: Criterion) -> f64 {
    let weight = weights.get(criterion);
    if weight.is_finite() {
        weight
    } else {
        0.0
    }
}

/// Score a room against the standard thresholds
pub fn score_room(
    reading: &SensorReading,
    weights: &Weights,
    profile: Option<&DesiredProfile>,
) -> ScoreResult {
    ComfortScorer::default().score_room(reading, weights, profile)
}
