//! Error Types for Comfort Scoring
//!
//! ## Design
//!
//! Scoring is total over finite inputs: every band in
//! [`crate::criteria`] is exhaustive over the real line, so a finite reading
//! always lands somewhere and produces a score. Errors only describe inputs
//! that are not numbers at all, or caller configuration that cannot be used
//! as given.
//!
//! Errors are small and `Copy` so they can be returned from hot loops
//! (ranking thousands of rooms) without allocation.
//!
//! ## Error Categories
//!
//! ### Input Violations
//! - `InvalidValue`: the sensor reading is NaN or infinite
//! - `InvalidIdeal`: a desired-profile ideal is NaN or infinite
//!
//! ### Configuration Issues
//! - `NegativeWeight`: a weight is negative or not finite
//! - `UnknownCriterion`: a criterion name could not be parsed
//!
//! ## Handling Strategy
//!
//! [`crate::aggregate::ComfortScorer`] never propagates these. An invalid
//! reading is dropped from the aggregate (as if the sensor were offline) and
//! an invalid ideal falls back to the default. Callers that want to surface
//! the problem use the per-criterion scorers directly:
//!
//! ```rust
//! use comfortroom_core::{CriterionScorer, ScoringError, TemperatureScorer, STANDARD_THRESHOLDS};
//!
//! let scorer = TemperatureScorer::new(&STANDARD_THRESHOLDS.temperature);
//! match scorer.score(f64::NAN, None) {
//!     Ok(score) => println!("score {score}"),
//!     Err(ScoringError::InvalidValue { criterion }) => println!("{criterion} sensor glitch"),
//!     Err(other) => println!("{other}"),
//! }
//! ```

use thiserror_no_std::Error;

use crate::criteria::Criterion;

/// Result type for scoring operations
pub type ScoringResult<T> = Result<T, ScoringError>;

/// Scoring errors - kept small and `Copy`
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ScoringError {
    /// Sensor value is NaN or infinite
    #[error("Invalid {criterion} reading: not a finite number")]
    InvalidValue {
        /// Criterion the reading belongs to
        criterion: Criterion,
    },

    /// Desired-profile ideal is NaN or infinite
    #[error("Invalid {criterion} ideal: not a finite number")]
    InvalidIdeal {
        /// Criterion the ideal belongs to
        criterion: Criterion,
    },

    /// Weight is negative or not finite
    #[error("Weight {weight} for {criterion} must be a finite, non-negative number")]
    NegativeWeight {
        /// Criterion the weight belongs to
        criterion: Criterion,
        /// The offending weight
        weight: f64,
    },

    /// Criterion name not recognised
    #[error("Unknown criterion name")]
    UnknownCriterion,
}
