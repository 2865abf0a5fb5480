//! Constants for ComfortRoom Core
//!
//! Every band boundary and default weight used by the scoring engine is
//! defined here, with the standard it comes from. Scorers never embed
//! magic numbers; they read them through [`crate::criteria::CriteriaThresholds`],
//! which is built from these values.
//!
//! ## Organization
//!
//! - **Comfort**: band boundaries and score anchors per criterion
//! - **Weights**: default and preset criterion weights

/// Band boundaries and score anchors for temperature, CO2, humidity and sound.
pub mod comfort;

/// Default and preset criterion weights.
pub mod weights;

pub use comfort::{
    SCORE_MAX, SCORE_MIN, SCORE_GOOD_FLOOR, SCORE_ACCEPTABLE_FLOOR,
    TEMP_IDEAL_C, CO2_IDEAL_PPM, SOUND_IDEAL_DB,
    HUMIDITY_IDEAL_MIN_PCT, HUMIDITY_IDEAL_MAX_PCT,
};

pub use weights::{
    DEFAULT_TEMPERATURE_WEIGHT, DEFAULT_CO2_WEIGHT,
    DEFAULT_HUMIDITY_WEIGHT, DEFAULT_SOUND_WEIGHT,
};
