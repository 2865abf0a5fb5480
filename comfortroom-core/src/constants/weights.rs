//! Default Criterion Weights
//!
//! Weights express how much each criterion matters to the person choosing a
//! room. They conventionally sum to 1.0, but the aggregator renormalizes over
//! the criteria actually present, so any non-negative combination works.

// ===== DEFAULT PROFILE =====

/// Default temperature weight.
pub const DEFAULT_TEMPERATURE_WEIGHT: f64 = 0.25;

/// Default CO2 weight.
///
/// Slightly favoured: air quality has the strongest measured effect on
/// cognitive performance in meeting rooms.
pub const DEFAULT_CO2_WEIGHT: f64 = 0.30;

/// Default humidity weight.
pub const DEFAULT_HUMIDITY_WEIGHT: f64 = 0.20;

/// Default sound weight.
pub const DEFAULT_SOUND_WEIGHT: f64 = 0.25;

// ===== AIR QUALITY PRIORITY =====

/// Temperature weight when air quality is prioritised.
pub const AIR_QUALITY_TEMPERATURE_WEIGHT: f64 = 0.15;

/// CO2 weight when air quality is prioritised.
pub const AIR_QUALITY_CO2_WEIGHT: f64 = 0.50;

/// Humidity weight when air quality is prioritised.
pub const AIR_QUALITY_HUMIDITY_WEIGHT: f64 = 0.15;

/// Sound weight when air quality is prioritised.
pub const AIR_QUALITY_SOUND_WEIGHT: f64 = 0.20;
