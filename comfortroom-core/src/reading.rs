//! Scoring Inputs: Readings, Weights and Desired Profiles
//!
//! All three are small `Copy` value types owned by the caller and borrowed
//! for the duration of a scoring call.
//!
//! - [`SensorReading`]: the latest value of each sensor in a room. Any field
//!   may be missing (sensor offline, no data yet).
//! - [`Weights`]: importance of each criterion. Conventionally sums to 1.0,
//!   never required to.
//! - [`DesiredProfile`]: optional per-criterion ideal overrides.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::weights::*,
    criteria::Criterion,
    errors::{ScoringError, ScoringResult},
    traits::Scorable,
};

/// Point-in-time sensor values for one room
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SensorReading {
    /// Air temperature (°C)
    pub temperature: Option<f64>,
    /// CO2 concentration (ppm)
    pub co2: Option<f64>,
    /// Relative humidity (%)
    pub humidity: Option<f64>,
    /// Sound level (dB)
    pub sound: Option<f64>,
}

impl SensorReading {
    /// Reading with all four values present
    pub fn new(temperature: f64, co2: f64, humidity: f64, sound: f64) -> Self {
        Self {
            temperature: Some(temperature),
            co2: Some(co2),
            humidity: Some(humidity),
            sound: Some(sound),
        }
    }

    /// Set the temperature value
    pub fn with_temperature(mut self, celsius: f64) -> Self {
        self.temperature = Some(celsius);
        self
    }

    /// Set the CO2 value
    pub fn with_co2(mut self, ppm: f64) -> Self {
        self.co2 = Some(ppm);
        self
    }

    /// Set the humidity value
    pub fn with_humidity(mut self, percent: f64) -> Self {
        self.humidity = Some(percent);
        self
    }

    /// Set the sound value
    pub fn with_sound(mut self, db: f64) -> Self {
        self.sound = Some(db);
        self
    }

    /// Value for one criterion, if present
    pub fn get(&self, criterion: Criterion) -> Option<f64> {
        match criterion {
            Criterion::Temperature => self.temperature,
            Criterion::Co2 => self.co2,
            Criterion::Humidity => self.humidity,
            Criterion::Sound => self.sound,
        }
    }

    /// Present values in scoring order
    pub fn present(&self) -> impl Iterator<Item = (Criterion, f64)> + '_ {
        Criterion::ALL
            .into_iter()
            .filter_map(move |criterion| self.get(criterion).map(|value| (criterion, value)))
    }

    /// True when no sensor has reported
    pub fn is_empty(&self) -> bool {
        self.present().next().is_none()
    }
}

/// Importance of each criterion
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Weights {
    /// Temperature weight
    pub temperature: f64,
    /// CO2 weight
    pub co2: f64,
    /// Humidity weight
    pub humidity: f64,
    /// Sound weight
    pub sound: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE_WEIGHT,
            co2: DEFAULT_CO2_WEIGHT,
            humidity: DEFAULT_HUMIDITY_WEIGHT,
            sound: DEFAULT_SOUND_WEIGHT,
        }
    }
}

impl Weights {
    /// Create weights from explicit values
    pub fn new(temperature: f64, co2: f64, humidity: f64, sound: f64) -> Self {
        Self { temperature, co2, humidity, sound }
    }

    /// Every criterion equally important
    pub fn equal() -> Self {
        Self::new(0.25, 0.25, 0.25, 0.25)
    }

    /// Air quality first: CO2 carries half the weight
    pub fn air_quality_priority() -> Self {
        Self {
            temperature: AIR_QUALITY_TEMPERATURE_WEIGHT,
            co2: AIR_QUALITY_CO2_WEIGHT,
            humidity: AIR_QUALITY_HUMIDITY_WEIGHT,
            sound: AIR_QUALITY_SOUND_WEIGHT,
        }
    }

    /// Weight of one criterion
    pub fn get(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::Temperature => self.temperature,
            Criterion::Co2 => self.co2,
            Criterion::Humidity => self.humidity,
            Criterion::Sound => self.sound,
        }
    }

    /// Sum of all four weights
    pub fn total(&self) -> f64 {
        Criterion::ALL.iter().map(|&c| self.get(c)).sum()
    }

    /// Check that every weight is finite and non-negative
    ///
    /// The scorer does not require this; it is offered to configuration
    /// layers that want to reject bad input early.
    pub fn validate(&self) -> ScoringResult<()> {
        for criterion in Criterion::ALL {
            let weight = self.get(criterion);
            if !weight.is_scorable() || weight < 0.0 {
                return Err(ScoringError::NegativeWeight { criterion, weight });
            }
        }
        Ok(())
    }
}

/// Per-criterion ideal overrides
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DesiredProfile {
    /// Preferred temperature (°C)
    pub temperature: Option<f64>,
    /// Preferred CO2 reference level (ppm)
    pub co2: Option<f64>,
    /// Centre of the preferred humidity window (%)
    pub humidity: Option<f64>,
    /// Preferred sound reference level (dB)
    pub sound: Option<f64>,
}

impl DesiredProfile {
    /// Override the temperature ideal
    pub fn with_temperature(mut self, celsius: f64) -> Self {
        self.temperature = Some(celsius);
        self
    }

    /// Override the CO2 ideal
    pub fn with_co2(mut self, ppm: f64) -> Self {
        self.co2 = Some(ppm);
        self
    }

    /// Override the humidity ideal
    pub fn with_humidity(mut self, percent: f64) -> Self {
        self.humidity = Some(percent);
        self
    }

    /// Override the sound ideal
    pub fn with_sound(mut self, db: f64) -> Self {
        self.sound = Some(db);
        self
    }

    /// Override for one criterion, if any
    pub fn get(&self, criterion: Criterion) -> Option<f64> {
        match criterion {
            Criterion::Temperature => self.temperature,
            Criterion::Co2 => self.co2,
            Criterion::Humidity => self.humidity,
            Criterion::Sound => self.sound,
        }
    }
}
