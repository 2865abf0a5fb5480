//! Comfort Criteria and Their Threshold Tables
//!
//! ## Overview
//!
//! Four criteria describe how comfortable a room is:
//!
//! | Criterion   | Unit | Shape                          |
//! |-------------|------|--------------------------------|
//! | Temperature | °C   | two-sided around an ideal point |
//! | CO2         | ppm  | one-sided, lower is better      |
//! | Humidity    | %RH  | two-sided around an ideal range |
//! | Sound       | dB   | one-sided, lower is better      |
//!
//! Each criterion owns a threshold table of band boundaries. The tables are
//! plain `Copy` values assembled at compile time from
//! [`crate::constants::comfort`]; [`STANDARD_THRESHOLDS`] is the
//! process-wide instance and is never mutated. Scorers borrow the table they
//! need, so an alternative table can be injected for testing without any
//! shared state.
//!
//! ```text
//! Temperature  |poor| acceptable |   good   |  good    | acceptable |poor|
//!                   18          20    22    24         26
//!
//! CO2          |  ideal  | good | acceptable | medium |    poor ...
//!                        600    800         1000     1400
//! ```

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::comfort::*;
use crate::errors::ScoringError;

/// One comfort criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Criterion {
    /// Air temperature in °C
    Temperature,
    /// CO2 concentration in ppm
    Co2,
    /// Relative humidity in %
    Humidity,
    /// Sound level in dB
    Sound,
}

impl Criterion {
    /// All criteria in scoring order
    pub const ALL: [Criterion; 4] = [
        Criterion::Temperature,
        Criterion::Co2,
        Criterion::Humidity,
        Criterion::Sound,
    ];

    /// Stable lowercase name, used as map key in score output
    pub const fn name(self) -> &'static str {
        match self {
            Criterion::Temperature => "temperature",
            Criterion::Co2 => "co2",
            Criterion::Humidity => "humidity",
            Criterion::Sound => "sound",
        }
    }

    /// Display unit
    pub const fn unit(self) -> &'static str {
        match self {
            Criterion::Temperature => "°C",
            Criterion::Co2 => "ppm",
            Criterion::Humidity => "%",
            Criterion::Sound => "dB",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Criterion {
    type Err = ScoringError;

    /// Case-insensitive; accepts the canonical names plus `temp` and `noise`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const ALIASES: [(&str, Criterion); 6] = [
            ("temperature", Criterion::Temperature),
            ("temp", Criterion::Temperature),
            ("co2", Criterion::Co2),
            ("humidity", Criterion::Humidity),
            ("sound", Criterion::Sound),
            ("noise", Criterion::Sound),
        ];

        let s = s.trim();
        ALIASES
            .iter()
            .find(|(alias, _)| alias.eq_ignore_ascii_case(s))
            .map(|&(_, criterion)| criterion)
            .ok_or(ScoringError::UnknownCriterion)
    }
}

/// Qualitative band a raw reading falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ComfortBand {
    /// Scores 100
    Ideal,
    /// Scores in the upper sub-range (80-100, CO2 90-100)
    Good,
    /// Scores in the middle sub-range (50-80)
    Acceptable,
    /// Scores below 50
    Poor,
}

impl ComfortBand {
    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            ComfortBand::Ideal => "Ideal - no improvement possible",
            ComfortBand::Good => "Good - comfortable for most occupants",
            ComfortBand::Acceptable => "Acceptable - noticeable but tolerable",
            ComfortBand::Poor => "Poor - likely to cause discomfort",
        }
    }
}

/// Temperature bands (two-sided around an ideal point)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TemperatureThresholds {
    /// Ideal point (°C)
    pub ideal: f64,
    /// Good band lower edge, inclusive
    pub good_min: f64,
    /// Good band upper edge, inclusive
    pub good_max: f64,
    /// Acceptable band lower edge, inclusive
    pub acceptable_min: f64,
    /// Acceptable band upper edge, inclusive
    pub acceptable_max: f64,
    /// Score lost per degree beyond the acceptable band
    pub poor_decay: f64,
}

impl TemperatureThresholds {
    /// Standard table
    pub const fn standard() -> Self {
        Self {
            ideal: TEMP_IDEAL_C,
            good_min: TEMP_GOOD_MIN_C,
            good_max: TEMP_GOOD_MAX_C,
            acceptable_min: TEMP_ACCEPTABLE_MIN_C,
            acceptable_max: TEMP_ACCEPTABLE_MAX_C,
            poor_decay: TEMP_POOR_DECAY_PER_C,
        }
    }

    /// Classify a reading against the default ideal
    pub fn band(&self, value: f64) -> ComfortBand {
        if value == self.ideal {
            ComfortBand::Ideal
        } else if self.good_min <= value && value <= self.good_max {
            ComfortBand::Good
        } else if self.acceptable_min <= value && value <= self.acceptable_max {
            ComfortBand::Acceptable
        } else {
            ComfortBand::Poor
        }
    }
}

/// CO2 bands (one-sided, lower is better)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Co2Thresholds {
    /// At or below this, score is 100 (ppm)
    pub ideal: f64,
    /// Good band upper edge, inclusive
    pub good_max: f64,
    /// Acceptable band upper edge, inclusive
    pub acceptable_max: f64,
    /// Medium band upper edge, inclusive; poor decay starts above it
    pub poor_threshold: f64,
    /// Score at `good_max`
    pub good_floor: f64,
    /// Score at `acceptable_max`
    pub acceptable_floor: f64,
    /// Score lost per ppm above `poor_threshold`
    pub poor_decay: f64,
}

impl Co2Thresholds {
    /// Standard table
    pub const fn standard() -> Self {
        Self {
            ideal: CO2_IDEAL_PPM,
            good_max: CO2_GOOD_MAX_PPM,
            acceptable_max: CO2_ACCEPTABLE_MAX_PPM,
            poor_threshold: CO2_POOR_THRESHOLD_PPM,
            good_floor: CO2_SCORE_GOOD_FLOOR,
            acceptable_floor: CO2_SCORE_ACCEPTABLE_FLOOR,
            poor_decay: CO2_POOR_DECAY_PER_PPM,
        }
    }

    /// Classify a reading against the default ideal
    pub fn band(&self, value: f64) -> ComfortBand {
        if value <= self.ideal {
            ComfortBand::Ideal
        } else if value <= self.good_max {
            ComfortBand::Good
        } else if value <= self.poor_threshold {
            ComfortBand::Acceptable
        } else {
            ComfortBand::Poor
        }
    }
}

/// Humidity bands (two-sided around an ideal range)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HumidityThresholds {
    /// Ideal range lower edge, inclusive
    pub ideal_min: f64,
    /// Ideal range upper edge, inclusive
    pub ideal_max: f64,
    /// Good band lower edge, inclusive
    pub good_min: f64,
    /// Good band upper edge, inclusive
    pub good_max: f64,
    /// Acceptable band lower edge, inclusive
    pub acceptable_min: f64,
    /// Acceptable band upper edge, inclusive
    pub acceptable_max: f64,
    /// Half-width of the ideal window around a custom ideal
    pub custom_half_width: f64,
    /// Score lost per percentage point beyond the acceptable band
    pub poor_decay: f64,
}

impl HumidityThresholds {
    /// Standard table
    pub const fn standard() -> Self {
        Self {
            ideal_min: HUMIDITY_IDEAL_MIN_PCT,
            ideal_max: HUMIDITY_IDEAL_MAX_PCT,
            good_min: HUMIDITY_GOOD_MIN_PCT,
            good_max: HUMIDITY_GOOD_MAX_PCT,
            acceptable_min: HUMIDITY_ACCEPTABLE_MIN_PCT,
            acceptable_max: HUMIDITY_ACCEPTABLE_MAX_PCT,
            custom_half_width: HUMIDITY_CUSTOM_IDEAL_HALF_WIDTH_PCT,
            poor_decay: HUMIDITY_POOR_DECAY_PER_PCT,
        }
    }

    /// Classify a reading against the default ideal range
    pub fn band(&self, value: f64) -> ComfortBand {
        if self.ideal_min <= value && value <= self.ideal_max {
            ComfortBand::Ideal
        } else if self.good_min <= value && value <= self.good_max {
            ComfortBand::Good
        } else if self.acceptable_min <= value && value <= self.acceptable_max {
            ComfortBand::Acceptable
        } else {
            ComfortBand::Poor
        }
    }
}

/// Sound bands (one-sided, lower is better)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SoundThresholds {
    /// At or below this, score is 100 (dB)
    pub ideal: f64,
    /// Good band upper edge, inclusive
    pub good_max: f64,
    /// Acceptable band upper edge, inclusive
    pub acceptable_max: f64,
    /// Level where the poor decay reaches zero
    pub poor_threshold: f64,
}

impl SoundThresholds {
    /// Standard table
    pub const fn standard() -> Self {
        Self {
            ideal: SOUND_IDEAL_DB,
            good_max: SOUND_GOOD_MAX_DB,
            acceptable_max: SOUND_ACCEPTABLE_MAX_DB,
            poor_threshold: SOUND_POOR_THRESHOLD_DB,
        }
    }

    /// Classify a reading against the default ideal
    pub fn band(&self, value: f64) -> ComfortBand {
        if value <= self.ideal {
            ComfortBand::Ideal
        } else if value <= self.good_max {
            ComfortBand::Good
        } else if value <= self.acceptable_max {
            ComfortBand::Acceptable
        } else {
            ComfortBand::Poor
        }
    }
}

/// Threshold tables for all four criteria
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CriteriaThresholds {
    /// Temperature table
    pub temperature: TemperatureThresholds,
    /// CO2 table
    pub co2: Co2Thresholds,
    /// Humidity table
    pub humidity: HumidityThresholds,
    /// Sound table
    pub sound: SoundThresholds,
}

impl CriteriaThresholds {
    /// Standard tables built from [`crate::constants::comfort`]
    pub const fn standard() -> Self {
        Self {
            temperature: TemperatureThresholds::standard(),
            co2: Co2Thresholds::standard(),
            humidity: HumidityThresholds::standard(),
            sound: SoundThresholds::standard(),
        }
    }

    /// Classify a raw reading of any criterion
    pub fn band(&self, criterion: Criterion, value: f64) -> ComfortBand {
        match criterion {
            Criterion::Temperature => self.temperature.band(value),
            Criterion::Co2 => self.co2.band(value),
            Criterion::Humidity => self.humidity.band(value),
            Criterion::Sound => self.sound.band(value),
        }
    }
}

impl Default for CriteriaThresholds {
    fn default() -> Self {
        Self::standard()
    }
}

/// Process-wide standard threshold tables
pub static STANDARD_THRESHOLDS: CriteriaThresholds = CriteriaThresholds::standard();
