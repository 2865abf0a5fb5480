//! Scoring Configurations and Named Profiles
//!
//! ## Overview
//!
//! `comfortroom-core` takes weights, an optional desired profile and
//! optional facility requirements as plain values. This crate gives those
//! values a durable form:
//!
//! - [`ScoringConfig`]: one JSON document bundling all three, loadable from
//!   a string, a reader or a file.
//! - [`ProfileRegistry`]: a thread-safe collection of named configs, seeded
//!   with the built-in profiles shipped in `profiles/`.
//!
//! ## Document Format
//!
//! ```json
//! {
//!   "description": "Silent individual study in a small room",
//!   "weights": { "temperature": 0.20, "co2": 0.25, "humidity": 0.10, "sound": 0.45 },
//!   "desired_profile": { "sound": 28.0 },
//!   "requirements": { "min_power_outlets": 2 }
//! }
//! ```
//!
//! Every field is optional. Missing weights take the standard values
//! (0.25 / 0.30 / 0.20 / 0.25); missing profile and requirements mean "no
//! override" and "no filter".
//!
//! ## Built-in Profiles
//!
//! | Name           | Emphasis                                    |
//! |----------------|---------------------------------------------|
//! | `default`      | standard weights                            |
//! | `air_quality`  | CO2 at 50%                                  |
//! | `quiet_study`  | sound at 45%, 28 dB reference               |
//! | `warm_and_dry` | 23.5 °C and a 37-47% humidity window        |
//! | `presentation` | projector, step-free access, 20+ seats      |
//!
//! ## Usage Example
//!
//! ```rust
//! use comfortroom_core::{RoomSnapshot, SensorReading};
//! use comfortroom_schemas::GLOBAL_REGISTRY;
//!
//! let config = GLOBAL_REGISTRY.get("air_quality")?;
//! let rooms = vec![
//!     RoomSnapshot::new(1, SensorReading::new(22.0, 1100.0, 50.0, 30.0)),
//!     RoomSnapshot::new(2, SensorReading::new(25.0, 600.0, 50.0, 30.0)),
//! ];
//!
//! let ranked = config.rank(&rooms);
//! assert_eq!(ranked[0].room_id, 2);
//! # Ok::<(), comfortroom_schemas::SchemaError>(())
//! ```

pub mod config;
pub mod registry;

pub use config::ScoringConfig;
pub use registry::{ProfileRegistry, GLOBAL_REGISTRY};

/// Configuration errors
#[derive(Debug, thiserror_no_std::Error)]
pub enum SchemaError {
    /// Document is not valid JSON or has the wrong shape
    #[error("Failed to parse config: {0}")]
    Parse(String),

    /// No profile under the requested name
    #[error("Profile not found: {0}")]
    NotFound(String),

    /// File could not be read
    #[error("I/O error: {0}")]
    Io(String),

    /// Document parsed but its values cannot be used
    #[error("Validation failed: {0}")]
    Validation(String),
}

impl From<serde_json::Error> for SchemaError {
    fn from(err: serde_json::Error) -> Self {
        SchemaError::Parse(err.to_string())
    }
}

impl From<std::io::Error> for SchemaError {
    fn from(err: std::io::Error) -> Self {
        SchemaError::Io(err.to_string())
    }
}
