//! Core comfort engine for ComfortRoom
//!
//! Turns live environmental readings (temperature, CO2, humidity, sound)
//! into 0-100 comfort scores and ranks rooms by them.
//! Pure computation: no I/O, no shared mutable state.
//!
//! Key properties:
//! - Scoring is total over finite inputs; missing sensors are renormalised away
//! - Threshold tables are immutable and injected, never global mutable state
//! - `no_std` + `alloc` capable
//!
//! ```rust
//! use comfortroom_core::{rank_rooms, score_room, RoomSnapshot, SensorReading, Weights};
//!
//! let reading = SensorReading::new(21.0, 550.0, 55.0, 28.0);
//! let result = score_room(&reading, &Weights::default(), None);
//! assert_eq!(result.final_score, 97.5);
//!
//! let rooms = vec![
//!     RoomSnapshot::new(1, SensorReading::default().with_co2(1200.0)),
//!     RoomSnapshot::new(2, reading),
//! ];
//! let ranked = rank_rooms(&rooms, &Weights::default(), None);
//! assert_eq!(ranked[0].room_id, 2);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

#[macro_use]
mod macros;

pub mod aggregate;
pub mod constants;
pub mod criteria;
pub mod errors;
pub mod ranking;
pub mod reading;
pub mod scorers;
pub mod traits;

// Public API
pub use aggregate::{score_room, ComfortScorer, ScoreResult};
pub use criteria::{ComfortBand, CriteriaThresholds, Criterion, STANDARD_THRESHOLDS};
pub use errors::{ScoringError, ScoringResult};
pub use ranking::{rank_rooms, recommend, Facilities, RankedRoom, RoomRequirements, RoomSnapshot};
pub use reading::{DesiredProfile, SensorReading, Weights};
pub use scorers::{Co2Scorer, HumidityScorer, SoundScorer, TemperatureScorer};
pub use traits::{CriterionScorer, Scorable};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
