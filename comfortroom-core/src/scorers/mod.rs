//! Per-Criterion Comfort Scorers
//!
//! ## Overview
//!
//! Each scorer turns one raw measurement into a 0-100 comfort score using
//! piecewise-linear bands from [`crate::criteria`]. Scorers are pure: they
//! borrow a threshold table, hold no other state, and can be called from any
//! number of threads at once.
//!
//! ## Band Layout
//!
//! Every curve has the same skeleton:
//!
//! | Band        | Score range | Shape                                   |
//! |-------------|-------------|-----------------------------------------|
//! | Ideal       | 100         | point, range, or "at or below"           |
//! | Good        | 80-100      | linear from the ideal to the good edge   |
//! | Acceptable  | 50-80       | linear from the good edge outwards       |
//! | Poor        | 0-50        | decay, floored at zero                   |
//!
//! CO2 differs in detail (90-100 good, an extra 50-70 medium band) because
//! 600-800 ppm is unremarkable in an occupied room.
//!
//! ## Custom Ideals
//!
//! A [`crate::reading::DesiredProfile`] can override each criterion's ideal:
//!
//! - **Temperature, CO2, sound**: the override moves the single reference
//!   point used inside the good band. Band edges do not move.
//! - **Humidity**: the override replaces the ideal *range* with a ±5% window.
//!   Good and acceptable edges do not move.
//!
//! The two behaviours are intentionally different and must stay that way:
//! callers compare scores across releases.
//!
//! Point overrides are clamped so every interpolation span stays positive
//! (see [`utils::resolve_ideal`]). Humidity windows need no clamp: a good
//! branch is only entered when its span is positive. Non-finite overrides
//! are rejected.
//!
//! ## Usage Example
//!
//! ```rust
//! use comfortroom_core::scorers::{TemperatureScorer, Co2Scorer};
//! use comfortroom_core::{CriterionScorer, STANDARD_THRESHOLDS};
//!
//! let temperature = TemperatureScorer::new(&STANDARD_THRESHOLDS.temperature);
//! let co2 = Co2Scorer::new(&STANDARD_THRESHOLDS.co2);
//!
//! assert_eq!(temperature.score(22.0, None)?, 100.0);
//! assert_eq!(co2.score(1200.0, None)?, 60.0);
//!
//! // Prefers a warmer room
//! assert_eq!(temperature.score(23.0, Some(23.0))?, 100.0);
//! # Ok::<(), comfortroom_core::ScoringError>(())
//! ```

mod temperature;
mod co2;
mod humidity;
mod sound;
pub mod utils;

pub use temperature::TemperatureScorer;
pub use co2::Co2Scorer;
pub use humidity::HumidityScorer;
pub use sound::SoundScorer;
