//! Comfort Band Boundaries
//!
//! Band boundaries for the four comfort criteria, and the score each band
//! maps to. Values are calibrated against indoor environment standards:
//!
//! - EN 16798-1:2019 (indoor environmental input parameters)
//! - ISO 7730:2005 (thermal comfort)
//! - ASHRAE Standards 55 and 62.1
//! - WHO Housing and Health Guidelines
//!
//! Inclusive/exclusive edges matter: the scorers in [`crate::scorers`] compare
//! against these values with the exact operators documented on each band.

// ===== SCORE ANCHORS =====

/// Highest comfort score (ideal conditions).
pub const SCORE_MAX: f64 = 100.0;

/// Lowest comfort score.
pub const SCORE_MIN: f64 = 0.0;

/// Score at the outer edge of the "good" band for temperature, humidity
/// and sound.
pub const SCORE_GOOD_FLOOR: f64 = 80.0;

/// Score at the outer edge of the "acceptable" band. Poor-band decay
/// starts from here for every criterion.
pub const SCORE_ACCEPTABLE_FLOOR: f64 = 50.0;

// ===== TEMPERATURE (°C) =====

/// Ideal operative temperature (°C).
///
/// Centre of the category II winter/summer overlap for sedentary
/// office work.
///
/// Source: EN 16798-1:2019 Annex B, ISO 7730:2005
pub const TEMP_IDEAL_C: f64 = 22.0;

/// Lower edge of the good temperature band (°C, inclusive).
///
/// Source: ASHRAE Standard 55-2020, Section 5.3
pub const TEMP_GOOD_MIN_C: f64 = 20.0;

/// Upper edge of the good temperature band (°C, inclusive).
///
/// Source: ASHRAE Standard 55-2020, Section 5.3
pub const TEMP_GOOD_MAX_C: f64 = 24.0;

/// Lower edge of the acceptable temperature band (°C, inclusive).
///
/// Source: EN 16798-1:2019 category III
pub const TEMP_ACCEPTABLE_MIN_C: f64 = 18.0;

/// Upper edge of the acceptable temperature band (°C, inclusive).
///
/// Source: EN 16798-1:2019 category III
pub const TEMP_ACCEPTABLE_MAX_C: f64 = 26.0;

/// Score lost per degree outside the acceptable band.
///
/// 5°C past either edge reaches zero.
pub const TEMP_POOR_DECAY_PER_C: f64 = 10.0;

// ===== CO2 (ppm, lower is better) =====

/// CO2 level at or below which air is rated ideal (ppm).
///
/// Roughly 200 ppm above outdoor background.
///
/// Source: EN 16798-1:2019 category I
pub const CO2_IDEAL_PPM: f64 = 600.0;

/// Upper edge of the good CO2 band (ppm, inclusive).
///
/// Source: EN 16798-1:2019 category II
pub const CO2_GOOD_MAX_PPM: f64 = 800.0;

/// Upper edge of the acceptable CO2 band (ppm, inclusive).
///
/// Source: ASHRAE Standard 62.1 guidance (~700 ppm above outdoor)
pub const CO2_ACCEPTABLE_MAX_PPM: f64 = 1000.0;

/// Upper edge of the medium CO2 band (ppm, inclusive). Above this the
/// poor decay applies.
///
/// Source: EN 16798-1:2019 category III
pub const CO2_POOR_THRESHOLD_PPM: f64 = 1400.0;

/// Score at the outer edge of the good CO2 band.
///
/// CO2 uses a gentler good band than the other criteria.
pub const CO2_SCORE_GOOD_FLOOR: f64 = 90.0;

/// Score at the outer edge of the acceptable CO2 band.
pub const CO2_SCORE_ACCEPTABLE_FLOOR: f64 = 70.0;

/// Score lost per ppm above [`CO2_POOR_THRESHOLD_PPM`].
///
/// 500 ppm past the threshold (1900 ppm) reaches zero.
pub const CO2_POOR_DECAY_PER_PPM: f64 = 0.1;

// ===== HUMIDITY (% RH) =====

/// Lower edge of the ideal humidity range (%, inclusive).
///
/// Source: WHO Housing and Health Guidelines, EN 16798-1:2019
pub const HUMIDITY_IDEAL_MIN_PCT: f64 = 45.0;

/// Upper edge of the ideal humidity range (%, inclusive).
pub const HUMIDITY_IDEAL_MAX_PCT: f64 = 55.0;

/// Lower edge of the good humidity band (%, inclusive).
pub const HUMIDITY_GOOD_MIN_PCT: f64 = 40.0;

/// Upper edge of the good humidity band (%, inclusive).
pub const HUMIDITY_GOOD_MAX_PCT: f64 = 60.0;

/// Lower edge of the acceptable humidity band (%, inclusive).
///
/// Below this, occupants report dry eyes and static build-up.
///
/// Source: ASHRAE Standard 55-2020, Section 5.2
pub const HUMIDITY_ACCEPTABLE_MIN_PCT: f64 = 30.0;

/// Upper edge of the acceptable humidity band (%, inclusive).
///
/// Above this, mould and dust mite growth accelerate.
///
/// Source: WHO Housing and Health Guidelines
pub const HUMIDITY_ACCEPTABLE_MAX_PCT: f64 = 70.0;

/// Half-width of the ideal window built around a custom humidity ideal (%).
pub const HUMIDITY_CUSTOM_IDEAL_HALF_WIDTH_PCT: f64 = 5.0;

/// Score lost per percentage point outside the acceptable band.
///
/// 20% past either edge reaches zero.
pub const HUMIDITY_POOR_DECAY_PER_PCT: f64 = 2.5;

// ===== SOUND (dB, lower is better) =====

/// Sound level at or below which a room is rated ideal (dB).
///
/// Quiet library / recording-room background.
///
/// Source: WHO guidelines for community noise
pub const SOUND_IDEAL_DB: f64 = 30.0;

/// Upper edge of the good sound band (dB, inclusive).
///
/// Source: EN 16798-1:2019 Annex, offices and classrooms
pub const SOUND_GOOD_MAX_DB: f64 = 35.0;

/// Upper edge of the acceptable sound band (dB, inclusive).
///
/// Normal conversation starts to be disturbing above this.
pub const SOUND_ACCEPTABLE_MAX_DB: f64 = 45.0;

/// Sound level at which the poor decay reaches zero (dB).
pub const SOUND_POOR_THRESHOLD_DB: f64 = 55.0;
