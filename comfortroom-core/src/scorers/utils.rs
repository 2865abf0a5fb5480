//! Shared Scoring Utilities
//!
//! ## Overview
//!
//! Every criterion scorer is built from the same three operations:
//!
//! 1. **Interpolation** inside a band: a reading at the inner edge of the
//!    band gets the high end of the band's score range, a reading at the
//!    outer edge gets the low end, and everything in between is linear.
//! 2. **Decay** beyond the last band: a fixed number of points lost per unit
//!    of distance, floored at zero.
//! 3. **Ideal resolution**: a caller-supplied ideal is checked for
//!    finiteness and, for the point-shift criteria, clamped into the range
//!    where interpolation stays well-defined.
//!
//! ```text
//!  high ┤●
//!       │  ●
//!       │     ●            score = high - (distance / width) × (high - low)
//!   low ┤        ●
//!       └──┬──────┬──
//!        inner  outer
//! ```
//!
//! All functions are pure and allocation free.

use crate::{
    constants::comfort::{SCORE_MAX, SCORE_MIN},
    criteria::Criterion,
    errors::{ScoringError, ScoringResult},
    traits::Scorable,
};

/// Reject non-finite readings
pub fn check_value(criterion: Criterion, value: f64) -> ScoringResult<()> {
    if value.is_scorable() {
        Ok(())
    } else {
        Err(ScoringError::InvalidValue { criterion })
    }
}

/// Linear interpolation inside a band
///
/// `distance` is measured from the inner edge; `width` is the band width.
/// Callers guarantee `width > 0`, which every branch in the scorers does by
/// construction (the band is only entered when it is non-empty).
pub fn interpolate(distance: f64, width: f64, high: f64, low: f64) -> f64 {
    high - (distance / width) * (high - low)
}

/// Linear decay beyond the last band, floored at zero
pub fn decay(start: f64, distance: f64, per_unit: f64) -> f64 {
    (start - distance * per_unit).max(SCORE_MIN)
}

/// Clamp a score into `[0, 100]`
///
/// NaN maps to 0.
pub fn clamp_score(score: f64) -> f64 {
    if score > SCORE_MIN {
        score.min(SCORE_MAX)
    } else {
        SCORE_MIN
    }
}

/// Reject a non-finite custom ideal
pub fn check_ideal(criterion: Criterion, ideal: f64) -> ScoringResult<f64> {
    if ideal.is_scorable() {
        Ok(ideal)
    } else {
        Err(ScoringError::InvalidIdeal { criterion })
    }
}

/// Resolve the ideal reference point for a criterion
///
/// `None` selects the table default. A non-finite custom ideal is rejected;
/// a finite one is clamped into `[min, max]` so interpolation spans stay
/// positive.
pub fn resolve_ideal(
    criterion: Criterion,
    custom: Option<f64>,
    default: f64,
    min: f64,
    max: f64,
) -> ScoringResult<f64> {
    let Some(ideal) = custom else {
        return Ok(default);
    };

    let ideal = check_ideal(criterion, ideal)?;
    let clamped = ideal.clamp(min, max);
    if clamped != ideal {
        log_debug!(
            "{} ideal {} outside [{}, {}], clamped to {}",
            criterion, ideal, min, max, clamped
        );
    }
    Ok(clamped)
}

/// Round to one decimal place, ties to even
///
/// Rounds the exact decimal value of `value`, not the product `value * 10`.
/// The product is itself rounded to the nearest double and can land on a
/// `.5` that the input never had: 53.45 is stored as 53.4500000000000028...
/// but `53.45 * 10.0 == 534.5`. The fused multiply-add recovers the error of
/// that product, and only a product with no error is a genuine tie. Genuine
/// ties (e.g. 97.25) go to the even neighbour.
pub fn round_one_decimal(value: f64) -> f64 {
    let scaled = value * 10.0;
    let error = libm::fma(value, 10.0, -scaled);
    let floor = libm::floor(scaled);

    let rounded = if scaled - floor == 0.5 && error != 0.0 {
        if error > 0.0 {
            floor + 1.0
        } else {
            floor
        }
    } else {
        libm::rint(scaled)
    };
    rounded / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolation_endpoints() {
        assert_eq!(interpolate(0.0, 2.0, 100.0, 80.0), 100.0);
        assert_eq!(interpolate(2.0, 2.0, 100.0, 80.0), 80.0);
        assert_eq!(interpolate(1.0, 2.0, 100.0, 80.0), 90.0);
    }

    #[test]
    fn decay_floors_at_zero() {
        assert_eq!(decay(50.0, 2.0, 10.0), 30.0);
        assert_eq!(decay(50.0, 10.0, 10.0), 0.0);
    }

    #[test]
    fn clamp_bounds() {
        assert_eq!(clamp_score(120.0), 100.0);
        assert_eq!(clamp_score(-3.0), 0.0);
        assert_eq!(clamp_score(42.5), 42.5);
        assert_eq!(clamp_score(f64::NAN), 0.0);
        assert_eq!(clamp_score(f64::INFINITY), 100.0);
    }

    #[test]
    fn ideal_resolution() {
        let c = Criterion::Temperature;
        assert_eq!(resolve_ideal(c, None, 22.0, 20.0, 24.0), Ok(22.0));
        assert_eq!(resolve_ideal(c, Some(23.0), 22.0, 20.0, 24.0), Ok(23.0));
        assert_eq!(resolve_ideal(c, Some(30.0), 22.0, 20.0, 24.0), Ok(24.0));
        assert_eq!(
            resolve_ideal(c, Some(f64::NAN), 22.0, 20.0, 24.0),
            Err(ScoringError::InvalidIdeal { criterion: c })
        );
    }

    #[test]
    fn rounding_ties_to_even() {
        assert_eq!(round_one_decimal(97.25), 97.2);
        assert_eq!(round_one_decimal(12.75), 12.8);
        assert_eq!(round_one_decimal(81.375), 81.4);
        assert_eq!(round_one_decimal(92.0), 92.0);
    }

    #[test]
    fn rounding_uses_the_stored_decimal_value() {
        // 53.45 is stored slightly above the tie, 0.15 slightly below
        assert_eq!(round_one_decimal(53.45), 53.5);
        assert_eq!(round_one_decimal(81.65), 81.7);
        assert_eq!(round_one_decimal(0.15), 0.1);
        assert_eq!(round_one_decimal(2.675), 2.7);
        assert_eq!(round_one_decimal(-53.45), -53.5);
    }

    #[test]
    fn ideal_check() {
        let c = Criterion::Humidity;
        assert_eq!(check_ideal(c, 65.0), Ok(65.0));
        assert_eq!(check_ideal(c, -20.0), Ok(-20.0));
        assert_eq!(
            check_ideal(c, f64::NEG_INFINITY),
            Err(ScoringError::InvalidIdeal { criterion: c })
        );
    }
}
