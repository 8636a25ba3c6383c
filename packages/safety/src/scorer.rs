//! Safety scoring for a single coordinate.
//!
//! The score is synthetic: a deterministic term derived from the coordinate
//! plus a random term drawn from an [`EntropySource`]. It is not based on
//! real crime or accident data.

use safet_safety_models::{RiskLevel, SafetyMetrics};

use crate::entropy::EntropySource;

/// Upper bound (exclusive) of the coordinate-derived base risk.
pub const BASE_RISK_MODULUS: f64 = 30.0;

/// Upper bound (exclusive) of the random term.
pub const RANDOM_FACTOR_SCALE: f64 = 20.0;

/// Weight of the base risk in the accident rate.
const ACCIDENT_BASE_WEIGHT: f64 = 0.8;

/// Weight of the random term in the accident rate.
const ACCIDENT_RANDOM_WEIGHT: f64 = 0.7;

/// Returns the deterministic base risk for a coordinate, in `[0, 30)`.
#[must_use]
pub fn base_risk(lat: f64, lng: f64) -> f64 {
    (lat.abs() + lng.abs()) % BASE_RISK_MODULUS
}

/// Scores a coordinate.
///
/// Inputs are not range-checked here; non-finite inputs yield meaningless
/// (but still in-range) metrics and must be rejected by the caller.
#[must_use]
pub fn score(lat: f64, lng: f64, entropy: &dyn EntropySource) -> SafetyMetrics {
    let base = base_risk(lat, lng);
    let random_factor = entropy.sample() * RANDOM_FACTOR_SCALE;

    let crime = clamp_rate(base + random_factor);
    let accident = clamp_rate(
        base.mul_add(
            ACCIDENT_BASE_WEIGHT,
            random_factor * ACCIDENT_RANDOM_WEIGHT,
        ),
    );

    let crime_rate = round_rate(crime);
    let accident_rate = round_rate(accident);
    let overall_safety = overall_safety(crime_rate, accident_rate);

    log::trace!(
        "score: lat={lat} lng={lng} base={base:.3} random={random_factor:.3} \
         crime={crime_rate} accident={accident_rate} overall={overall_safety}"
    );

    SafetyMetrics {
        crime_rate,
        accident_rate,
        overall_safety,
        risk_level: RiskLevel::from_overall_safety(overall_safety),
    }
}

/// `round(100 - (crime_rate + accident_rate) / 2)`.
#[must_use]
pub fn overall_safety(crime_rate: u8, accident_rate: u8) -> u8 {
    let mean = (f64::from(crime_rate) + f64::from(accident_rate)) / 2.0;
    round_rate(100.0 - mean)
}

fn clamp_rate(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 100.0)
}

/// Rounds half away from zero and saturates into `0..=100`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_rate(value: f64) -> u8 {
    clamp_rate(value).round() as u8
}
