#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Location safety checks.
//!
//! Turns a coordinate into a [`SafetyResult`]: a synthetic safety score
//! ([`scorer`]), three nearby emergency services ([`emergency`]), and a list
//! of recommendations ([`recommendations`]).
//!
//! Coordinate input arrives as raw strings from the query string and is
//! validated by [`parse_coordinate`] before anything is scored.

pub mod emergency;
pub mod entropy;
pub mod recommendations;
pub mod scorer;

use chrono::{DateTime, SecondsFormat, Utc};
use safet_safety_models::{Coordinate, LocationData, SafetyResult};
use thiserror::Error;

use crate::entropy::EntropySource;

/// Errors from validating safety-check input.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ValidationError {
    /// A coordinate was absent, unparsable, non-finite, or zero.
    #[error("Latitude and longitude are required")]
    MissingCoordinates,

    /// A coordinate was outside the WGS84 range.
    #[error("Latitude must be between -90 and 90 and longitude between -180 and 180")]
    OutOfRange {
        /// The rejected latitude.
        lat: f64,
        /// The rejected longitude.
        lng: f64,
    },
}

/// Parses and validates raw `lat`/`lng` query values.
///
/// A value of exactly `0` for either coordinate is treated as missing, so
/// points on the equator or the prime meridian are rejected. Existing
/// clients depend on this.
///
/// # Errors
///
/// * [`ValidationError::MissingCoordinates`] if either value is absent,
///   blank, not a number, non-finite, or zero
/// * [`ValidationError::OutOfRange`] if the point lies outside
///   lat `[-90, 90]` / lng `[-180, 180]`
pub fn parse_coordinate(
    lat: Option<&str>,
    lng: Option<&str>,
) -> Result<Coordinate, ValidationError> {
    let (Some(lat), Some(lng)) = (parse_component(lat), parse_component(lng)) else {
        return Err(ValidationError::MissingCoordinates);
    };

    let coordinate = Coordinate::new(lat, lng);
    if !coordinate.is_in_range() {
        return Err(ValidationError::OutOfRange { lat, lng });
    }

    Ok(coordinate)
}

fn parse_component(raw: Option<&str>) -> Option<f64> {
    let value: f64 = raw?.trim().parse().ok()?;
    if !value.is_finite() || value == 0.0 {
        return None;
    }
    Some(value)
}

/// Formats a coordinate as `"{lat:.4}, {lng:.4}"`.
#[must_use]
pub fn format_address(coordinate: Coordinate) -> String {
    format!("{:.4}, {:.4}", coordinate.lat, coordinate.lng)
}

/// Runs a full safety check for an already-validated coordinate.
///
/// `address` is echoed back when present and non-empty; otherwise the
/// coordinate is formatted with [`format_address`]. `now` becomes the
/// result's timestamp.
#[must_use]
pub fn assess(
    coordinate: Coordinate,
    address: Option<&str>,
    entropy: &dyn EntropySource,
    now: DateTime<Utc>,
) -> SafetyResult {
    let safety = scorer::score(coordinate.lat, coordinate.lng, entropy);
    let recommendations = recommendations::recommend(&safety);
    let emergency_centers = emergency::nearby_emergency_centers(coordinate);

    let address = address
        .filter(|a| !a.is_empty())
        .map_or_else(|| format_address(coordinate), ToString::to_string);

    log::debug!(
        "assess: ({}, {}) overall={} risk={}",
        coordinate.lat,
        coordinate.lng,
        safety.overall_safety,
        safety.risk_level
    );

    SafetyResult {
        location: LocationData {
            lat: coordinate.lat,
            lng: coordinate.lng,
            address,
        },
        safety,
        emergency_centers,
        recommendations,
        timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}
