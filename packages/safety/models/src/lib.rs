#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Safety score, risk tier, and emergency center types.
//!
//! These are the shapes returned by `GET /api/safety`. Field names are
//! serialized in camelCase to match the frontend's `SafetyResult` contract.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// A WGS84 point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}

impl Coordinate {
    /// Creates a new coordinate.
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Returns `true` if both components are finite numbers.
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }

    /// Returns `true` if latitude is within `[-90, 90]` and longitude is
    /// within `[-180, 180]`.
    #[must_use]
    pub fn is_in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }

    /// Returns this coordinate shifted by the given deltas.
    #[must_use]
    pub fn offset(&self, d_lat: f64, d_lng: f64) -> Self {
        Self::new(self.lat + d_lat, self.lng + d_lng)
    }
}

/// Risk tier derived from an overall safety score.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    /// Overall safety 75 and above.
    Low,
    /// Overall safety 50-74.
    Medium,
    /// Overall safety 25-49.
    High,
    /// Overall safety below 25.
    Critical,
}

impl RiskLevel {
    /// Maps an overall safety score to its risk tier.
    ///
    /// Each tier includes its lower bound: 75 is `Low`, 50 is `Medium`,
    /// 25 is `High`.
    #[must_use]
    pub const fn from_overall_safety(overall_safety: u8) -> Self {
        match overall_safety {
            75.. => Self::Low,
            50..=74 => Self::Medium,
            25..=49 => Self::High,
            _ => Self::Critical,
        }
    }

    /// Returns all variants of this enum, safest first.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Low, Self::Medium, Self::High, Self::Critical]
    }
}

/// Safety metrics for a single point.
///
/// All scores are integers in `0..=100`. `overall_safety` is always
/// `round(100 - (crime_rate + accident_rate) / 2)` and `risk_level` is
/// always [`RiskLevel::from_overall_safety`] of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyMetrics {
    /// Crime rate, higher means more crime.
    pub crime_rate: u8,
    /// Accident rate, higher means more accidents.
    pub accident_rate: u8,
    /// Overall safety, higher means safer.
    pub overall_safety: u8,
    /// Risk tier for `overall_safety`.
    pub risk_level: RiskLevel,
}

/// Kind of emergency service.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EmergencyCenterType {
    /// Hospital.
    Hospital,
    /// Police station.
    Police,
    /// Fire station.
    Fire,
}

/// A nearby emergency service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmergencyCenter {
    /// Kind of service.
    #[serde(rename = "type")]
    pub center_type: EmergencyCenterType,
    /// Display name.
    pub name: String,
    /// Human-readable distance (e.g. `"1.2 km"`).
    pub distance: String,
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lng: f64,
}

/// The queried location as echoed back to the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationData {
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lng: f64,
    /// Caller-supplied address, or `"{lat:.4}, {lng:.4}"` when none was given.
    pub address: String,
}

/// Full result of a safety check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyResult {
    /// Where the check was made.
    pub location: LocationData,
    /// Computed metrics.
    pub safety: SafetyMetrics,
    /// Nearby emergency services.
    pub emergency_centers: Vec<EmergencyCenter>,
    /// Advice derived from `safety`.
    pub recommendations: Vec<String>,
    /// When the check was made (RFC 3339, UTC, millisecond precision).
    pub timestamp: String,
}
