//! Human-readable advice for a set of safety metrics.

use safet_safety_models::{RiskLevel, SafetyMetrics};

/// Rates strictly above this trigger an additional warning.
pub const HIGH_RATE_THRESHOLD: u8 = 60;

/// Warning added when the accident rate exceeds [`HIGH_RATE_THRESHOLD`].
pub const HIGH_ACCIDENT_RATE: &str = "🚗 High accident rate - drive carefully";

/// Warning added when the crime rate exceeds [`HIGH_RATE_THRESHOLD`].
pub const HIGH_CRIME_RATE: &str = "🔒 Secure valuables and stay in well-lit areas";

/// Returns the two tier messages for a risk level.
#[must_use]
pub const fn tier_messages(level: RiskLevel) -> [&'static str; 2] {
    match level {
        RiskLevel::Critical => [
            "⚠️ This area has high risk. Avoid if possible.",
            "🚨 Keep emergency contacts ready",
        ],
        RiskLevel::High => [
            "⚠️ Exercise extreme caution in this area",
            "👥 Travel in groups when possible",
        ],
        RiskLevel::Medium => [
            "⚡ Stay alert and aware of surroundings",
            "📱 Share location with trusted contacts",
        ],
        RiskLevel::Low => [
            "✅ Area appears relatively safe",
            "👍 Normal precautions recommended",
        ],
    }
}

/// Builds the recommendation list for `metrics`.
///
/// The tier messages always come first, followed by the accident and then
/// the crime warning when their rates exceed [`HIGH_RATE_THRESHOLD`].
#[must_use]
pub fn recommend(metrics: &SafetyMetrics) -> Vec<String> {
    let mut out: Vec<String> = tier_messages(metrics.risk_level)
        .iter()
        .map(|s| (*s).to_string())
        .collect();

    if metrics.accident_rate > HIGH_RATE_THRESHOLD {
        out.push(HIGH_ACCIDENT_RATE.to_string());
    }

    if metrics.crime_rate > HIGH_RATE_THRESHOLD {
        out.push(HIGH_CRIME_RATE.to_string());
    }

    out
}
