//! Synthetic nearby emergency services.
//!
//! Centers are placed at fixed offsets from the queried point. Names and
//! distances are placeholders, not looked up from any directory.

use safet_safety_models::{Coordinate, EmergencyCenter, EmergencyCenterType};

/// A template for one synthesized center.
struct CenterTemplate {
    center_type: EmergencyCenterType,
    name: &'static str,
    distance: &'static str,
    d_lat: f64,
    d_lng: f64,
}

const TEMPLATES: &[CenterTemplate] = &[
    CenterTemplate {
        center_type: EmergencyCenterType::Hospital,
        name: "City General Hospital",
        distance: "1.2 km",
        d_lat: 0.01,
        d_lng: 0.01,
    },
    CenterTemplate {
        center_type: EmergencyCenterType::Police,
        name: "Police Station Central",
        distance: "0.8 km",
        d_lat: -0.005,
        d_lng: 0.005,
    },
    CenterTemplate {
        center_type: EmergencyCenterType::Fire,
        name: "Fire Station 3",
        distance: "2.1 km",
        d_lat: 0.015,
        d_lng: -0.01,
    },
];

/// Returns the hospital, police, and fire entries around `origin`, in that
/// order.
#[must_use]
pub fn nearby_emergency_centers(origin: Coordinate) -> Vec<EmergencyCenter> {
    TEMPLATES
        .iter()
        .map(|t| {
            let at = origin.offset(t.d_lat, t.d_lng);
            EmergencyCenter {
                center_type: t.center_type,
                name: t.name.to_string(),
                distance: t.distance.to_string(),
                lat: at.lat,
                lng: at.lng,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::float_cmp)]
    fn offsets_are_exact() {
        let origin = Coordinate::new(28.6139, 77.2090);
        let centers = nearby_emergency_centers(origin);
        assert_eq!(centers.len(), 3);

        assert_eq!(centers[0].center_type, EmergencyCenterType::Hospital);
        assert_eq!(centers[0].lat, 28.6139 + 0.01);
        assert_eq!(centers[0].lng, 77.2090 + 0.01);

        assert_eq!(centers[1].center_type, EmergencyCenterType::Police);
        assert_eq!(centers[1].lat, 28.6139 - 0.005);
        assert_eq!(centers[1].lng, 77.2090 + 0.005);

        assert_eq!(centers[2].center_type, EmergencyCenterType::Fire);
        assert_eq!(centers[2].lat, 28.6139 + 0.015);
        assert_eq!(centers[2].lng, 77.2090 - 0.01);
    }

    #[test]
    fn names_and_distances() {
        let centers = nearby_emergency_centers(Coordinate::new(1.0, 1.0));
        let names: Vec<&str> = centers.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            ["City General Hospital", "Police Station Central", "Fire Station 3"]
        );
        let distances: Vec<&str> = centers.iter().map(|c| c.distance.as_str()).collect();
        assert_eq!(distances, ["1.2 km", "0.8 km", "2.1 km"]);
    }
}
