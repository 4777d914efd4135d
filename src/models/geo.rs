//! Geographic positions and great-circle distance.

use serde::{Deserialize, Serialize};

/// Mean Earth radius (km).
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Kilometres per nautical mile; converts knots to km/h.
pub const KM_PER_NAUTICAL_MILE: f64 = 1.852;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    /// Creates a point.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Great-circle distance to `other` (km), haversine formula.
    pub fn distance_km(&self, other: &GeoPoint) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let dlat = (other.lat - self.lat).to_radians();
        let dlon = (other.lon - self.lon).to_radians();

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }
}

/// Converts a speed in knots to km/h.
#[inline]
pub fn knots_to_kmh(knots: f64) -> f64 {
    knots * KM_PER_NAUTICAL_MILE
}
