//! Great-circle distance for the map view.
//!
//! Coordinates are plain WGS84 degrees. Out-of-range values are accepted
//! as-is; validation belongs to the caller.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometres (for the Haversine formula).
const EARTH_RADIUS_KM: f64 = 6371.0;

/// A latitude/longitude pair in degrees. Immutable value type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// Default map anchors from the seed data.
pub const CASABLANCA: Coordinate = Coordinate::new(33.5731, -7.5898);
pub const RABAT: Coordinate = Coordinate::new(34.0209, -6.8416);

/// Haversine distance between two coordinates in kilometres.
///
/// Symmetric, and 0 for identical points.
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let delta_lat = (b.latitude - a.latitude).to_radians();
    let delta_lon = (b.longitude - a.longitude).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}
