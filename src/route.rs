//! Synthetic route + ETA estimation for the map view.
//!
//! No road network exists on-device; the route is a cosmetic polyline
//! between the endpoints with bounded random wander, and the ETA a flat
//! road-speed heuristic over the great-circle distance.

use rand::Rng;
use serde::Serialize;

use crate::geo::{self, Coordinate};

/// Interpolated points between the endpoints (the polyline has this + 2).
const WAYPOINT_STEPS: usize = 8;

/// Maximum jitter applied to an interpolated point, in degrees per axis.
const JITTER_MAX_DEGREES: f64 = 0.01;

/// Travel heuristic: one kilometre ≈ three minutes by road.
const MINUTES_PER_KM: f64 = 3.0;

/// A display route: waypoints for the polyline plus distance and ETA.
/// Computed on demand, never persisted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteEstimate {
    pub waypoints: Vec<Coordinate>,
    pub distance_km: f64,
    pub eta_minutes: u32,
}

/// Estimate a route from `start` to `end`.
///
/// Waypoints are `start`, eight interpolated points, `end`. Each
/// interpolated point is a linear blend of the endpoints plus a jitter of
/// at most [`JITTER_MAX_DEGREES`] per axis, scaled by progress — the
/// simulated track wanders more the closer it gets to the destination.
///
/// The jitter is a pure function of `rng`, so a seeded generator makes
/// the route reproducible; `start == end` degenerates to a stationary
/// path with distance 0 and ETA 0.
pub fn estimate_route<R: Rng>(start: Coordinate, end: Coordinate, rng: &mut R) -> RouteEstimate {
    let distance_km = geo::distance_km(start, end);
    let eta_minutes = (distance_km * MINUTES_PER_KM).ceil() as u32;

    let mut waypoints = Vec::with_capacity(WAYPOINT_STEPS + 2);
    waypoints.push(start);
    for i in 1..=WAYPOINT_STEPS {
        let blend = i as f64 / (WAYPOINT_STEPS + 1) as f64;
        let jitter_scale = i as f64 / WAYPOINT_STEPS as f64;
        let latitude = start.latitude
            + (end.latitude - start.latitude) * blend
            + rng.gen_range(-JITTER_MAX_DEGREES..=JITTER_MAX_DEGREES) * jitter_scale;
        let longitude = start.longitude
            + (end.longitude - start.longitude) * blend
            + rng.gen_range(-JITTER_MAX_DEGREES..=JITTER_MAX_DEGREES) * jitter_scale;
        waypoints.push(Coordinate::new(latitude, longitude));
    }
    waypoints.push(end);

    RouteEstimate {
        waypoints,
        distance_km,
        eta_minutes,
    }
}

/// Production entry point: non-deterministic cosmetic jitter.
pub fn estimate_route_thread_rng(start: Coordinate, end: Coordinate) -> RouteEstimate {
    estimate_route(start, end, &mut rand::thread_rng())
}
