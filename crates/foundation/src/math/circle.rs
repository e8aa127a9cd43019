//! Polygon approximation of a geographic circle.
//!
//! Offsets are computed in meters on a local tangent plane and converted back
//! to degrees with fixed meters-per-degree constants. Longitude offsets are
//! widened by `1 / cos(lat)` to undo the Mercator-style compression away from
//! the equator.

use std::f64::consts::TAU;

use super::LngLat;

/// Number of distinct points around the circle.
pub const CIRCLE_STEPS: usize = 64;
/// Radius used when a center is placed before any radius is known.
pub const DEFAULT_RADIUS_M: f64 = 100.0;
/// Meters per degree of latitude (and of longitude at the equator).
pub const METERS_PER_DEGREE: f64 = 111_320.0;

/// Closed ring of `CIRCLE_STEPS + 1` points approximating the circle.
pub fn circle_ring(center: LngLat, radius_m: f64) -> Vec<LngLat> {
    circle_ring_with_steps(center, radius_m, CIRCLE_STEPS)
}

/// Closed ring of `steps + 1` points; the last point repeats the first.
///
/// `steps == 0` yields an empty ring.
pub fn circle_ring_with_steps(center: LngLat, radius_m: f64, steps: usize) -> Vec<LngLat> {
    if steps == 0 {
        return Vec::new();
    }

    let distortion = (center.lat * std::f64::consts::PI / 180.0).cos();
    let meters_per_lng_degree = METERS_PER_DEGREE * distortion;

    let mut ring = Vec::with_capacity(steps + 1);
    for i in 0..steps {
        let theta = TAU * i as f64 / steps as f64;
        let dx = radius_m * theta.cos();
        let dy = radius_m * theta.sin();
        ring.push(center.offset(dx / meters_per_lng_degree, dy / METERS_PER_DEGREE));
    }
    ring.push(ring[0]);
    ring
}
