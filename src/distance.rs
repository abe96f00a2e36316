// (c) Copyright 2026 The campusnav Authors
// SPDX-License-Identifier: MIT

use crate::Coordinate;

/// Mean radius of Earth, in meters.
pub const EARTH_RADIUS: f64 = 6_371_000.0;

/// Mean diameter of Earth, in meters.
const EARTH_DIAMETER: f64 = EARTH_RADIUS + EARTH_RADIUS;

/// Calculates the great-circle distance between two positions
/// on Earth using the [haversine formula](https://en.wikipedia.org/wiki/Haversine_formula).
/// Returns the result in meters.
pub fn earth_distance(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();

    let sin_dlat_half = ((b.lat - a.lat).to_radians() * 0.5).sin();
    let sin_dlon_half = ((b.lon - a.lon).to_radians() * 0.5).sin();

    let h = sin_dlat_half * sin_dlat_half + lat1.cos() * lat2.cos() * sin_dlon_half * sin_dlon_half;

    // Rounding may push h a hair above 1 for antipodal points
    EARTH_DIAMETER * h.sqrt().min(1.0).asin()
}

/// Calculates the distance (in meters) from `point` to the closest point
/// on the segment between `start` and `end`.
///
/// The projection onto the segment is done on a flat lon/lat plane, which is
/// only accurate for short segments (up to about a kilometer). The projection
/// parameter is clamped, so points beyond either end measure the distance
/// to that endpoint. The final distance uses [earth_distance].
pub fn distance_to_segment(point: Coordinate, start: Coordinate, end: Coordinate) -> f64 {
    let vx = end.lon - start.lon;
    let vy = end.lat - start.lat;
    let wx = point.lon - start.lon;
    let wy = point.lat - start.lat;

    let len_sq = vx * vx + vy * vy;
    let t = if len_sq > 0.0 {
        ((vx * wx + vy * wy) / len_sq).clamp(0.0, 1.0)
    } else {
        // Degenerate segment
        0.0
    };

    let foot = Coordinate::new(start.lat + t * vy, start.lon + t * vx);
    earth_distance(point, foot)
}

/// Calculates the distance (in meters) from `point` to the closest segment of
/// a polyline.
///
/// Returns [f64::INFINITY] if the polyline has fewer than two points.
pub fn distance_to_polyline(point: Coordinate, polyline: &[Coordinate]) -> f64 {
    polyline
        .windows(2)
        .map(|w| distance_to_segment(point, w[0], w[1]))
        .fold(f64::INFINITY, f64::min)
}
