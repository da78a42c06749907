use std::f64::consts::{PI, TAU};

use log::debug;

use crate::bearing::bearing::isometric_latitude;
use crate::coords::coordinates::Coordinates;
use crate::paths::path::Path;
use crate::paths::subdivide::subdivided;
use crate::GeographicPoint;

/// Isometric-latitude spans below this are treated as a parallel of latitude.
///
/// About 6e-8 degrees of latitude at the equator; below it the interpolation
/// ratio is dominated by rounding noise.
const PARALLEL_TOLERANCE: f64 = 1e-9;

/// Midpoint of the rhumb line between `a` and `b`.
///
/// Latitude is the plain average; longitude is interpolated linearly in
/// isometric latitude. When the line crosses the antimeridian the smaller
/// longitude is shifted by a full turn first. Along a parallel (isometric
/// latitudes closer than `PARALLEL_TOLERANCE`, or a pole making the
/// interpolation undefined) the unshifted input longitudes are averaged
/// instead. The returned longitude is normalized into [-180, 180].
///
/// Limitation: since the parallel case ignores the antimeridian shift, two
/// points on the same parallel more than 180 degrees apart in longitude get a
/// midpoint on the far side of the globe. `(170, 0)` and `(-170, 0)` give
/// longitude 0, not 180. Split such a segment at the antimeridian if the
/// short way round is wanted.
pub fn rhumb_midpoint(a: GeographicPoint, b: GeographicPoint) -> GeographicPoint {
    let lat_a = a.lat.to_radians();
    let lat_b = b.lat.to_radians();
    let mut lon_a = a.lon.to_radians();
    let mut lon_b = b.lon.to_radians();

    if (lon_b - lon_a).abs() > PI {
        if lon_a < lon_b {
            lon_a += TAU;
        } else {
            lon_b += TAU;
        }
    }

    let mid_lat = (lat_a + lat_b) / 2.0;
    let psi_a = isometric_latitude(lat_a);
    let psi_b = isometric_latitude(lat_b);
    let psi_mid = isometric_latitude(mid_lat);
    let d_psi = psi_b - psi_a;

    let interpolated = lon_a + (lon_b - lon_a) * (psi_mid - psi_a) / d_psi;
    let mid_lon = if d_psi.abs() < PARALLEL_TOLERANCE || !interpolated.is_finite() {
        (a.lon.to_radians() + b.lon.to_radians()) / 2.0
    } else {
        interpolated
    };

    GeographicPoint {
        lon: normalize_longitude(mid_lon.to_degrees()),
        lat: mid_lat.to_degrees().clamp(-90.0, 90.0),
    }
}

/// Wraps a longitude in degrees into [-180, 180].
pub fn normalize_longitude(lon: f64) -> f64 {
    if (-180.0..=180.0).contains(&lon) {
        lon
    } else {
        (lon + 180.0).rem_euclid(360.0) - 180.0
    }
}

/// Samples the rhumb line from `start` to `end`.
///
/// The path starts with `start`, ends with `end` (both cloned, not
/// recomputed) and holds [`expected_sample_count`](crate::paths::subdivide::expected_sample_count)
/// `(segment_count)` samples in between, placed by recursive halving. The
/// samples use the display scale of `start`.
pub fn build_rhumb_path(start: &Coordinates, end: &Coordinates, segment_count: usize) -> Path {
    let scale = start.scale();
    let samples = subdivided(&start.geographic(), &end.geographic(), segment_count, |a, b| {
        rhumb_midpoint(*a, *b)
    });

    let mut points = Vec::with_capacity(samples.len() + 2);
    points.push(start.clone());
    points.extend(
        samples
            .into_iter()
            .map(|g| Coordinates::from_geographic_unchecked(g, scale)),
    );
    points.push(end.clone());

    debug!(
        "rhumb path ({}, {}) -> ({}, {}): {} points",
        start.lon(),
        start.lat(),
        end.lon(),
        end.lat(),
        points.len()
    );
    Path::new(points)
}
