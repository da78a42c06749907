use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

use crate::coords::coordinates::Coordinates;
use crate::GeographicPoint;

/// Isometric latitude `ln(tan(pi/4 + lat/2))` of a latitude given in radians.
///
/// Very large at the north pole and negative infinity at the south pole; never NaN
/// for latitudes in [-pi/2, pi/2].
pub fn isometric_latitude(lat_rad: f64) -> f64 {
    let angle = (FRAC_PI_4 + lat_rad / 2.0).clamp(0.0, FRAC_PI_2);
    angle.tan().ln()
}

/// Wraps a longitude difference in radians into [-pi, pi].
pub(crate) fn wrap_longitude_delta(delta: f64) -> f64 {
    if delta > PI {
        delta - TAU
    } else if delta < -PI {
        delta + TAU
    } else {
        delta
    }
}

/// Constant-bearing (rhumb) course from `a` to `b`, in compass degrees.
///
/// The result lies in [0, 360): 0 is north, 90 east, 180 south, 270 west.
/// The longitude difference takes the shorter way round the antimeridian.
/// Identical points give 0. The function keeps no state, so a moving point
/// can simply call it again whenever its position changes.
pub fn compute_bearing(a: &Coordinates, b: &Coordinates) -> f64 {
    bearing_between(a.geographic(), b.geographic())
}

pub fn bearing_between(a: GeographicPoint, b: GeographicPoint) -> f64 {
    let d_lon = wrap_longitude_delta((b.lon - a.lon).to_radians());
    let mut d_psi = isometric_latitude(b.lat.to_radians()) - isometric_latitude(a.lat.to_radians());
    if d_psi.is_nan() {
        // both points on the same pole
        d_psi = 0.0;
    }

    let degrees = d_lon.atan2(d_psi).to_degrees();
    let normalized = degrees.rem_euclid(360.0);
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

/// Label text for a bearing, three decimals and a degree sign.
pub fn format_bearing(degrees: f64) -> String {
    format!("{:.3}°", degrees)
}
