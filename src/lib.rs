pub mod bearing;
pub mod coords;
pub mod data;
pub mod paths;
pub mod route;

use serde::{Deserialize, Serialize};

pub use bearing::bearing::compute_bearing;
pub use coords::coordinates::{CoordinateError, Coordinates, DisplayScale};
pub use paths::great_circle::build_shortest_path;
pub use paths::path::Path;
pub use paths::rhumb::build_rhumb_path;

/// Longitude/latitude pair in degrees.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct GeographicPoint {
    /// Longitude in [-180, 180]
    pub lon: f64,
    /// Latitude in [-90, 90]
    pub lat: f64,
}

impl GeographicPoint {
    /// Builds a point after checking both angles lie in their domain.
    pub fn new(lon: f64, lat: f64) -> Result<Self, CoordinateError> {
        let point = GeographicPoint { lon, lat };
        point.validate()?;
        Ok(point)
    }

    pub fn validate(&self) -> Result<(), CoordinateError> {
        if !self.lon.is_finite() || !self.lat.is_finite() {
            return Err(CoordinateError::NonFinite);
        }
        if !(-180.0..=180.0).contains(&self.lon) {
            return Err(CoordinateError::LongitudeOutOfRange(self.lon));
        }
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(CoordinateError::LatitudeOutOfRange(self.lat));
        }
        Ok(())
    }
}

/// Plain 3D vector used for positions on (or inside) the display sphere.
pub type Point3 = [f64; 3];

pub fn length(p: Point3) -> f64 {
    p[0].hypot(p[1]).hypot(p[2])
}

pub fn distance(a: Point3, b: Point3) -> f64 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    let dz = a[2] - b[2];
    (dx * dx + dy * dy + dz * dz).sqrt()
}

pub fn midpoint(a: Point3, b: Point3) -> Point3 {
    [(a[0] + b[0]) / 2.0, (a[1] + b[1]) / 2.0, (a[2] + b[2]) / 2.0]
}

/// Rescales `p` so its length equals `radius`.
///
/// Returns `None` for the zero vector, or when the rescaled vector would not
/// be finite. Any other length is accepted however small, so tiny display
/// scales keep working.
pub fn scale_to(p: Point3, radius: f64) -> Option<Point3> {
    let len = length(p);
    if !len.is_finite() || len == 0.0 {
        return None;
    }
    let k = radius / len;
    let scaled = [p[0] * k, p[1] * k, p[2] * k];
    if scaled.iter().all(|v| v.is_finite()) {
        Some(scaled)
    } else {
        None
    }
}
