use std::f64::consts::FRAC_PI_2;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{length, scale_to, GeographicPoint, Point3};

/// Distance from the polar axis, as a fraction of the radius, under which longitude
/// is undefined and reported as 0.
const POLAR_AXIS_TOLERANCE: f64 = 1e-12;

#[derive(Debug, Error, PartialEq)]
pub enum CoordinateError {
    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),
    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),
    #[error("coordinates must be finite")]
    NonFinite,
    #[error("invalid display scale (radius {radius}, width {width}): both must be finite and positive")]
    InvalidScale { radius: f64, width: f64 },
    #[error("cannot derive a position on the sphere from direction {0:?}")]
    DegenerateDirection(Point3),
}

/// Size of the sphere and of the flat map the coordinates are displayed on.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct DisplayScale {
    pub radius: f64,
    pub width: f64,
}

impl Default for DisplayScale {
    fn default() -> Self {
        DisplayScale {
            radius: 5.0,
            width: 15.0,
        }
    }
}

impl DisplayScale {
    pub fn new(radius: f64, width: f64) -> Result<Self, CoordinateError> {
        let scale = DisplayScale { radius, width };
        scale.validate()?;
        Ok(scale)
    }

    pub fn validate(&self) -> Result<(), CoordinateError> {
        let ok = |v: f64| v.is_finite() && v > 0.0;
        if ok(self.radius) && ok(self.width) {
            Ok(())
        } else {
            Err(CoordinateError::InvalidScale {
                radius: self.radius,
                width: self.width,
            })
        }
    }
}

/// One geographic point together with its flat-map and sphere positions.
///
/// All three representations are computed when the value is built and never
/// change afterwards. The spherical position always lies at distance `radius`
/// from the origin, whichever constructor produced it.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Coordinates {
    geographic: GeographicPoint,
    planar: [f64; 2],
    spherical: Point3,
    radius: f64,
    width: f64,
}

impl Coordinates {
    /// Builds coordinates from a longitude/latitude pair in degrees.
    pub fn new(lon: f64, lat: f64, radius: f64, width: f64) -> Result<Self, CoordinateError> {
        Self::from_geographic(GeographicPoint::new(lon, lat)?, DisplayScale::new(radius, width)?)
    }

    pub fn from_geographic(
        point: GeographicPoint,
        scale: DisplayScale,
    ) -> Result<Self, CoordinateError> {
        point.validate()?;
        scale.validate()?;
        Ok(Self::from_geographic_unchecked(point, scale))
    }

    /// Builds coordinates from a 3D direction.
    ///
    /// The direction is first projected onto the sphere of the given radius, so
    /// any non-zero vector is accepted (for example a camera position seen from
    /// the sphere centre). The geographic label is recovered with the inverse
    /// conversion.
    pub fn from_spherical(xyz: Point3, radius: f64, width: f64) -> Result<Self, CoordinateError> {
        let scale = DisplayScale::new(radius, width)?;
        if xyz.iter().any(|v| !v.is_finite()) {
            return Err(CoordinateError::DegenerateDirection(xyz));
        }
        let on_sphere =
            scale_to(xyz, scale.radius).ok_or(CoordinateError::DegenerateDirection(xyz))?;
        Ok(Self::from_sphere_point(on_sphere, scale))
    }

    /// Caller guarantees `point` is in range and `scale` is valid.
    pub(crate) fn from_geographic_unchecked(point: GeographicPoint, scale: DisplayScale) -> Self {
        Coordinates {
            geographic: point,
            planar: geographic_to_planar(point, scale.width),
            spherical: geographic_to_spherical(point, scale.radius),
            radius: scale.radius,
            width: scale.width,
        }
    }

    /// Caller guarantees `spherical` is finite and already lies on the sphere.
    pub(crate) fn from_sphere_point(spherical: Point3, scale: DisplayScale) -> Self {
        let geographic = spherical_to_geographic(spherical, scale.radius);
        Coordinates {
            geographic,
            planar: geographic_to_planar(geographic, scale.width),
            spherical,
            radius: scale.radius,
            width: scale.width,
        }
    }

    pub fn geographic(&self) -> GeographicPoint {
        self.geographic
    }

    pub fn lon(&self) -> f64 {
        self.geographic.lon
    }

    pub fn lat(&self) -> f64 {
        self.geographic.lat
    }

    pub fn planar(&self) -> [f64; 2] {
        self.planar
    }

    pub fn spherical(&self) -> Point3 {
        self.spherical
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn scale(&self) -> DisplayScale {
        DisplayScale {
            radius: self.radius,
            width: self.width,
        }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Geographic: ({:.6}, {:.6}) | Planar: {} => ({:.6}, {:.6}) | Spherical: {} => ({:.6}, {:.6}, {:.6})",
            self.geographic.lon,
            self.geographic.lat,
            self.width,
            self.planar[0],
            self.planar[1],
            self.radius,
            self.spherical[0],
            self.spherical[1],
            self.spherical[2]
        )
    }
}

/// Linear scaling onto the flat map; not a conformal projection.
pub fn geographic_to_planar(point: GeographicPoint, width: f64) -> [f64; 2] {
    [point.lon / 180.0 * width, point.lat / 90.0 * width]
}

/// Places the point on a sphere of `radius`, y pointing to the north pole.
pub fn geographic_to_spherical(point: GeographicPoint, radius: f64) -> Point3 {
    let theta = FRAC_PI_2 - point.lat.to_radians();
    let lambda = point.lon.to_radians();
    [
        radius * theta.sin() * lambda.cos(),
        radius * theta.cos(),
        radius * theta.sin() * lambda.sin(),
    ]
}

/// Inverse of [`geographic_to_spherical`].
///
/// `y / radius` is clamped before `acos`, and on the polar axis (where
/// longitude is undefined) the longitude is 0.
pub fn spherical_to_geographic(p: Point3, radius: f64) -> GeographicPoint {
    let r = if radius > 0.0 { radius } else { length(p) };
    let ratio = if r > 0.0 { (p[1] / r).clamp(-1.0, 1.0) } else { 0.0 };
    let lat = (90.0 - ratio.acos().to_degrees()).clamp(-90.0, 90.0);

    let horizontal = p[0].hypot(p[2]);
    let lon = if horizontal <= POLAR_AXIS_TOLERANCE * r {
        0.0
    } else {
        p[2].atan2(p[0]).to_degrees()
    };

    GeographicPoint { lon, lat }
}
