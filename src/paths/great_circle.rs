use log::{debug, warn};

use crate::coords::coordinates::Coordinates;
use crate::paths::path::Path;
use crate::paths::subdivide::subdivided;
use crate::{length, midpoint, scale_to, Point3};

/// Chord midpoints shorter than this fraction of the radius are treated as the
/// sphere centre (antipodal endpoints).
const ANTIPODAL_TOLERANCE: f64 = 1e-9;

/// Samples an approximation of the great circle from `start` to `end`.
///
/// The straight chord between the two sphere positions is halved recursively
/// (same budget split as the rhumb builder) and every chord sample is pushed
/// out to the sphere surface. Spacing is not uniform along the arc; the
/// approximation tightens as `segment_count` grows. Endpoints are the inputs
/// themselves, and samples use the display scale of `start`.
pub fn build_shortest_path(start: &Coordinates, end: &Coordinates, segment_count: usize) -> Path {
    let scale = start.scale();
    let radius = scale.radius;

    let chord = subdivided(&start.spherical(), &end.spherical(), segment_count, |a, b| {
        chord_midpoint(a, b, radius)
    });

    let mut points = Vec::with_capacity(chord.len() + 2);
    points.push(start.clone());
    for sample in chord {
        match scale_to(sample, radius) {
            Some(on_sphere) => points.push(Coordinates::from_sphere_point(on_sphere, scale)),
            None => warn!("dropping chord sample {:?} at the sphere centre", sample),
        }
    }
    points.push(end.clone());

    debug!(
        "great circle path ({}, {}) -> ({}, {}): {} points",
        start.lon(),
        start.lat(),
        end.lon(),
        end.lat(),
        points.len()
    );
    Path::new(points)
}

/// Arithmetic midpoint of the chord `(a, b)`.
///
/// For antipodal endpoints the midpoint would be the sphere centre, where no
/// direction exists; a fixed point of the sphere perpendicular to `a` is used
/// instead so the path stays defined.
fn chord_midpoint(a: &Point3, b: &Point3, radius: f64) -> Point3 {
    let mid = midpoint(*a, *b);
    if length(mid) > ANTIPODAL_TOLERANCE * radius {
        return mid;
    }
    warn!("antipodal endpoints {:?} and {:?}, great circle is not unique", a, b);
    perpendicular_on_sphere(a, radius)
}

fn perpendicular_on_sphere(a: &Point3, radius: f64) -> Point3 {
    // a x north, or a x x-axis when a sits on the polar axis
    let around_pole = [-a[2], 0.0, a[0]];
    let candidate = if length(around_pole) > ANTIPODAL_TOLERANCE * radius {
        around_pole
    } else {
        [0.0, a[2], -a[1]]
    };
    scale_to(candidate, radius).unwrap_or([radius, 0.0, 0.0])
}
