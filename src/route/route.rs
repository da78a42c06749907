use log::debug;
use serde::Serialize;

use crate::bearing::bearing::{compute_bearing, format_bearing};
use crate::coords::coordinates::{CoordinateError, Coordinates, DisplayScale};
use crate::data::Waypoint;
use crate::paths::great_circle::build_shortest_path;
use crate::paths::path::Path;
use crate::paths::rhumb::build_rhumb_path;

/// Both paths between two labelled locations, as shown side by side on the
/// globe and the flat map.
#[derive(Clone, Debug, Serialize)]
pub struct RoutePlan {
    pub start_label: String,
    pub start: Coordinates,
    pub end_label: String,
    pub end: Coordinates,
    pub shortest_path: Path,
    pub rhumb_path: Path,
    /// Rhumb bearing from start to end, compass degrees in [0, 360).
    pub bearing: f64,
}

impl RoutePlan {
    pub fn generate(
        start: &Waypoint,
        end: &Waypoint,
        scale: DisplayScale,
        segment_count: usize,
    ) -> Result<Self, CoordinateError> {
        let start_coords = Coordinates::from_geographic(start.point, scale)?;
        let end_coords = Coordinates::from_geographic(end.point, scale)?;

        let shortest_path = build_shortest_path(&start_coords, &end_coords, segment_count);
        let rhumb_path = build_rhumb_path(&start_coords, &end_coords, segment_count);
        let bearing = compute_bearing(&start_coords, &end_coords);

        debug!(
            "route {:?} -> {:?}: {} great circle points, {} rhumb points",
            start.label,
            end.label,
            shortest_path.len(),
            rhumb_path.len()
        );

        Ok(RoutePlan {
            start_label: start.label.clone(),
            start: start_coords,
            end_label: end.label.clone(),
            end: end_coords,
            shortest_path,
            rhumb_path,
            bearing,
        })
    }

    /// Bearing from an arbitrary position (e.g. a traveller along either path)
    /// toward the end of the route.
    pub fn bearing_from(&self, current: &Coordinates) -> f64 {
        compute_bearing(current, &self.end)
    }

    /// One-line description used as the path label text.
    pub fn summary(&self) -> String {
        format!(
            "{} [Lat: {:.3}, Lon: {:.3}] to {} [Lat: {:.3}, Lon: {:.3}] | Bearing: {}",
            self.start_label,
            self.start.lat(),
            self.start.lon(),
            self.end_label,
            self.end.lat(),
            self.end.lon(),
            format_bearing(self.bearing)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SampleCatalog;
    use assert_approx_eq::assert_approx_eq;

    fn plan(start: &str, end: &str) -> RoutePlan {
        let catalog = SampleCatalog::builtin();
        RoutePlan::generate(
            catalog.find(start).unwrap(),
            catalog.find(end).unwrap(),
            DisplayScale::default(),
            15,
        )
        .unwrap()
    }

    #[test]
    fn both_paths_share_endpoints() {
        let plan = plan("Calgary, AB, Canada", "Mecca, KSA");
        assert_eq!(plan.shortest_path.start(), Some(&plan.start));
        assert_eq!(plan.rhumb_path.start(), Some(&plan.start));
        assert_eq!(plan.shortest_path.last(), Some(&plan.end));
        assert_eq!(plan.rhumb_path.last(), Some(&plan.end));
        assert_eq!(plan.shortest_path.len(), 17);
        assert_eq!(plan.rhumb_path.len(), 17);
    }

    #[test]
    fn summary_reads_like_the_label() {
        let plan = plan("London, UK", "North Pole");
        assert!(plan.bearing < 0.01, "bearing {}", plan.bearing);
        let summary = plan.summary();
        assert!(summary.starts_with(
            "London, UK [Lat: 51.486, Lon: -0.105] to North Pole [Lat: 90.000, Lon: 0.000] | Bearing: "
        ));
        assert!(summary.ends_with(&format_bearing(plan.bearing)));
    }

    #[test]
    fn live_bearing_tracks_the_traveller() {
        let plan = plan("Beirut, Lebanon", "London, UK");
        let halfway = &plan.rhumb_path.points()[plan.rhumb_path.len() / 2];
        assert_approx_eq!(plan.bearing_from(halfway), plan.bearing, 1e-6);
    }

    #[test]
    fn rejects_invalid_waypoint() {
        let bad = Waypoint::new("Bad", 0.0, 95.0);
        let good = Waypoint::new("Good", 0.0, 0.0);
        assert_eq!(
            RoutePlan::generate(&bad, &good, DisplayScale::default(), 15).unwrap_err(),
            CoordinateError::LatitudeOutOfRange(95.0)
        );
    }
}
