use std::env;

use anyhow::Context;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use log::{info, warn};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use spherical_paths::bearing::bearing::{compute_bearing, format_bearing};
use spherical_paths::data::{read_catalog_from_file, SampleCatalog, Waypoint};
use spherical_paths::paths::great_circle::build_shortest_path;
use spherical_paths::paths::rhumb::build_rhumb_path;
use spherical_paths::paths::DEFAULT_SEGMENT_COUNT;
use spherical_paths::route::route::RoutePlan;
use spherical_paths::{Coordinates, DisplayScale, GeographicPoint, Path};

/// Optional JSON file replacing the built-in sample locations.
const CATALOG_ENV: &str = "SPHERICAL_PATHS_CATALOG";

/// Requests asking for more samples than this are clamped.
const MAX_SEGMENT_COUNT: usize = 4095;

static CATALOG: Lazy<SampleCatalog> = Lazy::new(|| match env::var(CATALOG_ENV) {
    Ok(path) => match load_catalog(&path) {
        Ok(catalog) => {
            info!("Using sample catalog from {} ({} waypoints)", path, catalog.len());
            catalog
        }
        Err(err) => {
            warn!("{:#}; using built-in samples", err);
            SampleCatalog::builtin()
        }
    },
    Err(_) => SampleCatalog::builtin(),
});

fn load_catalog(path: &str) -> anyhow::Result<SampleCatalog> {
    read_catalog_from_file(path).with_context(|| format!("failed to load sample catalog {}", path))
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum PathRequest {
    RhumbPath {
        start: GeographicPoint,
        end: GeographicPoint,
        segment_count: Option<usize>,
        scale: Option<DisplayScale>,
    },
    ShortestPath {
        start: GeographicPoint,
        end: GeographicPoint,
        segment_count: Option<usize>,
        scale: Option<DisplayScale>,
    },
    Bearing {
        from: GeographicPoint,
        to: GeographicPoint,
    },
    Route {
        start_label: String,
        end_label: String,
        segment_count: Option<usize>,
        scale: Option<DisplayScale>,
    },
    Catalog,
}

#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum PathResponse {
    RhumbPath {
        summary: String,
        points: Vec<PointResult>,
    },
    ShortestPath {
        summary: String,
        points: Vec<PointResult>,
    },
    Bearing {
        degrees: f64,
        label: String,
    },
    Route {
        summary: String,
        bearing: f64,
        shortest_path: Vec<PointResult>,
        rhumb_path: Vec<PointResult>,
    },
    Catalog {
        waypoints: Vec<Waypoint>,
    },
    Error {
        message: String,
    },
}

#[derive(Debug, Serialize)]
struct PointResult {
    lon: f64,
    lat: f64,
    planar: [f64; 2],
    spherical: [f64; 3],
}

fn point_results(path: &Path) -> Vec<PointResult> {
    path.iter()
        .map(|c| PointResult {
            lon: c.lon(),
            lat: c.lat(),
            planar: c.planar(),
            spherical: c.spherical(),
        })
        .collect()
}

fn segment_count(requested: Option<usize>) -> usize {
    requested.unwrap_or(DEFAULT_SEGMENT_COUNT).min(MAX_SEGMENT_COUNT)
}

fn endpoints(
    start: GeographicPoint,
    end: GeographicPoint,
    scale: Option<DisplayScale>,
) -> Result<(Coordinates, Coordinates), String> {
    let scale = scale.unwrap_or_default();
    let start = Coordinates::from_geographic(start, scale).map_err(|e| format!("Invalid start: {}", e))?;
    let end = Coordinates::from_geographic(end, scale).map_err(|e| format!("Invalid end: {}", e))?;
    Ok((start, end))
}

fn respond(req: PathRequest) -> PathResponse {
    match req {
        PathRequest::RhumbPath { start, end, segment_count: n, scale } => {
            let (start, end) = match endpoints(start, end, scale) {
                Ok(pair) => pair,
                Err(message) => return PathResponse::Error { message },
            };
            let path = build_rhumb_path(&start, &end, segment_count(n));
            PathResponse::RhumbPath {
                summary: path.to_string(),
                points: point_results(&path),
            }
        }
        PathRequest::ShortestPath { start, end, segment_count: n, scale } => {
            let (start, end) = match endpoints(start, end, scale) {
                Ok(pair) => pair,
                Err(message) => return PathResponse::Error { message },
            };
            let path = build_shortest_path(&start, &end, segment_count(n));
            PathResponse::ShortestPath {
                summary: path.to_string(),
                points: point_results(&path),
            }
        }
        PathRequest::Bearing { from, to } => {
            let (from, to) = match endpoints(from, to, None) {
                Ok(pair) => pair,
                Err(message) => return PathResponse::Error { message },
            };
            let degrees = compute_bearing(&from, &to);
            PathResponse::Bearing {
                degrees,
                label: format_bearing(degrees),
            }
        }
        PathRequest::Route { start_label, end_label, segment_count: n, scale } => {
            let catalog = &*CATALOG;
            let Some(start) = catalog.find(&start_label) else {
                return PathResponse::Error { message: format!("Unknown start label {}", start_label) };
            };
            let Some(end) = catalog.find(&end_label) else {
                return PathResponse::Error { message: format!("Unknown end label {}", end_label) };
            };
            match RoutePlan::generate(start, end, scale.unwrap_or_default(), segment_count(n)) {
                Ok(plan) => PathResponse::Route {
                    summary: plan.summary(),
                    bearing: plan.bearing,
                    shortest_path: point_results(&plan.shortest_path),
                    rhumb_path: point_results(&plan.rhumb_path),
                },
                Err(err) => PathResponse::Error { message: err.to_string() },
            }
        }
        PathRequest::Catalog => PathResponse::Catalog {
            waypoints: CATALOG.waypoints.clone(),
        },
    }
}

async fn handler(event: LambdaEvent<PathRequest>) -> Result<PathResponse, Error> {
    Ok(respond(event.payload))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    let func = service_fn(handler);
    lambda_runtime::run(func).await
}
