use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::coords::coordinates::CoordinateError;
use crate::GeographicPoint;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid waypoint {label:?}: {source}")]
    InvalidWaypoint {
        label: String,
        #[source]
        source: CoordinateError,
    },
    #[error("duplicate waypoint label {0:?}")]
    DuplicateLabel(String),
}

/// A named location users can pick instead of typing coordinates.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Waypoint {
    pub label: String,
    pub point: GeographicPoint,
}

impl Waypoint {
    pub fn new(label: impl Into<String>, lon: f64, lat: f64) -> Self {
        Waypoint {
            label: label.into(),
            point: GeographicPoint { lon, lat },
        }
    }
}

/// Ordered list of sample locations, loaded from configuration.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct SampleCatalog {
    pub waypoints: Vec<Waypoint>,
}

impl SampleCatalog {
    /// Builds a catalog, rejecting out-of-range points and repeated labels.
    pub fn new(waypoints: Vec<Waypoint>) -> Result<Self, DataError> {
        let catalog = SampleCatalog { waypoints };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The sample locations the globe demo ships with.
    pub fn builtin() -> Self {
        SampleCatalog {
            waypoints: vec![
                Waypoint::new("North Pole", 0.0, 90.0),
                Waypoint::new("Calgary, AB, Canada", -114.0719, 51.0447),
                Waypoint::new("Beirut, Lebanon", 35.5018, 33.8938),
                Waypoint::new("London, UK", -0.104788, 51.48553),
                Waypoint::new("Mecca, KSA", 39.82621, 21.422486),
            ],
        }
    }

    pub fn validate(&self) -> Result<(), DataError> {
        let mut seen = HashSet::new();
        for waypoint in &self.waypoints {
            waypoint
                .point
                .validate()
                .map_err(|source| DataError::InvalidWaypoint {
                    label: waypoint.label.clone(),
                    source,
                })?;
            if !seen.insert(waypoint.label.as_str()) {
                return Err(DataError::DuplicateLabel(waypoint.label.clone()));
            }
        }
        Ok(())
    }

    pub fn find(&self, label: &str) -> Option<&Waypoint> {
        self.waypoints.iter().find(|w| w.label == label)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.waypoints.iter().map(|w| w.label.as_str())
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }
}

pub fn parse_catalog(json: &str) -> Result<SampleCatalog, DataError> {
    let catalog: SampleCatalog = serde_json::from_str(json)?;
    catalog.validate()?;
    Ok(catalog)
}

pub fn write_catalog_to_file<P: AsRef<Path>>(catalog: &SampleCatalog, path: P) -> Result<(), DataError> {
    let bytes = serde_json::to_vec_pretty(catalog)?;
    fs::write(path, bytes)?;
    Ok(())
}

pub fn read_catalog_from_file<P: AsRef<Path>>(path: P) -> Result<SampleCatalog, DataError> {
    let text = fs::read_to_string(path.as_ref())?;
    let catalog = parse_catalog(&text)?;
    debug!(
        "loaded {} waypoints from {}",
        catalog.len(),
        path.as_ref().display()
    );
    Ok(catalog)
}
