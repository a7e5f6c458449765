//! Core data types for spherical geodesy

use serde::{Deserialize, Serialize};

/// Point on the sphere in decimal degrees, longitude first.
///
/// Serializes as a GeoJSON position `[lon, lat]`. Ranges are not checked here;
/// see [`crate::validation::CoordinateValidator`] for an opt-in check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Position {
    pub lon: f64,
    pub lat: f64,
}

impl Position {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

impl From<[f64; 2]> for Position {
    fn from(coords: [f64; 2]) -> Self {
        Self { lon: coords[0], lat: coords[1] }
    }
}

impl From<(f64, f64)> for Position {
    fn from((lon, lat): (f64, f64)) -> Self {
        Self { lon, lat }
    }
}

impl From<Position> for [f64; 2] {
    fn from(position: Position) -> Self {
        [position.lon, position.lat]
    }
}
