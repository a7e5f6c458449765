//! Spherical Geodesy
//!
//! Great-circle distance, bearings, midpoint, and destination point on a
//! spherical earth model, with longitude/latitude positions in degrees.

pub mod core;
pub mod algorithms;
pub mod validation;
pub mod utils;
pub mod api;

// Re-export commonly used types
pub use core::{Position, DEFAULT_RADIUS};
pub use algorithms::{
    destination_point, destination_point_with_radius, distance, distance_with_radius, equals,
    final_bearing, initial_bearing, midpoint, to_degrees, to_radians, wrap180, wrap360,
};
pub use validation::{CoordinateValidator, GeodesyError, GeodesyResult};
pub use utils::{ConfigError, ConfigurationManager, GeodesyConfig};
pub use api::{
    Answer, AnswerFormatter, CsvFormatter, FormattedAnswer, JsonFormatter, OutputFormat, Query,
    QueryEngine, TextFormatter,
};
