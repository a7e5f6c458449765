//! Error types for the query and configuration layers
//!
//! The great-circle functions themselves never return errors; these types are
//! used where input is checked on request or read from files.

use std::fmt;

/// Errors raised by checked evaluation, validation, and configuration
#[derive(Debug, Clone, PartialEq)]
pub enum GeodesyError {
    /// Latitude outside [-90, 90]
    InvalidLatitude { value: f64 },
    /// Longitude outside [-180, 180]
    InvalidLongitude { value: f64 },
    /// NaN or infinite input
    NonFiniteValue { parameter: String },
    /// Parameter rejected by validation
    InvalidParameter { parameter: String, value: String, reason: String },
    /// Bearing requested between coincident points
    UndefinedBearing { lon: f64, lat: f64 },
    /// File could not be read or written
    Io { message: String },
    /// JSON could not be parsed or produced
    Serialization { message: String },
}

impl fmt::Display for GeodesyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeodesyError::InvalidLatitude { value } => {
                write!(f, "Invalid latitude {}: must be between -90 and 90 degrees", value)
            }
            GeodesyError::InvalidLongitude { value } => {
                write!(f, "Invalid longitude {}: must be between -180 and 180 degrees", value)
            }
            GeodesyError::NonFiniteValue { parameter } => {
                write!(f, "Non-finite value for {}", parameter)
            }
            GeodesyError::InvalidParameter { parameter, value, reason } => {
                write!(f, "Invalid {} = {}: {}", parameter, value, reason)
            }
            GeodesyError::UndefinedBearing { lon, lat } => {
                write!(f, "Bearing undefined between coincident points at [{}, {}]", lon, lat)
            }
            GeodesyError::Io { message } => write!(f, "I/O error: {}", message),
            GeodesyError::Serialization { message } => {
                write!(f, "Serialization error: {}", message)
            }
        }
    }
}

impl std::error::Error for GeodesyError {}

impl From<serde_json::Error> for GeodesyError {
    fn from(err: serde_json::Error) -> Self {
        GeodesyError::Serialization { message: err.to_string() }
    }
}

impl From<std::io::Error> for GeodesyError {
    fn from(err: std::io::Error) -> Self {
        GeodesyError::Io { message: err.to_string() }
    }
}

/// Result type for checked geodesy operations
pub type GeodesyResult<T> = Result<T, GeodesyError>;
