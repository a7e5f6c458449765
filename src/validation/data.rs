//! Opt-in coordinate range checks

use crate::core::Position;
use crate::validation::error::{GeodesyError, GeodesyResult};

/// Range checks for geographic input.
///
/// The great-circle functions accept anything; callers that want to reject
/// out-of-range input run it through here first.
pub struct CoordinateValidator;

impl CoordinateValidator {
    /// Validate a longitude/latitude position
    pub fn validate_position(position: &Position) -> GeodesyResult<()> {
        if !position.lon.is_finite() {
            return Err(GeodesyError::NonFiniteValue { parameter: "longitude".to_string() });
        }
        if !position.lat.is_finite() {
            return Err(GeodesyError::NonFiniteValue { parameter: "latitude".to_string() });
        }
        if position.lat < -90.0 || position.lat > 90.0 {
            return Err(GeodesyError::InvalidLatitude { value: position.lat });
        }
        if position.lon < -180.0 || position.lon > 180.0 {
            return Err(GeodesyError::InvalidLongitude { value: position.lon });
        }

        Ok(())
    }

    /// Validate a finite scalar such as a distance or bearing
    pub fn validate_finite(parameter: &str, value: f64) -> GeodesyResult<()> {
        if value.is_finite() {
            Ok(())
        } else {
            Err(GeodesyError::NonFiniteValue { parameter: parameter.to_string() })
        }
    }

    /// Validate a sphere radius: finite and strictly positive
    pub fn validate_radius(radius: f64) -> GeodesyResult<()> {
        Self::validate_finite("radius", radius)?;
        if radius <= 0.0 {
            return Err(GeodesyError::InvalidParameter {
                parameter: "radius".to_string(),
                value: radius.to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}
