//! Angle conversion and normalization helpers

use std::f64::consts::PI;

/// Convert degrees to radians
pub fn to_radians(degrees: f64) -> f64 {
    degrees / 180.0 * PI
}

/// Convert radians to degrees
pub fn to_degrees(radians: f64) -> f64 {
    radians / PI * 180.0
}

/// Normalize an angle into [0, 360).
///
/// NaN passes through unchanged.
pub fn wrap360(degrees: f64) -> f64 {
    // + 0.0 turns a -0.0 remainder into 0.0
    let wrapped = degrees.rem_euclid(360.0) + 0.0;
    // rem_euclid rounds tiny negative inputs up to exactly 360
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Normalize an angle into [-180, 180)
pub fn wrap180(degrees: f64) -> f64 {
    wrap360(degrees + 180.0) - 180.0
}
