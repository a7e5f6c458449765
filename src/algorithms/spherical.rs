//! Great-circle calculations on a spherical earth model
//!
//! All functions take longitude/latitude positions in decimal degrees and are
//! pure: no input validation, no error values. The only failure signal is a NaN
//! bearing between coincident points, which callers must check for.
//!
//! Formulae follow the haversine/vector treatment of great circles:
//! - distance: a = sin²(Δφ/2) + cosφ1·cosφ2·sin²(Δλ/2), c = 2·atan2(√a, √(1−a))
//! - bearing: θ = atan2(sinΔλ·cosφ2, cosφ1·sinφ2 − sinφ1·cosφ2·cosΔλ)
//! - midpoint: direction of the sum of the two unit vectors
//! - destination: sinφ2 = sinφ1·cosδ + cosφ1·sinδ·cosθ

use nalgebra::Vector3;
use tracing::trace;

use crate::algorithms::angles::{to_degrees, to_radians, wrap360};
use crate::core::{Position, DEFAULT_RADIUS};

/// Whether two positions coincide to within machine epsilon on both axes
pub fn equals(a: impl Into<Position>, b: impl Into<Position>) -> bool {
    let (a, b) = (a.into(), b.into());
    (a.lon - b.lon).abs() <= f64::EPSILON && (a.lat - b.lat).abs() <= f64::EPSILON
}

/// Great-circle distance in metres on the mean earth radius
pub fn distance(start: impl Into<Position>, destination: impl Into<Position>) -> f64 {
    distance_with_radius(start, destination, DEFAULT_RADIUS)
}

/// Great-circle distance, in the same unit as `radius`
pub fn distance_with_radius(
    start: impl Into<Position>,
    destination: impl Into<Position>,
    radius: f64,
) -> f64 {
    let (start, destination) = (start.into(), destination.into());

    let phi1 = to_radians(start.lat);
    let phi2 = to_radians(destination.lat);
    let delta_phi = phi2 - phi1;
    let delta_lambda = to_radians(destination.lon) - to_radians(start.lon);

    let a = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    radius * c
}

/// Initial bearing in degrees [0, 360) from `start` towards `destination`.
///
/// Returns NaN when the points coincide, since no bearing exists between them.
pub fn initial_bearing(start: impl Into<Position>, destination: impl Into<Position>) -> f64 {
    let (start, destination) = (start.into(), destination.into());

    if equals(start, destination) {
        trace!(?start, "bearing undefined for coincident points");
        return f64::NAN;
    }

    let phi1 = to_radians(start.lat);
    let phi2 = to_radians(destination.lat);
    let delta_lambda = to_radians(destination.lon - start.lon);

    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * delta_lambda.cos();
    let y = delta_lambda.sin() * phi2.cos();

    wrap360(to_degrees(y.atan2(x)))
}

/// Bearing in degrees [0, 360) on arrival at `destination`
pub fn final_bearing(start: impl Into<Position>, destination: impl Into<Position>) -> f64 {
    // reverse of the initial bearing from the far end
    wrap360(initial_bearing(destination, start) + 180.0)
}

/// Point halfway along the great circle between `start` and `destination`.
///
/// Longitude is relative to the start's longitude and is not normalized.
pub fn midpoint(start: impl Into<Position>, destination: impl Into<Position>) -> Position {
    let (start, destination) = (start.into(), destination.into());

    let phi1 = to_radians(start.lat);
    let lambda1 = to_radians(start.lon);
    let phi2 = to_radians(destination.lat);
    let delta_lambda = to_radians(destination.lon - start.lon);

    // start sits on the y = 0 meridian of a frame rotated by λ1
    let a = Vector3::new(phi1.cos(), 0.0, phi1.sin());
    let b = Vector3::new(
        phi2.cos() * delta_lambda.cos(),
        phi2.cos() * delta_lambda.sin(),
        phi2.sin(),
    );
    let c = a + b;

    let phi_m = c.z.atan2((c.x * c.x + c.y * c.y).sqrt());
    let lambda_m = lambda1 + c.y.atan2(c.x);

    Position::new(to_degrees(lambda_m), to_degrees(phi_m))
}

/// Point reached after travelling `distance` metres from `start` on an initial `bearing`
pub fn destination_point(start: impl Into<Position>, distance: f64, bearing: f64) -> Position {
    destination_point_with_radius(start, distance, bearing, DEFAULT_RADIUS)
}

/// Point reached after travelling `distance` (same unit as `radius`) on an initial `bearing`.
///
/// Bearings outside [0, 360) behave like their wrapped equivalent.
pub fn destination_point_with_radius(
    start: impl Into<Position>,
    distance: f64,
    bearing: f64,
    radius: f64,
) -> Position {
    let start = start.into();

    let delta = distance / radius;
    let theta = to_radians(bearing);
    let phi1 = to_radians(start.lat);
    let lambda1 = to_radians(start.lon);

    let sin_phi2 = phi1.sin() * delta.cos() + phi1.cos() * delta.sin() * theta.cos();
    let phi2 = sin_phi2.asin();
    let y = theta.sin() * delta.sin() * phi1.cos();
    let x = delta.cos() - phi1.sin() * sin_phi2;
    let lambda2 = lambda1 + y.atan2(x);

    Position::new(to_degrees(lambda2), to_degrees(phi2))
}

impl Position {
    /// Great-circle distance in metres to `other`
    pub fn distance_to(&self, other: &Position) -> f64 {
        distance(*self, *other)
    }

    pub fn initial_bearing_to(&self, other: &Position) -> f64 {
        initial_bearing(*self, *other)
    }

    pub fn final_bearing_to(&self, other: &Position) -> f64 {
        final_bearing(*self, *other)
    }

    pub fn midpoint_to(&self, other: &Position) -> Position {
        midpoint(*self, *other)
    }

    /// Point reached after travelling `distance` metres on `bearing`
    pub fn destination_point(&self, distance: f64, bearing: f64) -> Position {
        destination_point(*self, distance, bearing)
    }
}
