//! Physical constants for the spherical earth model

/// Mean earth radius (m), the default radius for distance calculations
pub const DEFAULT_RADIUS: f64 = 6_371_000.0;
