//! Great-circle algorithms and angle helpers

pub mod angles;
pub mod spherical;

pub use angles::{to_degrees, to_radians, wrap180, wrap360};
pub use spherical::{
    destination_point, destination_point_with_radius, distance, distance_with_radius, equals,
    final_bearing, initial_bearing, midpoint,
};
