//! Core types and constants for spherical geodesy

pub mod types;
pub mod constants;

pub use types::*;
pub use constants::*;
