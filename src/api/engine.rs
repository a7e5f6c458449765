//! Synchronous evaluation of great-circle queries
//!
//! `evaluate` mirrors the library functions exactly: no validation, NaN for an
//! undefined bearing. `evaluate_checked` adds range checks and turns NaN
//! bearings into errors for callers that prefer `Result`.

use crate::algorithms::angles::wrap180;
use crate::algorithms::spherical::{
    destination_point_with_radius, distance_with_radius, final_bearing, initial_bearing, midpoint,
};
use crate::api::types::{Answer, Query};
use crate::core::Position;
use crate::utils::config::GeodesyConfig;
use crate::validation::{CoordinateValidator, GeodesyError, GeodesyResult};
use tracing::warn;

/// Evaluates queries against a configuration
#[derive(Debug, Clone, Default)]
pub struct QueryEngine {
    config: GeodesyConfig,
}

impl QueryEngine {
    pub fn new(config: GeodesyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeodesyConfig {
        &self.config
    }

    /// Evaluate a query without validating its input
    pub fn evaluate(&self, query: &Query) -> Answer {
        match *query {
            Query::Distance { start, destination, radius } => {
                let radius = radius.unwrap_or(self.config.radius_m);
                Answer::Scalar(distance_with_radius(start, destination, radius))
            }
            Query::InitialBearing { start, destination } => {
                Answer::Scalar(initial_bearing(start, destination))
            }
            Query::FinalBearing { start, destination } => {
                Answer::Scalar(final_bearing(start, destination))
            }
            Query::Midpoint { start, destination } => {
                Answer::Position(self.finish_position(midpoint(start, destination)))
            }
            Query::DestinationPoint { start, distance, bearing, radius } => {
                let radius = radius.unwrap_or(self.config.radius_m);
                let reached = destination_point_with_radius(start, distance, bearing, radius);
                Answer::Position(self.finish_position(reached))
            }
        }
    }

    /// Evaluate a query after range-checking its input.
    ///
    /// Bearings between coincident points come back as
    /// [`GeodesyError::UndefinedBearing`] instead of NaN.
    pub fn evaluate_checked(&self, query: &Query) -> GeodesyResult<Answer> {
        for position in query.positions() {
            CoordinateValidator::validate_position(&position)?;
        }

        match *query {
            Query::Distance { radius: Some(radius), .. } => {
                CoordinateValidator::validate_radius(radius)?;
            }
            Query::DestinationPoint { distance, bearing, radius, .. } => {
                CoordinateValidator::validate_finite("distance", distance)?;
                CoordinateValidator::validate_finite("bearing", bearing)?;
                if let Some(radius) = radius {
                    CoordinateValidator::validate_radius(radius)?;
                }
            }
            _ => {}
        }

        let answer = self.evaluate(query);
        match (query, answer) {
            (
                Query::InitialBearing { start, .. } | Query::FinalBearing { start, .. },
                Answer::Scalar(bearing),
            ) if bearing.is_nan() => Err(GeodesyError::UndefinedBearing {
                lon: start.lon,
                lat: start.lat,
            }),
            _ => Ok(answer),
        }
    }

    /// Evaluate every query, logging suspicious input but never rejecting it
    pub fn evaluate_batch(&self, queries: &[Query]) -> Vec<Answer> {
        queries
            .iter()
            .enumerate()
            .map(|(index, query)| {
                for position in query.positions() {
                    if let Err(err) = CoordinateValidator::validate_position(&position) {
                        warn!(index, op = query.op_name(), "{}", err);
                    }
                }
                self.evaluate(query)
            })
            .collect()
    }

    fn finish_position(&self, position: Position) -> Position {
        if self.config.normalize_longitude {
            Position::new(wrap180(position.lon), position.lat)
        } else {
            position
        }
    }
}
