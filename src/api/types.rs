//! Query and answer types for the evaluation API

use crate::core::Position;
use serde::{Deserialize, Serialize};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON, one document per batch
    Json,
    /// Comma-separated values with a header row
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(format!("unknown output format '{}'", other)),
        }
    }
}

/// A single great-circle calculation request.
///
/// In JSON the operation is named by an `"op"` field, e.g.
/// `{"op": "distance", "start": [0.119, 52.205], "destination": [2.351, 48.857]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Query {
    Distance {
        start: Position,
        destination: Position,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        radius: Option<f64>,
    },
    InitialBearing {
        start: Position,
        destination: Position,
    },
    FinalBearing {
        start: Position,
        destination: Position,
    },
    Midpoint {
        start: Position,
        destination: Position,
    },
    DestinationPoint {
        start: Position,
        distance: f64,
        bearing: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        radius: Option<f64>,
    },
}

impl Query {
    /// Operation name as used in JSON and text output
    pub fn op_name(&self) -> &'static str {
        match self {
            Query::Distance { .. } => "distance",
            Query::InitialBearing { .. } => "initial_bearing",
            Query::FinalBearing { .. } => "final_bearing",
            Query::Midpoint { .. } => "midpoint",
            Query::DestinationPoint { .. } => "destination_point",
        }
    }

    /// All positions supplied by the query
    pub fn positions(&self) -> Vec<Position> {
        match self {
            Query::Distance { start, destination, .. }
            | Query::InitialBearing { start, destination }
            | Query::FinalBearing { start, destination }
            | Query::Midpoint { start, destination } => vec![*start, *destination],
            Query::DestinationPoint { start, .. } => vec![*start],
        }
    }
}

/// Result of evaluating a [`Query`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    /// Distance in the radius unit, or bearing in degrees (NaN when undefined)
    Scalar(f64),
    Position(Position),
}

impl Answer {
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Answer::Scalar(value) => Some(*value),
            Answer::Position(_) => None,
        }
    }

    pub fn as_position(&self) -> Option<Position> {
        match self {
            Answer::Scalar(_) => None,
            Answer::Position(position) => Some(*position),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_from_json() {
        let json = r#"[
            {"op": "distance", "start": [0.119, 52.205], "destination": [2.351, 48.857], "radius": 3959},
            {"op": "destination_point", "start": [-0.00147, 51.47788], "distance": 7794, "bearing": 300.7}
        ]"#;

        let queries: Vec<Query> = serde_json::from_str(json).unwrap();
        assert_eq!(
            queries[0],
            Query::Distance {
                start: Position::new(0.119, 52.205),
                destination: Position::new(2.351, 48.857),
                radius: Some(3959.0),
            }
        );
        assert_eq!(queries[1].op_name(), "destination_point");
        assert_eq!(queries[1].positions(), vec![Position::new(-0.00147, 51.47788)]);
    }

    #[test]
    fn test_radius_is_optional() {
        let json = r#"{"op": "distance", "start": [0, 0], "destination": [1, 1]}"#;
        let query: Query = serde_json::from_str(json).unwrap();
        assert!(matches!(query, Query::Distance { radius: None, .. }));
    }

    #[test]
    fn test_unknown_op_rejected() {
        let json = r#"{"op": "area", "start": [0, 0]}"#;
        assert!(serde_json::from_str::<Query>(json).is_err());
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("CSV".parse::<OutputFormat>(), Ok(OutputFormat::Csv));
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_answer_serializes_untagged() {
        assert_eq!(serde_json::to_string(&Answer::Scalar(1.5)).unwrap(), "1.5");
        assert_eq!(
            serde_json::to_string(&Answer::Position(Position::new(1.0, 2.0))).unwrap(),
            "[1.0,2.0]"
        );
    }
}
