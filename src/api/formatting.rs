//! Answer output formatting and serialization
//!
//! Answers are first rounded into a [`FormattedAnswer`] and then rendered as
//! text, JSON, or CSV.

use crate::api::types::{Answer, OutputFormat, Query};
use crate::validation::GeodesyResult;
use serde::{Deserialize, Serialize};

/// Rounded answer tagged with the query that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedAnswer {
    /// Position of the query in its batch
    pub index: usize,
    /// Operation name
    pub op: String,
    /// Result data
    pub result: AnswerData,
}

/// Answer data by kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnswerData {
    /// Distance in the radius unit
    Distance { value: f64 },
    /// Bearing in degrees, absent between coincident points
    Bearing { degrees: Option<f64> },
    /// Longitude/latitude in degrees
    Position { longitude_deg: f64, latitude_deg: f64 },
}

/// Rounds answers to a fixed number of decimal places
pub struct AnswerFormatter {
    /// Decimal places
    pub precision: u8,
}

impl Default for AnswerFormatter {
    fn default() -> Self {
        Self { precision: 4 }
    }
}

impl AnswerFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_precision(mut self, precision: u8) -> Self {
        self.precision = precision;
        self
    }

    /// Format one answer
    pub fn format(&self, index: usize, query: &Query, answer: &Answer) -> FormattedAnswer {
        let result = match (query, answer) {
            (Query::Distance { .. }, Answer::Scalar(value)) => {
                AnswerData::Distance { value: self.round_to_precision(*value) }
            }
            (_, Answer::Scalar(value)) => AnswerData::Bearing {
                degrees: (!value.is_nan()).then(|| self.round_to_precision(*value)),
            },
            (_, Answer::Position(position)) => AnswerData::Position {
                longitude_deg: self.round_to_precision(position.lon),
                latitude_deg: self.round_to_precision(position.lat),
            },
        };

        FormattedAnswer {
            index,
            op: query.op_name().to_string(),
            result,
        }
    }

    /// Format a batch of answers paired with their queries
    pub fn format_batch(&self, queries: &[Query], answers: &[Answer]) -> Vec<FormattedAnswer> {
        queries
            .iter()
            .zip(answers)
            .enumerate()
            .map(|(index, (query, answer))| self.format(index, query, answer))
            .collect()
    }

    /// Round floating-point value to specified precision
    fn round_to_precision(&self, value: f64) -> f64 {
        let multiplier = 10_f64.powi(self.precision as i32);
        (value * multiplier).round() / multiplier
    }
}

/// Human-readable text formatter
#[derive(Default)]
pub struct TextFormatter {
    /// Omit the index prefix
    pub compact: bool,
}

impl TextFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Format answer as a single line of text
    pub fn format_text(&self, formatted: &FormattedAnswer) -> String {
        let body = match &formatted.result {
            AnswerData::Distance { value } => format!("{}", value),
            AnswerData::Bearing { degrees: Some(degrees) } => format!("{}°", degrees),
            AnswerData::Bearing { degrees: None } => "undefined (coincident points)".to_string(),
            AnswerData::Position { longitude_deg, latitude_deg } => {
                format!("[{}, {}]", longitude_deg, latitude_deg)
            }
        };

        if self.compact {
            format!("{}: {}", formatted.op, body)
        } else {
            format!("#{} {}: {}", formatted.index, formatted.op, body)
        }
    }
}

/// JSON formatter for structured output
#[derive(Default)]
pub struct JsonFormatter {
    /// Pretty print JSON
    pub pretty: bool,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    /// Format answers as a JSON array
    pub fn format_json(&self, formatted: &[FormattedAnswer]) -> Result<String, serde_json::Error> {
        if self.pretty {
            serde_json::to_string_pretty(formatted)
        } else {
            serde_json::to_string(formatted)
        }
    }
}

/// CSV formatter
pub struct CsvFormatter {
    /// Include header row
    pub include_header: bool,
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self { include_header: true }
    }
}

impl CsvFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(&self) -> String {
        "index,op,value,longitude,latitude".to_string()
    }

    /// Format answer as CSV row; missing fields are left empty
    pub fn format_csv(&self, formatted: &FormattedAnswer) -> String {
        let (value, lon, lat) = match &formatted.result {
            AnswerData::Distance { value } => (value.to_string(), String::new(), String::new()),
            AnswerData::Bearing { degrees } => (
                degrees.map(|d| d.to_string()).unwrap_or_default(),
                String::new(),
                String::new(),
            ),
            AnswerData::Position { longitude_deg, latitude_deg } => {
                (String::new(), longitude_deg.to_string(), latitude_deg.to_string())
            }
        };

        format!("{},{},{},{},{}", formatted.index, formatted.op, value, lon, lat)
    }
}

/// Render a batch in the requested format
pub fn render(format: OutputFormat, formatted: &[FormattedAnswer]) -> GeodesyResult<String> {
    let output = match format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new();
            formatted
                .iter()
                .map(|answer| formatter.format_text(answer))
                .collect::<Vec<_>>()
                .join("\n")
        }
        OutputFormat::Json => JsonFormatter::pretty().format_json(formatted)?,
        OutputFormat::Csv => {
            let formatter = CsvFormatter::new();
            let mut lines = Vec::with_capacity(formatted.len() + 1);
            if formatter.include_header {
                lines.push(formatter.header());
            }
            lines.extend(formatted.iter().map(|answer| formatter.format_csv(answer)));
            lines.join("\n")
        }
    };
    Ok(output)
}
