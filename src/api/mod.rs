//! Query evaluation API and output formatting
//!
//! Batches of JSON queries are evaluated by [`QueryEngine`] and rendered with
//! the text, JSON, or CSV formatters.

pub mod engine;
pub mod formatting;
pub mod types;

pub use engine::QueryEngine;
pub use formatting::{
    render, AnswerData, AnswerFormatter, CsvFormatter, FormattedAnswer, JsonFormatter,
    TextFormatter,
};
pub use types::{Answer, OutputFormat, Query};
