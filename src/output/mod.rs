//! Output module for presenting and exporting crawl results
//!
//! This module handles:
//! - Plain-text and CSV export of matched pages
//! - A human-readable preview of a crawl report
//! - Crawl statistics derived from per-URL visit outcomes

mod csv_export;
mod preview;
pub mod stats;
mod text;

pub use csv_export::{format_csv, parse_csv, CSV_HEADER};
pub use preview::format_preview;
pub use stats::{print_statistics, CrawlStatistics};
pub use text::format_text;

use crate::crawler::PageResult;
use serde::Deserialize;
use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write output: {0}")]
    Write(String),

    #[error("Failed to parse export: {0}")]
    Parse(String),

    #[error("Unknown export format '{0}', expected 'text' or 'csv'")]
    UnknownFormat(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Supported export file formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Matched text, one block per page
    #[default]
    Text,

    /// `URL,Matched Content` rows
    Csv,
}

impl ExportFormat {
    /// Conventional file extension for the format
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Csv => "csv",
        }
    }

    /// Renders results in this format
    pub fn render(&self, results: &[PageResult]) -> OutputResult<String> {
        match self {
            Self::Text => Ok(format_text(results)),
            Self::Csv => format_csv(results),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = OutputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "csv" => Ok(Self::Csv),
            other => Err(OutputError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

/// Writes results to `output_path` in the given format
///
/// # Returns
///
/// * `Ok(())` - Successfully wrote the export
/// * `Err(OutputError)` - Failed to render or write
pub fn write_export(
    results: &[PageResult],
    format: ExportFormat,
    output_path: &Path,
) -> OutputResult<()> {
    let rendered = format.render(results)?;

    let mut file = File::create(output_path)?;
    file.write_all(rendered.as_bytes())?;

    tracing::info!(
        "Wrote {} results as {} to {}",
        results.len(),
        format,
        output_path.display()
    );

    Ok(())
}
