//! CSV export
//!
//! Rows are `URL,Matched Content`. Content keeps its embedded newlines; the
//! writer quotes such fields so they survive a round trip.

use crate::crawler::PageResult;
use crate::output::{OutputError, OutputResult};

/// Header row of the CSV export
pub const CSV_HEADER: [&str; 2] = ["URL", "Matched Content"];

/// Formats results as CSV with a `URL,Matched Content` header
pub fn format_csv(results: &[PageResult]) -> OutputResult<String> {
    let mut writer = csv::Writer::from_writer(vec![]);

    writer.write_record(CSV_HEADER)?;
    for result in results {
        writer.write_record([result.url.as_str(), result.content.as_str()])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| OutputError::Write(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| OutputError::Write(e.to_string()))
}

/// Parses CSV produced by [`format_csv`] back into results
///
/// # Errors
///
/// Returns `OutputError::Parse` if the header is not `URL,Matched Content`,
/// or `OutputError::Csv` for malformed CSV.
pub fn parse_csv(input: &str) -> OutputResult<Vec<PageResult>> {
    let mut reader = csv::Reader::from_reader(input.as_bytes());

    let headers = reader.headers()?;
    if headers.iter().ne(CSV_HEADER.iter().copied()) {
        return Err(OutputError::Parse(format!(
            "unexpected CSV header: {:?}",
            headers
        )));
    }

    let mut results = Vec::new();
    for record in reader.records() {
        let record = record?;
        results.push(PageResult {
            url: record.get(0).unwrap_or_default().to_string(),
            content: record.get(1).unwrap_or_default().to_string(),
        });
    }

    Ok(results)
}
