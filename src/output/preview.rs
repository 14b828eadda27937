//! Human-readable preview of a crawl report

use crate::crawler::CrawlReport;
use crate::state::VisitStatus;

/// Longest matched line shown in a preview before it is cut
const MAX_PREVIEW_LINE: usize = 120;

/// Formats a report as a preview
///
/// The preview lists every visited URL with its outcome, then the matched
/// text of each result.
pub fn format_preview(report: &CrawlReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("Seed: {}\n", report.seed_url));
    out.push_str(&format!("Keywords: {}\n", report.keywords.join(", ")));
    out.push_str(&format!(
        "Visited {} pages: {} matched, {} without matches, {} skipped\n\n",
        report.visited_count(),
        report.matched_count(),
        report.no_match_count(),
        report.skipped_count()
    ));

    out.push_str("Visits:\n");
    for visit in &report.visits {
        let detail = match &visit.status {
            VisitStatus::Matched { lines } => format!("{} matching lines", lines.len()),
            VisitStatus::NoMatch => "no match".to_string(),
            VisitStatus::Skipped { error } => format!("skipped ({})", error),
        };
        out.push_str(&format!("  [{}] {} - {}\n", visit.status.kind(), visit.url, detail));
    }

    if report.results.is_empty() {
        out.push_str("\nNo matching content found.\n");
        return out;
    }

    out.push_str("\nResults:\n");
    for result in &report.results {
        out.push_str(&format!("\n{}\n", result.url));
        for line in result.content.lines() {
            out.push_str(&format!("  {}\n", truncate(line, MAX_PREVIEW_LINE)));
        }
    }

    out
}

/// Cuts a line to at most `max` characters, marking the cut with "..."
fn truncate(line: &str, max: usize) -> String {
    if line.chars().count() <= max {
        line.to_string()
    } else {
        let kept: String = line.chars().take(max).collect();
        format!("{}...", kept)
    }
}
