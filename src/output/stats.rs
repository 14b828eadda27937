//! Statistics derived from a crawl report
//!
//! This module summarizes per-URL visit outcomes so callers can tell "no
//! keyword matched" apart from "nothing could be fetched".

use crate::crawler::CrawlReport;
use crate::state::{VisitKind, VisitStatus};
use std::collections::HashMap;

/// Crawl statistics summary
#[derive(Debug, Clone, Default)]
pub struct CrawlStatistics {
    /// Total number of pages visited
    pub total_visited: u64,

    /// Count of visits by outcome
    pub visits_by_kind: HashMap<VisitKind, u64>,

    /// Number of result entries (pages with matches)
    pub total_results: u64,

    /// Number of matched lines across all results
    pub total_matched_lines: u64,

    /// Skip reasons and how often each occurred
    pub skip_reasons: HashMap<String, u64>,
}

impl CrawlStatistics {
    /// Computes statistics for a report
    pub fn from_report(report: &CrawlReport) -> Self {
        let mut stats = Self {
            total_visited: report.visits.len() as u64,
            total_results: report.results.len() as u64,
            ..Self::default()
        };

        for visit in &report.visits {
            *stats.visits_by_kind.entry(visit.status.kind()).or_insert(0) += 1;

            match &visit.status {
                VisitStatus::Matched { lines } => {
                    stats.total_matched_lines += lines.len() as u64;
                }
                VisitStatus::Skipped { error } => {
                    *stats.skip_reasons.entry(error.clone()).or_insert(0) += 1;
                }
                VisitStatus::NoMatch => {}
            }
        }

        stats
    }

    /// Number of visits with the given outcome
    pub fn count(&self, kind: VisitKind) -> u64 {
        self.visits_by_kind.get(&kind).copied().unwrap_or(0)
    }

    /// Percentage of visited pages that were fetched successfully
    pub fn fetch_success_rate(&self) -> f64 {
        if self.total_visited == 0 {
            return 0.0;
        }
        let fetched: u64 = VisitKind::all_kinds()
            .into_iter()
            .filter(VisitKind::is_fetched)
            .map(|kind| self.count(kind))
            .sum();
        (fetched as f64 / self.total_visited as f64) * 100.0
    }
}

/// Prints statistics to stdout in a formatted manner
pub fn print_statistics(stats: &CrawlStatistics) {
    println!("=== Crawl Statistics ===\n");

    println!("Overview:");
    println!("  Pages visited: {}", stats.total_visited);
    println!("  Pages with matches: {}", stats.total_results);
    println!("  Matched lines: {}", stats.total_matched_lines);
    println!();

    println!("Visits by Outcome:");
    for kind in VisitKind::all_kinds() {
        let count = stats.count(kind);
        let percentage = if stats.total_visited > 0 {
            (count as f64 / stats.total_visited as f64) * 100.0
        } else {
            0.0
        };
        println!("  {}: {} ({:.1}%)", kind, count, percentage);
    }
    println!();

    if !stats.skip_reasons.is_empty() {
        println!("Skip Reasons:");
        let mut reasons: Vec<_> = stats.skip_reasons.iter().collect();
        reasons.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

        for (reason, count) in reasons {
            println!("  {}: {}", reason, count);
        }
        println!();
    }

    println!(
        "Fetch Success Rate: {:.1}% ({} / {} pages fetched)",
        stats.fetch_success_rate(),
        stats.count(VisitKind::Matched) + stats.count(VisitKind::NoMatch),
        stats.total_visited
    );
}
