//! Crawl results returned to the caller

use crate::state::{PageVisit, VisitKind};

/// A page's URL paired with its keyword-matching text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResult {
    /// The visited URL
    pub url: String,

    /// Matching lines joined with `\n`
    pub content: String,
}

/// Everything one crawl run produced
///
/// `results` holds one entry per page with at least one match, in visit
/// order. `visits` holds every URL that was visited, including pages that
/// matched nothing or could not be fetched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlReport {
    /// Normalized seed URL the crawl started from
    pub seed_url: String,

    /// Keywords the pages were filtered with
    pub keywords: Vec<String>,

    /// Every visited URL and its outcome, in visit order
    pub visits: Vec<PageVisit>,

    /// Pages with at least one matching line, in visit order
    pub results: Vec<PageResult>,
}

impl CrawlReport {
    /// Number of visited pages
    pub fn visited_count(&self) -> usize {
        self.visits.len()
    }

    /// Number of visited pages with at least one match
    pub fn matched_count(&self) -> usize {
        self.count_kind(VisitKind::Matched)
    }

    /// Number of fetched pages without a match
    pub fn no_match_count(&self) -> usize {
        self.count_kind(VisitKind::NoMatch)
    }

    /// Number of pages that could not be fetched
    pub fn skipped_count(&self) -> usize {
        self.count_kind(VisitKind::Skipped)
    }

    fn count_kind(&self, kind: VisitKind) -> usize {
        self.visits
            .iter()
            .filter(|visit| visit.status.kind() == kind)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::VisitStatus;

    #[test]
    fn test_counts() {
        let report = CrawlReport {
            seed_url: "https://example.com/".to_string(),
            keywords: vec!["contact".to_string()],
            visits: vec![
                PageVisit {
                    url: "https://example.com/".to_string(),
                    status: VisitStatus::NoMatch,
                    http_status: Some(200),
                },
                PageVisit {
                    url: "https://example.com/contact".to_string(),
                    status: VisitStatus::Matched {
                        lines: vec!["Contact us".to_string()],
                    },
                    http_status: Some(200),
                },
                PageVisit::skipped("https://example.com/down", "Connection failed"),
            ],
            results: vec![PageResult {
                url: "https://example.com/contact".to_string(),
                content: "Contact us".to_string(),
            }],
        };

        assert_eq!(report.visited_count(), 3);
        assert_eq!(report.matched_count(), 1);
        assert_eq!(report.no_match_count(), 1);
        assert_eq!(report.skipped_count(), 1);
        assert_eq!(report.results.len(), 1);
    }

    #[test]
    fn test_empty_report() {
        let report = CrawlReport::default();
        assert_eq!(report.visited_count(), 0);
        assert_eq!(report.skipped_count(), 0);
    }
}
