//! Crawler coordinator - main crawl orchestration logic
//!
//! This module contains the crawl loop that ties the other pieces together:
//! - Validating caller input and normalizing the seed
//! - Draining the frontier breadth-first under the page-count bound
//! - Fetching, extracting, and keyword-filtering each page
//! - Classifying discovered links and growing the frontier

use crate::config::Config;
use crate::crawler::filter::{filter_by_keywords, KeywordSet};
use crate::crawler::frontier::Frontier;
use crate::crawler::parser::parse_html;
use crate::crawler::report::{CrawlReport, PageResult};
use crate::crawler::{build_http_client, fetch_url};
use crate::state::{PageVisit, VisitStatus};
use crate::url::{canonicalize, extract_host, is_internal, normalize};
use crate::SiftError;
use reqwest::Client;
use std::time::Instant;

/// Runs keyword crawls over a single domain
///
/// A `Crawler` holds only the HTTP client and fetch limits. All per-run state
/// (frontier, visited set, results) lives inside [`Crawler::crawl`], so one
/// crawler can serve any number of concurrent, isolated runs.
#[derive(Debug, Clone)]
pub struct Crawler {
    client: Client,
    max_response_bytes: u64,
}

impl Crawler {
    /// Creates a crawler from the configuration
    ///
    /// # Errors
    ///
    /// Returns `SiftError::Reqwest` if the HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self, SiftError> {
        let client = build_http_client(&config.user_agent, &config.crawler)?;

        Ok(Self {
            client,
            max_response_bytes: config.crawler.max_response_bytes,
        })
    }

    /// Crawls the seed's domain and returns the pages that mention a keyword
    ///
    /// The crawl is breadth-first from `seed_url`. At most `max_pages` URLs are
    /// visited and each at most once. Pages that cannot be fetched are recorded
    /// as skipped and the crawl moves on.
    ///
    /// # Errors
    ///
    /// Only caller faults fail the call:
    /// - `SiftError::EmptySeedUrl` if the seed is blank
    /// - `SiftError::InvalidKeyword` if a keyword is blank
    /// - `SiftError::InvalidMaxPages` if `max_pages` is zero
    ///
    /// A malformed seed is not an error; it yields a report with one skipped
    /// visit and no results.
    pub async fn crawl<S: AsRef<str>>(
        &self,
        seed_url: &str,
        keywords: &[S],
        max_pages: usize,
    ) -> Result<CrawlReport, SiftError> {
        if seed_url.trim().is_empty() {
            return Err(SiftError::EmptySeedUrl);
        }
        if max_pages == 0 {
            return Err(SiftError::InvalidMaxPages(max_pages));
        }
        let keywords = KeywordSet::new(keywords)?;

        let seed_url = canonicalize(&normalize(seed_url));
        let seed_host = extract_host(&seed_url).unwrap_or_default();

        tracing::info!(
            "Starting crawl of {} (host: {}, max pages: {}, keywords: {:?})",
            seed_url,
            seed_host,
            max_pages,
            keywords.keywords()
        );

        let mut frontier = Frontier::new(seed_url.clone(), max_pages);
        let mut report = CrawlReport {
            seed_url,
            keywords: keywords.keywords().to_vec(),
            ..CrawlReport::default()
        };
        let start_time = Instant::now();

        while let Some(current) = frontier.next_url() {
            tracing::debug!("Processing URL: {}", current);

            let (visit, links) = self.process_url(&current, &keywords).await;

            if let VisitStatus::Matched { lines } = &visit.status {
                report.results.push(PageResult {
                    url: current.clone(),
                    content: lines.join("\n"),
                });
            }
            report.visits.push(visit);

            for link in links {
                if !is_internal(&link, &seed_host) {
                    tracing::trace!("Ignoring external link: {}", link);
                    continue;
                }
                if frontier.enqueue(link.as_str()) {
                    tracing::debug!("Queued {}", link);
                }
            }

            let visited = frontier.visited_count();
            if visited % 10 == 0 {
                tracing::info!(
                    "Progress: {}/{} pages visited, {} in frontier, {} matched",
                    visited,
                    frontier.max_pages(),
                    frontier.frontier_size(),
                    report.results.len()
                );
            }
        }

        tracing::info!(
            "Crawl completed: {} pages visited ({} matched, {} skipped) in {:?}",
            report.visited_count(),
            report.matched_count(),
            report.skipped_count(),
            start_time.elapsed()
        );

        Ok(report)
    }

    /// Visits a single URL
    ///
    /// Returns the visit record and the links found on the page. A failed
    /// fetch yields a skipped visit and no links.
    async fn process_url(&self, url: &str, keywords: &KeywordSet) -> (PageVisit, Vec<String>) {
        let page = match fetch_url(&self.client, url, self.max_response_bytes).await {
            Ok(page) => page,
            Err(e) => {
                tracing::warn!("Skipping {}: {}", e.url(), e);
                return (PageVisit::skipped(e.url(), e.to_string()), Vec::new());
            }
        };

        if page.final_url != url {
            tracing::debug!("{} redirected to {}", url, page.final_url);
        }

        let parsed = parse_html(&page.text(), url);
        let matches = filter_by_keywords(&parsed.lines, keywords);

        tracing::debug!(
            "{}: HTTP {}, {} lines, {} matched, {} links",
            url,
            page.status_code,
            parsed.lines.len(),
            matches.len(),
            parsed.links.len()
        );

        let visit = PageVisit {
            url: url.to_string(),
            status: VisitStatus::from_matches(matches),
            http_status: Some(page.status_code),
        };

        (visit, parsed.links)
    }
}

/// Runs one crawl with the default configuration
///
/// # Arguments
///
/// * `seed_url` - Where to start; `https://` is assumed if no scheme is given
/// * `keywords` - Keywords to keep lines for; an empty list matches nothing
/// * `max_pages` - Upper bound on visited pages (the default configuration uses 30)
///
/// # Example
///
/// ```no_run
/// use sumi_sift::crawler::{crawl, parse_keywords};
///
/// # async fn example() -> Result<(), sumi_sift::SiftError> {
/// let report = crawl("example.com", &parse_keywords("contact, email"), 30).await?;
/// for result in &report.results {
///     println!("{}\n{}", result.url, result.content);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn crawl<S: AsRef<str>>(
    seed_url: &str,
    keywords: &[S],
    max_pages: usize,
) -> Result<CrawlReport, SiftError> {
    let config = Config::default();
    Crawler::new(&config)?
        .crawl(seed_url, keywords, max_pages)
        .await
}

/// Runs one crawl with the page bound taken from the crawler configuration
pub async fn crawl_with_config<S: AsRef<str>>(
    config: &Config,
    seed_url: &str,
    keywords: &[S],
) -> Result<CrawlReport, SiftError> {
    Crawler::new(config)?
        .crawl(seed_url, keywords, config.crawler.max_pages)
        .await
}
