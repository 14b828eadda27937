//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching with a timeout and a response size cap
//! - HTML parsing into visible text lines and anchor links
//! - Keyword filtering of extracted lines
//! - Frontier management and overall crawl coordination

mod coordinator;
mod fetcher;
mod filter;
mod frontier;
mod parser;
mod report;

pub use coordinator::{crawl, crawl_with_config, Crawler};
pub use fetcher::{build_http_client, fetch_url, FetchError, FetchedPage};
pub use filter::{filter_by_keywords, parse_keywords, KeywordSet};
pub use frontier::Frontier;
pub use parser::{extract_lines, parse_html, split_lines, ParsedPage};
pub use report::{CrawlReport, PageResult};
