use crate::output::ExportFormat;
use serde::Deserialize;

/// Default page-count bound for a crawl
pub const DEFAULT_MAX_PAGES: usize = 30;

/// Default per-request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Default cap on a single response body (5 MiB)
pub const DEFAULT_MAX_RESPONSE_BYTES: u64 = 5 * 1024 * 1024;

/// Default User-Agent header value
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

/// Main configuration structure for Sumi-Sift
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub crawler: CrawlerConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub output: OutputConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Maximum number of pages visited in one run
    #[serde(rename = "max-pages")]
    pub max_pages: usize,

    /// Timeout for a single fetch (seconds)
    #[serde(rename = "request-timeout-secs")]
    pub request_timeout_secs: u64,

    /// Largest response body accepted before the fetch is abandoned
    #[serde(rename = "max-response-bytes")]
    pub max_response_bytes: u64,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            max_pages: DEFAULT_MAX_PAGES,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            max_response_bytes: DEFAULT_MAX_RESPONSE_BYTES,
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Value sent in the User-Agent header
    pub value: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            value: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path to the SQLite result store
    #[serde(rename = "database-path")]
    pub database_path: String,

    /// Path the export file is written to
    #[serde(rename = "export-path")]
    pub export_path: String,

    /// Export file format
    pub format: ExportFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            database_path: "./sumi-sift.db".to_string(),
            export_path: "./scraped_data.txt".to_string(),
            format: ExportFormat::Text,
        }
    }
}
