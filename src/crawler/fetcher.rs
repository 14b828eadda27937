//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler:
//! - Building the HTTP client with the configured user agent and timeout
//! - Issuing a single GET per page, following redirects the way reqwest does by default
//! - Streaming the body under a byte cap
//! - Classifying transport failures

use crate::config::{CrawlerConfig, UserAgentConfig};
use reqwest::Client;
use std::borrow::Cow;
use std::time::Duration;
use thiserror::Error;

/// Reasons a single page could not be fetched
///
/// None of these stop a crawl; the page is marked visited and skipped.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Invalid request URL {url}: {message}")]
    InvalidUrl { url: String, message: String },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Connection failed for {url}: {message}")]
    Connect { url: String, message: String },

    #[error("Response from {url} exceeds {limit} bytes")]
    BodyTooLarge { url: String, limit: u64 },

    #[error("Transport error for {url}: {message}")]
    Transport { url: String, message: String },
}

impl FetchError {
    /// The URL whose fetch failed
    pub fn url(&self) -> &str {
        match self {
            Self::InvalidUrl { url, .. }
            | Self::Timeout { url }
            | Self::Connect { url, .. }
            | Self::BodyTooLarge { url, .. }
            | Self::Transport { url, .. } => url,
        }
    }

    fn from_reqwest(url: &str, error: reqwest::Error) -> Self {
        let url = url.to_string();
        if error.is_builder() {
            Self::InvalidUrl {
                url,
                message: error.to_string(),
            }
        } else if error.is_timeout() {
            Self::Timeout { url }
        } else if error.is_connect() {
            Self::Connect {
                url,
                message: error.to_string(),
            }
        } else {
            Self::Transport {
                url,
                message: error.to_string(),
            }
        }
    }
}

/// A successfully retrieved page
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Final URL after redirects
    pub final_url: String,

    /// HTTP status code
    pub status_code: u16,

    /// Raw body bytes
    pub body: Vec<u8>,
}

impl FetchedPage {
    /// Body decoded as UTF-8, replacing invalid sequences
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

/// Builds an HTTP client with the configured user agent and per-request timeout
///
/// # Example
///
/// ```
/// use sumi_sift::config::{CrawlerConfig, UserAgentConfig};
/// use sumi_sift::crawler::build_http_client;
///
/// let client = build_http_client(&UserAgentConfig::default(), &CrawlerConfig::default());
/// assert!(client.is_ok());
/// ```
pub fn build_http_client(
    user_agent: &UserAgentConfig,
    crawler: &CrawlerConfig,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent.value.as_str())
        .timeout(Duration::from_secs(crawler.request_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL, returning its bytes or the reason it could not be fetched
///
/// HTTP error statuses are not failures: a 404 page still has a body, and its
/// status code is reported in [`FetchedPage::status_code`]. Failures are:
///
/// | Condition | Error |
/// |-----------|-------|
/// | URL rejected by the client | `InvalidUrl` |
/// | Request or body read timed out | `Timeout` |
/// | DNS failure, connection refused, TLS failure | `Connect` |
/// | Declared or streamed body larger than `max_bytes` | `BodyTooLarge` |
/// | Anything else from the transport | `Transport` |
///
/// There are no retries.
pub async fn fetch_url(client: &Client, url: &str, max_bytes: u64) -> Result<FetchedPage, FetchError> {
    let mut response = client
        .get(url)
        .send()
        .await
        .map_err(|e| FetchError::from_reqwest(url, e))?;

    let status_code = response.status().as_u16();
    let final_url = response.url().to_string();

    if let Some(declared) = response.content_length() {
        if declared > max_bytes {
            return Err(FetchError::BodyTooLarge {
                url: url.to_string(),
                limit: max_bytes,
            });
        }
    }

    let mut body = Vec::new();
    while let Some(chunk) = response
        .chunk()
        .await
        .map_err(|e| FetchError::from_reqwest(url, e))?
    {
        if (body.len() + chunk.len()) as u64 > max_bytes {
            return Err(FetchError::BodyTooLarge {
                url: url.to_string(),
                limit: max_bytes,
            });
        }
        body.extend_from_slice(&chunk);
    }

    Ok(FetchedPage {
        final_url,
        status_code,
        body,
    })
}
