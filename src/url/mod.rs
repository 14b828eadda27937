//! URL handling module for Sumi-Sift
//!
//! This module provides seed normalization, relative link resolution, host
//! extraction, and the internal-link check that keeps a crawl on one domain.

mod domain;
mod normalize;

use url::{ParseError, Url};

// Re-export main functions
pub use domain::extract_host;
pub use normalize::{canonicalize, normalize, resolve_link};

/// Decides whether `link` belongs to the seed's host
///
/// A link is internal when its host is empty (a relative reference, already
/// anchored to the seed by resolution) or equals `seed_host` exactly. There is
/// no scheme or port check and no subdomain matching: `www.example.com` and
/// `example.com` are different hosts.
///
/// Strings that fail to parse for any reason other than lacking a base are
/// treated as external.
///
/// # Examples
///
/// ```
/// use sumi_sift::url::is_internal;
///
/// assert!(is_internal("/about", "example.com"));
/// assert!(is_internal("https://example.com/x", "example.com"));
/// assert!(!is_internal("https://other.com/x", "example.com"));
/// assert!(!is_internal("https://sub.example.com/x", "example.com"));
/// ```
pub fn is_internal(link: &str, seed_host: &str) -> bool {
    match Url::parse(link) {
        Ok(url) => match url.host_str() {
            None | Some("") => true,
            Some(host) => host == seed_host,
        },
        Err(ParseError::RelativeUrlWithoutBase) => true,
        Err(_) => false,
    }
}
