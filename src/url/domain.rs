use url::Url;

/// Extracts the host component of an absolute URL string
///
/// Returns `None` if the string does not parse as an absolute URL or has no
/// host. The port is not part of the host.
///
/// # Examples
///
/// ```
/// use sumi_sift::url::extract_host;
///
/// assert_eq!(extract_host("https://example.com:8080/x"), Some("example.com".to_string()));
/// assert_eq!(extract_host("/relative"), None);
/// ```
pub fn extract_host(url: &str) -> Option<String> {
    Url::parse(url)
        .ok()
        .and_then(|parsed| parsed.host_str().map(str::to_string))
}
