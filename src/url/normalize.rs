use crate::{UrlError, UrlResult};
use url::Url;

/// Scheme prefixes accepted as-is by [`normalize`]
const SCHEME_PREFIXES: &[&str] = &["http://", "https://"];

/// Canonicalizes raw user input into a scheme-qualified URL string
///
/// If the input does not start with `http://` or `https://` (compared
/// case-insensitively), `https://` is prepended. Surrounding whitespace is
/// trimmed. Nothing else is validated: malformed input passes through and
/// surfaces later as a fetch error.
///
/// # Examples
///
/// ```
/// use sumi_sift::url::normalize;
///
/// assert_eq!(normalize("example.com"), "https://example.com");
/// assert_eq!(normalize("http://example.com/a"), "http://example.com/a");
/// ```
pub fn normalize(raw: &str) -> String {
    let trimmed = raw.trim();
    let lower = trimmed.to_ascii_lowercase();

    if SCHEME_PREFIXES.iter().any(|prefix| lower.starts_with(prefix)) {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}

/// Returns the serialized form of `url` as the `url` crate parses it
///
/// `https://example.com` and `https://example.com/` are the same resource but
/// different strings; the crawl frontier keys on this form so a seed typed
/// without a trailing slash still dedupes against links back to it. Input that
/// does not parse is returned unchanged.
pub fn canonicalize(url: &str) -> String {
    match Url::parse(url) {
        Ok(mut parsed) => {
            parsed.set_fragment(None);
            parsed.to_string()
        }
        Err(_) => url.to_string(),
    }
}

/// Resolves a possibly-relative `href` against the page it was found on
///
/// Scheme-relative (`//host/x`), path-relative (`../x`, `x`), absolute-path
/// (`/x`) and fragment-only (`#x`) references are all resolved per the WHATWG
/// URL rules. The fragment of the result is dropped, so `/a#top` and `/a`
/// resolve to the same string.
///
/// # Errors
///
/// Returns `UrlError::Parse` if `base_url` is not an absolute URL or the
/// reference cannot be joined onto it.
///
/// # Examples
///
/// ```
/// use sumi_sift::url::resolve_link;
///
/// let resolved = resolve_link("https://example.com/docs/intro", "../about#team").unwrap();
/// assert_eq!(resolved, "https://example.com/about");
/// ```
pub fn resolve_link(base_url: &str, href: &str) -> UrlResult<String> {
    let base = Url::parse(base_url).map_err(|e| UrlError::Parse(format!("{}: {}", base_url, e)))?;
    let mut resolved = base
        .join(href.trim())
        .map_err(|e| UrlError::Parse(format!("{}: {}", href, e)))?;
    resolved.set_fragment(None);
    Ok(resolved.to_string())
}
