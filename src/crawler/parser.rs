//! HTML parser for extracting visible text and links
//!
//! This module turns fetched page bytes into:
//! - The visible text of the page as trimmed, non-empty lines
//! - The absolute URLs of every followable anchor on the page

use crate::url::resolve_link;
use scraper::node::Node;
use scraper::{Html, Selector};

/// Elements whose text is never visible
const HIDDEN_ELEMENTS: &[&str] = &["script", "style"];

/// Href prefixes that never lead to a crawlable page
const SKIPPED_SCHEMES: &[&str] = &["javascript:", "mailto:", "tel:", "data:"];

/// Extracted information from an HTML page
#[derive(Debug, Clone, Default)]
pub struct ParsedPage {
    /// Visible text lines, in document order
    pub lines: Vec<String>,

    /// Absolute URLs of anchors on the page, in document order
    pub links: Vec<String>,
}

/// Parses HTML content and extracts its text lines and links
///
/// # Text Extraction Rules
///
/// - Text inside `<script>` and `<style>` is dropped
/// - All other text nodes are concatenated in document order, so adjacent
///   inline elements join without a separator
/// - The result is split on line boundaries, each line trimmed, and empty
///   lines removed
///
/// # Link Extraction Rules
///
/// **Include:** `<a href="...">` anywhere in the document, resolved against
/// `base_url` with the fragment removed.
///
/// **Exclude:** empty hrefs, `javascript:`, `mailto:`, `tel:` and `data:`
/// hrefs, and anything that does not resolve to an `http`/`https` URL.
///
/// # Example
///
/// ```
/// use sumi_sift::crawler::parse_html;
///
/// let html = r#"<html><body><p>Hello</p>
/// <a href="/about">About us</a></body></html>"#;
/// let parsed = parse_html(html, "https://example.com/");
/// assert_eq!(parsed.lines, vec!["Hello", "About us"]);
/// assert_eq!(parsed.links, vec!["https://example.com/about"]);
/// ```
pub fn parse_html(html: &str, base_url: &str) -> ParsedPage {
    let document = Html::parse_document(html);

    ParsedPage {
        lines: extract_lines(&document),
        links: extract_links(&document, base_url),
    }
}

/// Extracts visible text from a parsed document as trimmed, non-empty lines
pub fn extract_lines(document: &Html) -> Vec<String> {
    split_lines(&visible_text(document))
}

/// Concatenates every text node that is not inside a hidden element
fn visible_text(document: &Html) -> String {
    let mut text = String::new();

    for node in document.tree.root().descendants() {
        if let Node::Text(fragment) = node.value() {
            let hidden = node.ancestors().any(|ancestor| match ancestor.value() {
                Node::Element(element) => HIDDEN_ELEMENTS.contains(&element.name()),
                _ => false,
            });

            if !hidden {
                text.push_str(fragment);
            }
        }
    }

    text
}

/// Splits text on line boundaries, trims each line, and drops empty lines
///
/// Line boundaries are `\n`, `\r`, vertical tab, form feed, the ASCII
/// file/group/record separators, NEL, and the Unicode line and paragraph
/// separators.
pub fn split_lines(text: &str) -> Vec<String> {
    text.split(is_line_boundary)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Extracts all followable anchor links from the document
fn extract_links(document: &Html, base_url: &str) -> Vec<String> {
    let mut links = Vec::new();

    if let Ok(a_selector) = Selector::parse("a[href]") {
        for element in document.select(&a_selector) {
            if let Some(href) = element.value().attr("href") {
                if let Some(absolute_url) = resolve_anchor(href, base_url) {
                    links.push(absolute_url);
                }
            }
        }
    }

    links
}

/// Resolves an anchor href to an absolute URL, or None if it should not be followed
fn resolve_anchor(href: &str, base_url: &str) -> Option<String> {
    let href = href.trim();

    if href.is_empty() {
        return None;
    }

    let lower = href.to_ascii_lowercase();
    if SKIPPED_SCHEMES.iter().any(|scheme| lower.starts_with(scheme)) {
        return None;
    }

    let absolute_url = resolve_link(base_url, href).ok()?;
    if absolute_url.starts_with("http://") || absolute_url.starts_with("https://") {
        Some(absolute_url)
    } else {
        None
    }
}
