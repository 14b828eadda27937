//! Keyword filtering of extracted text lines

use crate::SiftError;

/// Splits a comma-separated keyword string into trimmed, non-empty keywords
///
/// Order is preserved and duplicates are kept.
///
/// # Example
///
/// ```
/// use sumi_sift::crawler::parse_keywords;
///
/// assert_eq!(parse_keywords("contact, email,, "), vec!["contact", "email"]);
/// ```
pub fn parse_keywords(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|keyword| !keyword.is_empty())
        .map(str::to_string)
        .collect()
}

/// A validated set of keywords matched case-insensitively as substrings
///
/// An empty set matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordSet {
    keywords: Vec<String>,
    lowered: Vec<String>,
}

impl KeywordSet {
    /// Builds a keyword set from caller input
    ///
    /// # Errors
    ///
    /// Returns `SiftError::InvalidKeyword` if any keyword is blank after
    /// trimming, since a blank keyword would match every line.
    pub fn new<I, S>(keywords: I) -> Result<Self, SiftError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::default();

        for (index, keyword) in keywords.into_iter().enumerate() {
            let keyword = keyword.as_ref().trim();
            if keyword.is_empty() {
                return Err(SiftError::InvalidKeyword { index });
            }
            set.lowered.push(keyword.to_lowercase());
            set.keywords.push(keyword.to_string());
        }

        Ok(set)
    }

    /// The keywords as given, trimmed
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// True when no keywords were given; such a set matches no line
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Returns true if `line` contains at least one keyword, ignoring case
    ///
    /// Always false for an empty set.
    pub fn matches(&self, line: &str) -> bool {
        if self.lowered.is_empty() {
            return false;
        }

        let line = line.to_lowercase();
        self.lowered.iter().any(|keyword| line.contains(keyword.as_str()))
    }
}

/// Keeps the lines that contain at least one keyword, preserving order
pub fn filter_by_keywords(lines: &[String], keywords: &KeywordSet) -> Vec<String> {
    lines
        .iter()
        .filter(|line| keywords.matches(line))
        .cloned()
        .collect()
}
