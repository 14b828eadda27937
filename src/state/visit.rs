/// Visit state definitions for tracking crawl progress
///
/// A URL has no retry state: once dequeued it is visited, and the visit ends
/// in exactly one of the outcomes below.
use std::fmt;

/// Outcome category of a visited page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisitKind {
    /// Page was fetched and at least one line matched a keyword
    Matched,

    /// Page was fetched but no line matched
    NoMatch,

    /// Page could not be fetched and contributed nothing
    Skipped,
}

impl VisitKind {
    /// Returns true if the page was fetched successfully
    pub fn is_fetched(&self) -> bool {
        matches!(self, Self::Matched | Self::NoMatch)
    }

    /// Converts the kind to a database string representation
    pub fn to_db_string(&self) -> &'static str {
        match self {
            Self::Matched => "matched",
            Self::NoMatch => "no_match",
            Self::Skipped => "skipped",
        }
    }

    /// Parses a kind from a database string representation
    ///
    /// Returns None if the string doesn't match any known kind.
    pub fn from_db_string(s: &str) -> Option<Self> {
        match s {
            "matched" => Some(Self::Matched),
            "no_match" => Some(Self::NoMatch),
            "skipped" => Some(Self::Skipped),
            _ => None,
        }
    }

    /// Returns all visit kinds
    pub fn all_kinds() -> [Self; 3] {
        [Self::Matched, Self::NoMatch, Self::Skipped]
    }
}

impl fmt::Display for VisitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_db_string())
    }
}

/// Tagged outcome of one visit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisitStatus {
    /// Fetched; these are the keyword-matching lines in document order
    Matched { lines: Vec<String> },

    /// Fetched; nothing matched
    NoMatch,

    /// Fetch failed; the page is visited but never retried
    Skipped { error: String },
}

impl VisitStatus {
    /// Returns the outcome category
    pub fn kind(&self) -> VisitKind {
        match self {
            Self::Matched { .. } => VisitKind::Matched,
            Self::NoMatch => VisitKind::NoMatch,
            Self::Skipped { .. } => VisitKind::Skipped,
        }
    }

    /// Builds the status for a fetched page from its filtered lines
    pub fn from_matches(lines: Vec<String>) -> Self {
        if lines.is_empty() {
            Self::NoMatch
        } else {
            Self::Matched { lines }
        }
    }
}

/// A URL that transitioned to visited, with what happened to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageVisit {
    /// The URL as it was dequeued from the frontier
    pub url: String,

    /// Outcome of the visit
    pub status: VisitStatus,

    /// HTTP status code, when a response was received
    pub http_status: Option<u16>,
}

impl PageVisit {
    /// Creates a visit record for a page whose fetch failed
    pub fn skipped(url: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            status: VisitStatus::Skipped {
                error: error.into(),
            },
            http_status: None,
        }
    }
}
