//! State module for tracking crawl progress
//!
//! Each URL the crawler dequeues moves from pending to visited exactly once and
//! ends with a [`VisitStatus`] describing what happened to it.
//!
//! # Components
//!
//! - `VisitKind`: the three terminal outcomes of a visit (matched, no match, skipped)
//! - `VisitStatus`: a visit outcome together with its payload
//! - `PageVisit`: a visited URL and its status

mod visit;

// Re-export main types
pub use visit::{PageVisit, VisitKind, VisitStatus};
