//! Storage traits and error types
//!
//! This module defines the trait interface for result stores and associated
//! error types.

use crate::crawler::{CrawlReport, PageResult};
use crate::state::PageVisit;
use crate::storage::RunRecord;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Run not found: {0}")]
    RunNotFound(i64),

    #[error("Corrupt record in run {run_id}: {message}")]
    Corrupt { run_id: i64, message: String },

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Keyed store for finished crawl reports
///
/// Every saved report gets its own run id. Runs never share state, so an
/// export for one run can never observe another run's results.
pub trait ResultStore {
    /// Saves a finished report and returns the run id it was stored under
    fn save_report(&mut self, report: &CrawlReport) -> StorageResult<i64>;

    /// Gets summary information about a run
    fn get_run(&self, run_id: i64) -> StorageResult<RunRecord>;

    /// Lists all stored runs, newest first
    fn list_runs(&self) -> StorageResult<Vec<RunRecord>>;

    /// Loads the matching pages of a run, in visit order
    fn load_results(&self, run_id: i64) -> StorageResult<Vec<PageResult>>;

    /// Loads the per-URL visit records of a run, in visit order
    fn load_visits(&self, run_id: i64) -> StorageResult<Vec<PageVisit>>;

    /// Loads the full report of a run
    fn load_report(&self, run_id: i64) -> StorageResult<CrawlReport>;

    /// Removes a run and everything stored for it
    fn delete_run(&mut self, run_id: i64) -> StorageResult<()>;
}
