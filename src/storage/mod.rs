//! Storage module for keeping crawl results between the crawl and the export
//!
//! The crawl engine never touches this module. Callers save the report a crawl
//! returned and get back a run id; exports later load results by that id.

mod schema;
mod sqlite;
mod traits;

pub use sqlite::SqliteStorage;
pub use traits::{ResultStore, StorageError, StorageResult};

use crate::SiftError;
use std::path::Path;

/// Initializes or opens a result store database
pub fn open_storage(path: &Path) -> Result<SqliteStorage, SiftError> {
    SqliteStorage::new(path)
}

/// Summary of a stored run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRecord {
    pub id: i64,
    pub seed_url: String,
    pub created_at: String,
    pub visited_count: u64,
    pub result_count: u64,
}
