//! SQLite storage implementation
//!
//! This module provides a SQLite-based implementation of the ResultStore trait.

use crate::crawler::{CrawlReport, PageResult};
use crate::state::{PageVisit, VisitKind, VisitStatus};
use crate::storage::schema::initialize_schema;
use crate::storage::traits::{ResultStore, StorageError, StorageResult};
use crate::storage::RunRecord;
use crate::SiftError;
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

/// SQLite result store
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Opens or creates the database at `path`
    ///
    /// # Returns
    ///
    /// * `Ok(SqliteStorage)` - Successfully opened/created database
    /// * `Err(SiftError)` - Failed to open database
    pub fn new(path: &Path) -> Result<Self, SiftError> {
        let conn = Connection::open(path)?;

        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            PRAGMA foreign_keys = ON;
        ",
        )?;

        initialize_schema(&conn)?;

        Ok(Self { conn })
    }

    /// Creates an in-memory database
    pub fn new_in_memory() -> Result<Self, SiftError> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        initialize_schema(&conn)?;
        Ok(Self { conn })
    }

    fn load_keywords(&self, run_id: i64) -> StorageResult<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT keyword FROM run_keywords WHERE run_id = ?1 ORDER BY position")?;
        let keywords = stmt
            .query_map(params![run_id], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(keywords)
    }
}

impl ResultStore for SqliteStorage {
    fn save_report(&mut self, report: &CrawlReport) -> StorageResult<i64> {
        let tx = self.conn.transaction()?;

        tx.execute(
            "INSERT INTO runs (seed_url, created_at) VALUES (?1, ?2)",
            params![report.seed_url, Utc::now().to_rfc3339()],
        )?;
        let run_id = tx.last_insert_rowid();

        for (position, keyword) in report.keywords.iter().enumerate() {
            tx.execute(
                "INSERT INTO run_keywords (run_id, position, keyword) VALUES (?1, ?2, ?3)",
                params![run_id, position as i64, keyword],
            )?;
        }

        for (position, visit) in report.visits.iter().enumerate() {
            let detail = match &visit.status {
                VisitStatus::Matched { lines } => Some(lines.join("\n")),
                VisitStatus::NoMatch => None,
                VisitStatus::Skipped { error } => Some(error.clone()),
            };
            tx.execute(
                "INSERT INTO visits (run_id, position, url, kind, detail, http_status)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    run_id,
                    position as i64,
                    visit.url,
                    visit.status.kind().to_db_string(),
                    detail,
                    visit.http_status
                ],
            )?;
        }

        for (position, result) in report.results.iter().enumerate() {
            tx.execute(
                "INSERT INTO results (run_id, position, url, content) VALUES (?1, ?2, ?3, ?4)",
                params![run_id, position as i64, result.url, result.content],
            )?;
        }

        tx.commit()?;

        tracing::debug!(
            "Stored run {} ({} visits, {} results)",
            run_id,
            report.visits.len(),
            report.results.len()
        );

        Ok(run_id)
    }

    fn get_run(&self, run_id: i64) -> StorageResult<RunRecord> {
        let mut stmt = self.conn.prepare(
            "SELECT id, seed_url, created_at,
                    (SELECT COUNT(*) FROM visits WHERE visits.run_id = runs.id),
                    (SELECT COUNT(*) FROM results WHERE results.run_id = runs.id)
             FROM runs WHERE id = ?1",
        )?;

        stmt.query_row(params![run_id], row_to_run)
            .optional()?
            .ok_or(StorageError::RunNotFound(run_id))
    }

    fn list_runs(&self) -> StorageResult<Vec<RunRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, seed_url, created_at,
                    (SELECT COUNT(*) FROM visits WHERE visits.run_id = runs.id),
                    (SELECT COUNT(*) FROM results WHERE results.run_id = runs.id)
             FROM runs ORDER BY id DESC",
        )?;

        let runs = stmt
            .query_map([], row_to_run)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(runs)
    }

    fn load_results(&self, run_id: i64) -> StorageResult<Vec<PageResult>> {
        // Distinguish "unknown run" from "run without results"
        self.get_run(run_id)?;

        let mut stmt = self
            .conn
            .prepare("SELECT url, content FROM results WHERE run_id = ?1 ORDER BY position")?;
        let results = stmt
            .query_map(params![run_id], |row| {
                Ok(PageResult {
                    url: row.get(0)?,
                    content: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(results)
    }

    fn load_visits(&self, run_id: i64) -> StorageResult<Vec<PageVisit>> {
        self.get_run(run_id)?;

        let mut stmt = self.conn.prepare(
            "SELECT url, kind, detail, http_status FROM visits WHERE run_id = ?1 ORDER BY position",
        )?;
        let rows = stmt
            .query_map(params![run_id], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, Option<String>>(2)?,
                    row.get::<_, Option<u16>>(3)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        rows.into_iter()
            .map(|(url, kind, detail, http_status)| {
                let kind = VisitKind::from_db_string(&kind).ok_or_else(|| StorageError::Corrupt {
                    run_id,
                    message: format!("unknown visit kind '{}'", kind),
                })?;
                let detail = detail.unwrap_or_default();
                let status = match kind {
                    VisitKind::Matched => VisitStatus::Matched {
                        lines: detail.split('\n').map(str::to_string).collect(),
                    },
                    VisitKind::NoMatch => VisitStatus::NoMatch,
                    VisitKind::Skipped => VisitStatus::Skipped { error: detail },
                };
                Ok(PageVisit {
                    url,
                    status,
                    http_status,
                })
            })
            .collect()
    }

    fn load_report(&self, run_id: i64) -> StorageResult<CrawlReport> {
        let run = self.get_run(run_id)?;

        Ok(CrawlReport {
            seed_url: run.seed_url,
            keywords: self.load_keywords(run_id)?,
            visits: self.load_visits(run_id)?,
            results: self.load_results(run_id)?,
        })
    }

    fn delete_run(&mut self, run_id: i64) -> StorageResult<()> {
        let deleted = self
            .conn
            .execute("DELETE FROM runs WHERE id = ?1", params![run_id])?;
        if deleted == 0 {
            return Err(StorageError::RunNotFound(run_id));
        }
        Ok(())
    }
}

fn row_to_run(row: &rusqlite::Row<'_>) -> rusqlite::Result<RunRecord> {
    Ok(RunRecord {
        id: row.get(0)?,
        seed_url: row.get(1)?,
        created_at: row.get(2)?,
        visited_count: row.get::<_, i64>(3)? as u64,
        result_count: row.get::<_, i64>(4)? as u64,
    })
}
