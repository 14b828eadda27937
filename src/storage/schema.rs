//! Database schema definitions
//!
//! This module contains all SQL schema definitions for the Sumi-Sift result store.

/// SQL schema for the database
pub const SCHEMA_SQL: &str = r#"
-- One row per finished crawl
CREATE TABLE IF NOT EXISTS runs (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    seed_url TEXT NOT NULL,
    created_at TEXT NOT NULL
);

-- Keywords a run was filtered with, in caller order
CREATE TABLE IF NOT EXISTS run_keywords (
    run_id INTEGER NOT NULL REFERENCES runs(id) ON DELETE CASCADE,
    position INTEGER NOT NULL,
    keyword TEXT NOT NULL,
    PRIMARY KEY (run_id, position)
);

-- Every visited URL and its outcome, in visit order
CREATE TABLE IF NOT EXISTS visits (
    run_id INTEGER NOT NULL REFERENCES runs(id) ON DELETE CASCADE,
    position INTEGER NOT NULL,
    url TEXT NOT NULL,
    kind TEXT NOT NULL,
    detail TEXT,
    http_status INTEGER,
    PRIMARY KEY (run_id, position)
);

-- Pages with matching content, in visit order
CREATE TABLE IF NOT EXISTS results (
    run_id INTEGER NOT NULL REFERENCES runs(id) ON DELETE CASCADE,
    position INTEGER NOT NULL,
    url TEXT NOT NULL,
    content TEXT NOT NULL,
    PRIMARY KEY (run_id, position)
);
"#;

/// Initializes the database schema
pub fn initialize_schema(conn: &rusqlite::Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}
