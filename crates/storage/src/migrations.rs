//! Schema migrations, versioned through SQLite `user_version`.

use rusqlite::Connection;

pub const SCHEMA_VERSION: i32 = 1;

const V1_SQL: &str = "
CREATE TABLE IF NOT EXISTS lead (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    status TEXT NOT NULL DEFAULT '',
    score INTEGER NOT NULL,
    next_followup TEXT NOT NULL,
    notes TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_lead_status ON lead(status);
CREATE INDEX IF NOT EXISTS idx_lead_updated ON lead(updated_at);
CREATE INDEX IF NOT EXISTS idx_lead_followup ON lead(next_followup);

PRAGMA user_version = 1;
";

pub fn run_migrations(conn: &Connection) -> Result<(), rusqlite::Error> {
    let current_version: i32 = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;

    tracing::info!("database schema version: {} (target: {})", current_version, SCHEMA_VERSION);

    if current_version < 1 {
        tracing::info!("running migration v1: initial lead table");
        conn.execute_batch(V1_SQL)?;
    }

    Ok(())
}
