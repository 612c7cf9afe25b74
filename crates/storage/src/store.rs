use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};
use leadtrack_core::{Lead, LeadDraft, env_parse_with_default};
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::types::Type;
use rusqlite::{Connection, params};

use crate::error::StorageError;
use crate::migrations;

/// Type alias for pooled connection
pub(crate) type PooledConn = PooledConnection<SqliteConnectionManager>;

const LEAD_COLUMNS: &str =
    "id, name, email, status, score, next_followup, notes, created_at, updated_at";

/// Lead store wrapping a SQLite connection pool.
#[derive(Clone, Debug)]
pub struct LeadStore {
    pool: Pool<SqliteConnectionManager>,
}

fn init_connection(conn: &mut Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        "PRAGMA busy_timeout = 5000;
         PRAGMA journal_mode = WAL;
         PRAGMA synchronous = NORMAL;",
    )?;
    Ok(())
}

fn db_pool_size() -> u32 {
    env_parse_with_default("LEADTRACK_DB_POOL_SIZE", 8)
}

fn parse_date(raw: &str, idx: usize) -> rusqlite::Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

fn parse_timestamp(raw: &str, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

fn row_to_lead(row: &rusqlite::Row<'_>) -> rusqlite::Result<Lead> {
    let next_followup: String = row.get(5)?;
    let created_at: String = row.get(7)?;
    let updated_at: String = row.get(8)?;
    Ok(Lead {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        status: row.get(3)?,
        score: row.get(4)?,
        next_followup: parse_date(&next_followup, 5)?,
        notes: row.get(6)?,
        created_at: parse_timestamp(&created_at, 7)?,
        updated_at: parse_timestamp(&updated_at, 8)?,
    })
}

impl LeadStore {
    /// Open (creating if needed) the database at `db_path` and run
    /// migrations.
    pub fn open(db_path: &Path) -> Result<Self, StorageError> {
        let manager = SqliteConnectionManager::file(db_path).with_init(init_connection);

        let pool_size = db_pool_size();
        let pool = Pool::builder().max_size(pool_size).build(manager)?;

        let conn = pool.get()?;
        migrations::run_migrations(&conn).map_err(|e| StorageError::Migration(e.to_string()))?;
        drop(conn);

        tracing::info!(pool_size, path = %db_path.display(), "lead store initialized");

        Ok(Self { pool })
    }

    /// Persist a new lead. `created_at` and `updated_at` are both set to
    /// the current time.
    pub fn create(&self, draft: &LeadDraft) -> Result<Lead, StorageError> {
        let conn = self.pool.get()?;
        let now = Utc::now().to_rfc3339();
        conn.execute(
            "INSERT INTO lead (name, email, status, score, next_followup, notes, created_at, updated_at)
               VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                draft.name,
                draft.email,
                draft.status,
                draft.score,
                draft.next_followup.to_string(),
                draft.notes,
                now,
                now,
            ],
        )?;
        let id = conn.last_insert_rowid();
        Self::get_with_conn(&conn, id)
    }

    /// Fetch a lead by id. `NotFound` if no such row.
    pub fn get(&self, id: i64) -> Result<Lead, StorageError> {
        let conn = self.pool.get()?;
        Self::get_with_conn(&conn, id)
    }

    fn get_with_conn(conn: &PooledConn, id: i64) -> Result<Lead, StorageError> {
        let mut stmt = conn.prepare(&format!("SELECT {LEAD_COLUMNS} FROM lead WHERE id = ?1"))?;
        let mut rows = stmt.query(params![id])?;
        match rows.next()? {
            Some(row) => Ok(row_to_lead(row)?),
            None => Err(StorageError::NotFound { entity: "lead", id }),
        }
    }

    /// All leads ordered by `updated_at` descending, optionally filtered
    /// to an exact status match.
    pub fn list(&self, filter_status: Option<&str>) -> Result<Vec<Lead>, StorageError> {
        let conn = self.pool.get()?;
        match filter_status {
            Some(status) => {
                let mut stmt = conn.prepare(&format!(
                    "SELECT {LEAD_COLUMNS} FROM lead WHERE status = ?1 ORDER BY updated_at DESC"
                ))?;
                let leads = stmt
                    .query_map(params![status], row_to_lead)?
                    .collect::<rusqlite::Result<Vec<_>>>()?;
                Ok(leads)
            },
            None => {
                let mut stmt = conn.prepare(&format!(
                    "SELECT {LEAD_COLUMNS} FROM lead ORDER BY updated_at DESC"
                ))?;
                let leads =
                    stmt.query_map([], row_to_lead)?.collect::<rusqlite::Result<Vec<_>>>()?;
                Ok(leads)
            },
        }
    }

    /// All leads ordered by `created_at` descending (dashboard listing).
    pub fn all_by_created(&self) -> Result<Vec<Lead>, StorageError> {
        let conn = self.pool.get()?;
        let mut stmt =
            conn.prepare(&format!("SELECT {LEAD_COLUMNS} FROM lead ORDER BY created_at DESC"))?;
        let leads = stmt.query_map([], row_to_lead)?.collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(leads)
    }

    /// All leads ordered by id ascending (deterministic export order).
    pub fn all_by_id(&self) -> Result<Vec<Lead>, StorageError> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(&format!("SELECT {LEAD_COLUMNS} FROM lead ORDER BY id"))?;
        let leads = stmt.query_map([], row_to_lead)?.collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(leads)
    }

    /// Replace all mutable fields of a lead and refresh `updated_at`.
    /// `NotFound` on missing id.
    pub fn update(&self, id: i64, draft: &LeadDraft) -> Result<Lead, StorageError> {
        let conn = self.pool.get()?;
        let now = Utc::now().to_rfc3339();
        let affected = conn.execute(
            "UPDATE lead
                SET name = ?1, email = ?2, status = ?3, score = ?4,
                    next_followup = ?5, notes = ?6, updated_at = ?7
              WHERE id = ?8",
            params![
                draft.name,
                draft.email,
                draft.status,
                draft.score,
                draft.next_followup.to_string(),
                draft.notes,
                now,
                id,
            ],
        )?;
        if affected == 0 {
            return Err(StorageError::NotFound { entity: "lead", id });
        }
        Self::get_with_conn(&conn, id)
    }

    /// Hard-delete a lead. `NotFound` if absent, so a second delete of
    /// the same id fails.
    pub fn delete(&self, id: i64) -> Result<(), StorageError> {
        let conn = self.pool.get()?;
        let affected = conn.execute("DELETE FROM lead WHERE id = ?1", params![id])?;
        if affected == 0 {
            return Err(StorageError::NotFound { entity: "lead", id });
        }
        Ok(())
    }

    /// Total number of leads.
    pub fn count(&self) -> Result<u64, StorageError> {
        let conn = self.pool.get()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM lead", [], |row| row.get(0))?;
        Ok(u64::try_from(count).unwrap_or_default())
    }
}
