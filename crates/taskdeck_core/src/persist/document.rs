//! SQLite-backed whole-board document store.
//!
//! # Responsibility
//! - Persist the complete board as one JSON payload in the `documents`
//!   table, keyed by a fixed document id.
//! - Refuse to operate on unmigrated connections.
//!
//! # Invariants
//! - One board maps onto exactly one row; save is an upsert.
//! - Read paths reject undecodable persisted payloads instead of
//!   masking them.

use crate::db::migrations::latest_version;
use crate::model::board::Board;
use crate::persist::{PersistError, PersistResult, PersistenceAdapter};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

/// Fixed id of the single board document, mirroring the original
/// one-document-per-install layout.
pub const MASTER_DOCUMENT_ID: &str = "master_list";

/// SQLite-backed persistence adapter.
pub struct SqliteDocumentStore {
    conn: Connection,
    doc_id: String,
}

impl SqliteDocumentStore {
    /// Wraps a migrated connection, verifying schema readiness first.
    pub fn try_new(conn: Connection) -> PersistResult<Self> {
        ensure_connection_ready(&conn)?;
        Ok(Self {
            conn,
            doc_id: MASTER_DOCUMENT_ID.to_string(),
        })
    }

    /// Opens (and migrates) a database file and wraps it.
    pub fn open(path: impl AsRef<Path>) -> PersistResult<Self> {
        let conn = crate::db::open_db(path)?;
        Self::try_new(conn)
    }

    /// Opens an in-memory database, mainly for tests and smoke checks.
    pub fn in_memory() -> PersistResult<Self> {
        let conn = crate::db::open_db_in_memory()?;
        Self::try_new(conn)
    }

    /// Document id this store reads and writes.
    pub fn doc_id(&self) -> &str {
        &self.doc_id
    }
}

impl PersistenceAdapter for SqliteDocumentStore {
    fn load(&self) -> PersistResult<Option<Board>> {
        let payload: Option<String> = self
            .conn
            .query_row(
                "SELECT payload FROM documents WHERE doc_id = ?1;",
                [self.doc_id.as_str()],
                |row| row.get(0),
            )
            .optional()?;

        match payload {
            None => Ok(None),
            Some(payload) => {
                let board =
                    serde_json::from_str(&payload).map_err(|source| PersistError::Decode {
                        source_name: format!("documents/{}", self.doc_id),
                        source,
                    })?;
                Ok(Some(board))
            }
        }
    }

    fn save(&self, board: &Board) -> PersistResult<()> {
        let payload = serde_json::to_string(board).map_err(PersistError::Encode)?;
        self.conn.execute(
            "INSERT INTO documents (doc_id, payload)
             VALUES (?1, ?2)
             ON CONFLICT(doc_id) DO UPDATE SET
                payload = excluded.payload,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![self.doc_id.as_str(), payload],
        )?;
        Ok(())
    }
}

fn ensure_connection_ready(conn: &Connection) -> PersistResult<()> {
    let expected_version = latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version != expected_version {
        return Err(PersistError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = 'documents'
        );",
        [],
        |row| row.get(0),
    )?;
    if exists != 1 {
        return Err(PersistError::MissingRequiredTable("documents"));
    }

    Ok(())
}
