//! Persistence adapter contracts and implementations.
//!
//! # Responsibility
//! - Define the whole-board load/save contract the session depends on.
//! - Keep backend details (SQL, file I/O) inside this boundary.
//!
//! # Invariants
//! - `save` always writes the complete board; last write wins.
//! - `load` distinguishes "no document yet" (`Ok(None)`) from failures.

use crate::db::DbError;
use crate::model::board::Board;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::PathBuf;

mod document;
mod file;

pub use document::{SqliteDocumentStore, MASTER_DOCUMENT_ID};
pub use file::JsonFileStore;

pub type PersistResult<T> = Result<T, PersistError>;

/// Errors from board persistence operations.
#[derive(Debug)]
pub enum PersistError {
    /// Underlying SQLite/bootstrap error.
    Db(DbError),
    /// Board could not be serialized for storage.
    Encode(serde_json::Error),
    /// Stored payload could not be decoded into a board.
    Decode {
        source_name: String,
        source: serde_json::Error,
    },
    /// File-level read/write failure.
    Io {
        path: PathBuf,
        source: io::Error,
    },
    /// Connection schema is not at the expected migrated version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Required table is missing from the connection schema.
    MissingRequiredTable(&'static str),
}

impl Display for PersistError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode board document: {err}"),
            Self::Decode {
                source_name,
                source,
            } => write!(f, "failed to decode board document `{source_name}`: {source}"),
            Self::Io { path, source } => {
                write!(f, "store i/o failure at `{}`: {source}", path.display())
            }
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "document store requires schema version {expected_version}, got {actual_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "document store requires table `{table}`")
            }
        }
    }
}

impl Error for PersistError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Encode(err) => Some(err),
            Self::Decode { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            Self::UninitializedConnection { .. } => None,
            Self::MissingRequiredTable(_) => None,
        }
    }
}

impl From<DbError> for PersistError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for PersistError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Durable storage collaborator for the whole board.
///
/// Implementations are swappable without changing the session or view.
pub trait PersistenceAdapter {
    /// Loads the persisted board. `Ok(None)` means no document exists
    /// yet (first run).
    fn load(&self) -> PersistResult<Option<Board>>;

    /// Persists the complete board, replacing any previous document.
    fn save(&self, board: &Board) -> PersistResult<()>;
}

impl PersistenceAdapter for Box<dyn PersistenceAdapter> {
    fn load(&self) -> PersistResult<Option<Board>> {
        self.as_ref().load()
    }

    fn save(&self, board: &Board) -> PersistResult<()> {
        self.as_ref().save(board)
    }
}
