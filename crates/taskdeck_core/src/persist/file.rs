//! JSON file persistence adapter.
//!
//! # Responsibility
//! - Persist the complete board as one pretty-printed JSON file.
//! - Replace the file atomically so a crash mid-write never leaves a
//!   truncated document behind.
//!
//! # Invariants
//! - A missing file means "no document yet", not an error.
//! - The temp file lives in the target directory so the rename stays on
//!   one filesystem.

use crate::model::board::Board;
use crate::persist::{PersistError, PersistResult, PersistenceAdapter};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// File-backed persistence adapter.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store writing to `path`. Parent directories are
    /// created on first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Target file path of this store.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> PersistError {
        PersistError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl PersistenceAdapter for JsonFileStore {
    fn load(&self) -> PersistResult<Option<Board>> {
        let payload = match fs::read_to_string(&self.path) {
            Ok(payload) => payload,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(self.io_error(err)),
        };

        let board = serde_json::from_str(&payload).map_err(|source| PersistError::Decode {
            source_name: self.path.display().to_string(),
            source,
        })?;
        Ok(Some(board))
    }

    fn save(&self, board: &Board) -> PersistResult<()> {
        let payload = serde_json::to_string_pretty(board).map_err(PersistError::Encode)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|err| self.io_error(err))?;
            }
        }

        let tmp_path = self.path.with_extension("json.tmp");
        let mut tmp = fs::File::create(&tmp_path).map_err(|err| self.io_error(err))?;
        tmp.write_all(payload.as_bytes())
            .map_err(|err| self.io_error(err))?;
        tmp.sync_all().map_err(|err| self.io_error(err))?;
        drop(tmp);

        fs::rename(&tmp_path, &self.path).map_err(|err| self.io_error(err))?;
        Ok(())
    }
}
