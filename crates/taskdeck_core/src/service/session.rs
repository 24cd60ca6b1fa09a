//! To-do session: the controller between user input and the board.
//!
//! # Responsibility
//! - Own the in-memory board and the current-group selection.
//! - Apply validated mutations, then persist the whole board.
//!
//! # Invariants
//! - The board always holds at least one group while a session is open.
//! - The current group always names an existing group.
//! - Save failures are logged and never roll back the in-memory
//!   mutation; memory and durable state may diverge until the next
//!   successful save.

use crate::model::board::{Board, BoardError, BoardResult};
use crate::model::task::Task;
use crate::persist::PersistenceAdapter;
use log::{debug, error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result type used by session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors surfaced to the front end by session operations.
///
/// Persistence failures are intentionally absent: they are logged and
/// swallowed, matching the save-after-mutate contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Board-level validation failure.
    Board(BoardError),
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Board(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Board(err) => Some(err),
        }
    }
}

impl From<BoardError> for SessionError {
    fn from(value: BoardError) -> Self {
        Self::Board(value)
    }
}

/// Controller owning the board, the current group and the adapter.
pub struct TodoSession<P: PersistenceAdapter> {
    board: Board,
    current_group: String,
    adapter: P,
}

impl<P: PersistenceAdapter> TodoSession<P> {
    /// Opens a session by loading the persisted board once.
    ///
    /// - Document present: adopt it, inserting the default group if it
    ///   is somehow empty.
    /// - Document absent: start from the default board and write the
    ///   initial document.
    /// - Load failure: log and continue with an in-memory default
    ///   board; later saves will try to catch durable state up.
    pub fn open(adapter: P) -> Self {
        let board = match adapter.load() {
            Ok(Some(mut board)) => {
                if board.ensure_default_group() {
                    info!("event=board_load module=session status=ok detail=empty_document_repaired");
                } else {
                    info!(
                        "event=board_load module=session status=ok groups={}",
                        board.group_count()
                    );
                }
                board
            }
            Ok(None) => {
                let board = Board::with_default_group();
                info!("event=board_load module=session status=ok detail=first_run");
                if let Err(err) = adapter.save(&board) {
                    error!(
                        "event=board_save module=session status=error op=bootstrap error={err}"
                    );
                }
                board
            }
            Err(err) => {
                error!("event=board_load module=session status=error error={err}");
                Board::with_default_group()
            }
        };

        let current_group = board
            .first_group()
            .unwrap_or(crate::model::board::DEFAULT_GROUP)
            .to_string();

        Self {
            board,
            current_group,
            adapter,
        }
    }

    /// Adds a group and makes it the current one.
    pub fn add_group(&mut self, name: &str) -> SessionResult<()> {
        let name = self.board.add_group(name)?;
        self.current_group = name;
        info!(
            "event=group_add module=session status=ok groups={}",
            self.board.group_count()
        );
        self.persist("group_add");
        Ok(())
    }

    /// Deletes the current group and all of its tasks.
    ///
    /// The first remaining group (deterministic order) becomes current.
    pub fn delete_group(&mut self) -> SessionResult<()> {
        let name = self.current_group.clone();
        self.board.remove_group(&name)?;
        self.current_group = self
            .board
            .first_group()
            .unwrap_or(crate::model::board::DEFAULT_GROUP)
            .to_string();
        info!(
            "event=group_delete module=session status=ok groups={}",
            self.board.group_count()
        );
        self.persist("group_delete");
        Ok(())
    }

    /// Switches the current group. Selection is session state only, so
    /// no save follows.
    pub fn switch_group(&mut self, name: &str) -> SessionResult<()> {
        if !self.board.contains_group(name) {
            return Err(BoardError::GroupNotFound(name.to_string()).into());
        }
        self.current_group = name.to_string();
        debug!("event=group_switch module=session status=ok");
        Ok(())
    }

    /// Appends a pending task to the current group and returns its
    /// index.
    pub fn add_task(&mut self, text: &str) -> SessionResult<usize> {
        let index = self.board.add_task(&self.current_group, text)?;
        info!("event=task_add module=session status=ok index={index}");
        self.persist("task_add");
        Ok(index)
    }

    /// Flips completion of the task at `index` in the current group and
    /// returns the new state.
    pub fn toggle_task(&mut self, index: usize) -> SessionResult<bool> {
        let completed = self.board.toggle_task(&self.current_group, index)?;
        info!("event=task_toggle module=session status=ok index={index} completed={completed}");
        self.persist("task_toggle");
        Ok(completed)
    }

    /// Replaces the text of the task at `index` in the current group.
    pub fn edit_task(&mut self, index: usize, new_text: &str) -> SessionResult<()> {
        self.board.edit_task(&self.current_group, index, new_text)?;
        info!("event=task_edit module=session status=ok index={index}");
        self.persist("task_edit");
        Ok(())
    }

    /// Removes the task at `index` from the current group, shifting
    /// later indices down.
    pub fn delete_task(&mut self, index: usize) -> SessionResult<Task> {
        let removed = self.board.remove_task(&self.current_group, index)?;
        info!("event=task_delete module=session status=ok index={index}");
        self.persist("task_delete");
        Ok(removed)
    }

    /// Name of the currently selected group.
    pub fn current_group(&self) -> &str {
        &self.current_group
    }

    /// Group names in deterministic order.
    pub fn group_names(&self) -> Vec<&str> {
        self.board.group_names().collect()
    }

    /// Tasks of the current group in insertion order.
    pub fn current_tasks(&self) -> &[Task] {
        // The current group always exists while the session is open.
        self.board.tasks(&self.current_group).unwrap_or(&[])
    }

    /// Read access to the whole board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Tasks of one group, for callers rendering non-current groups.
    pub fn tasks(&self, group: &str) -> BoardResult<&[Task]> {
        self.board.tasks(group)
    }

    fn persist(&self, op: &str) {
        match self.adapter.save(&self.board) {
            Ok(()) => debug!("event=board_save module=session status=ok op={op}"),
            Err(err) => {
                // Memory keeps the mutation; durable state lags until
                // the next successful save.
                error!("event=board_save module=session status=error op={op} error={err}");
            }
        }
    }
}
