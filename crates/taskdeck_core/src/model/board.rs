//! Board: the whole-store mapping from group name to task sequence.
//!
//! # Responsibility
//! - Hold every group and its ordered tasks in memory.
//! - Validate all mutations before applying them.
//!
//! # Invariants
//! - Group names are unique and non-blank.
//! - The last remaining group cannot be removed.
//! - Task order is insertion order; removal shifts later indices down.

use crate::model::task::Task;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Group created whenever the board would otherwise be empty.
pub const DEFAULT_GROUP: &str = "General";

/// Result type used by board mutations.
pub type BoardResult<T> = Result<T, BoardError>;

/// Validation errors from board mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Group name is blank after trim.
    BlankGroupName,
    /// Group with this name already exists.
    DuplicateGroup(String),
    /// No group with this name exists.
    GroupNotFound(String),
    /// Removing this group would leave the board empty.
    LastGroup(String),
    /// Task text is blank after trim.
    BlankTaskText,
    /// Task index is outside the group's sequence.
    TaskIndexOutOfRange {
        group: String,
        index: usize,
        len: usize,
    },
}

impl Display for BoardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankGroupName => write!(f, "group name must not be blank"),
            Self::DuplicateGroup(name) => write!(f, "group `{name}` already exists"),
            Self::GroupNotFound(name) => write!(f, "group `{name}` does not exist"),
            Self::LastGroup(name) => {
                write!(f, "group `{name}` is the last group and cannot be deleted")
            }
            Self::BlankTaskText => write!(f, "task text must not be blank"),
            Self::TaskIndexOutOfRange { group, index, len } => write!(
                f,
                "task index {index} is out of range for group `{group}` with {len} task(s)"
            ),
        }
    }
}

impl Error for BoardError {}

/// Whole-store collection of groups and their tasks.
///
/// Serializes as a plain JSON object keyed by group name, so one board
/// maps onto one persisted document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    groups: BTreeMap<String, Vec<Task>>,
}

impl Board {
    /// Creates an empty board. Callers that need the board invariant
    /// "at least one group exists" should follow up with
    /// [`Board::ensure_default_group`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board containing only the empty default group.
    pub fn with_default_group() -> Self {
        let mut board = Self::new();
        board.ensure_default_group();
        board
    }

    /// Inserts the default group when the board has no groups at all.
    ///
    /// Returns `true` when the default group was inserted.
    pub fn ensure_default_group(&mut self) -> bool {
        if !self.groups.is_empty() {
            return false;
        }
        self.groups.insert(DEFAULT_GROUP.to_string(), Vec::new());
        true
    }

    /// Adds an empty group and returns its normalized name.
    pub fn add_group(&mut self, name: &str) -> BoardResult<String> {
        let name = normalize_text(name).ok_or(BoardError::BlankGroupName)?;
        if self.groups.contains_key(&name) {
            return Err(BoardError::DuplicateGroup(name));
        }
        self.groups.insert(name.clone(), Vec::new());
        Ok(name)
    }

    /// Removes a group and all of its tasks.
    pub fn remove_group(&mut self, name: &str) -> BoardResult<()> {
        if !self.groups.contains_key(name) {
            return Err(BoardError::GroupNotFound(name.to_string()));
        }
        if self.groups.len() == 1 {
            return Err(BoardError::LastGroup(name.to_string()));
        }
        self.groups.remove(name);
        Ok(())
    }

    /// Appends a pending task to a group and returns its index.
    pub fn add_task(&mut self, group: &str, text: &str) -> BoardResult<usize> {
        let text = normalize_text(text).ok_or(BoardError::BlankTaskText)?;
        let tasks = self
            .groups
            .get_mut(group)
            .ok_or_else(|| BoardError::GroupNotFound(group.to_string()))?;
        tasks.push(Task::new(text));
        Ok(tasks.len() - 1)
    }

    /// Flips the completion flag of the task at `index`.
    ///
    /// Returns the new completion state.
    pub fn toggle_task(&mut self, group: &str, index: usize) -> BoardResult<bool> {
        let task = self.task_mut(group, index)?;
        task.toggle();
        Ok(task.completed)
    }

    /// Replaces the text of the task at `index`.
    pub fn edit_task(&mut self, group: &str, index: usize, new_text: &str) -> BoardResult<()> {
        let new_text = normalize_text(new_text).ok_or(BoardError::BlankTaskText)?;
        let task = self.task_mut(group, index)?;
        task.text = new_text;
        Ok(())
    }

    /// Removes the task at `index`, shifting later tasks down.
    pub fn remove_task(&mut self, group: &str, index: usize) -> BoardResult<Task> {
        let len = self.task_count(group)?;
        if index >= len {
            return Err(BoardError::TaskIndexOutOfRange {
                group: group.to_string(),
                index,
                len,
            });
        }
        // Key presence was just verified by task_count.
        let tasks = self
            .groups
            .get_mut(group)
            .ok_or_else(|| BoardError::GroupNotFound(group.to_string()))?;
        Ok(tasks.remove(index))
    }

    /// Returns whether a group with this exact name exists.
    pub fn contains_group(&self, name: &str) -> bool {
        self.groups.contains_key(name)
    }

    /// Group names in deterministic (lexicographic) order.
    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// First group name in deterministic order, if any group exists.
    pub fn first_group(&self) -> Option<&str> {
        self.groups.keys().next().map(String::as_str)
    }

    /// Tasks of one group in insertion order.
    pub fn tasks(&self, group: &str) -> BoardResult<&[Task]> {
        self.groups
            .get(group)
            .map(Vec::as_slice)
            .ok_or_else(|| BoardError::GroupNotFound(group.to_string()))
    }

    /// Number of tasks in one group.
    pub fn task_count(&self, group: &str) -> BoardResult<usize> {
        Ok(self.tasks(group)?.len())
    }

    /// Number of groups on the board.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Whether the board has no groups at all.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    fn task_mut(&mut self, group: &str, index: usize) -> BoardResult<&mut Task> {
        let tasks = self
            .groups
            .get_mut(group)
            .ok_or_else(|| BoardError::GroupNotFound(group.to_string()))?;
        let len = tasks.len();
        tasks.get_mut(index).ok_or(BoardError::TaskIndexOutOfRange {
            group: group.to_string(),
            index,
            len,
        })
    }
}

fn normalize_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
