//! Task domain record.
//!
//! # Responsibility
//! - Define the single to-do entry shape shared by board, view and
//!   persistence layers.
//!
//! # Invariants
//! - A task has no stable ID; its identity is its index within the
//!   owning group's sequence.

use serde::{Deserialize, Serialize};

/// One to-do entry.
///
/// Serialized shape is `{ "text": ..., "completed": ... }` to match the
/// whole-board document layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// User-facing task text.
    pub text: String,
    /// Completion flag toggled from the list view.
    pub completed: bool,
}

impl Task {
    /// Creates a pending task.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            completed: false,
        }
    }

    /// Flips the completion flag.
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

#[cfg(test)]
mod tests {
    use super::Task;

    #[test]
    fn new_task_starts_pending() {
        let task = Task::new("water plants");
        assert_eq!(task.text, "water plants");
        assert!(!task.completed);
    }

    #[test]
    fn toggle_flips_both_ways() {
        let mut task = Task::new("x");
        task.toggle();
        assert!(task.completed);
        task.toggle();
        assert!(!task.completed);
    }
}
