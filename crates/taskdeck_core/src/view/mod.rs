//! Plain-text rendering of the board state.
//!
//! # Responsibility
//! - Turn the current group's task sequence into numbered list rows.
//! - Turn the group set into a selector with the current group marked.
//!
//! # Invariants
//! - Rendering is pure: no I/O, no terminal control sequences.
//! - Displayed task numbers are one-based; the core stays zero-based.

use crate::model::board::Board;
use crate::model::task::Task;
use std::fmt::Write;

/// Marker for a completed task row.
const DONE_MARK: &str = "[x]";
/// Marker for a pending task row.
const PENDING_MARK: &str = "[ ]";

/// Renders one task row, e.g. `  3. [x] buy milk`.
pub fn render_task_row(index: usize, task: &Task) -> String {
    let mark = if task.completed {
        DONE_MARK
    } else {
        PENDING_MARK
    };
    format!("{:>3}. {mark} {}", index + 1, task.text)
}

/// Renders the task list of one group, one row per task.
///
/// Empty groups render a single placeholder line.
pub fn render_task_list(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "  (no tasks)".to_string();
    }

    let mut out = String::new();
    for (index, task) in tasks.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        out.push_str(&render_task_row(index, task));
    }
    out
}

/// Renders the group selector: one row per group with its task count,
/// the current group marked with `*`.
pub fn render_group_selector(board: &Board, current_group: &str) -> String {
    let mut out = String::new();
    for (position, name) in board.group_names().enumerate() {
        if position > 0 {
            out.push('\n');
        }
        let marker = if name == current_group { '*' } else { ' ' };
        let count = board.task_count(name).unwrap_or(0);
        let _ = write!(out, "{marker} {name} ({count})");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{render_group_selector, render_task_list, render_task_row};
    use crate::model::board::Board;
    use crate::model::task::Task;

    #[test]
    fn task_row_shows_one_based_index_and_completion() {
        let mut task = Task::new("buy milk");
        assert_eq!(render_task_row(0, &task), "  1. [ ] buy milk");
        task.toggle();
        assert_eq!(render_task_row(9, &task), " 10. [x] buy milk");
    }

    #[test]
    fn empty_group_renders_placeholder() {
        assert_eq!(render_task_list(&[]), "  (no tasks)");
    }

    #[test]
    fn task_list_renders_in_insertion_order() {
        let tasks = vec![Task::new("first"), Task::new("second")];
        let rendered = render_task_list(&tasks);
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines, ["  1. [ ] first", "  2. [ ] second"]);
    }

    #[test]
    fn group_selector_marks_current_and_counts_tasks() {
        let mut board = Board::new();
        board.add_group("Home").unwrap();
        board.add_group("Work").unwrap();
        board.add_task("Work", "ship release").unwrap();

        let rendered = render_group_selector(&board, "Work");
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines, ["  Home (0)", "* Work (1)"]);
    }
}
