//! Domain model for the grouped to-do board.
//!
//! # Responsibility
//! - Define the canonical in-memory shape: named groups of ordered tasks.
//! - Enforce board invariants at the mutation boundary.
//!
//! # Invariants
//! - Group names are unique (map key uniqueness).
//! - At least one group exists after `ensure_default_group`.
//! - Task identity is positional within its group.

pub mod board;
pub mod task;
