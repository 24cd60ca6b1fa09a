//! Core domain logic for Taskdeck, a grouped to-do list.
//! This crate is the single source of truth for board invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod persist;
pub mod service;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::board::{Board, BoardError, BoardResult, DEFAULT_GROUP};
pub use model::task::Task;
pub use persist::{
    JsonFileStore, PersistError, PersistResult, PersistenceAdapter, SqliteDocumentStore,
    MASTER_DOCUMENT_ID,
};
pub use service::session::{SessionError, SessionResult, TodoSession};
pub use view::{render_group_selector, render_task_list, render_task_row};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
