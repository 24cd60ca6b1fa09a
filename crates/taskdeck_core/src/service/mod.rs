//! Session orchestration over board, view and persistence.
//!
//! # Responsibility
//! - Wire user actions to board mutations followed by a whole-board
//!   save.
//! - Keep the front end decoupled from storage details.

pub mod session;
