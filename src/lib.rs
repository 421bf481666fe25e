//! TodoFlow - a simple in-memory todo manager
//!
//! The core is the [`TodoList`] service: an in-process CRUD store over todos
//! keyed by an auto-incrementing id. Three console front-ends wrap it: a
//! flag-and-subcommand CLI, a numbered-menu interface, and an interactive
//! prompt loop. Nothing is persisted; every invocation starts empty.

pub mod cli;
pub mod domain;

pub use domain::{Priority, Status, Todo, TodoError, TodoList};
