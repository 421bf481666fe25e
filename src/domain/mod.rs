//! Domain models for TodoFlow
//!
//! Contains the core business logic without any I/O concerns.

mod error;
mod list;
mod todo;

pub use error::TodoError;
pub use list::TodoList;
pub use todo::{Priority, Status, Todo, MAX_DESCRIPTION_LEN, MAX_TITLE_LEN};
