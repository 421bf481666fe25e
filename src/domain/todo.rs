//! Todo entity model
//!
//! A todo can never exist in an invalid state: construction and every
//! field-level mutation go through the same validation rules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::TodoError;

/// Maximum length of a todo title, in characters
pub const MAX_TITLE_LEN: usize = 200;

/// Maximum length of a todo description, in characters
pub const MAX_DESCRIPTION_LEN: usize = 1000;

/// Lifecycle stage of a todo
///
/// `InProgress` is a valid state but no operation currently transitions into
/// it; completion jumps straight from `Pending` to `Completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl Status {
    /// Returns the stable external name for this status
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "pending",
            Status::InProgress => "in_progress",
            Status::Completed => "completed",
        }
    }

    /// Returns true if this status represents completion
    pub fn is_completed(&self) -> bool {
        matches!(self, Status::Completed)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Status::Pending),
            "in_progress" => Ok(Status::InProgress),
            "completed" => Ok(Status::Completed),
            other => Err(TodoError::validation(format!(
                "Invalid status '{}' (expected pending, in_progress, or completed)",
                other
            ))),
        }
    }
}

/// Importance tag of a todo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Returns the stable external name for this priority
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(TodoError::validation(format!(
                "Invalid priority '{}' (expected low, medium, or high)",
                other
            ))),
        }
    }
}

/// A single task record
///
/// `id` and `created_at` are immutable after construction. `title` and
/// `description` may only change through the validating setters, so the
/// invariants hold for the entire lifetime of the value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique identifier, assigned by the owning list
    pub id: u64,

    /// Task title, non-empty after trimming
    pub title: String,

    /// Optional longer description, empty string when absent
    #[serde(default)]
    pub description: String,

    /// Current lifecycle stage
    pub status: Status,

    /// Importance tag
    pub priority: Priority,

    /// When the todo was created (UTC)
    pub created_at: DateTime<Utc>,
}

impl Todo {
    /// Creates a new validated todo with `Pending` status
    ///
    /// Validation order: trim title, reject empty, check title length,
    /// check description length. Stored fields hold the trimmed text.
    pub fn new(
        id: u64,
        title: &str,
        description: &str,
        priority: Priority,
    ) -> Result<Self, TodoError> {
        let title = validate_title(title)?;
        let description = validate_description(description)?;

        Ok(Self {
            id,
            title,
            description,
            status: Status::Pending,
            priority,
            created_at: Utc::now(),
        })
    }

    /// Replaces the title, enforcing the title invariants
    pub fn set_title(&mut self, title: &str) -> Result<(), TodoError> {
        self.title = validate_title(title)?;
        Ok(())
    }

    /// Replaces the description, enforcing the length invariant
    ///
    /// An empty string is valid and clears the description.
    pub fn set_description(&mut self, description: &str) -> Result<(), TodoError> {
        self.description = validate_description(description)?;
        Ok(())
    }
}

/// Trims and validates a title, returning the trimmed value
pub(crate) fn validate_title(title: &str) -> Result<String, TodoError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(TodoError::validation("Title cannot be empty"));
    }
    if trimmed.chars().count() > MAX_TITLE_LEN {
        return Err(TodoError::validation(
            "Title must be 200 characters or less",
        ));
    }
    Ok(trimmed.to_string())
}

/// Trims and validates a description, returning the trimmed value
pub(crate) fn validate_description(description: &str) -> Result<String, TodoError> {
    let trimmed = description.trim();
    if trimmed.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(TodoError::validation(
            "Description must be 1000 characters or less",
        ));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_todo_has_defaults() {
        let todo = Todo::new(1, "Buy groceries", "", Priority::Medium).unwrap();
        assert_eq!(todo.id, 1);
        assert_eq!(todo.title, "Buy groceries");
        assert_eq!(todo.description, "");
        assert_eq!(todo.status, Status::Pending);
        assert_eq!(todo.priority, Priority::Medium);
    }

    #[test]
    fn title_is_trimmed() {
        let todo = Todo::new(1, "  Buy groceries  ", "", Priority::Medium).unwrap();
        assert_eq!(todo.title, "Buy groceries");
    }

    #[test]
    fn empty_title_rejected() {
        let err = Todo::new(1, "", "", Priority::Medium).unwrap_err();
        assert_eq!(err, TodoError::validation("Title cannot be empty"));
    }

    #[test]
    fn whitespace_title_rejected() {
        let err = Todo::new(1, "   ", "", Priority::Medium).unwrap_err();
        assert_eq!(err, TodoError::validation("Title cannot be empty"));
    }

    #[test]
    fn title_length_boundary() {
        let ok = "a".repeat(200);
        assert!(Todo::new(1, &ok, "", Priority::Medium).is_ok());

        let too_long = "a".repeat(201);
        let err = Todo::new(1, &too_long, "", Priority::Medium).unwrap_err();
        assert_eq!(
            err,
            TodoError::validation("Title must be 200 characters or less")
        );
    }

    #[test]
    fn description_length_boundary() {
        let ok = "d".repeat(1000);
        assert!(Todo::new(1, "Task", &ok, Priority::Medium).is_ok());

        let too_long = "d".repeat(1001);
        let err = Todo::new(1, "Task", &too_long, Priority::Medium).unwrap_err();
        assert_eq!(
            err,
            TodoError::validation("Description must be 1000 characters or less")
        );
    }

    #[test]
    fn empty_title_checked_before_length() {
        // An all-whitespace title longer than the limit still reports emptiness
        let padded = " ".repeat(300);
        let err = Todo::new(1, &padded, "", Priority::Medium).unwrap_err();
        assert_eq!(err, TodoError::validation("Title cannot be empty"));
    }

    #[test]
    fn set_title_validates() {
        let mut todo = Todo::new(1, "Original", "", Priority::Medium).unwrap();

        assert!(todo.set_title("  Renamed  ").is_ok());
        assert_eq!(todo.title, "Renamed");

        let err = todo.set_title("   ").unwrap_err();
        assert_eq!(err, TodoError::validation("Title cannot be empty"));
        assert_eq!(todo.title, "Renamed");
    }

    #[test]
    fn set_description_allows_explicit_clear() {
        let mut todo = Todo::new(1, "Task", "details", Priority::Medium).unwrap();
        todo.set_description("").unwrap();
        assert_eq!(todo.description, "");
    }

    #[test]
    fn set_description_validates_length() {
        let mut todo = Todo::new(1, "Task", "details", Priority::Medium).unwrap();
        let err = todo.set_description(&"d".repeat(1001)).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(todo.description, "details");
    }

    #[test]
    fn status_external_vocabulary() {
        assert_eq!(Status::Pending.to_string(), "pending");
        assert_eq!(Status::InProgress.to_string(), "in_progress");
        assert_eq!(Status::Completed.to_string(), "completed");

        assert_eq!("pending".parse::<Status>().unwrap(), Status::Pending);
        assert_eq!("in_progress".parse::<Status>().unwrap(), Status::InProgress);
        assert_eq!("completed".parse::<Status>().unwrap(), Status::Completed);
        assert!("done".parse::<Status>().is_err());
    }

    #[test]
    fn priority_external_vocabulary() {
        assert_eq!(Priority::Low.to_string(), "low");
        assert_eq!(Priority::Medium.to_string(), "medium");
        assert_eq!(Priority::High.to_string(), "high");

        assert_eq!("low".parse::<Priority>().unwrap(), Priority::Low);
        assert_eq!("medium".parse::<Priority>().unwrap(), Priority::Medium);
        assert_eq!("high".parse::<Priority>().unwrap(), Priority::High);
        assert!("urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&Status::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
        let json = serde_json::to_string(&Priority::High).unwrap();
        assert_eq!(json, "\"high\"");
    }
}
