//! Domain errors for TodoFlow
//!
//! Only two kinds exist: validation failures (recoverable input problems) and
//! not-found lookups. Both are synchronous and always propagated to the caller.

use thiserror::Error;

/// Error raised by the todo domain
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    /// Input violated a field or state invariant
    #[error("{message}")]
    Validation {
        /// Human-readable description of the violated invariant
        message: String,
    },

    /// An operation targeted an id absent from the collection
    #[error("Todo with ID {id} not found")]
    NotFound {
        /// The id that was requested
        id: u64,
    },
}

impl TodoError {
    /// Creates a validation error with the given message
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Creates a not-found error for the given id
    pub fn not_found(id: u64) -> Self {
        Self::NotFound { id }
    }

    /// Returns true if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Returns true if this is a not-found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_displays_message() {
        let err = TodoError::validation("Title cannot be empty");
        assert_eq!(err.to_string(), "Title cannot be empty");
        assert!(err.is_validation());
        assert!(!err.is_not_found());
    }

    #[test]
    fn not_found_error_carries_id() {
        let err = TodoError::not_found(42);
        assert_eq!(err.to_string(), "Todo with ID 42 not found");
        assert_eq!(err, TodoError::NotFound { id: 42 });
        assert!(err.is_not_found());
    }
}
