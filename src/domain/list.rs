//! TodoList service
//!
//! Owns the in-memory collection of todos and is the only path for mutating
//! them. Ids are assigned sequentially starting at 1 and never reused within
//! the lifetime of a list instance, even after deletes.

use std::collections::BTreeMap;

use super::error::TodoError;
use super::todo::{validate_description, validate_title, Priority, Status, Todo};

/// In-memory collection of todos with CRUD operations
///
/// Backed by a `BTreeMap` so iteration is always in ascending id order.
#[derive(Debug, Default)]
pub struct TodoList {
    todos: BTreeMap<u64, Todo>,
    next_id: u64,
}

impl TodoList {
    /// Creates an empty todo list
    pub fn new() -> Self {
        Self {
            todos: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Creates and stores a new todo
    ///
    /// Validation runs before the id is allocated, so a failed add never
    /// consumes a counter value.
    pub fn add(
        &mut self,
        title: &str,
        description: &str,
        priority: Priority,
    ) -> Result<&Todo, TodoError> {
        let todo = Todo::new(self.next_id, title, description, priority)?;
        let id = todo.id;
        self.next_id += 1;
        Ok(self.todos.entry(id).or_insert(todo))
    }

    /// Looks up a todo by id
    ///
    /// An unknown id is not an error; it simply yields `None`.
    pub fn get(&self, id: u64) -> Option<&Todo> {
        self.todos.get(&id)
    }

    /// Returns all todos in ascending id order
    pub fn get_all(&self) -> Vec<&Todo> {
        self.todos.values().collect()
    }

    /// Returns the number of stored todos
    pub fn len(&self) -> usize {
        self.todos.len()
    }

    /// Returns true if no todos are stored
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Marks a todo as completed
    ///
    /// Completion is a one-time transition: a second call for the same id
    /// fails with a validation error rather than succeeding silently.
    pub fn mark_complete(&mut self, id: u64) -> Result<&Todo, TodoError> {
        let todo = self.todos.get_mut(&id).ok_or(TodoError::NotFound { id })?;
        if todo.status.is_completed() {
            return Err(TodoError::validation(format!(
                "Todo [{}] is already completed",
                id
            )));
        }
        todo.status = Status::Completed;
        Ok(todo)
    }

    /// Updates the mutable fields of a todo
    ///
    /// Each parameter is independently optional: `None` leaves the field
    /// untouched, while `Some("")` for the description explicitly clears it.
    /// All provided fields are validated before any is applied, so a failing
    /// call never leaves the record partially updated.
    pub fn update(
        &mut self,
        id: u64,
        title: Option<&str>,
        description: Option<&str>,
        priority: Option<Priority>,
    ) -> Result<&Todo, TodoError> {
        if !self.todos.contains_key(&id) {
            return Err(TodoError::NotFound { id });
        }

        // Stage validated values before touching the record
        let new_title = title.map(validate_title).transpose()?;
        let new_description = description.map(validate_description).transpose()?;

        let todo = self.todos.get_mut(&id).ok_or(TodoError::NotFound { id })?;
        if let Some(t) = new_title {
            todo.title = t;
        }
        if let Some(d) = new_description {
            todo.description = d;
        }
        if let Some(p) = priority {
            todo.priority = p;
        }

        Ok(todo)
    }

    /// Deletes a todo by id
    ///
    /// The id is permanently retired; no future add will ever reassign it.
    pub fn delete(&mut self, id: u64) -> Result<(), TodoError> {
        self.todos
            .remove(&id)
            .map(|_| ())
            .ok_or(TodoError::NotFound { id })
    }
}
