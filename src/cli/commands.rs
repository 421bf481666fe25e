//! One-shot CLI command handlers
//!
//! Each handler renders a single service operation. The list is always empty
//! at the start of a run, so id-addressed commands mostly serve to demonstrate
//! the error contract; the menu and interactive front-ends are where a session
//! accumulates state.

use anyhow::Result;

use super::output::Output;
use crate::domain::{Priority, Status, Todo, TodoError, TodoList};

pub fn add(
    output: &Output,
    list: &mut TodoList,
    title: &str,
    description: &str,
    priority_str: &str,
) -> Result<()> {
    let priority: Priority = priority_str.parse()?;
    let todo = list.add(title, description, priority)?;

    if output.is_json() {
        output.data(todo);
    } else {
        output.success(&format!(
            "Added todo: [{}] {} ({})",
            todo.id, todo.title, todo.priority
        ));
    }

    Ok(())
}

pub fn list(
    output: &Output,
    list: &TodoList,
    status_str: Option<&str>,
    priority_str: Option<&str>,
) -> Result<()> {
    let status_filter: Option<Status> = status_str.map(str::parse).transpose()?;
    let priority_filter: Option<Priority> = priority_str.map(str::parse).transpose()?;

    let all = list.get_all();
    if all.is_empty() {
        if output.is_json() {
            output.data(&Vec::<&Todo>::new());
        } else {
            println!("No todos found. Add one with: todoflow add 'Task title'");
        }
        return Ok(());
    }

    let todos: Vec<&Todo> = all
        .into_iter()
        .filter(|t| status_filter.map_or(true, |s| t.status == s))
        .filter(|t| priority_filter.map_or(true, |p| t.priority == p))
        .collect();

    if output.is_json() {
        output.data(&todos);
    } else if todos.is_empty() {
        println!("No todos match the specified filters.");
    } else {
        println!("{:<4} | {:<12} | {:<8} | {}", "ID", "Status", "Priority", "Title");
        println!("{}", "-".repeat(60));
        for todo in todos {
            println!(
                "{:<4} | {:<12} | {:<8} | {}",
                todo.id, todo.status, todo.priority, todo.title
            );
        }
    }

    Ok(())
}

pub fn show(output: &Output, list: &TodoList, id: u64) -> Result<()> {
    let todo = list.get(id).ok_or(TodoError::NotFound { id })?;

    if output.is_json() {
        output.data(todo);
    } else {
        println!("ID: {}", todo.id);
        println!("Title: {}", todo.title);
        println!("Description: {}", todo.description);
        println!("Status: {}", todo.status);
        println!("Priority: {}", todo.priority);
        println!("Created: {}", todo.created_at.to_rfc3339());
    }

    Ok(())
}

pub fn complete(output: &Output, list: &mut TodoList, id: u64) -> Result<()> {
    let todo = list.mark_complete(id)?;

    if output.is_json() {
        output.data(todo);
    } else {
        output.success(&format!("Completed: [{}] {}", todo.id, todo.title));
    }

    Ok(())
}

pub fn update(
    output: &Output,
    list: &mut TodoList,
    id: u64,
    title: Option<&str>,
    description: Option<&str>,
    priority_str: Option<&str>,
) -> Result<()> {
    let priority: Option<Priority> = priority_str.map(str::parse).transpose()?;
    let todo = list.update(id, title, description, priority)?;

    if output.is_json() {
        output.data(todo);
    } else {
        println!("Updated todo [{}]:", todo.id);
        if let Some(title) = title {
            println!("  Title: {}", title);
        }
        if let Some(description) = description {
            println!("  Description: {}", description);
        }
        if let Some(priority) = priority {
            println!("  Priority: {}", priority);
        }
    }

    Ok(())
}

pub fn delete(output: &Output, list: &mut TodoList, id: u64) -> Result<()> {
    let title = list
        .get(id)
        .map(|t| t.title.clone())
        .ok_or(TodoError::NotFound { id })?;
    list.delete(id)?;

    if output.is_json() {
        output.data(&serde_json::json!({ "deleted": id, "title": title }));
    } else {
        output.success(&format!("Deleted todo [{}] {}", id, title));
    }

    Ok(())
}
