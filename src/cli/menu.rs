//! Numbered-menu front-end
//!
//! A full-screen-free menu loop: print the options, read a number, run the
//! action, wait for Enter. The loop is generic over its input and output
//! streams so sessions can be scripted in tests.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use super::prompt::prompt;
use crate::domain::{Priority, Status, TodoList};

const MENU_OPTIONS: [&str; 7] = [
    "Add new todo",
    "View all todos",
    "Show specific todo",
    "Update a todo",
    "Complete a todo",
    "Delete a todo",
    "Exit",
];

/// Runs the menu loop against stdin/stdout
pub fn run(list: &mut TodoList) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_loop(&mut stdin.lock(), &mut stdout.lock(), list)
}

pub(crate) fn run_loop<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    list: &mut TodoList,
) -> Result<()> {
    display_welcome(out)?;

    loop {
        display_menu(out)?;
        let choice = get_choice(input, out, MENU_OPTIONS.len())?;

        match choice {
            1 => add_todo(input, out, list)?,
            2 => display_todos(out, list)?,
            3 => show_todo(input, out, list)?,
            4 => update_todo(input, out, list)?,
            5 => complete_todo(input, out, list)?,
            6 => delete_todo(input, out, list)?,
            _ => {
                writeln!(out, "\nThank you for using TodoFlow!")?;
                break;
            }
        }

        writeln!(out)?;
        if prompt(input, out, "Press Enter to continue...")?.is_none() {
            writeln!(out, "\nThank you for using TodoFlow!")?;
            break;
        }
    }

    Ok(())
}

fn display_welcome<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{}", "=".repeat(50))?;
    writeln!(out, "           TODOFLOW - Todo Manager")?;
    writeln!(out, "{}", "=".repeat(50))?;
    writeln!(out, "Manage your tasks with a clean interface")?;
    writeln!(out)?;
    Ok(())
}

fn display_menu<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "SELECT AN OPTION:")?;
    writeln!(out, "{}", "-".repeat(30))?;
    for (i, option) in MENU_OPTIONS.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, option)?;
    }
    writeln!(out, "{}", "-".repeat(30))?;
    Ok(())
}

/// Reads a menu choice, re-prompting until it is valid
///
/// `q`/`quit`/`exit` and EOF all map to the exit option.
fn get_choice<R: BufRead, W: Write>(input: &mut R, out: &mut W, max: usize) -> Result<usize> {
    loop {
        let Some(line) = prompt(input, out, &format!("Enter choice (1-{}): ", max))? else {
            writeln!(out, "\n! Exiting...")?;
            return Ok(max);
        };

        if matches!(line.to_lowercase().as_str(), "q" | "quit" | "exit") {
            return Ok(max);
        }

        match line.parse::<usize>() {
            Ok(n) if (1..=max).contains(&n) => return Ok(n),
            Ok(_) => writeln!(out, "! Invalid choice. Please enter 1-{}", max)?,
            Err(_) => writeln!(out, "! Please enter a valid number")?,
        }
    }
}

fn status_symbol(status: Status) -> &'static str {
    match status {
        Status::Pending => "O",
        Status::InProgress => ">",
        Status::Completed => "X",
    }
}

fn display_todos<W: Write>(out: &mut W, list: &TodoList) -> Result<()> {
    let todos = list.get_all();
    if todos.is_empty() {
        writeln!(out, "\nNo todos found.")?;
        return Ok(());
    }

    writeln!(out, "\nYOUR TODOS ({} total):", todos.len())?;
    writeln!(out, "{}", "-".repeat(60))?;
    writeln!(
        out,
        "{:<3} | {:<10} | {:<8} | {:<25}",
        "ID", "Status", "Priority", "Title"
    )?;
    writeln!(out, "{}", "-".repeat(60))?;

    for todo in &todos {
        writeln!(
            out,
            "{:<3} | {} {:<8} | {:<8} | {:<25}",
            todo.id,
            status_symbol(todo.status),
            todo.status,
            todo.priority,
            todo.title
        )?;
    }

    writeln!(out, "{}", "-".repeat(60))?;
    Ok(())
}

/// Lists todos as `id. title` lines and returns the highest id, or `None`
/// when the list is empty
fn list_entries<W: Write>(out: &mut W, list: &TodoList) -> Result<Option<u64>> {
    let todos = list.get_all();
    for todo in &todos {
        writeln!(out, "  {}. {}", todo.id, todo.title)?;
    }
    Ok(todos.last().map(|t| t.id))
}

fn pick_priority<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    text: &str,
) -> Result<Option<Option<Priority>>> {
    writeln!(out, "Select priority:")?;
    for (i, name) in ["Low", "Medium", "High"].iter().enumerate() {
        writeln!(out, "  {}. {}", i + 1, name)?;
    }

    let Some(choice) = prompt(input, out, text)? else {
        return Ok(None);
    };

    let priority = match choice.as_str() {
        "" => None,
        "1" => Some(Priority::Low),
        "2" => Some(Priority::Medium),
        "3" => Some(Priority::High),
        _ => None,
    };
    Ok(Some(priority))
}

fn add_todo<R: BufRead, W: Write>(input: &mut R, out: &mut W, list: &mut TodoList) -> Result<()> {
    writeln!(out, "\n[ADDING NEW TODO]")?;
    writeln!(out, "{}", "-".repeat(20))?;

    let Some(title) = prompt(input, out, "Enter title: ")? else {
        return Ok(());
    };
    if title.is_empty() {
        writeln!(out, "! Title cannot be empty")?;
        return Ok(());
    }

    let Some(description) = prompt(input, out, "Enter description (optional): ")? else {
        return Ok(());
    };

    writeln!(out)?;
    let Some(priority) = pick_priority(input, out, "Priority (1-3, default 2): ")? else {
        return Ok(());
    };
    let priority = priority.unwrap_or(Priority::Medium);

    match list.add(&title, &description, priority) {
        Ok(todo) => writeln!(out, "\n✓ Added: [{}] {}", todo.id, todo.title)?,
        Err(e) => writeln!(out, "! Error adding todo: {}", e)?,
    }
    Ok(())
}

fn show_todo<R: BufRead, W: Write>(input: &mut R, out: &mut W, list: &TodoList) -> Result<()> {
    if list.is_empty() {
        writeln!(out, "\n! No todos to show")?;
        return Ok(());
    }

    writeln!(out, "\n[SHOW TODO - {} available]", list.len())?;
    writeln!(out, "{}", "-".repeat(20))?;
    let last_id = list_entries(out, list)?.unwrap_or(0);

    let Some(line) = prompt(input, out, &format!("\nEnter todo ID (1-{}): ", last_id))? else {
        return Ok(());
    };
    let Ok(id) = line.parse::<u64>() else {
        writeln!(out, "! Please enter a valid ID")?;
        return Ok(());
    };

    match list.get(id) {
        Some(todo) => {
            writeln!(out, "\nTODO DETAILS:")?;
            writeln!(out, "{}", "-".repeat(20))?;
            writeln!(out, "ID:         {}", todo.id)?;
            writeln!(out, "Title:      {}", todo.title)?;
            writeln!(out, "Description: {}", todo.description)?;
            writeln!(out, "Status:     {}", todo.status)?;
            writeln!(out, "Priority:   {}", todo.priority)?;
            writeln!(out, "Created:    {}", todo.created_at.format("%Y-%m-%d %H:%M"))?;
        }
        None => writeln!(out, "! Todo with ID {} not found", id)?,
    }
    Ok(())
}

fn update_todo<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    list: &mut TodoList,
) -> Result<()> {
    if list.is_empty() {
        writeln!(out, "\n! No todos to update")?;
        return Ok(());
    }

    writeln!(out, "\n[UPDATE TODO - {} available]", list.len())?;
    writeln!(out, "{}", "-".repeat(20))?;
    let last_id = list_entries(out, list)?.unwrap_or(0);

    let Some(line) = prompt(
        input,
        out,
        &format!("\nEnter todo ID to update (1-{}): ", last_id),
    )?
    else {
        return Ok(());
    };
    let Ok(id) = line.parse::<u64>() else {
        writeln!(out, "! Please enter valid inputs")?;
        return Ok(());
    };

    let Some(todo) = list.get(id) else {
        writeln!(out, "! Todo with ID {} not found", id)?;
        return Ok(());
    };
    let current_title = todo.title.clone();
    let current_description = todo.description.clone();
    let current_priority = todo.priority;

    writeln!(out, "\nCurrent: {}", current_title)?;
    let Some(new_title) = prompt(
        input,
        out,
        &format!("New title (current: '{}'): ", current_title),
    )?
    else {
        return Ok(());
    };
    // Empty input keeps the current value
    let title = (!new_title.is_empty()).then_some(new_title);

    let Some(new_description) = prompt(
        input,
        out,
        &format!("New description (current: '{}'): ", current_description),
    )?
    else {
        return Ok(());
    };
    let description = (!new_description.is_empty()).then_some(new_description);

    writeln!(out, "\nCurrent priority: {}", current_priority)?;
    let Some(priority) = pick_priority(input, out, "New priority (1-3, Enter to keep current): ")?
    else {
        return Ok(());
    };

    match list.update(id, title.as_deref(), description.as_deref(), priority) {
        Ok(updated) => writeln!(out, "\n✓ Updated: [{}] {}", updated.id, updated.title)?,
        Err(e) => writeln!(out, "! {}", e)?,
    }
    Ok(())
}

fn complete_todo<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    list: &mut TodoList,
) -> Result<()> {
    if list.is_empty() {
        writeln!(out, "\n! No todos to complete")?;
        return Ok(());
    }

    writeln!(out, "\n[COMPLETE TODO - {} available]", list.len())?;
    writeln!(out, "{}", "-".repeat(20))?;
    for todo in list.get_all() {
        writeln!(
            out,
            "  {}. {} {}",
            todo.id,
            status_symbol(todo.status),
            todo.title
        )?;
    }
    let last_id = list.get_all().last().map_or(0, |t| t.id);

    let Some(line) = prompt(
        input,
        out,
        &format!("\nEnter todo ID to complete (1-{}): ", last_id),
    )?
    else {
        return Ok(());
    };
    let Ok(id) = line.parse::<u64>() else {
        writeln!(out, "! Please enter a valid ID")?;
        return Ok(());
    };

    match list.mark_complete(id) {
        Ok(todo) => writeln!(out, "\n✓ Completed: [{}] {}", todo.id, todo.title)?,
        Err(e) => writeln!(out, "! {}", e)?,
    }
    Ok(())
}

fn delete_todo<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    list: &mut TodoList,
) -> Result<()> {
    if list.is_empty() {
        writeln!(out, "\n! No todos to delete")?;
        return Ok(());
    }

    writeln!(out, "\n[DELETE TODO - {} available]", list.len())?;
    writeln!(out, "{}", "-".repeat(20))?;
    let last_id = list_entries(out, list)?.unwrap_or(0);

    let Some(line) = prompt(
        input,
        out,
        &format!("\nEnter todo ID to delete (1-{}): ", last_id),
    )?
    else {
        return Ok(());
    };
    let Ok(id) = line.parse::<u64>() else {
        writeln!(out, "! Please enter a valid ID")?;
        return Ok(());
    };

    let Some(todo) = list.get(id) else {
        writeln!(out, "! Todo with ID {} not found", id)?;
        return Ok(());
    };
    let title = todo.title.clone();

    let Some(confirm) = prompt(
        input,
        out,
        &format!("Confirm delete '{}'? (y/N): ", title),
    )?
    else {
        return Ok(());
    };

    if matches!(confirm.to_lowercase().as_str(), "y" | "yes") {
        match list.delete(id) {
            Ok(()) => writeln!(out, "\n✓ Deleted: [{}] {}", id, title)?,
            Err(e) => writeln!(out, "! {}", e)?,
        }
    } else {
        writeln!(out, "! Delete cancelled")?;
    }
    Ok(())
}
