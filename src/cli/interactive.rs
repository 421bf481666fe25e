//! Interactive prompt-loop front-end
//!
//! Differs from the numbered menu in selection style: todos are picked by
//! their position in the displayed list (1..n), not by id, and `q` quits from
//! the main prompt. Generic over the streams for scripted tests.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use super::prompt::prompt;
use crate::domain::{Priority, Status, TodoList};

const MAIN_MENU_OPTIONS: [&str; 6] = [
    "Add new todo",
    "View all todos",
    "Complete a todo",
    "Update a todo",
    "Delete a todo",
    "Exit",
];

/// Runs the interactive loop against stdin/stdout
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
    writeln!(out, "Welcome to TodoFlow Interactive Mode!")?;
    writeln!(out, "Use numbers to select options, or 'q' to quit at any prompt.")?;

    loop {
        display_main_menu(out)?;
        let Some(choice) = get_user_choice(input, out, MAIN_MENU_OPTIONS.len())? else {
            writeln!(out, "\nGoodbye!")?;
            break;
        };

        match choice {
            1 => handle_add(input, out, list)?,
            2 => {
                display_todos(out, list)?;
                if pause(input, out)?.is_none() {
                    writeln!(out, "\nGoodbye!")?;
                    break;
                }
            }
            3 | 4 | 5 => {
                match choice {
                    3 => handle_complete(input, out, list)?,
                    4 => handle_update(input, out, list)?,
                    _ => handle_delete(input, out, list)?,
                }
                if pause(input, out)?.is_none() {
                    writeln!(out, "\nGoodbye!")?;
                    break;
                }
            }
            _ => {
                writeln!(out, "\nGoodbye!")?;
                break;
            }
        }
    }

    Ok(())
}

fn display_main_menu<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "\n{}", "=".repeat(50))?;
    writeln!(out, "TodoFlow - Interactive Todo Manager")?;
    writeln!(out, "{}", "=".repeat(50))?;
    writeln!(out, "Select an option using the number:")?;
    writeln!(out)?;
    for (i, option) in MAIN_MENU_OPTIONS.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, option)?;
    }
    writeln!(out)?;
    Ok(())
}

/// Reads a main-menu choice; `None` means quit (either `q` or EOF)
fn get_user_choice<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    max: usize,
) -> Result<Option<usize>> {
    loop {
        let Some(line) = prompt(
            input,
            out,
            &format!("Enter your choice (1-{}, or 'q' to quit): ", max),
        )?
        else {
            writeln!(out, "\nExiting...")?;
            return Ok(None);
        };

        if line.eq_ignore_ascii_case("q") {
            return Ok(None);
        }

        match line.parse::<usize>() {
            Ok(n) if (1..=max).contains(&n) => return Ok(Some(n)),
            Ok(_) => writeln!(out, "Please enter a number between 1 and {}", max)?,
            Err(_) => writeln!(out, "Please enter a valid number or 'q' to quit")?,
        }
    }
}

fn pause<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Option<String>> {
    prompt(input, out, "\nPress Enter to continue...")
}

fn status_symbol(status: Status) -> &'static str {
    match status {
        Status::Pending => "○",
        Status::InProgress => "▶",
        Status::Completed => "✓",
    }
}

/// Displays all todos and returns their ids in display order
fn display_todos<W: Write>(out: &mut W, list: &TodoList) -> Result<Vec<u64>> {
    let todos = list.get_all();
    if todos.is_empty() {
        writeln!(out, "\nNo todos found.")?;
        return Ok(Vec::new());
    }

    writeln!(out, "\nYour Todos:")?;
    writeln!(out, "{}", "-".repeat(60))?;
    writeln!(
        out,
        "{:<3} | {:<3} | {:<12} | {:<8} | Title",
        "#", "ID", "Status", "Priority"
    )?;
    writeln!(out, "{}", "-".repeat(60))?;

    for (i, todo) in todos.iter().enumerate() {
        writeln!(
            out,
            "{:<3} | {:<3} | {} {:<10} | {:<8} | {}",
            i + 1,
            todo.id,
            status_symbol(todo.status),
            todo.status,
            todo.priority,
            todo.title
        )?;
    }

    writeln!(out)?;
    Ok(todos.iter().map(|t| t.id).collect())
}

/// Prompts for a list position (1..n) and resolves it to an id
fn select_todo<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    ids: &[u64],
    action: &str,
) -> Result<Option<u64>> {
    let Some(line) = prompt(
        input,
        out,
        &format!("Enter the number of the todo to {} (1-{}): ", action, ids.len()),
    )?
    else {
        writeln!(out, "\nReturning to main menu...")?;
        return Ok(None);
    };

    match line.parse::<usize>() {
        Ok(n) if (1..=ids.len()).contains(&n) => Ok(Some(ids[n - 1])),
        Ok(_) => {
            writeln!(out, "Invalid selection!")?;
            Ok(None)
        }
        Err(_) => {
            writeln!(out, "Please enter a valid number!")?;
            Ok(None)
        }
    }
}

fn handle_add<R: BufRead, W: Write>(input: &mut R, out: &mut W, list: &mut TodoList) -> Result<()> {
    writeln!(out, "\n--- Add New Todo ---")?;

    let Some(title) = prompt(input, out, "Enter title: ")? else {
        writeln!(out, "\nReturning to main menu...")?;
        return Ok(());
    };
    if title.is_empty() {
        writeln!(out, "Title cannot be empty!")?;
        return Ok(());
    }

    let Some(description) = prompt(
        input,
        out,
        "Enter description (optional, press Enter to skip): ",
    )?
    else {
        writeln!(out, "\nReturning to main menu...")?;
        return Ok(());
    };

    writeln!(out, "Select priority:")?;
    for (i, name) in ["Low", "Medium", "High"].iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, name)?;
    }

    let Some(choice) = prompt(input, out, "Enter priority (1-3, default 2): ")? else {
        writeln!(out, "\nReturning to main menu...")?;
        return Ok(());
    };
    // Anything unparseable or out of range falls back to medium
    let priority = match choice.as_str() {
        "1" => Priority::Low,
        "3" => Priority::High,
        _ => Priority::Medium,
    };

    match list.add(&title, &description, priority) {
        Ok(todo) => writeln!(out, "✓ Added todo: [{}] {}", todo.id, todo.title)?,
        Err(e) => writeln!(out, "Error adding todo: {}", e)?,
    }
    Ok(())
}

fn handle_complete<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    list: &mut TodoList,
) -> Result<()> {
    let ids = display_todos(out, list)?;
    if ids.is_empty() {
        return Ok(());
    }

    let Some(id) = select_todo(input, out, &ids, "complete")? else {
        return Ok(());
    };

    match list.mark_complete(id) {
        Ok(todo) => writeln!(out, "✓ Completed: [{}] {}", todo.id, todo.title)?,
        Err(e) => writeln!(out, "Error: {}", e)?,
    }
    Ok(())
}

fn handle_update<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    list: &mut TodoList,
) -> Result<()> {
    let ids = display_todos(out, list)?;
    if ids.is_empty() {
        return Ok(());
    }

    let Some(id) = select_todo(input, out, &ids, "update")? else {
        return Ok(());
    };

    let Some(todo) = list.get(id) else {
        return Ok(());
    };
    let current_title = todo.title.clone();
    let current_description = todo.description.clone();

    writeln!(out, "\nUpdating todo: [{}] {}", id, current_title)?;

    let Some(new_title) = prompt(
        input,
        out,
        &format!(
            "Enter new title (current: '{}', press Enter to keep): ",
            current_title
        ),
    )?
    else {
        writeln!(out, "\nReturning to main menu...")?;
        return Ok(());
    };
    let title = (!new_title.is_empty()).then_some(new_title);

    let Some(new_description) = prompt(
        input,
        out,
        &format!(
            "Enter new description (current: '{}', press Enter to keep): ",
            current_description
        ),
    )?
    else {
        writeln!(out, "\nReturning to main menu...")?;
        return Ok(());
    };
    let description = (!new_description.is_empty()).then_some(new_description);

    writeln!(out, "Select new priority:")?;
    for (i, name) in ["Low", "Medium", "High"].iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, name)?;
    }
    let Some(choice) = prompt(input, out, "Enter priority (1-3, press Enter to keep current): ")?
    else {
        writeln!(out, "\nReturning to main menu...")?;
        return Ok(());
    };
    let priority = match choice.as_str() {
        "1" => Some(Priority::Low),
        "2" => Some(Priority::Medium),
        "3" => Some(Priority::High),
        _ => None,
    };

    match list.update(id, title.as_deref(), description.as_deref(), priority) {
        Ok(updated) => writeln!(out, "✓ Updated todo: [{}] {}", updated.id, updated.title)?,
        Err(e) => writeln!(out, "Error: {}", e)?,
    }
    Ok(())
}

fn handle_delete<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    list: &mut TodoList,
) -> Result<()> {
    let ids = display_todos(out, list)?;
    if ids.is_empty() {
        return Ok(());
    }

    let Some(id) = select_todo(input, out, &ids, "delete")? else {
        return Ok(());
    };

    let Some(todo) = list.get(id) else {
        return Ok(());
    };
    let title = todo.title.clone();

    let Some(confirm) = prompt(
        input,
        out,
        &format!("Are you sure you want to delete '{}'? (y/N): ", title),
    )?
    else {
        writeln!(out, "\nReturning to main menu...")?;
        return Ok(());
    };

    if matches!(confirm.to_lowercase().as_str(), "y" | "yes") {
        match list.delete(id) {
            Ok(()) => writeln!(out, "✓ Deleted todo: [{}] {}", id, title)?,
            Err(e) => writeln!(out, "Error: {}", e)?,
        }
    } else {
        writeln!(out, "Deletion cancelled.")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(script: &str, list: &mut TodoList) -> String {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        run_loop(&mut input, &mut out, list).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn quit_with_q() {
        let mut list = TodoList::new();
        let out = run_script("q\n", &mut list);
        assert!(out.contains("Welcome to TodoFlow Interactive Mode!"));
        assert!(out.contains("Goodbye!"));
    }

    #[test]
    fn eof_exits() {
        let mut list = TodoList::new();
        let out = run_script("", &mut list);
        assert!(out.contains("Exiting..."));
        assert!(out.contains("Goodbye!"));
    }

    #[test]
    fn invalid_menu_input_reprompts() {
        let mut list = TodoList::new();
        let out = run_script("8\nxyz\nq\n", &mut list);
        assert!(out.contains("Please enter a number between 1 and 6"));
        assert!(out.contains("Please enter a valid number or 'q' to quit"));
    }

    #[test]
    fn add_flow_creates_todo() {
        let mut list = TodoList::new();
        let out = run_script("1\nWrite report\nQuarterly numbers\n1\nq\n", &mut list);
        assert!(out.contains("✓ Added todo: [1] Write report"));

        let todo = list.get(1).unwrap();
        assert_eq!(todo.description, "Quarterly numbers");
        assert_eq!(todo.priority, Priority::Low);
    }

    #[test]
    fn add_flow_empty_title_rejected() {
        let mut list = TodoList::new();
        let out = run_script("1\n\nq\n", &mut list);
        assert!(out.contains("Title cannot be empty!"));
        assert!(list.is_empty());
    }

    #[test]
    fn add_flow_bad_priority_defaults_to_medium() {
        let mut list = TodoList::new();
        run_script("1\nTask\n\n9\nq\n", &mut list);
        assert_eq!(list.get(1).unwrap().priority, Priority::Medium);
    }

    #[test]
    fn view_shows_position_and_id_columns() {
        let mut list = TodoList::new();
        list.add("A", "", Priority::Medium).unwrap();
        list.add("B", "", Priority::Medium).unwrap();
        list.delete(1).unwrap();
        list.add("C", "", Priority::Medium).unwrap();

        // Positions are 1..n even when ids have gaps
        let out = run_script("2\n\nq\n", &mut list);
        assert!(out.contains("Your Todos:"));
        assert!(out.contains("1   | 2  "));
        assert!(out.contains("2   | 3  "));
    }

    #[test]
    fn complete_selects_by_position() {
        let mut list = TodoList::new();
        list.add("A", "", Priority::Medium).unwrap();
        list.add("B", "", Priority::Medium).unwrap();
        list.delete(1).unwrap();

        // Only todo B (id 2) remains; position 1 selects it
        let out = run_script("3\n1\n\nq\n", &mut list);
        assert!(out.contains("✓ Completed: [2] B"));
        assert_eq!(list.get(2).unwrap().status, Status::Completed);
    }

    #[test]
    fn complete_invalid_selection() {
        let mut list = TodoList::new();
        list.add("A", "", Priority::Medium).unwrap();

        let out = run_script("3\n5\n\nq\n", &mut list);
        assert!(out.contains("Invalid selection!"));
        assert_eq!(list.get(1).unwrap().status, Status::Pending);
    }

    #[test]
    fn update_keeps_fields_on_empty_input() {
        let mut list = TodoList::new();
        list.add("Task", "desc", Priority::High).unwrap();

        let out = run_script("4\n1\n\n\n\n\nq\n", &mut list);
        assert!(out.contains("✓ Updated todo: [1] Task"));

        let todo = list.get(1).unwrap();
        assert_eq!(todo.title, "Task");
        assert_eq!(todo.description, "desc");
        assert_eq!(todo.priority, Priority::High);
    }

    #[test]
    fn delete_flow_with_confirmation() {
        let mut list = TodoList::new();
        list.add("Task", "", Priority::Medium).unwrap();

        let out = run_script("5\n1\nn\n\n5\n1\ny\n\nq\n", &mut list);
        assert!(out.contains("Deletion cancelled."));
        assert!(out.contains("✓ Deleted todo: [1] Task"));
        assert!(list.is_empty());
    }
}
