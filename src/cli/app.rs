//! Main CLI application structure

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::{commands, interactive, menu};
use crate::domain::{TodoError, TodoList};

#[derive(Parser)]
#[command(name = "todoflow")]
#[command(author, version, about = "A simple in-memory todo console application")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new todo item
    Add {
        /// Task title
        title: String,

        /// Task description
        #[arg(long, short = 'd', default_value = "")]
        description: String,

        /// Task priority (low, medium, high)
        #[arg(long, short = 'p', default_value = "medium")]
        priority: String,
    },

    /// List all todo items
    List {
        /// Filter by status (pending, in_progress, completed)
        #[arg(long, short = 's')]
        status: Option<String>,

        /// Filter by priority (low, medium, high)
        #[arg(long, short = 'p')]
        priority: Option<String>,
    },

    /// Show a single todo item
    Show {
        /// Todo ID to display
        id: u64,
    },

    /// Mark a todo as completed
    Complete {
        /// Todo ID to complete
        id: u64,
    },

    /// Update a todo item
    Update {
        /// Todo ID to update
        id: u64,

        /// New task title
        #[arg(long, short = 't')]
        title: Option<String>,

        /// New description
        #[arg(long, short = 'd')]
        description: Option<String>,

        /// New priority level (low, medium, high)
        #[arg(long, short = 'p')]
        priority: Option<String>,
    },

    /// Delete a todo item
    Delete {
        /// Todo ID to delete
        id: u64,
    },

    /// Run the numbered-menu interface
    Menu,

    /// Run the interactive prompt loop
    Interactive,
}

/// Main entry point for the CLI
///
/// Exit codes: 0 on success, 1 for validation and other errors, 2 when an
/// operation targets a todo id that does not exist.
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);

    output.verbose("TodoFlow starting");

    match dispatch(cli.command, &output) {
        Ok(()) => {
            output.verbose("Command completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            output.error(&format!("{e:#}"));
            exit_code_for(&e)
        }
    }
}

/// Maps an error to the process exit code
fn exit_code_for(e: &anyhow::Error) -> ExitCode {
    match e.downcast_ref::<TodoError>() {
        Some(TodoError::NotFound { .. }) => ExitCode::from(2),
        _ => ExitCode::FAILURE,
    }
}

fn dispatch(command: Commands, output: &Output) -> Result<()> {
    // Each invocation gets its own fresh list: state never survives across
    // process runs.
    let mut list = TodoList::new();

    match command {
        Commands::Add {
            title,
            description,
            priority,
        } => {
            output.verbose_ctx("add", &format!("Adding todo: {}", title));
            commands::add(output, &mut list, &title, &description, &priority)
        }
        Commands::List { status, priority } => {
            output.verbose_ctx(
                "list",
                &format!("Listing todos, filters: status={:?} priority={:?}", status, priority),
            );
            commands::list(output, &list, status.as_deref(), priority.as_deref())
        }
        Commands::Show { id } => commands::show(output, &list, id),
        Commands::Complete { id } => commands::complete(output, &mut list, id),
        Commands::Update {
            id,
            title,
            description,
            priority,
        } => commands::update(
            output,
            &mut list,
            id,
            title.as_deref(),
            description.as_deref(),
            priority.as_deref(),
        ),
        Commands::Delete { id } => commands::delete(output, &mut list, id),

        Commands::Menu => {
            output.verbose("Starting numbered-menu interface");
            menu::run(&mut list)
        }
        Commands::Interactive => {
            output.verbose("Starting interactive prompt loop");
            interactive::run(&mut list)
        }
    }
}
