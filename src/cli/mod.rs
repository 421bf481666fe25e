//! # Command-Line Interface
//!
//! The three console front-ends over the [`TodoList`](crate::domain::TodoList)
//! service.
//!
//! ## Front-Ends
//!
//! | Front-end | Invocation | Style |
//! |-----------|------------|-------|
//! | Subcommand CLI | `todoflow add "Task"` | Flags and subcommands, one operation per run |
//! | Numbered menu | `todoflow menu` | Banner, numbered options, Enter-paced |
//! | Interactive | `todoflow interactive` | Prompt loop, todos picked by list position |
//!
//! ## Output Formats
//!
//! The subcommand CLI supports `--format`:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! ## Exit Codes
//!
//! 0 on success, 1 for validation and other errors, 2 when the target id does
//! not exist.
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod commands;
mod interactive;
mod menu;
mod output;
mod prompt;

pub use app::{run, Cli, Commands};
pub use output::{Output, OutputFormat};
