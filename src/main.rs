//! TodoFlow - in-memory todo management from the console

use std::process::ExitCode;

fn main() -> ExitCode {
    todoflow::cli::run()
}
