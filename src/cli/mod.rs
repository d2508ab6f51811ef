// CLI module
// Command-line interface, argument parsing and input path resolution

mod args;

pub use args::{CliArgs, StrategyType};

use clap::Parser;
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Parse command-line arguments using clap
///
/// If parsing fails (invalid arguments or --help), clap displays an error or
/// help text and exits the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

/// Read the ledger path interactively
///
/// Writes the prompt to `prompt` and reads one line from `input`. Returns
/// `None` when no non-empty line could be read.
pub fn prompt_input_path<R: BufRead, W: Write>(input: &mut R, prompt: &mut W) -> Option<PathBuf> {
    write!(prompt, "Enter the test file path :: ").ok()?;
    prompt.flush().ok()?;

    let mut line = String::new();
    input.read_line(&mut line).ok()?;

    let path = line.trim();
    if path.is_empty() {
        None
    } else {
        Some(PathBuf::from(path))
    }
}
