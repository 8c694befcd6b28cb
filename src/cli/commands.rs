use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "jot",
    version,
    about = "A single-screen list manager. Run with no arguments for the interactive TUI."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use this data file instead of the configured one
    #[arg(long = "data-file", global = true, value_name = "PATH")]
    pub data_file: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the list, one numbered line per entry
    List,
    /// Add an entry at the head of the list
    Add(AddArgs),
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Entry text; multiple words are joined with spaces
    #[arg(required = true)]
    pub text: Vec<String>,
}
