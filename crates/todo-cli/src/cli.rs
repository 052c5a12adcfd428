use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "todo")]
#[command(about = "An in-memory to-do list", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Text of the item every session starts with (or set TODO_SEED_TEXT)
    #[arg(long, global = true, env = "TODO_SEED_TEXT")]
    pub seed_text: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Edit the list interactively, one command per line (default)
    Repl,
    /// Replay a JSON array of gestures and print the resulting items
    Run {
        #[arg(value_name = "SCRIPT")]
        script: PathBuf,
    },
}
