use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "ptak")]
#[command(about = "Manage Ptak Note notes from the command line")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the notes file (defaults to PTAK_NOTES_PATH or the data dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub notes_path: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new empty note and print its ID
    #[command(alias = "add")]
    New,
    /// List all notes
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a note's title and content
    Show {
        /// Note ID
        id: String,
    },
    /// Update a note's title and/or content
    Save {
        /// Note ID
        id: String,
        /// New title (keeps the current title when omitted)
        #[arg(short, long)]
        title: Option<String>,
        /// New content (keeps the current content when omitted)
        #[arg(short, long)]
        content: Option<String>,
    },
    /// Delete a note
    Delete {
        /// Note ID
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}
