//! Ptak Note CLI - manage the notes file from the terminal
//!
//! Every command goes through the same `Notebook` actions as the desktop app.

mod cli;
mod commands;
mod error;


use clap::Parser;
use ptak_core::AppConfig;

use crate::cli::{Cli, Commands};
use crate::commands::completions::run_completions;
use crate::commands::delete::run_delete;
use crate::commands::list::run_list;
use crate::commands::new::run_new;
use crate::commands::save::run_save;
use crate::commands::show::run_show;
use crate::error::CliError;

fn main() {
    if let Err(error) = run() {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ptak=info".parse().expect("static directive")),
        )
        .init();

    let cli = Cli::parse();
    let config = AppConfig::resolve(cli.notes_path);

    match cli.command {
        Commands::New => run_new(&config)?,
        Commands::List { json } => run_list(json, &config)?,
        Commands::Show { id } => run_show(&id, &config)?,
        Commands::Save { id, title, content } => {
            run_save(&id, title.as_deref(), content.as_deref(), &config)?;
        }
        Commands::Delete { id, yes } => run_delete(&id, yes, &config)?,
        Commands::Completions { shell, output } => run_completions(shell, output.as_deref())?,
    }

    Ok(())
}
