use ptak_core::AppConfig;

use crate::commands::common::open_notebook;
use crate::error::CliError;

pub fn run_new(config: &AppConfig) -> Result<(), CliError> {
    let mut notebook = open_notebook(config)?;
    let id = notebook.create_note()?;

    println!("{id}");
    Ok(())
}
