use ptak_core::AppConfig;

use crate::commands::common::{normalize_note_identifier, open_notebook};
use crate::error::CliError;

pub fn run_show(id: &str, config: &AppConfig) -> Result<(), CliError> {
    let note_id = normalize_note_identifier(id)?;
    let notebook = open_notebook(config)?;
    let note = notebook
        .store()
        .get(&note_id)
        .ok_or_else(|| CliError::NoteNotFound(note_id.to_string()))?;

    println!("{}", note.title);
    if !note.content.is_empty() {
        println!();
        println!("{}", note.content);
    }
    Ok(())
}
