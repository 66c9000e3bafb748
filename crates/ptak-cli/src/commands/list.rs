use ptak_core::{AppConfig, Note};

use crate::commands::common::{format_note_lines, note_to_list_item, open_notebook, NoteListItem};
use crate::error::CliError;

pub fn run_list(as_json: bool, config: &AppConfig) -> Result<(), CliError> {
    let notebook = open_notebook(config)?;
    let notes = notebook.store().iter().collect::<Vec<&Note>>();

    if as_json {
        let json_items = notes
            .iter()
            .map(|note| note_to_list_item(note))
            .collect::<Vec<NoteListItem>>();
        println!("{}", serde_json::to_string_pretty(&json_items)?);
    } else {
        for line in format_note_lines(&notes) {
            println!("{line}");
        }
    }

    Ok(())
}
