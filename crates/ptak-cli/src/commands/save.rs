use ptak_core::{AppConfig, Notice};

use crate::commands::common::{normalize_note_identifier, open_notebook, select_note_tab};
use crate::error::CliError;

pub fn run_save(
    id: &str,
    title: Option<&str>,
    content: Option<&str>,
    config: &AppConfig,
) -> Result<(), CliError> {
    let notice = save_note(id, title, content, config)?;
    println!("{}", notice.message);
    Ok(())
}

/// Fill the note's tab fields with the given values and save the tab.
pub fn save_note(
    id: &str,
    title: Option<&str>,
    content: Option<&str>,
    config: &AppConfig,
) -> Result<Notice, CliError> {
    if title.is_none() && content.is_none() {
        return Err(CliError::NothingToSave);
    }

    let note_id = normalize_note_identifier(id)?;
    let mut notebook = open_notebook(config)?;
    let tab = select_note_tab(&mut notebook, &note_id)?;

    if let Some(fields) = notebook.tabs_mut().get_mut(tab) {
        if let Some(title) = title {
            fields.set_title(title);
        }
        if let Some(content) = content {
            fields.set_content(content);
        }
    }

    Ok(notebook.save_current()?)
}
