use ptak_core::{AppConfig, Note, NoteId, Notebook, TabId};
use serde::Serialize;

use crate::error::CliError;

#[derive(Debug, Serialize)]
pub struct NoteListItem {
    pub id: String,
    pub title: String,
    pub preview: String,
    pub content: String,
}

pub fn open_notebook(config: &AppConfig) -> Result<Notebook, CliError> {
    Ok(Notebook::open(config)?)
}

pub fn normalize_note_identifier(id: &str) -> Result<NoteId, CliError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        Err(CliError::EmptyNoteId)
    } else {
        Ok(NoteId::new(trimmed))
    }
}

/// Make the tab showing `id` the active one, as a click on it would.
pub fn select_note_tab(notebook: &mut Notebook, id: &NoteId) -> Result<TabId, CliError> {
    notebook
        .select_note(id)
        .ok_or_else(|| CliError::NoteNotFound(id.to_string()))
}

pub fn note_to_list_item(note: &Note) -> NoteListItem {
    NoteListItem {
        id: note.id.to_string(),
        title: note.title.clone(),
        preview: note_preview(note, 60),
        content: note.content.clone(),
    }
}

pub fn format_note_lines(notes: &[&Note]) -> Vec<String> {
    notes
        .iter()
        .map(|note| {
            let title = truncate_chars(&note.title, 32);
            let preview = note_preview(note, 40);
            if preview.is_empty() {
                format!("{:>4}  {title}", note.id)
            } else {
                format!("{:>4}  {title:<32}  {preview}", note.id)
            }
        })
        .collect()
}

pub fn note_preview(note: &Note, max_chars: usize) -> String {
    let first_line = note.content.lines().next().unwrap_or("").trim();
    let collapsed = first_line.split_whitespace().collect::<Vec<_>>().join(" ");
    truncate_chars(&collapsed, max_chars)
}

fn truncate_chars(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        value.to_string()
    } else {
        let take_len = max_chars.saturating_sub(3);
        let mut truncated = value.chars().take(take_len).collect::<String>();
        truncated.push_str("...");
        truncated
    }
}
