use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] ptak_core::Error),
    #[error(transparent)]
    Action(#[from] ptak_core::ActionError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("Note ID cannot be empty")]
    EmptyNoteId,
    #[error("Note not found: {0}")]
    NoteNotFound(String),
    #[error("Nothing to update; pass --title and/or --content")]
    NothingToSave,
    #[error("Deletion cancelled")]
    Cancelled,
}
