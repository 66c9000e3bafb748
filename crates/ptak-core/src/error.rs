//! Error types for ptak-core

use std::path::PathBuf;

use thiserror::Error;

use crate::models::NoteId;

/// Result type alias using ptak-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in ptak-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The notes file exists but does not hold a valid note collection
    #[error("Notes file {} is not a valid note collection: {source}", path.display())]
    CorruptStore {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Note not found
    #[error("Note not found: {0}")]
    NotFound(NoteId),
}

/// How loudly a failed action should be surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// Failure of a single user action (new, save, delete).
///
/// Every variant is recoverable: the action is aborted and the notebook is
/// left as it was before the action started.
#[derive(Error, Debug)]
pub enum ActionError {
    #[error("Please select or create a note first.")]
    NoNoteSelected,

    #[error("This tab hasn't been saved yet. Use 'X' to close it, or save it first.")]
    UnsavedTab,

    #[error("Note title cannot be empty.")]
    EmptyTitle,

    #[error("Note content cannot be empty.")]
    EmptyContent,

    #[error("Failed to save: {0}")]
    Persistence(#[source] Error),

    #[error("Note with ID {0} not found in data file.")]
    NotFound(NoteId),
}

impl ActionError {
    /// Validation failures are warnings; storage and consistency failures are errors.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        match self {
            Self::NoNoteSelected | Self::UnsavedTab | Self::EmptyTitle | Self::EmptyContent => {
                Severity::Warning
            }
            Self::Persistence(_) | Self::NotFound(_) => Severity::Error,
        }
    }

    /// Heading used for the dialog that reports this error.
    #[must_use]
    pub const fn heading(&self) -> &'static str {
        match self {
            Self::NoNoteSelected | Self::UnsavedTab | Self::EmptyTitle | Self::EmptyContent => {
                "Warning"
            }
            Self::Persistence(_) => "Saving error",
            Self::NotFound(_) => "Error",
        }
    }
}
