//! Application state management
//!
//! A single `AppState` is provided through Dioxus context. It owns the
//! `Notebook` and the dialog currently on screen.

use dioxus::prelude::*;

use ptak_core::{ActionError, AppConfig, DeleteRequest, Notebook, Notice, Severity};

/// Result of opening the notes file at startup.
pub enum Session {
    Ready(Notebook),
    /// The file could not be read; nothing is ever written in this state.
    Unavailable { path: String, message: String },
}

impl Session {
    pub fn open() -> Self {
        let config = AppConfig::resolve(None);
        match Notebook::open(&config) {
            Ok(notebook) => {
                tracing::info!(
                    "Opened {} notes from {}",
                    notebook.store().len(),
                    config.notes_path.display()
                );
                Self::Ready(notebook)
            }
            Err(error) => {
                tracing::error!("Failed to open notes file: {}", error);
                Self::Unavailable {
                    path: config.notes_path.display().to_string(),
                    message: error.to_string(),
                }
            }
        }
    }
}

/// Modal dialog on top of the window.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Dialog {
    Message {
        severity: Severity,
        heading: String,
        message: String,
    },
    ConfirmDelete(DeleteRequest),
}

impl From<Notice> for Dialog {
    fn from(notice: Notice) -> Self {
        Self::Message {
            severity: Severity::Info,
            heading: notice.heading.to_string(),
            message: notice.message,
        }
    }
}

impl From<&ActionError> for Dialog {
    fn from(error: &ActionError) -> Self {
        Self::Message {
            severity: error.severity(),
            heading: error.heading().to_string(),
            message: error.to_string(),
        }
    }
}

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// The open notebook, or why it could not be opened
    pub session: Signal<Session>,
    /// Dialog currently shown, if any
    pub dialog: Signal<Option<Dialog>>,
}

impl AppState {
    /// Read from the notebook; `None` when no notebook is open.
    pub fn with_notebook<R>(&self, f: impl FnOnce(&Notebook) -> R) -> Option<R> {
        match &*self.session.read() {
            Session::Ready(notebook) => Some(f(notebook)),
            Session::Unavailable { .. } => None,
        }
    }

    /// Mutate the notebook; `None` when no notebook is open.
    pub fn update_notebook<R>(&mut self, f: impl FnOnce(&mut Notebook) -> R) -> Option<R> {
        match &mut *self.session.write() {
            Session::Ready(notebook) => Some(f(notebook)),
            Session::Unavailable { .. } => None,
        }
    }

    pub fn show(&mut self, dialog: impl Into<Dialog>) {
        self.dialog.set(Some(dialog.into()));
    }

    pub fn report(&mut self, error: &ActionError) {
        match error.severity() {
            Severity::Error => tracing::error!("{}", error),
            _ => tracing::warn!("{}", error),
        }
        self.show(error);
    }

    pub fn dismiss_dialog(&mut self) {
        self.dialog.set(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notice_becomes_info_dialog() {
        let dialog = Dialog::from(Notice {
            heading: "Updated",
            message: "Note 'Plan' (ID: 2) saved successfully.".to_string(),
        });
        assert_eq!(
            dialog,
            Dialog::Message {
                severity: Severity::Info,
                heading: "Updated".to_string(),
                message: "Note 'Plan' (ID: 2) saved successfully.".to_string(),
            }
        );
    }

    #[test]
    fn validation_error_becomes_warning_dialog() {
        let dialog = Dialog::from(&ActionError::EmptyTitle);
        assert_eq!(
            dialog,
            Dialog::Message {
                severity: Severity::Warning,
                heading: "Warning".to_string(),
                message: "Note title cannot be empty.".to_string(),
            }
        );
    }
}
