//! Toolbar and dialog actions: each one runs a `Notebook` action and turns
//! the outcome into a dialog.

use ptak_core::{DeleteRequest, Notebook};

use crate::state::{AppState, Dialog};

/// "New note": create, persist, and select a fresh note.
pub fn create_note(mut state: AppState) {
    let Some(result) = state.update_notebook(Notebook::create_note) else {
        return;
    };

    match result {
        Ok(id) => tracing::info!("Created new note: {}", id),
        Err(error) => state.report(&error),
    }
}

/// "Update/save note": save the active tab.
pub fn save_current_note(mut state: AppState) {
    let Some(result) = state.update_notebook(Notebook::save_current) else {
        return;
    };

    match result {
        Ok(notice) => state.show(notice),
        Err(error) => state.report(&error),
    }
}

/// "Delete note": ask for confirmation of deleting the active tab's note.
pub fn request_delete(mut state: AppState) {
    let Some(result) = state.with_notebook(Notebook::begin_delete) else {
        return;
    };

    match result {
        Ok(request) => state.show(Dialog::ConfirmDelete(request)),
        Err(error) => state.report(&error),
    }
}

/// The user answered "Yes" to the delete confirmation.
pub fn confirm_delete(mut state: AppState, request: DeleteRequest) {
    let Some(result) = state.update_notebook(|notebook| notebook.confirm_delete(request)) else {
        return;
    };

    match result {
        Ok(notice) => state.show(notice),
        Err(error) => state.report(&error),
    }
}
