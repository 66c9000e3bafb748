//! Modal dialogs for notices, warnings, errors, and delete confirmation

use dioxus::prelude::*;

use super::note_actions::confirm_delete;
use crate::state::{AppState, Dialog};
use crate::theme::JOURNAL;

/// Renders the current dialog, if any, over the whole window.
#[component]
pub fn DialogHost() -> Element {
    let mut state = use_context::<AppState>();
    let colors = JOURNAL;

    let Some(dialog) = (state.dialog)() else {
        return rsx! {};
    };

    let pending = match &dialog {
        Dialog::ConfirmDelete(request) => Some(request.clone()),
        Dialog::Message { .. } => None,
    };
    let is_confirmation = pending.is_some();

    let on_yes = move |_: MouseEvent| {
        state.dismiss_dialog();
        if let Some(request) = pending.clone() {
            confirm_delete(state, request);
        }
    };

    let (accent, heading, message) = match &dialog {
        Dialog::Message {
            severity,
            heading,
            message,
        } => (colors.severity(*severity), heading.clone(), message.clone()),
        Dialog::ConfirmDelete(request) => (
            colors.primary,
            ptak_core::DeleteRequest::HEADING.to_string(),
            request.prompt(),
        ),
    };

    rsx! {
        div {
            class: "dialog-overlay",
            style: "
                position: fixed;
                inset: 0;
                display: flex;
                align-items: center;
                justify-content: center;
                background: {colors.bg_overlay};
            ",

            div {
                class: "dialog",
                style: "
                    min-width: 320px;
                    max-width: 480px;
                    background: {colors.bg_window};
                    color: {colors.text_primary};
                    border-top: 4px solid {accent};
                    border-radius: 4px;
                    padding: 16px;
                ",

                h3 { style: "margin: 0 0 8px 0;", "{heading}" }
                p { style: "white-space: pre-wrap;", "{message}" }

                div {
                    style: "display: flex; justify-content: flex-end; gap: 8px;",

                    if is_confirmation {
                        button { onclick: on_yes, "Yes" }
                        button { onclick: move |_| state.dismiss_dialog(), "No" }
                    } else {
                        button { onclick: move |_| state.dismiss_dialog(), "OK" }
                    }
                }
            }
        }
    }
}
