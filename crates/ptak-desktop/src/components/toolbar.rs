//! Toolbar component with the three note actions

use dioxus::prelude::*;

use super::note_actions::{create_note, request_delete, save_current_note};
use crate::state::AppState;
use crate::theme::{ButtonStyle, JOURNAL};

#[component]
fn ToolbarButton(
    label: &'static str,
    style: ButtonStyle,
    onclick: EventHandler<MouseEvent>,
) -> Element {
    let colors = JOURNAL;
    let background = colors.button(style);

    rsx! {
        button {
            style: "
                margin: 10px;
                padding: 8px 16px;
                border: none;
                border-radius: 4px;
                background: {background};
                color: {colors.on_accent};
                font-weight: bold;
                cursor: pointer;
            ",
            onclick: move |evt| onclick.call(evt),
            "{label}"
        }
    }
}

/// Toolbar with action buttons
#[component]
pub fn Toolbar() -> Element {
    let state = use_context::<AppState>();

    rsx! {
        div {
            class: "toolbar",
            style: "display: flex; align-items: center;",

            ToolbarButton {
                label: "New note",
                style: ButtonStyle::Info,
                onclick: move |_| create_note(state),
            }
            ToolbarButton {
                label: "Delete note",
                style: ButtonStyle::Primary,
                onclick: move |_| request_delete(state),
            }
            ToolbarButton {
                label: "Update/save note",
                style: ButtonStyle::Success,
                onclick: move |_| save_current_note(state),
            }
        }
    }
}
