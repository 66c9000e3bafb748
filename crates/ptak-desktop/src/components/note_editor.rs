//! Note editor component: title field and body of the active tab

use dioxus::prelude::*;

use crate::state::AppState;
use crate::theme::JOURNAL;

#[component]
pub fn NoteEditor() -> Element {
    let mut state = use_context::<AppState>();
    let colors = JOURNAL;

    let Some(current) = state.with_notebook(ptak_core::Notebook::current_tab).flatten() else {
        return rsx! {
            div {
                style: "
                    flex: 1;
                    padding: 20px;
                    text-align: center;
                    color: {colors.text_muted};
                ",
                "No notes open. Use \"New note\" to start one."
            }
        };
    };

    let on_title_input = move |evt: Event<FormData>| {
        let value = evt.value();
        state.update_notebook(|notebook| {
            if let Some(tab) = notebook.tabs_mut().active_mut() {
                tab.set_title(value);
            }
        });
    };

    let on_content_input = move |evt: Event<FormData>| {
        let value = evt.value();
        state.update_notebook(|notebook| {
            if let Some(tab) = notebook.tabs_mut().active_mut() {
                tab.set_content(value);
            }
        });
    };

    rsx! {
        div {
            class: "note-editor",
            style: "
                flex: 1;
                display: flex;
                flex-direction: column;
                padding: 5px;
            ",

            input {
                class: "note-title",
                r#type: "text",
                value: "{current.title}",
                style: "
                    margin-bottom: 5px;
                    padding: 6px;
                    font-size: 16px;
                    font-weight: bold;
                    border: 1px solid {colors.border};
                ",
                oninput: on_title_input,
            }

            textarea {
                class: "note-content",
                value: "{current.content}",
                style: "
                    flex: 1;
                    padding: 6px;
                    resize: none;
                    white-space: pre-wrap;
                    overflow-y: auto;
                    border: 1px solid {colors.border};
                    font-family: inherit;
                ",
                oninput: on_content_input,
            }
        }
    }
}
