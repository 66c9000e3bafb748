//! Tab strip: one tab per open note

use dioxus::prelude::*;

use ptak_core::TabId;

use crate::state::AppState;
use crate::theme::JOURNAL;

#[derive(Clone, PartialEq)]
struct TabView {
    id: TabId,
    label: String,
    is_active: bool,
}

#[component]
pub fn TabBar() -> Element {
    let mut state = use_context::<AppState>();
    let colors = JOURNAL;

    let tabs = state
        .with_notebook(|notebook| {
            let active = notebook.tabs().active_id();
            notebook
                .tabs()
                .iter()
                .map(|tab| TabView {
                    id: tab.id(),
                    label: tab.label().to_string(),
                    is_active: Some(tab.id()) == active,
                })
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();

    rsx! {
        div {
            class: "tab-bar",
            style: "
                display: flex;
                flex-wrap: wrap;
                border-bottom: 1px solid {colors.border};
            ",

            for tab in tabs {
                {
                    let tab_id = tab.id;
                    let background = if tab.is_active { colors.bg_tab_active } else { colors.bg_tab };
                    let bottom = if tab.is_active { colors.bg_tab_active } else { colors.border };

                    rsx! {
                        div {
                            key: "{tab_id}",
                            class: if tab.is_active { "tab active" } else { "tab" },
                            style: "
                                display: flex;
                                align-items: center;
                                gap: 8px;
                                padding: 6px 12px;
                                margin-bottom: -1px;
                                border: 1px solid {colors.border};
                                border-bottom-color: {bottom};
                                background: {background};
                                font-weight: bold;
                                cursor: pointer;
                            ",
                            onclick: move |_| {
                                state.update_notebook(|notebook| notebook.select_tab(tab_id));
                            },

                            span { "{tab.label}" }
                            span {
                                title: "Close tab",
                                style: "color: {colors.text_muted};",
                                onclick: move |evt: MouseEvent| {
                                    evt.stop_propagation();
                                    state.update_notebook(|notebook| notebook.close_tab(tab_id));
                                },
                                "×"
                            }
                        }
                    }
                }
            }
        }
    }
}
