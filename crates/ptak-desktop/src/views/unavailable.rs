//! Shown instead of the notebook when the notes file cannot be read

use dioxus::prelude::*;

use crate::theme::JOURNAL;

#[component]
pub fn Unavailable(path: String, message: String) -> Element {
    let colors = JOURNAL;

    rsx! {
        div {
            class: "unavailable",
            style: "padding: 24px; border-top: 4px solid {colors.danger};",

            h2 { "Could not open notes" }
            p { "The notes file at {path} could not be loaded:" }
            pre { style: "white-space: pre-wrap; color: {colors.text_muted};", "{message}" }
            p { "Fix or move the file and restart Ptak Note. It has not been modified." }
        }
    }
}
