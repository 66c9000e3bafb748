//! Home view - the notebook window

use dioxus::prelude::*;

use crate::components::{DialogHost, NoteEditor, TabBar, Toolbar};

#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "home-container",
            style: "display: flex; flex-direction: column; height: 100vh;",

            div {
                class: "notebook",
                style: "flex: 1; display: flex; flex-direction: column; margin: 10px; overflow: hidden;",

                TabBar {}
                NoteEditor {}
            }

            Toolbar {}
            DialogHost {}
        }
    }
}
