//! Main application component

use dioxus::prelude::*;

use crate::state::{AppState, Session};
use crate::theme::JOURNAL;
use crate::views::{Home, Unavailable};

/// Root application component
#[component]
pub fn App() -> Element {
    let session = use_signal(Session::open);
    let dialog = use_signal(|| None);

    use_context_provider(|| AppState { session, dialog });

    let colors = JOURNAL;
    let failure = match &*session.read() {
        Session::Ready(_) => None,
        Session::Unavailable { path, message } => Some((path.clone(), message.clone())),
    };
    let body = match failure {
        Some((path, message)) => rsx! { Unavailable { path, message } },
        None => rsx! { Home {} },
    };

    rsx! {
        div {
            class: "app-container",
            style: "
                min-height: 100vh;
                font-family: 'Georgia', system-ui, serif;
                background: {colors.bg_window};
                color: {colors.text_primary};
            ",

            {body}
        }
    }
}
