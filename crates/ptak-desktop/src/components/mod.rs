//! UI Components
//!
//! Building blocks of the notebook window.

mod dialog;
mod note_actions;
mod note_editor;
mod tab_bar;
mod toolbar;

pub use dialog::DialogHost;
pub use note_editor::NoteEditor;
pub use tab_bar::TabBar;
pub use toolbar::Toolbar;
