//! ptak-core - Core library for Ptak Note
//!
//! This crate contains the note model, the JSON-backed note store, the tab
//! registry, and the `Notebook` controller shared by the desktop and CLI
//! front ends.

pub mod config;
pub mod error;
pub mod models;
pub mod notebook;
pub mod store;
pub mod tabs;
pub mod util;

pub use config::AppConfig;
pub use error::{ActionError, Error, Result, Severity};
pub use models::{Note, NoteId};
pub use notebook::{CurrentTab, DeleteRequest, Notebook, Notice};
pub use store::{NoteFile, NoteStore};
pub use tabs::{Tab, TabId, TabRegistry};
