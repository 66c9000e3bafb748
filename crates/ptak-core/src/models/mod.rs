//! Data models for Ptak Note

mod note;

pub use note::{Note, NoteId};
