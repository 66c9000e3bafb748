//! JSON file persistence for the note store

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::NoteStore;
use crate::models::{Note, NoteId};
use crate::{Error, Result};

const INDENT: &[u8] = b"    ";

#[derive(Serialize)]
struct RecordRef<'a> {
    title: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct StoredRecord {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    content: Option<String>,
}

/// Render the store as the on-disk JSON object.
///
/// Output is UTF-8 with four-space indentation and non-ASCII text unescaped.
pub fn encode_notes(store: &NoteStore) -> Result<Vec<u8>> {
    let records = store
        .iter()
        .map(|note| {
            (
                &note.id,
                RecordRef {
                    title: &note.title,
                    content: &note.content,
                },
            )
        })
        .collect::<BTreeMap<&NoteId, RecordRef<'_>>>();

    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    records.serialize(&mut serializer)?;

    Ok(buffer)
}

/// Parse the on-disk JSON object into a store.
///
/// Missing titles become the placeholder title, missing content becomes empty.
pub fn decode_notes(raw: &str) -> serde_json::Result<NoteStore> {
    let records: BTreeMap<NoteId, StoredRecord> = serde_json::from_str(raw)?;
    Ok(records
        .into_iter()
        .map(|(id, record)| {
            let title = record
                .title
                .unwrap_or_else(|| Note::placeholder_title(&id));
            Note::new(id, title, record.content.unwrap_or_default())
        })
        .collect())
}

/// The single file that mirrors the note store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteFile {
    path: PathBuf,
}

impl NoteFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole store.
    ///
    /// A missing (or blank) file is an empty store. Unreadable or malformed
    /// files are errors; callers must not save over them.
    pub fn load(&self) -> Result<NoteStore> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                tracing::info!(
                    "No notes file at {}, starting empty",
                    self.path.display()
                );
                return Ok(NoteStore::new());
            }
            Err(error) => return Err(error.into()),
        };

        if raw.trim().is_empty() {
            tracing::info!("Notes file {} is blank, starting empty", self.path.display());
            return Ok(NoteStore::new());
        }

        let store = decode_notes(&raw).map_err(|source| Error::CorruptStore {
            path: self.path.clone(),
            source,
        })?;
        tracing::info!("Loaded {} notes from {}", store.len(), self.path.display());
        Ok(store)
    }

    /// Overwrite the file with the whole store.
    ///
    /// The payload is written to a sibling temporary file and renamed into
    /// place, so a failed save leaves the previous file intact.
    pub fn save_all(&self, store: &NoteStore) -> Result<()> {
        let payload = encode_notes(store)?;

        if let Some(parent) = self
            .path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
        {
            fs::create_dir_all(parent)?;
        }

        let temp_path = self.temp_path();
        if let Err(error) = fs::write(&temp_path, &payload)
            .and_then(|()| fs::rename(&temp_path, &self.path))
        {
            let _ = fs::remove_file(&temp_path);
            tracing::error!("Failed to write {}: {}", self.path.display(), error);
            return Err(error.into());
        }

        tracing::info!("Saved {} notes to {}", store.len(), self.path.display());
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map_or_else(|| OsString::from("notes.json"), OsString::from);
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
