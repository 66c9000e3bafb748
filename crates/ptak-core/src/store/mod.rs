//! In-memory note store and its JSON file mirror

mod file;

use std::collections::BTreeMap;

use crate::models::{Note, NoteId};
use crate::{Error, Result};

pub use file::{decode_notes, encode_notes, NoteFile};

/// Every note of the notebook, keyed by id.
///
/// The whole map is the unit of persistence; see [`NoteFile::save_all`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteStore {
    notes: BTreeMap<NoteId, Note>,
}

impl NoteStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &NoteId) -> Option<&Note> {
        self.notes.get(id)
    }

    pub fn contains(&self, id: &NoteId) -> bool {
        self.notes.contains_key(id)
    }

    /// Insert or replace a note, returning the record it replaced.
    pub fn upsert(&mut self, note: Note) -> Option<Note> {
        self.notes.insert(note.id.clone(), note)
    }

    /// Remove a note, failing with [`Error::NotFound`] if it is absent.
    pub fn remove(&mut self, id: &NoteId) -> Result<Note> {
        self.notes
            .remove(id)
            .ok_or_else(|| Error::NotFound(id.clone()))
    }

    /// Notes in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Note> {
        self.notes.values()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Next identifier after the largest numeric id.
    ///
    /// `"1"` for an empty store. If any stored id is not numeric the
    /// allocation falls back to `"1"`.
    #[must_use]
    pub fn next_id(&self) -> NoteId {
        let mut max_id: Option<u64> = None;
        for id in self.notes.keys() {
            let Some(value) = id.as_number() else {
                tracing::warn!("Non-numeric note id {id:?}; falling back to id 1");
                return NoteId::from_number(1);
            };
            max_id = Some(max_id.map_or(value, |current| current.max(value)));
        }

        match max_id {
            None => NoteId::from_number(1),
            Some(value) => value.checked_add(1).map_or_else(
                || {
                    tracing::warn!("Note id space exhausted; falling back to id 1");
                    NoteId::from_number(1)
                },
                NoteId::from_number,
            ),
        }
    }

    /// Id for a new note that is guaranteed not to collide with a stored one.
    ///
    /// Starts from [`Self::next_id`] and steps forward past occupied ids, so
    /// the fallback to `"1"` never overwrites an existing note.
    #[must_use]
    pub fn allocate_id(&self) -> NoteId {
        let mut candidate = self.next_id();
        while self.contains(&candidate) {
            let next = candidate.as_number().and_then(|value| value.checked_add(1));
            candidate = NoteId::from_number(next.unwrap_or(1));
        }
        tracing::debug!("Allocated note id {candidate}");
        candidate
    }
}

impl FromIterator<Note> for NoteStore {
    fn from_iter<I: IntoIterator<Item = Note>>(iter: I) -> Self {
        Self {
            notes: iter.into_iter().map(|note| (note.id.clone(), note)).collect(),
        }
    }
}
