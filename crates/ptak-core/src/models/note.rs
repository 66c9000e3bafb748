//! Note model

use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier of a note: a string-encoded non-negative integer.
///
/// Ids read back from a hand-edited file may not be numeric; they are kept
/// verbatim so the note survives the next save.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    /// Wrap a raw id string as read from storage or typed by the user.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Id for the given number.
    #[must_use]
    pub fn from_number(value: u64) -> Self {
        Self(value.to_string())
    }

    /// Numeric value of this id, if it is a plain non-negative integer.
    #[must_use]
    pub fn as_number(&self) -> Option<u64> {
        if self.0.is_empty() || !self.0.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        self.0.parse().ok()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl FromStr for NoteId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().to_string()))
    }
}

// Numeric ids sort by value, everything else after them by text.
impl Ord for NoteId {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.as_number(), other.as_number()) {
            (Some(a), Some(b)) => a.cmp(&b).then_with(|| self.0.cmp(&other.0)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.0.cmp(&other.0),
        }
    }
}

impl PartialOrd for NoteId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A note in the system
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    /// Unique identifier, assigned once at creation
    pub id: NoteId,
    /// Title, also used as the tab label
    pub title: String,
    /// Plain text body
    pub content: String,
}

impl Note {
    #[must_use]
    pub fn new(id: NoteId, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
        }
    }

    /// Title given to a freshly created note.
    #[must_use]
    pub fn default_title(id: &NoteId) -> String {
        format!("New Note ({id})")
    }

    /// Title shown for a stored note whose record has no title.
    #[must_use]
    pub fn placeholder_title(id: &NoteId) -> String {
        format!("No title (ID: {id})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_id_numeric() {
        assert_eq!(NoteId::new("42").as_number(), Some(42));
        assert_eq!(NoteId::new("abc").as_number(), None);
        assert_eq!(NoteId::new("-3").as_number(), None);
        assert_eq!(NoteId::new("+3").as_number(), None);
        assert_eq!(NoteId::new(" 3").as_number(), None);
        assert_eq!(NoteId::new("").as_number(), None);
    }

    #[test]
    fn test_note_id_parse_trims() {
        let id: NoteId = " 12 ".parse().unwrap();
        assert_eq!(id, NoteId::from_number(12));
    }

    #[test]
    fn test_note_id_ordering_is_numeric() {
        let mut ids = vec![
            NoteId::new("10"),
            NoteId::new("draft"),
            NoteId::new("9"),
            NoteId::new("1"),
        ];
        ids.sort();
        let ordered: Vec<&str> = ids.iter().map(NoteId::as_str).collect();
        assert_eq!(ordered, vec!["1", "9", "10", "draft"]);
    }

    #[test]
    fn test_note_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&NoteId::from_number(5)).unwrap();
        assert_eq!(json, "\"5\"");
    }

    #[test]
    fn test_titles() {
        let id = NoteId::from_number(3);
        assert_eq!(Note::default_title(&id), "New Note (3)");
        assert_eq!(Note::placeholder_title(&id), "No title (ID: 3)");
    }
}
