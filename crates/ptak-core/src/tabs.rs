//! Tab registry: the binding between visible tabs and stored notes
//!
//! Each open tab has a stable [`TabId`] handle and is either bound to a note
//! id or still unsaved. A tab's title and content fields are edit buffers;
//! they only reach the store when the notebook saves the tab.

use std::fmt;

use crate::models::{Note, NoteId};

/// Stable handle of an open tab, unique for the lifetime of a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TabId(u64);

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tab-{}", self.0)
    }
}

/// One open tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    id: TabId,
    note_id: Option<NoteId>,
    label: String,
    title: String,
    content: String,
}

impl Tab {
    pub const fn id(&self) -> TabId {
        self.id
    }

    /// Note this tab is bound to, `None` while unsaved.
    pub const fn note_id(&self) -> Option<&NoteId> {
        self.note_id.as_ref()
    }

    pub const fn is_saved(&self) -> bool {
        self.note_id.is_some()
    }

    /// Text shown on the tab itself.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Current contents of the title field.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Current contents of the body field.
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }
}

/// Ordered set of open tabs plus the current selection.
#[derive(Debug, Clone, Default)]
pub struct TabRegistry {
    tabs: Vec<Tab>,
    active: Option<TabId>,
    next_handle: u64,
}

impl TabRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a tab showing a stored note.
    pub fn open_note(&mut self, note: &Note) -> TabId {
        self.push(
            Some(note.id.clone()),
            note.title.clone(),
            note.title.clone(),
            note.content.clone(),
        )
    }

    /// Open a tab that is not yet bound to any note.
    pub fn open_unsaved(&mut self, title: impl Into<String>) -> TabId {
        let title = title.into();
        self.push(None, title.clone(), title, String::new())
    }

    fn push(
        &mut self,
        note_id: Option<NoteId>,
        label: String,
        title: String,
        content: String,
    ) -> TabId {
        let id = TabId(self.next_handle);
        self.next_handle += 1;
        tracing::debug!("Opened {id} for note {note_id:?}");
        self.tabs.push(Tab {
            id,
            note_id,
            label,
            title,
            content,
        });
        if self.active.is_none() {
            self.active = Some(id);
        }
        id
    }

    /// Bind an unsaved tab to a note.
    ///
    /// Returns `false` if the tab is gone or already bound; a saved tab never
    /// goes back to unsaved or changes its note.
    pub fn bind(&mut self, tab: TabId, note_id: NoteId) -> bool {
        match self.get_mut(tab) {
            Some(entry) if entry.note_id.is_none() => {
                tracing::debug!("Bound {tab} to note {note_id}");
                entry.note_id = Some(note_id);
                true
            }
            _ => false,
        }
    }

    /// Make `tab` the active tab. Returns `false` for an unknown handle.
    pub fn select(&mut self, tab: TabId) -> bool {
        if self.position(tab).is_some() {
            self.active = Some(tab);
            true
        } else {
            false
        }
    }

    pub const fn active_id(&self) -> Option<TabId> {
        self.active
    }

    pub fn active(&self) -> Option<&Tab> {
        self.active.and_then(|tab| self.get(tab))
    }

    pub fn active_mut(&mut self) -> Option<&mut Tab> {
        let tab = self.active?;
        self.get_mut(tab)
    }

    pub fn get(&self, tab: TabId) -> Option<&Tab> {
        self.tabs.iter().find(|entry| entry.id == tab)
    }

    pub fn get_mut(&mut self, tab: TabId) -> Option<&mut Tab> {
        self.tabs.iter_mut().find(|entry| entry.id == tab)
    }

    pub fn position(&self, tab: TabId) -> Option<usize> {
        self.tabs.iter().position(|entry| entry.id == tab)
    }

    /// First open tab bound to `note_id`.
    pub fn find_by_note(&self, note_id: &NoteId) -> Option<TabId> {
        self.tabs
            .iter()
            .find(|entry| entry.note_id.as_ref() == Some(note_id))
            .map(Tab::id)
    }

    pub fn set_label(&mut self, tab: TabId, label: impl Into<String>) -> bool {
        self.get_mut(tab).map_or(false, |entry| {
            entry.label = label.into();
            true
        })
    }

    /// Close a tab. If it was active, the tab that slides into its position
    /// (or the new last tab) becomes active.
    pub fn close(&mut self, tab: TabId) -> Option<Tab> {
        let index = self.position(tab)?;
        let removed = self.tabs.remove(index);

        if self.active == Some(tab) {
            self.active = self
                .tabs
                .get(index)
                .or_else(|| self.tabs.last())
                .map(Tab::id);
        }

        tracing::debug!("Closed {tab}");
        Some(removed)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tab> {
        self.tabs.iter()
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }
}
