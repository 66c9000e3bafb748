//! The `Notebook` controller: user actions over the store and open tabs
//!
//! A `Notebook` owns the note store, the file it mirrors, and the tab
//! registry. Front ends hold one and call an action per button press; every
//! action either completes (store, file, and tabs updated together) or fails
//! with an [`ActionError`] and leaves all three as they were.

use crate::config::AppConfig;
use crate::error::ActionError;
use crate::models::{Note, NoteId};
use crate::store::{NoteFile, NoteStore};
use crate::tabs::{Tab, TabId, TabRegistry};
use crate::util::char_len;
use crate::Result;

/// Snapshot of the active tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentTab {
    pub tab: TabId,
    /// Bound note, `None` for an unsaved tab
    pub note_id: Option<NoteId>,
    pub label: String,
    pub title: String,
    pub content: String,
}

/// Informational message produced by a successful action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub heading: &'static str,
    pub message: String,
}

impl Notice {
    fn saved(title: &str, id: &NoteId) -> Self {
        Self {
            heading: "Updated",
            message: format!("Note '{title}' (ID: {id}) saved successfully."),
        }
    }

    fn deleted(label: &str) -> Self {
        Self {
            heading: "Success",
            message: format!("Note '{label}' deleted."),
        }
    }
}

/// A validated delete waiting for the user's confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteRequest {
    pub tab: TabId,
    pub note_id: NoteId,
    pub label: String,
}

impl DeleteRequest {
    pub const HEADING: &'static str = "Delete note";

    /// Question to put to the user before deleting.
    pub fn prompt(&self) -> String {
        format!("Are you sure you want to delete '{}'?", self.label)
    }
}

/// Check a title/body pair before saving, returning the trimmed values.
///
/// The title must be non-empty. The body may only be empty when the title
/// is at least `min_title_len` characters long.
pub fn validate_note(
    title: &str,
    content: &str,
    min_title_len: usize,
) -> std::result::Result<(String, String), ActionError> {
    let title = title.trim();
    let content = content.trim();

    if title.is_empty() {
        return Err(ActionError::EmptyTitle);
    }
    if content.is_empty() && char_len(title) < min_title_len {
        return Err(ActionError::EmptyContent);
    }

    Ok((title.to_string(), content.to_string()))
}

#[derive(Debug)]
pub struct Notebook {
    store: NoteStore,
    file: NoteFile,
    tabs: TabRegistry,
    min_title_len: usize,
}

impl Notebook {
    /// Load the notes file named by `config` and open a tab per note.
    pub fn open(config: &AppConfig) -> Result<Self> {
        let file = NoteFile::new(&config.notes_path);
        let store = file.load()?;
        Ok(Self::from_parts(
            file,
            store,
            config.min_title_len_without_content,
        ))
    }

    /// Build a notebook over an already loaded store.
    pub fn from_parts(file: NoteFile, store: NoteStore, min_title_len: usize) -> Self {
        let mut tabs = TabRegistry::new();
        for note in store.iter() {
            tabs.open_note(note);
        }

        Self {
            store,
            file,
            tabs,
            min_title_len,
        }
    }

    pub const fn store(&self) -> &NoteStore {
        &self.store
    }

    pub const fn file(&self) -> &NoteFile {
        &self.file
    }

    pub const fn tabs(&self) -> &TabRegistry {
        &self.tabs
    }

    /// Mutable access to the tabs, for editing title/content buffers and
    /// switching the selection.
    pub fn tabs_mut(&mut self) -> &mut TabRegistry {
        &mut self.tabs
    }

    /// The active tab, if any tab is open.
    pub fn current_tab(&self) -> Option<CurrentTab> {
        self.tabs.active().map(|tab| CurrentTab {
            tab: tab.id(),
            note_id: tab.note_id().cloned(),
            label: tab.label().to_string(),
            title: tab.title().to_string(),
            content: tab.content().to_string(),
        })
    }

    pub fn select_tab(&mut self, tab: TabId) -> bool {
        self.tabs.select(tab)
    }

    /// Select the tab showing `note_id`, if one is open.
    pub fn select_note(&mut self, note_id: &NoteId) -> Option<TabId> {
        let tab = self.tabs.find_by_note(note_id)?;
        self.tabs.select(tab);
        Some(tab)
    }

    /// Close a tab without touching the store.
    pub fn close_tab(&mut self, tab: TabId) -> Option<Tab> {
        self.tabs.close(tab)
    }

    /// Create an empty note in a new, selected tab and persist it.
    pub fn create_note(&mut self) -> std::result::Result<NoteId, ActionError> {
        let id = self.store.allocate_id();
        let title = Note::default_title(&id);

        let previous_active = self.tabs.active_id();
        let tab = self.tabs.open_unsaved(title.clone());
        self.tabs.select(tab);
        let previous = self.store.upsert(Note::new(id.clone(), title, ""));

        if let Err(error) = self.file.save_all(&self.store) {
            self.restore(&id, previous);
            self.tabs.close(tab);
            if let Some(active) = previous_active {
                self.tabs.select(active);
            }
            return Err(ActionError::Persistence(error));
        }

        self.tabs.bind(tab, id.clone());
        tracing::info!("Created note {id}");
        Ok(id)
    }

    /// Save the active tab's title and content under its note id.
    pub fn save_current(&mut self) -> std::result::Result<Notice, ActionError> {
        let Some(current) = self.current_tab() else {
            return Err(ActionError::NoNoteSelected);
        };
        let Some(id) = current.note_id else {
            return Err(ActionError::NoNoteSelected);
        };

        let (title, content) = validate_note(&current.title, &current.content, self.min_title_len)
            .inspect_err(|error| tracing::warn!("Rejected save of note {id}: {error}"))?;

        let previous = self
            .store
            .upsert(Note::new(id.clone(), title.clone(), content));
        if let Err(error) = self.file.save_all(&self.store) {
            self.restore(&id, previous);
            return Err(ActionError::Persistence(error));
        }

        self.tabs.set_label(current.tab, title.clone());
        tracing::info!("Saved note {id}");
        Ok(Notice::saved(&title, &id))
    }

    /// Validate a delete of the active tab's note.
    ///
    /// Nothing changes until the request is passed to [`Self::confirm_delete`].
    pub fn begin_delete(&self) -> std::result::Result<DeleteRequest, ActionError> {
        let Some(current) = self.current_tab() else {
            return Err(ActionError::NoNoteSelected);
        };
        let Some(note_id) = current.note_id else {
            return Err(ActionError::UnsavedTab);
        };

        Ok(DeleteRequest {
            tab: current.tab,
            note_id,
            label: current.label,
        })
    }

    /// Delete a confirmed note: drop it from the store, persist, close its tab.
    ///
    /// If the note is already gone from the store the tab is still closed and
    /// [`ActionError::NotFound`] is returned.
    pub fn confirm_delete(
        &mut self,
        request: DeleteRequest,
    ) -> std::result::Result<Notice, ActionError> {
        let removed = match self.store.remove(&request.note_id) {
            Ok(note) => note,
            Err(_) => {
                self.tabs.close(request.tab);
                tracing::warn!("Delete of missing note {}", request.note_id);
                return Err(ActionError::NotFound(request.note_id));
            }
        };

        if let Err(error) = self.file.save_all(&self.store) {
            self.store.upsert(removed);
            return Err(ActionError::Persistence(error));
        }

        self.tabs.close(request.tab);
        tracing::info!("Deleted note {}", request.note_id);
        Ok(Notice::deleted(&request.label))
    }

    fn restore(&mut self, id: &NoteId, previous: Option<Note>) {
        match previous {
            Some(note) => {
                self.store.upsert(note);
            }
            None => {
                let _ = self.store.remove(id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use pretty_assertions::assert_eq;

    use super::*;

    const MIN_LEN: usize = crate::config::MIN_TITLE_LEN_WITHOUT_CONTENT;

    fn notebook_at(path: &Path) -> Notebook {
        Notebook::open(&AppConfig::with_notes_path(path)).unwrap()
    }

    /// Notebook whose file lives under a regular file, so every save fails.
    fn broken_notebook(dir: &Path, store: NoteStore) -> Notebook {
        let blocker = dir.join("blocker");
        fs::write(&blocker, "").unwrap();
        Notebook::from_parts(NoteFile::new(blocker.join("notes.json")), store, MIN_LEN)
    }

    fn edit_active(notebook: &mut Notebook, title: &str, content: &str) {
        let tab = notebook.tabs_mut().active_mut().unwrap();
        tab.set_title(title);
        tab.set_content(content);
    }

    #[test]
    fn validate_rejects_empty_title_regardless_of_content() {
        assert!(matches!(
            validate_note("   ", "some content", MIN_LEN),
            Err(ActionError::EmptyTitle)
        ));
        assert!(matches!(
            validate_note("", "", MIN_LEN),
            Err(ActionError::EmptyTitle)
        ));
    }

    #[test]
    fn validate_short_title_needs_content() {
        assert!(matches!(
            validate_note("Todo", "  \n", MIN_LEN),
            Err(ActionError::EmptyContent)
        ));
        assert_eq!(
            validate_note("Todo", " milk ", MIN_LEN).unwrap(),
            ("Todo".to_string(), "milk".to_string())
        );
    }

    #[test]
    fn validate_long_title_allows_empty_content() {
        assert_eq!(
            validate_note("  Ideas  ", "", MIN_LEN).unwrap(),
            ("Ideas".to_string(), String::new())
        );
    }

    #[test]
    fn validate_counts_characters_not_bytes() {
        // 4 characters, 7 bytes
        assert!(matches!(
            validate_note("żółw", "", MIN_LEN),
            Err(ActionError::EmptyContent)
        ));
    }

    #[test]
    fn open_creates_a_tab_per_stored_note() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.json");
        fs::write(
            &path,
            r#"{"2": {"title": "Second", "content": "b"}, "1": {"content": "a"}}"#,
        )
        .unwrap();

        let notebook = notebook_at(&path);
        let labels: Vec<&str> = notebook.tabs().iter().map(Tab::label).collect();
        assert_eq!(labels, vec!["No title (ID: 1)", "Second"]);
        assert_eq!(notebook.current_tab().unwrap().content, "a");
    }

    #[test]
    fn open_fails_on_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.json");
        fs::write(&path, "not json at all").unwrap();

        let result = Notebook::open(&AppConfig::with_notes_path(&path));
        assert!(matches!(result, Err(crate::Error::CorruptStore { .. })));
    }

    #[test]
    fn create_persists_empty_note_and_selects_it() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.json");
        let mut notebook = notebook_at(&path);

        let first = notebook.create_note().unwrap();
        let second = notebook.create_note().unwrap();
        assert_eq!(first, NoteId::new("1"));
        assert_eq!(second, NoteId::new("2"));

        let current = notebook.current_tab().unwrap();
        assert_eq!(current.note_id, Some(second.clone()));
        assert_eq!(current.label, "New Note (2)");
        assert_eq!(current.title, "New Note (2)");

        let reloaded = NoteFile::new(&path).load().unwrap();
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.get(&second).unwrap().content, "");
    }

    #[test]
    fn current_tab_is_none_without_tabs() {
        let dir = tempfile::tempdir().unwrap();
        let notebook = notebook_at(&dir.path().join("notes.json"));
        assert_eq!(notebook.current_tab(), None);
    }

    #[test]
    fn save_writes_trimmed_fields_and_relabels_tab() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.json");
        let mut notebook = notebook_at(&path);
        let id = notebook.create_note().unwrap();

        edit_active(&mut notebook, "  Lista zakupów ", "\n mleko\n chleb \n");
        let notice = notebook.save_current().unwrap();

        assert_eq!(notice.heading, "Updated");
        assert_eq!(
            notice.message,
            "Note 'Lista zakupów' (ID: 1) saved successfully."
        );
        assert_eq!(notebook.current_tab().unwrap().label, "Lista zakupów");

        let reloaded = NoteFile::new(&path).load().unwrap();
        let note = reloaded.get(&id).unwrap();
        assert_eq!(note.title, "Lista zakupów");
        assert_eq!(note.content, "mleko\n chleb");
        assert!(fs::read_to_string(&path).unwrap().contains("Lista zakupów"));
    }

    #[test]
    fn save_rejections_leave_store_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.json");
        let mut notebook = notebook_at(&path);
        let id = notebook.create_note().unwrap();
        let before = fs::read_to_string(&path).unwrap();

        edit_active(&mut notebook, "", "content");
        assert!(matches!(
            notebook.save_current(),
            Err(ActionError::EmptyTitle)
        ));

        edit_active(&mut notebook, "Abc", "");
        assert!(matches!(
            notebook.save_current(),
            Err(ActionError::EmptyContent)
        ));

        assert_eq!(notebook.store().get(&id).unwrap().title, "New Note (1)");
        assert_eq!(notebook.current_tab().unwrap().label, "New Note (1)");
        assert_eq!(fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn save_accepts_long_title_with_empty_content() {
        let dir = tempfile::tempdir().unwrap();
        let mut notebook = notebook_at(&dir.path().join("notes.json"));
        notebook.create_note().unwrap();

        edit_active(&mut notebook, "Hello", "");
        assert!(notebook.save_current().is_ok());
    }

    #[test]
    fn save_requires_a_bound_tab() {
        let dir = tempfile::tempdir().unwrap();
        let mut notebook = notebook_at(&dir.path().join("notes.json"));
        assert!(matches!(
            notebook.save_current(),
            Err(ActionError::NoNoteSelected)
        ));

        let tab = notebook.tabs_mut().open_unsaved("Scratch");
        notebook.select_tab(tab);
        edit_active(&mut notebook, "Scratch pad", "text");
        assert!(matches!(
            notebook.save_current(),
            Err(ActionError::NoNoteSelected)
        ));
        assert!(notebook.store().is_empty());
    }

    #[test]
    fn delete_is_two_phase() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.json");
        let mut notebook = notebook_at(&path);
        let id = notebook.create_note().unwrap();

        let request = notebook.begin_delete().unwrap();
        assert_eq!(request.note_id, id);
        assert_eq!(request.prompt(), "Are you sure you want to delete 'New Note (1)'?");
        assert!(notebook.store().contains(&id));
        assert_eq!(notebook.tabs().len(), 1);

        let notice = notebook.confirm_delete(request).unwrap();
        assert_eq!(notice.message, "Note 'New Note (1)' deleted.");
        assert!(notebook.tabs().is_empty());
        assert!(!notebook.store().contains(&id));
        assert!(NoteFile::new(&path).load().unwrap().is_empty());
    }

    #[test]
    fn deleting_twice_reports_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let mut notebook = notebook_at(&dir.path().join("notes.json"));
        notebook.create_note().unwrap();

        let request = notebook.begin_delete().unwrap();
        notebook.confirm_delete(request.clone()).unwrap();

        let error = notebook.confirm_delete(request).unwrap_err();
        assert!(matches!(error, ActionError::NotFound(ref id) if id.as_str() == "1"));
        assert_eq!(error.heading(), "Error");
    }

    #[test]
    fn delete_of_unsaved_tab_is_a_warning() {
        let dir = tempfile::tempdir().unwrap();
        let mut notebook = notebook_at(&dir.path().join("notes.json"));
        assert!(matches!(
            notebook.begin_delete(),
            Err(ActionError::NoNoteSelected)
        ));

        notebook.tabs_mut().open_unsaved("Draft");
        assert!(matches!(
            notebook.begin_delete(),
            Err(ActionError::UnsavedTab)
        ));
    }

    #[test]
    fn failed_create_rolls_back_store_and_tab() {
        let dir = tempfile::tempdir().unwrap();
        let mut notebook = broken_notebook(dir.path(), NoteStore::new());

        let error = notebook.create_note().unwrap_err();
        assert!(matches!(error, ActionError::Persistence(_)));
        assert!(notebook.store().is_empty());
        assert!(notebook.tabs().is_empty());
    }

    #[test]
    fn failed_create_keeps_previous_selection() {
        let dir = tempfile::tempdir().unwrap();
        let store: NoteStore = [
            Note::new(NoteId::new("1"), "First note", ""),
            Note::new(NoteId::new("2"), "Second note", ""),
        ]
        .into_iter()
        .collect();
        let mut notebook = broken_notebook(dir.path(), store);
        notebook.select_note(&NoteId::new("1")).unwrap();

        let error = notebook.create_note().unwrap_err();

        assert!(matches!(error, ActionError::Persistence(_)));
        assert_eq!(notebook.tabs().len(), 2);
        let current = notebook.current_tab().unwrap();
        assert_eq!(current.note_id, Some(NoteId::new("1")));
    }

    #[test]
    fn failed_save_restores_previous_record() {
        let dir = tempfile::tempdir().unwrap();
        let store: NoteStore = [Note::new(NoteId::new("3"), "Original", "body")]
            .into_iter()
            .collect();
        let mut notebook = broken_notebook(dir.path(), store);

        edit_active(&mut notebook, "Changed title", "changed body");
        let error = notebook.save_current().unwrap_err();

        assert!(matches!(error, ActionError::Persistence(_)));
        let note = notebook.store().get(&NoteId::new("3")).unwrap();
        assert_eq!(note.title, "Original");
        assert_eq!(note.content, "body");
        let current = notebook.current_tab().unwrap();
        assert_eq!(current.label, "Original");
        // The unsaved edits stay in the tab for another attempt.
        assert_eq!(current.title, "Changed title");
    }

    #[test]
    fn failed_delete_keeps_note_and_tab() {
        let dir = tempfile::tempdir().unwrap();
        let store: NoteStore = [Note::new(NoteId::new("1"), "Keep me", "")]
            .into_iter()
            .collect();
        let mut notebook = broken_notebook(dir.path(), store);

        let request = notebook.begin_delete().unwrap();
        let error = notebook.confirm_delete(request).unwrap_err();

        assert!(matches!(error, ActionError::Persistence(_)));
        assert!(notebook.store().contains(&NoteId::new("1")));
        assert_eq!(notebook.tabs().len(), 1);
    }

    #[test]
    fn create_never_overwrites_after_id_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.json");
        fs::write(
            &path,
            r#"{"1": {"title": "First", "content": "x"}, "draft": {"title": "Draft", "content": "y"}}"#,
        )
        .unwrap();
        let mut notebook = notebook_at(&path);

        let id = notebook.create_note().unwrap();
        assert_eq!(id, NoteId::new("2"));
        assert_eq!(notebook.store().get(&NoteId::new("1")).unwrap().title, "First");
        assert_eq!(notebook.store().len(), 3);
    }

    #[test]
    fn select_note_and_close_tab() {
        let dir = tempfile::tempdir().unwrap();
        let mut notebook = notebook_at(&dir.path().join("notes.json"));
        let first = notebook.create_note().unwrap();
        notebook.create_note().unwrap();

        let tab = notebook.select_note(&first).unwrap();
        assert_eq!(notebook.current_tab().unwrap().note_id, Some(first.clone()));

        notebook.close_tab(tab);
        assert!(notebook.select_note(&first).is_none());
        assert!(notebook.store().contains(&first));
    }
}
