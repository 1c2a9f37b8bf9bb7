//! The editor session state machine.
//!
//! Tracks which note (new, existing, or none) is being composed and buffers
//! the unsaved draft text. The session drives [`NoteStore`] mutations but
//! never owns note data itself; it is transient and not persisted.

use crate::model::Note;
use crate::notes::NoteStore;
use crate::store::BlobStore;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditorMode {
    #[default]
    Idle,
    Creating,
    Editing(String),
}

/// What a save attempt did, so the caller can refresh its view.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    /// The note was committed; the session is back to `Idle`.
    Saved(Note),
    /// Both fields were empty; the session stays open and keeps the drafts.
    Rejected,
    /// The edited note no longer exists; the edit was discarded and the
    /// session dropped back to `Idle`.
    Abandoned,
    /// Nothing was being composed.
    Inactive,
}

#[derive(Debug, Default)]
pub struct EditorSession {
    mode: EditorMode,
    draft_title: String,
    draft_body: String,
}

impl EditorSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    pub fn draft_title(&self) -> &str {
        &self.draft_title
    }

    pub fn draft_body(&self) -> &str {
        &self.draft_body
    }

    pub fn is_composing(&self) -> bool {
        self.mode != EditorMode::Idle
    }

    /// Begins composing a brand-new note with cleared drafts.
    pub fn start_new(&mut self) {
        self.mode = EditorMode::Creating;
        self.draft_title.clear();
        self.draft_body.clear();
    }

    /// Begins editing the note with `id`, loading its current text into the
    /// drafts. Falls back to `Idle` when the note cannot be found (deleted
    /// out from under us).
    pub fn start_edit<B: BlobStore>(&mut self, store: &NoteStore<B>, id: &str) {
        match store.get(id) {
            Some(note) => {
                self.draft_title = note.title.clone();
                self.draft_body = note.body.clone();
                self.mode = EditorMode::Editing(note.id.clone());
            }
            None => self.reset(),
        }
    }

    /// Discards the drafts without mutating the store.
    pub fn cancel(&mut self) {
        self.reset();
    }

    /// Commits the live draft text through the store.
    ///
    /// Empty/empty input is rejected and leaves the session open, so the
    /// unsaved draft is never lost to a validation no-op. A vanished edit
    /// target abandons the edit instead of resurrecting the deleted note.
    pub fn save<B: BlobStore>(
        &mut self,
        store: &mut NoteStore<B>,
        title: &str,
        body: &str,
    ) -> SaveOutcome {
        match self.mode.clone() {
            EditorMode::Idle => SaveOutcome::Inactive,
            EditorMode::Creating => {
                self.buffer(title, body);
                match store.create(title, body) {
                    Some(note) => {
                        self.reset();
                        SaveOutcome::Saved(note)
                    }
                    None => SaveOutcome::Rejected,
                }
            }
            EditorMode::Editing(id) => {
                self.buffer(title, body);
                if title.trim().is_empty() && body.trim().is_empty() {
                    return SaveOutcome::Rejected;
                }
                match store.update(&id, title, body) {
                    Ok(note) => {
                        self.reset();
                        SaveOutcome::Saved(note)
                    }
                    // The store only surfaces NoteNotFound, but any failure
                    // here means the edit target is unusable.
                    Err(_) => {
                        self.reset();
                        SaveOutcome::Abandoned
                    }
                }
            }
        }
    }

    /// Collaborator hook: the note with `id` was deleted. If it is the one
    /// being edited, the session drops to `Idle` and the drafts are
    /// discarded so a stale save cannot resurrect it.
    pub fn note_deleted(&mut self, id: &str) {
        if matches!(&self.mode, EditorMode::Editing(target) if target == id) {
            self.reset();
        }
    }

    fn buffer(&mut self, title: &str, body: &str) {
        self.draft_title = title.to_string();
        self.draft_body = body.to_string();
    }

    fn reset(&mut self) {
        self.mode = EditorMode::Idle;
        self.draft_title.clear();
        self.draft_body.clear();
    }
}
