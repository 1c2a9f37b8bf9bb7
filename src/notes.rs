//! The canonical in-memory note collection and its mutations.
//!
//! [`NoteStore`] is the single writer: creates, updates, and deletes all go
//! through it, and each mutation flushes the full collection through the
//! persistence adapter. The collection is insertion-ordered, newest first;
//! edits keep a note in place.

use crate::error::{NoteError, Result};
use crate::model::{Note, UNTITLED};
use crate::persist::Persist;
use crate::store::BlobStore;
use chrono::Utc;

/// Owner of the canonical note collection, generic over the storage backend.
///
/// Construct with [`NoteStore::open`], which loads whatever the blob
/// currently holds. There is no global instance; callers hold and pass the
/// store explicitly.
pub struct NoteStore<B: BlobStore> {
    notes: Vec<Note>,
    persist: Persist<B>,
}

impl<B: BlobStore> NoteStore<B> {
    pub fn open(persist: Persist<B>) -> Self {
        let notes = persist.load();
        Self { notes, persist }
    }

    /// Current collection, newest-created first.
    pub fn list(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Creates a note from `title` and `body`, both trimmed.
    ///
    /// Returns `None` without touching the collection when both trimmed
    /// inputs are empty; blank notes are never stored. An empty title falls
    /// back to [`UNTITLED`]. The new note is prepended.
    pub fn create(&mut self, title: &str, body: &str) -> Option<Note> {
        let title = title.trim();
        let body = body.trim();
        if title.is_empty() && body.is_empty() {
            return None;
        }

        let note = Note::new(resolve_title(title), body.to_string());
        self.notes.insert(0, note.clone());
        self.flush();
        Some(note)
    }

    /// Replaces `title`/`body` of the note with `id` and refreshes its
    /// timestamp, keeping its position in the collection.
    ///
    /// An unknown `id` is [`NoteError::NoteNotFound`]. Both trimmed inputs
    /// empty is a no-op returning the unchanged note.
    pub fn update(&mut self, id: &str, title: &str, body: &str) -> Result<Note> {
        let position = self
            .notes
            .iter()
            .position(|note| note.id == id)
            .ok_or_else(|| NoteError::NoteNotFound(id.to_string()))?;

        let title = title.trim();
        let body = body.trim();
        if title.is_empty() && body.is_empty() {
            return Ok(self.notes[position].clone());
        }

        let note = &mut self.notes[position];
        note.title = resolve_title(title);
        note.body = body.to_string();
        note.updated_at = Utc::now();
        let updated = note.clone();
        self.flush();
        Ok(updated)
    }

    /// Removes the note with `id` if present. Absent ids are not an error;
    /// the blob is flushed either way so it stays aligned with memory.
    pub fn delete(&mut self, id: &str) {
        self.notes.retain(|note| note.id != id);
        self.flush();
    }

    fn flush(&mut self) {
        self.persist.save(&self.notes);
    }
}

fn resolve_title(trimmed: &str) -> String {
    if trimmed.is_empty() {
        UNTITLED.to_string()
    } else {
        trimmed.to_string()
    }
}
