//! Persistence adapter between the note store and the durable blob.
//!
//! Persistence here is advisory, not authoritative: every failure in either
//! direction is absorbed at this boundary, so the in-memory collection keeps
//! working even on a broken medium, losing only durability across restarts.

use crate::error::Result;
use crate::id::generate_id;
use crate::model::Note;
use crate::store::BlobStore;
use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde_json::Value;

pub struct Persist<B: BlobStore> {
    blob: B,
}

impl<B: BlobStore> Persist<B> {
    pub fn new(blob: B) -> Self {
        Self { blob }
    }

    /// Reads the persisted collection.
    ///
    /// An absent blob, a read failure, invalid JSON, or a non-array root all
    /// yield an empty collection. Individual elements are coerced
    /// best-effort; only non-object elements are dropped.
    pub fn load(&self) -> Vec<Note> {
        let raw = match self.blob.get() {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!("failed to read note blob: {err}");
                return Vec::new();
            }
        };

        let parsed: Value = match serde_json::from_str(&raw) {
            Ok(parsed) => parsed,
            Err(err) => {
                warn!("stored note blob is not valid JSON, starting empty: {err}");
                return Vec::new();
            }
        };

        let Value::Array(elements) = parsed else {
            warn!("stored note blob is not an array, starting empty");
            return Vec::new();
        };

        elements.iter().filter_map(coerce_note).collect()
    }

    /// Writes the full collection, overwriting the prior blob.
    ///
    /// Failures are suppressed: the previously stored blob stays intact (the
    /// [`BlobStore::set`] all-or-nothing contract) and the caller's in-memory
    /// state remains the source of truth for the rest of the session.
    pub fn save(&mut self, notes: &[Note]) {
        if let Err(err) = self.try_save(notes) {
            warn!("failed to persist {} notes: {err}", notes.len());
        }
    }

    fn try_save(&mut self, notes: &[Note]) -> Result<()> {
        let payload = serde_json::to_string(notes)?;
        self.blob.set(&payload)
    }
}

/// Coerces one raw element into a well-typed note.
///
/// Missing or non-string `id` gets a freshly generated one; `title`/`body`
/// default to empty; `updatedAt` must be an RFC 3339 string or is replaced
/// with the current time. Unknown fields are ignored. Non-object elements
/// yield `None`.
fn coerce_note(raw: &Value) -> Option<Note> {
    let Value::Object(fields) = raw else {
        debug!("dropping non-object element from stored notes");
        return None;
    };

    let id = fields
        .get("id")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(generate_id);
    let title = fields
        .get("title")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let body = fields
        .get("body")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let updated_at = fields
        .get("updatedAt")
        .and_then(Value::as_str)
        .and_then(|value| DateTime::parse_from_rfc3339(value).ok())
        .map(|value| value.with_timezone(&Utc))
        .unwrap_or_else(Utc::now);

    Some(Note {
        id,
        title,
        body,
        updated_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryBlob;

    #[test]
    fn round_trips_a_collection() {
        let notes = vec![
            Note::new("First".to_string(), "Body one".to_string()),
            Note::new("Second".to_string(), "".to_string()),
        ];

        let mut persist = Persist::new(MemoryBlob::new());
        persist.save(&notes);
        assert_eq!(persist.load(), notes);
    }

    #[test]
    fn missing_blob_loads_empty() {
        let persist = Persist::new(MemoryBlob::new());
        assert!(persist.load().is_empty());
    }

    #[test]
    fn invalid_json_loads_empty() {
        let persist = Persist::new(MemoryBlob::with_value("{not json"));
        assert!(persist.load().is_empty());
    }

    #[test]
    fn non_array_root_loads_empty() {
        let persist = Persist::new(MemoryBlob::with_value(r#"{"id":"a"}"#));
        assert!(persist.load().is_empty());
    }

    #[test]
    fn coerces_missing_fields() {
        let persist = Persist::new(MemoryBlob::with_value(r#"[{"id":"a","title":"X"}]"#));
        let notes = persist.load();

        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].id, "a");
        assert_eq!(notes[0].title, "X");
        assert_eq!(notes[0].body, "");
        // Replaced with a current timestamp, not an epoch default.
        assert!(Utc::now().signed_duration_since(notes[0].updated_at).num_seconds() < 5);
    }

    #[test]
    fn missing_id_gets_a_fresh_one() {
        let persist = Persist::new(MemoryBlob::with_value(r#"[{"title":"X"},{"id":7}]"#));
        let notes = persist.load();

        assert_eq!(notes.len(), 2);
        assert!(!notes[0].id.is_empty());
        assert!(!notes[1].id.is_empty());
        assert_ne!(notes[0].id, notes[1].id);
    }

    #[test]
    fn drops_non_object_elements_but_keeps_the_rest() {
        let persist = Persist::new(MemoryBlob::with_value(
            r#"[42, "text", {"id":"keep","title":"T","body":"B"}, null]"#,
        ));
        let notes = persist.load();

        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].id, "keep");
    }

    #[test]
    fn ignores_unknown_fields() {
        let persist = Persist::new(MemoryBlob::with_value(
            r#"[{"id":"a","title":"T","body":"B","updatedAt":"2024-03-15T12:00:00Z","color":"red"}]"#,
        ));
        let notes = persist.load();

        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].updated_at.to_rfc3339(), "2024-03-15T12:00:00+00:00");
    }

    #[test]
    fn unparseable_timestamp_is_replaced_with_now() {
        let persist = Persist::new(MemoryBlob::with_value(
            r#"[{"id":"a","title":"T","updatedAt":"yesterday-ish"}]"#,
        ));
        let notes = persist.load();

        assert_eq!(notes.len(), 1);
        assert!(Utc::now().signed_duration_since(notes[0].updated_at).num_seconds() < 5);
    }

    #[test]
    fn save_failure_is_suppressed_and_keeps_prior_blob() {
        let old = vec![Note::new("Old".to_string(), "".to_string())];
        let mut blob = MemoryBlob::with_value(serde_json::to_string(&old).unwrap());
        blob.fail_writes(true);

        let mut persist = Persist::new(blob);
        persist.save(&[Note::new("New".to_string(), "".to_string())]);

        assert_eq!(persist.load(), old);
    }
}
