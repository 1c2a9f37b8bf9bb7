use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::generate_id;

/// Title given to notes saved without one.
pub const UNTITLED: &str = "Untitled";

/// A persisted note. The id is assigned at creation and never changes;
/// `updated_at` is refreshed on every save, creation included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub title: String,
    pub body: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Builds a fresh note stamped now. Callers pass already-trimmed text;
    /// the store is responsible for the [`UNTITLED`] fallback.
    pub fn new(title: String, body: String) -> Self {
        Self {
            id: generate_id(),
            title,
            body,
            updated_at: Utc::now(),
        }
    }
}
