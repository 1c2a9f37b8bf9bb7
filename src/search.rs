use crate::model::Note;

/// Filters `notes` down to those matching `query`, preserving order.
///
/// The query is trimmed; an empty query returns the input unchanged. Matching
/// is a case-insensitive substring test against title and body joined with a
/// newline, so a match never spans the title/body boundary. No ranking.
pub fn filter(notes: &[Note], query: &str) -> Vec<Note> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return notes.to_vec();
    }

    notes
        .iter()
        .filter(|note| {
            let haystack = format!("{}\n{}", note.title, note.body).to_lowercase();
            haystack.contains(&query)
        })
        .cloned()
        .collect()
}
