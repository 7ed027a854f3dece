//! Text rendering for tool responses.
//!
//! # Responsibility
//! - Produce the human-readable payloads returned to the tool host.
//!
//! # Invariants
//! - Response wording is part of the external contract; callers pattern
//!   match on these strings, so changes here are breaking changes.

use crate::model::note::{Note, NoteId};

/// Characters of note content shown in search results.
const SEARCH_PREVIEW_CHARS: usize = 100;

/// Visual divider between note blocks in multi-note listings.
fn divider() -> String {
    "-".repeat(50)
}

pub fn note_created(id: NoteId, title: &str) -> String {
    format!("Note created successfully! ID: {id}\nTitle: {title}")
}

pub fn note_updated(id: NoteId) -> String {
    format!("Note {id} updated successfully!")
}

pub fn note_deleted(id: NoteId) -> String {
    format!("Note {id} deleted successfully!")
}

pub fn note_not_found(id: NoteId) -> String {
    format!("Note with ID {id} not found.")
}

pub const NO_NOTES: &str = "No notes found in database.";

pub const NO_FIELDS_TO_UPDATE: &str = "No fields to update. Provide title or content.";

pub fn no_search_matches(keyword: &str) -> String {
    format!("No notes found matching '{keyword}'.")
}

/// Full field listing for a single note.
pub fn note_details(note: &Note) -> String {
    format!(
        "Note Details:\n\nID: {}\nTitle: {}\nContent: {}\nCreated: {}\n",
        note.id, note.title, note.content, note.created_at
    )
}

/// One block per note with full content, newest first as supplied.
pub fn all_notes(notes: &[Note]) -> String {
    let mut out = String::from("All Notes:\n\n");
    for note in notes {
        out.push_str(&format!(
            "ID: {}\nTitle: {}\nContent: {}\nCreated: {}\n{}\n",
            note.id,
            note.title,
            note.content,
            note.created_at,
            divider()
        ));
    }
    out
}

/// One block per match with content truncated to a fixed-length preview.
pub fn search_results(keyword: &str, notes: &[Note]) -> String {
    let mut out = format!("Search Results for '{keyword}':\n\n");
    for note in notes {
        out.push_str(&format!(
            "ID: {}\nTitle: {}\nContent: {}\nCreated: {}\n{}\n",
            note.id,
            note.title,
            content_preview(&note.content),
            note.created_at,
            divider()
        ));
    }
    out
}

/// First [`SEARCH_PREVIEW_CHARS`] characters plus an unconditional ellipsis
/// marker, matching the original contract even for short content.
fn content_preview(content: &str) -> String {
    let mut preview: String = content.chars().take(SEARCH_PREVIEW_CHARS).collect();
    preview.push_str("...");
    preview
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(id: NoteId, title: &str, content: &str) -> Note {
        Note {
            id,
            title: title.to_string(),
            content: content.to_string(),
            created_at: "2026-08-29 12:00:00".to_string(),
        }
    }

    #[test]
    fn preview_truncates_long_content_and_keeps_ellipsis_for_short() {
        let long = "x".repeat(250);
        let preview = content_preview(&long);
        assert_eq!(preview.chars().count(), 103);
        assert!(preview.ends_with("..."));

        assert_eq!(content_preview("short"), "short...");
    }

    #[test]
    fn all_notes_separates_blocks_with_fifty_dash_divider() {
        let rendered = all_notes(&[note(1, "a", "b"), note(2, "c", "d")]);
        assert!(rendered.starts_with("All Notes:\n\n"));
        assert_eq!(rendered.matches(&"-".repeat(50)).count(), 2);
        assert!(rendered.contains("ID: 1\nTitle: a\nContent: b\n"));
    }

    #[test]
    fn detail_and_confirmation_wording_is_stable() {
        assert_eq!(
            note_created(7, "Title"),
            "Note created successfully! ID: 7\nTitle: Title"
        );
        assert_eq!(note_updated(7), "Note 7 updated successfully!");
        assert_eq!(note_deleted(7), "Note 7 deleted successfully!");
        assert_eq!(note_not_found(7), "Note with ID 7 not found.");
        assert_eq!(no_search_matches("MCP"), "No notes found matching 'MCP'.");

        let details = note_details(&note(3, "t", "c"));
        assert!(details.starts_with("Note Details:\n\n"));
        assert!(details.contains("Created: 2026-08-29 12:00:00\n"));
    }
}
