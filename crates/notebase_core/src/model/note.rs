//! Note domain record.
//!
//! # Responsibility
//! - Define the single persisted entity of the notes store.
//!
//! # Invariants
//! - `id` is assigned by SQLite on insert and never reused.
//! - `title` and `content` are never null for a stored note.
//! - `created_at` is set once by storage (`CURRENT_TIMESTAMP`) and is
//!   immutable afterwards.

use serde::{Deserialize, Serialize};

/// Stable row identifier assigned by the store.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = i64;

/// Canonical persisted note record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Auto-incrementing primary key, monotonically increasing.
    pub id: NoteId,
    /// Note title, required on creation.
    pub title: String,
    /// Note body, required on creation.
    pub content: String,
    /// Creation timestamp as stored (`YYYY-MM-DD HH:MM:SS`).
    pub created_at: String,
}
