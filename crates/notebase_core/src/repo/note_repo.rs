//! Note repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD and keyword-search persistence APIs over the `notes` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - List and search results are ordered `created_at DESC, id DESC`.
//!   `created_at` has one-second resolution, so the `id` tiebreaker keeps
//!   "newest first" deterministic for rows inserted within the same second.
//! - `update_note` and `delete_note` report `NotFound` when no row changed.

use crate::db::DbError;
use crate::model::note::{Note, NoteId};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const NOTE_SELECT_SQL: &str = "SELECT id, title, content, created_at FROM notes";
const NOTE_ORDER_SQL: &str = " ORDER BY created_at DESC, id DESC";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for note persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound(NoteId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "note not found: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Partial update payload for [`NoteRepository::update_note`].
///
/// A `None` field is left untouched. Callers own the policy of mapping
/// caller-supplied empty strings to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl NotePatch {
    /// True when the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}

/// Repository interface for note CRUD and search operations.
pub trait NoteRepository {
    /// Inserts a note and returns the store-assigned id.
    fn insert_note(&self, title: &str, content: &str) -> RepoResult<NoteId>;
    /// Gets one note by exact id.
    fn get_note(&self, id: NoteId) -> RepoResult<Option<Note>>;
    /// Lists every note, newest first.
    fn list_notes(&self) -> RepoResult<Vec<Note>>;
    /// Applies the supplied fields to an existing note.
    fn update_note(&self, id: NoteId, patch: &NotePatch) -> RepoResult<()>;
    /// Removes the note with the given id.
    fn delete_note(&self, id: NoteId) -> RepoResult<()>;
    /// Returns notes whose title or content contains `keyword`, newest first.
    fn search_notes(&self, keyword: &str) -> RepoResult<Vec<Note>>;
}

/// SQLite-backed note repository borrowing a migrated connection.
pub struct SqliteNoteRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteNoteRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl NoteRepository for SqliteNoteRepository<'_> {
    fn insert_note(&self, title: &str, content: &str) -> RepoResult<NoteId> {
        self.conn.execute(
            "INSERT INTO notes (title, content) VALUES (?1, ?2);",
            params![title, content],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn get_note(&self, id: NoteId) -> RepoResult<Option<Note>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{NOTE_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_note_row(row)?));
        }

        Ok(None)
    }

    fn list_notes(&self) -> RepoResult<Vec<Note>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{NOTE_SELECT_SQL}{NOTE_ORDER_SQL};"))?;
        let mut rows = stmt.query([])?;
        collect_notes(&mut rows)
    }

    fn update_note(&self, id: NoteId, patch: &NotePatch) -> RepoResult<()> {
        let mut assignments = Vec::new();
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(title) = patch.title.as_deref() {
            assignments.push("title = ?");
            bind_values.push(Value::Text(title.to_string()));
        }
        if let Some(content) = patch.content.as_deref() {
            assignments.push("content = ?");
            bind_values.push(Value::Text(content.to_string()));
        }

        // Callers reject empty patches before reaching the repo; treat a
        // stray one as a no-op rather than issuing `UPDATE notes SET`.
        if assignments.is_empty() {
            return Ok(());
        }

        let sql = format!("UPDATE notes SET {} WHERE id = ?;", assignments.join(", "));
        bind_values.push(Value::Integer(id));

        let changed = self.conn.execute(&sql, params_from_iter(bind_values))?;
        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    fn delete_note(&self, id: NoteId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM notes WHERE id = ?1;", params![id])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    fn search_notes(&self, keyword: &str) -> RepoResult<Vec<Note>> {
        let pattern = format!("%{keyword}%");
        let mut stmt = self.conn.prepare(&format!(
            "{NOTE_SELECT_SQL} WHERE title LIKE ?1 OR content LIKE ?1{NOTE_ORDER_SQL};"
        ))?;
        let mut rows = stmt.query(params![pattern])?;
        collect_notes(&mut rows)
    }
}

fn collect_notes(rows: &mut rusqlite::Rows<'_>) -> RepoResult<Vec<Note>> {
    let mut notes = Vec::new();
    while let Some(row) = rows.next()? {
        notes.push(parse_note_row(row)?);
    }
    Ok(notes)
}

fn parse_note_row(row: &Row<'_>) -> RepoResult<Note> {
    Ok(Note {
        id: row.get("id")?,
        title: row.get("title")?,
        content: row.get("content")?,
        created_at: row.get("created_at")?,
    })
}
