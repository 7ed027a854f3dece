//! CRUD tool dispatcher.
//!
//! # Responsibility
//! - Map a tool name plus JSON argument map onto one store operation.
//! - Collapse every failure into the caller-facing text convention.
//!
//! # Invariants
//! - Each call opens its own scoped connection and releases it before
//!   returning, on success and error paths alike.
//! - [`ToolDispatcher::call`] never fails: unknown tools yield
//!   `Unknown tool: {name}` and all other errors `Error: {message}`, so the
//!   host session stays alive on caller mistakes and store faults.

use crate::db::{open_db, DbError};
use crate::model::note::NoteId;
use crate::repo::note_repo::{NotePatch, NoteRepository, RepoError, SqliteNoteRepository};
use crate::tools::catalog::ToolName;
use crate::tools::format;
use log::{error, info};
use serde_json::{Map, Value};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// JSON argument map as delivered by the tool host.
pub type ToolArguments = Map<String, Value>;

pub type ToolResult<T> = Result<T, ToolError>;

/// Typed failure for tool execution, collapsed to text at the boundary.
#[derive(Debug)]
pub enum ToolError {
    /// Name not present in the catalog.
    UnknownTool(String),
    /// Schema-required argument absent from the call.
    MissingArgument {
        tool: &'static str,
        argument: &'static str,
    },
    /// Argument present but of the wrong JSON type.
    InvalidArgument {
        tool: &'static str,
        argument: &'static str,
        expected: &'static str,
    },
    /// Store bootstrap or statement failure.
    Db(DbError),
    /// Persistence failure other than not-found.
    Repo(RepoError),
}

impl Display for ToolError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownTool(name) => write!(f, "unknown tool `{name}`"),
            Self::MissingArgument { tool, argument } => {
                write!(f, "{tool} requires argument `{argument}`")
            }
            Self::InvalidArgument {
                tool,
                argument,
                expected,
            } => write!(f, "{tool} argument `{argument}` must be {expected}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ToolError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for ToolError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<RepoError> for ToolError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Stateless executor for catalog operations.
///
/// Holds only the store location; every invocation is independent and the
/// store itself is the only persistent state.
pub struct ToolDispatcher {
    db_path: PathBuf,
}

impl ToolDispatcher {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    /// Executes one tool call and returns its text segments.
    ///
    /// This is the outermost adapter of the error policy: callers needing
    /// programmatic error handling must pattern match the returned text.
    pub fn call(&self, name: &str, arguments: &ToolArguments) -> Vec<String> {
        match self.execute(name, arguments) {
            Ok(blocks) => blocks,
            Err(ToolError::UnknownTool(tool)) => {
                info!("event=tool_call module=tools status=unknown tool={tool}");
                vec![format!("Unknown tool: {tool}")]
            }
            Err(err) => {
                error!("event=tool_call module=tools status=error tool={name} error={err}");
                vec![format!("Error: {err}")]
            }
        }
    }

    fn execute(&self, name: &str, arguments: &ToolArguments) -> ToolResult<Vec<String>> {
        let Some(tool) = ToolName::parse(name) else {
            return Err(ToolError::UnknownTool(name.to_string()));
        };

        // Scoped acquisition: the connection lives exactly as long as this
        // call frame and is released on every exit path.
        let conn = open_db(&self.db_path)?;
        let repo = SqliteNoteRepository::new(&conn);

        match tool {
            ToolName::CreateNote => create_note(&repo, arguments),
            ToolName::GetAllNotes => get_all_notes(&repo),
            ToolName::GetNoteById => get_note_by_id(&repo, arguments),
            ToolName::UpdateNote => update_note(&repo, arguments),
            ToolName::DeleteNote => delete_note(&repo, arguments),
            ToolName::SearchNotes => search_notes(&repo, arguments),
        }
    }
}

fn create_note(repo: &impl NoteRepository, arguments: &ToolArguments) -> ToolResult<Vec<String>> {
    let title = required_str(arguments, ToolName::CreateNote, "title")?;
    let content = required_str(arguments, ToolName::CreateNote, "content")?;

    let id = repo.insert_note(title, content)?;
    Ok(vec![format::note_created(id, title)])
}

fn get_all_notes(repo: &impl NoteRepository) -> ToolResult<Vec<String>> {
    let notes = repo.list_notes()?;
    if notes.is_empty() {
        return Ok(vec![format::NO_NOTES.to_string()]);
    }

    Ok(vec![format::all_notes(&notes)])
}

fn get_note_by_id(repo: &impl NoteRepository, arguments: &ToolArguments) -> ToolResult<Vec<String>> {
    let id = required_id(arguments, ToolName::GetNoteById)?;

    match repo.get_note(id)? {
        Some(note) => Ok(vec![format::note_details(&note)]),
        None => Ok(vec![format::note_not_found(id)]),
    }
}

fn update_note(repo: &impl NoteRepository, arguments: &ToolArguments) -> ToolResult<Vec<String>> {
    let id = required_id(arguments, ToolName::UpdateNote)?;
    let patch = NotePatch {
        title: optional_field(arguments, ToolName::UpdateNote, "title")?,
        content: optional_field(arguments, ToolName::UpdateNote, "content")?,
    };

    if patch.is_empty() {
        return Ok(vec![format::NO_FIELDS_TO_UPDATE.to_string()]);
    }

    match repo.update_note(id, &patch) {
        Ok(()) => Ok(vec![format::note_updated(id)]),
        Err(RepoError::NotFound(_)) => Ok(vec![format::note_not_found(id)]),
        Err(err) => Err(err.into()),
    }
}

fn delete_note(repo: &impl NoteRepository, arguments: &ToolArguments) -> ToolResult<Vec<String>> {
    let id = required_id(arguments, ToolName::DeleteNote)?;

    match repo.delete_note(id) {
        Ok(()) => Ok(vec![format::note_deleted(id)]),
        Err(RepoError::NotFound(_)) => Ok(vec![format::note_not_found(id)]),
        Err(err) => Err(err.into()),
    }
}

fn search_notes(repo: &impl NoteRepository, arguments: &ToolArguments) -> ToolResult<Vec<String>> {
    let keyword = required_str(arguments, ToolName::SearchNotes, "keyword")?;

    let notes = repo.search_notes(keyword)?;
    if notes.is_empty() {
        return Ok(vec![format::no_search_matches(keyword)]);
    }

    Ok(vec![format::search_results(keyword, &notes)])
}

fn required_str<'args>(
    arguments: &'args ToolArguments,
    tool: ToolName,
    argument: &'static str,
) -> ToolResult<&'args str> {
    match arguments.get(argument) {
        Some(Value::String(value)) => Ok(value),
        Some(Value::Null) | None => Err(ToolError::MissingArgument {
            tool: tool.as_str(),
            argument,
        }),
        Some(_) => Err(ToolError::InvalidArgument {
            tool: tool.as_str(),
            argument,
            expected: "a string",
        }),
    }
}

fn required_id(arguments: &ToolArguments, tool: ToolName) -> ToolResult<NoteId> {
    match arguments.get("id") {
        Some(value) => value.as_i64().ok_or(ToolError::InvalidArgument {
            tool: tool.as_str(),
            argument: "id",
            expected: "an integer",
        }),
        None => Err(ToolError::MissingArgument {
            tool: tool.as_str(),
            argument: "id",
        }),
    }
}

/// Optional update field with falsy-value semantics: an absent, null or
/// empty-string value all mean "leave unchanged". Clearing a field to the
/// empty string is unsupported by design, not by oversight.
fn optional_field(
    arguments: &ToolArguments,
    tool: ToolName,
    argument: &'static str,
) -> ToolResult<Option<String>> {
    match arguments.get(argument) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) if value.is_empty() => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(_) => Err(ToolError::InvalidArgument {
            tool: tool.as_str(),
            argument,
            expected: "a string",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn args(value: Value) -> ToolArguments {
        value.as_object().expect("object literal").clone()
    }

    #[test]
    fn required_str_distinguishes_missing_from_wrong_type() {
        let empty = ToolArguments::new();
        let missing = required_str(&empty, ToolName::CreateNote, "title");
        assert!(matches!(missing, Err(ToolError::MissingArgument { .. })));

        let wrong = args(json!({ "title": 12 }));
        let invalid = required_str(&wrong, ToolName::CreateNote, "title");
        assert!(matches!(invalid, Err(ToolError::InvalidArgument { .. })));

        let blank = args(json!({ "title": "" }));
        assert_eq!(
            required_str(&blank, ToolName::CreateNote, "title").unwrap(),
            ""
        );
    }

    #[test]
    fn required_id_rejects_non_integer_values() {
        let float = args(json!({ "id": 1.5 }));
        assert!(matches!(
            required_id(&float, ToolName::DeleteNote),
            Err(ToolError::InvalidArgument { .. })
        ));

        let text = args(json!({ "id": "1" }));
        assert!(matches!(
            required_id(&text, ToolName::DeleteNote),
            Err(ToolError::InvalidArgument { .. })
        ));

        let ok = args(json!({ "id": 42 }));
        assert_eq!(required_id(&ok, ToolName::DeleteNote).unwrap(), 42);
    }

    #[test]
    fn optional_field_treats_empty_string_as_not_supplied() {
        let blank = args(json!({ "title": "" }));
        assert_eq!(
            optional_field(&blank, ToolName::UpdateNote, "title").unwrap(),
            None
        );

        let absent = ToolArguments::new();
        assert_eq!(
            optional_field(&absent, ToolName::UpdateNote, "title").unwrap(),
            None
        );

        let set = args(json!({ "title": "new" }));
        assert_eq!(
            optional_field(&set, ToolName::UpdateNote, "title").unwrap(),
            Some("new".to_string())
        );
    }
}
