//! Static declaration of the callable tool set.
//!
//! # Responsibility
//! - Name the six note operations and describe their input contracts as
//!   JSON schemas.
//!
//! # Invariants
//! - Pure declaration, no side effects; the catalog never changes at
//!   runtime.
//! - Schema `required` lists name exactly the arguments the dispatcher
//!   refuses to run without.

use serde_json::{json, Value};

pub const CREATE_NOTE: &str = "create_note";
pub const GET_ALL_NOTES: &str = "get_all_notes";
pub const GET_NOTE_BY_ID: &str = "get_note_by_id";
pub const UPDATE_NOTE: &str = "update_note";
pub const DELETE_NOTE: &str = "delete_note";
pub const SEARCH_NOTES: &str = "search_notes";

/// Known tool names, parsed once at the dispatch boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolName {
    CreateNote,
    GetAllNotes,
    GetNoteById,
    UpdateNote,
    DeleteNote,
    SearchNotes,
}

impl ToolName {
    /// Maps a wire-level tool name to its operation, `None` for unknown
    /// names.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            CREATE_NOTE => Some(Self::CreateNote),
            GET_ALL_NOTES => Some(Self::GetAllNotes),
            GET_NOTE_BY_ID => Some(Self::GetNoteById),
            UPDATE_NOTE => Some(Self::UpdateNote),
            DELETE_NOTE => Some(Self::DeleteNote),
            SEARCH_NOTES => Some(Self::SearchNotes),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::CreateNote => CREATE_NOTE,
            Self::GetAllNotes => GET_ALL_NOTES,
            Self::GetNoteById => GET_NOTE_BY_ID,
            Self::UpdateNote => UPDATE_NOTE,
            Self::DeleteNote => DELETE_NOTE,
            Self::SearchNotes => SEARCH_NOTES,
        }
    }
}

/// One declared tool: name, human description and JSON input schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Value,
}

/// Returns the full tool catalog in declaration order.
pub fn tool_catalog() -> Vec<ToolSpec> {
    vec![
        ToolSpec {
            name: CREATE_NOTE,
            description: "Create a new note in the database",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "title": {
                        "type": "string",
                        "description": "Title of the note"
                    },
                    "content": {
                        "type": "string",
                        "description": "Content/body of the note"
                    }
                },
                "required": ["title", "content"]
            }),
        },
        ToolSpec {
            name: GET_ALL_NOTES,
            description: "Retrieve all notes from the database",
            input_schema: json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        },
        ToolSpec {
            name: GET_NOTE_BY_ID,
            description: "Get a specific note by its ID",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "id": {
                        "type": "integer",
                        "description": "ID of the note to retrieve"
                    }
                },
                "required": ["id"]
            }),
        },
        ToolSpec {
            name: UPDATE_NOTE,
            description: "Update an existing note",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "id": {
                        "type": "integer",
                        "description": "ID of the note to update"
                    },
                    "title": {
                        "type": "string",
                        "description": "New title (optional)"
                    },
                    "content": {
                        "type": "string",
                        "description": "New content (optional)"
                    }
                },
                "required": ["id"]
            }),
        },
        ToolSpec {
            name: DELETE_NOTE,
            description: "Delete a note by ID",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "id": {
                        "type": "integer",
                        "description": "ID of the note to delete"
                    }
                },
                "required": ["id"]
            }),
        },
        ToolSpec {
            name: SEARCH_NOTES,
            description: "Search notes by keyword in title or content",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "keyword": {
                        "type": "string",
                        "description": "Keyword to search for"
                    }
                },
                "required": ["keyword"]
            }),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_declares_six_tools_with_object_schemas() {
        let catalog = tool_catalog();
        assert_eq!(catalog.len(), 6);
        for spec in &catalog {
            assert!(spec.input_schema.is_object(), "{} schema", spec.name);
            assert_eq!(spec.input_schema["type"], "object");
            assert!(!spec.description.is_empty());
        }
    }

    #[test]
    fn every_catalog_name_round_trips_through_tool_name() {
        for spec in tool_catalog() {
            let parsed = ToolName::parse(spec.name).expect("catalog name must parse");
            assert_eq!(parsed.as_str(), spec.name);
        }
        assert_eq!(ToolName::parse("drop_all_tables"), None);
    }

    #[test]
    fn required_arguments_match_the_crud_contract() {
        let required = |name: &str| -> Vec<String> {
            let catalog = tool_catalog();
            let spec = catalog
                .iter()
                .find(|spec| spec.name == name)
                .expect("tool in catalog");
            spec.input_schema["required"]
                .as_array()
                .expect("required array")
                .iter()
                .map(|value| value.as_str().expect("string entry").to_string())
                .collect()
        };

        assert_eq!(required(CREATE_NOTE), ["title", "content"]);
        assert!(required(GET_ALL_NOTES).is_empty());
        assert_eq!(required(GET_NOTE_BY_ID), ["id"]);
        assert_eq!(required(UPDATE_NOTE), ["id"]);
        assert_eq!(required(DELETE_NOTE), ["id"]);
        assert_eq!(required(SEARCH_NOTES), ["keyword"]);
    }
}
