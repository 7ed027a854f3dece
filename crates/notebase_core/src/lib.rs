//! Core domain logic for Notebase.
//!
//! Exposes a local SQLite notes database as a fixed catalog of callable
//! tools: create, list, get, update, delete and keyword search. This crate
//! is the single source of truth for the CRUD contract and its
//! error-to-text policy; transport concerns live in `notebase_mcp`.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod tools;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{Note, NoteId};
pub use repo::note_repo::{
    NotePatch, NoteRepository, RepoError, RepoResult, SqliteNoteRepository,
};
pub use tools::catalog::{tool_catalog, ToolName, ToolSpec};
pub use tools::dispatch::{ToolArguments, ToolDispatcher, ToolError, ToolResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
