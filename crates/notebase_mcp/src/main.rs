//! MCP server entry point.
//!
//! # Responsibility
//! - Bootstrap logging, ensure the store schema exists, then serve the
//!   note tools over stdio until the host closes the stream.
//!
//! # Invariants
//! - The schema is ready before the first tool call is accepted.
//! - stdout carries only protocol frames; all logging goes to stderr.

mod server;

use notebase_core::db::open_db;
use notebase_core::{default_log_level, init_logging, tool_catalog, ToolDispatcher};
use rmcp::transport::stdio;
use rmcp::ServiceExt;
use server::NoteToolServer;

/// Fixed store location; the core consumes no CLI flags or environment.
const DB_FILE: &str = "notebase.db";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(default_log_level())?;

    // Readiness gate: open once to create the schema idempotently before
    // any tool call can reach the store.
    open_db(DB_FILE)?;
    log::info!(
        "event=server_ready module=mcp status=ok db_path={DB_FILE} tools={}",
        tool_catalog().len()
    );

    let handler = NoteToolServer::new(ToolDispatcher::new(DB_FILE));
    let service = handler.serve(stdio()).await?;
    log::info!("event=server_listening module=mcp status=ok transport=stdio");

    service.waiting().await?;
    log::info!("event=server_shutdown module=mcp status=ok");
    Ok(())
}
