//! MCP handler bridging the tool host protocol to the core dispatcher.
//!
//! # Responsibility
//! - Expose the core tool catalog through `tools/list`.
//! - Forward `tools/call` requests to the dispatcher and wrap its text
//!   segments as MCP content.
//!
//! # Invariants
//! - Tool execution failures never surface as protocol-level faults; the
//!   dispatcher collapses them to text before this layer sees them.

use notebase_core::{tool_catalog, ToolDispatcher, ToolSpec};
use rmcp::model::{
    CallToolRequestParam, CallToolResult, Content, Implementation, ListToolsResult,
    PaginatedRequestParam, ProtocolVersion, ServerCapabilities, ServerInfo, Tool,
};
use rmcp::service::RequestContext;
use rmcp::ErrorData as McpError;
use rmcp::{RoleServer, ServerHandler};
use std::borrow::Cow;
use std::sync::Arc;

/// Stdio MCP server over the note tool dispatcher.
#[derive(Clone)]
pub struct NoteToolServer {
    dispatcher: Arc<ToolDispatcher>,
}

impl NoteToolServer {
    pub fn new(dispatcher: ToolDispatcher) -> Self {
        Self {
            dispatcher: Arc::new(dispatcher),
        }
    }
}

impl ServerHandler for NoteToolServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "notebase".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(
                "Persistent notes database. Create, list, fetch, update, delete \
                 and keyword-search notes; every tool returns a plain-text result, \
                 errors included."
                    .to_string(),
            ),
        }
    }

    async fn list_tools(
        &self,
        _pagination: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        let tools = tool_catalog()
            .into_iter()
            .map(to_tool)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ListToolsResult {
            tools,
            meta: Default::default(),
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let arguments = request.arguments.unwrap_or_default();
        let blocks = self.dispatcher.call(request.name.as_ref(), &arguments);
        Ok(to_call_result(blocks))
    }
}

/// Maps one core catalog entry onto the wire-level tool declaration.
fn to_tool(spec: ToolSpec) -> Result<Tool, McpError> {
    let schema = spec.input_schema.as_object().cloned().ok_or_else(|| {
        McpError::internal_error(format!("schema for {} is not an object", spec.name), None)
    })?;

    Ok(Tool {
        name: Cow::Borrowed(spec.name),
        title: None,
        description: Some(Cow::Borrowed(spec.description)),
        input_schema: Arc::new(schema),
        output_schema: None,
        annotations: None,
        icons: None,
        meta: Default::default(),
    })
}

fn to_call_result(blocks: Vec<String>) -> CallToolResult {
    CallToolResult::success(blocks.into_iter().map(Content::text).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_catalog_entry_maps_to_a_wire_tool() {
        let specs = tool_catalog();
        let tools: Vec<Tool> = specs
            .iter()
            .cloned()
            .map(|spec| to_tool(spec).expect("catalog schemas are objects"))
            .collect();

        assert_eq!(tools.len(), specs.len());
        for (tool, spec) in tools.iter().zip(&specs) {
            assert_eq!(tool.name.as_ref(), spec.name);
            assert_eq!(tool.description.as_deref(), Some(spec.description));
            assert_eq!(tool.input_schema.get("type").and_then(|v| v.as_str()), Some("object"));
        }
    }

    #[test]
    fn text_blocks_become_successful_call_results() {
        let result = to_call_result(vec!["one".to_string(), "two".to_string()]);
        assert_ne!(result.is_error, Some(true));

        let wire = serde_json::to_value(&result).expect("result serializes");
        let content = wire["content"].as_array().expect("content array");
        assert_eq!(content.len(), 2);
        assert_eq!(content[0]["text"], "one");
    }
}
