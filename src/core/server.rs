//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol and dispatches tool calls to the REST backend.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool
//! group. Each tool defines a typed parameters struct, a declarative
//! [`RequestRule`](crate::backend::RequestRule) and a route constructor; the
//! ToolRouter is built dynamically in `domains/tools/router.rs`.
//! **Adding a new tool does NOT require modifying this file!**

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    handler::server::tool::{ToolCallContext, ToolRouter},
    model::*,
    service::RequestContext,
};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::config::Config;
use crate::backend::BackendClient;
use crate::core::error::Result;
use crate::domains::tools::{build_tool_router, definitions::common::error_result};

/// The main MCP server handler.
///
/// Implements the `ServerHandler` trait from rmcp. Every tool call is
/// resolved against the static tool router; an unrecognized name yields an
/// error-flagged envelope without touching the backend.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Client for the REST backend all tools call into.
    backend: Arc<BackendClient>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    pub fn new(config: Config) -> Result<Self> {
        let config = Arc::new(config);
        let backend = Arc::new(BackendClient::new(&config.backend)?);

        Ok(Self {
            tool_router: build_tool_router::<Self>(backend.clone()),
            config,
            backend,
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the backend client shared by all tools.
    pub fn backend(&self) -> &Arc<BackendClient> {
        &self.backend
    }

    /// The static tool catalog, identical across calls for the process
    /// lifetime.
    pub fn catalog(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }

    /// Check a tool name against the router. Unknown names yield the error
    /// envelope directly; no backend request is built or sent for them.
    pub fn reject_unknown(&self, name: &str) -> Option<CallToolResult> {
        if self.tool_router.has_route(name) {
            None
        } else {
            warn!("Unknown tool requested: {}", name);
            Some(error_result(&format!("Unknown tool: {}", name)))
        }
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Store management MCP server. Provides tools to create and inspect \
                 stores, main stores and orders, manage store inventory, and update \
                 store conditions. All state lives in the REST backend; every tool \
                 call performs exactly one API request."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        info!("Listing tools");
        Ok(ListToolsResult {
            tools: self.tool_router.list_all(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, context, request), fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        if let Some(envelope) = self.reject_unknown(request.name.as_ref()) {
            return Ok(envelope);
        }

        info!("Calling tool: {}", request.name);
        let context = ToolCallContext::new(self, request, context);
        self.tool_router.call(context).await
    }

    // No resources or prompts are modeled; the listings are always empty.

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListResourcesResult, McpError> {
        Ok(ListResourcesResult {
            resources: Vec::new(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListPromptsResult, McpError> {
        Ok(ListPromptsResult {
            prompts: Vec::new(),
            next_cursor: None,
            meta: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_server() -> McpServer {
        let mut config = Config::default();
        config.backend.probe_on_call = false;
        McpServer::new(config).unwrap()
    }

    #[test]
    fn test_server_identity() {
        let server = test_server();
        assert_eq!(server.name(), "store-mcp-server");
        assert_eq!(server.version(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_capabilities_tools_only() {
        let server = test_server();
        let info = server.get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_none());
        assert!(info.capabilities.prompts.is_none());
    }

    #[test]
    fn test_unknown_tool_rejected_without_backend_call() {
        // Point the backend at an address nothing listens on; rejecting an
        // unknown name must not need it.
        let mut config = Config::default();
        config.backend.base_url = "http://127.0.0.1:1/api".to_string();
        let server = McpServer::new(config).unwrap();

        let envelope = server.reject_unknown("bogus_tool").unwrap();
        assert_eq!(envelope.is_error, Some(true));
        match &envelope.content[0].raw {
            RawContent::Text(text) => {
                assert!(text.text.starts_with("Error: "));
                assert!(text.text.contains("Unknown tool: bogus_tool"));
            }
            other => panic!("expected text content, got {other:?}"),
        }
    }

    #[test]
    fn test_known_tool_names_pass_the_gate() {
        let server = test_server();
        assert!(server.reject_unknown("get_store").is_none());
        assert!(server.reject_unknown("process_order").is_none());
    }

    #[test]
    fn test_catalog_is_stable() {
        let server = test_server();
        let first: Vec<_> = server.catalog().iter().map(|t| t.name.clone()).collect();
        let second: Vec<_> = server.catalog().iter().map(|t| t.name.clone()).collect();
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }
}
