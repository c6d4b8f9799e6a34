//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! Each tool knows how to create its own route; this module only wires
//! them together with the shared backend client.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::backend::BackendClient;

use super::definitions::{
    AddItemToMainStoreTool, AddItemToStoreTool, AddMultipleItemsToStoreTool, CreateMainStoreTool,
    CreateOrderTool, CreateStoreTool, GetAllMainStoresTool, GetAllOrdersTool, GetAllStoresTool,
    GetMainStoreOrdersTool, GetMainStoreTool, GetOrderTool, GetStoreOrdersTool, GetStoreTool,
    ProcessOrderTool, UpdateItemQuantityTool, UpdateMainStoreItemQuantityTool,
    UpdateMainStoreTool, UpdateOrderStatusTool, UpdateStoreConditionsTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(client: Arc<BackendClient>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(CreateStoreTool::create_route(client.clone()))
        .with_route(GetStoreTool::create_route(client.clone()))
        .with_route(GetAllStoresTool::create_route(client.clone()))
        .with_route(GetStoreOrdersTool::create_route(client.clone()))
        .with_route(AddItemToStoreTool::create_route(client.clone()))
        .with_route(AddMultipleItemsToStoreTool::create_route(client.clone()))
        .with_route(UpdateItemQuantityTool::create_route(client.clone()))
        .with_route(UpdateStoreConditionsTool::create_route(client.clone()))
        .with_route(CreateMainStoreTool::create_route(client.clone()))
        .with_route(GetMainStoreTool::create_route(client.clone()))
        .with_route(GetAllMainStoresTool::create_route(client.clone()))
        .with_route(GetMainStoreOrdersTool::create_route(client.clone()))
        .with_route(UpdateMainStoreTool::create_route(client.clone()))
        .with_route(AddItemToMainStoreTool::create_route(client.clone()))
        .with_route(UpdateMainStoreItemQuantityTool::create_route(client.clone()))
        .with_route(CreateOrderTool::create_route(client.clone()))
        .with_route(GetOrderTool::create_route(client.clone()))
        .with_route(GetAllOrdersTool::create_route(client.clone()))
        .with_route(UpdateOrderStatusTool::create_route(client.clone()))
        .with_route(ProcessOrderTool::create_route(client))
}
