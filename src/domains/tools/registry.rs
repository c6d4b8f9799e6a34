//! Tool Registry - central catalog of all tools and their request rules.
//!
//! This module provides:
//! - The list of all available tool names
//! - Tool metadata for listing
//! - Lookup from tool name to backend request rule

use rmcp::model::Tool;

use crate::backend::RequestRule;

use super::definitions::{
    AddItemToMainStoreTool, AddItemToStoreTool, AddMultipleItemsToStoreTool, CreateMainStoreTool,
    CreateOrderTool, CreateStoreTool, GetAllMainStoresTool, GetAllOrdersTool, GetAllStoresTool,
    GetMainStoreOrdersTool, GetMainStoreTool, GetOrderTool, GetStoreOrdersTool, GetStoreTool,
    ProcessOrderTool, UpdateItemQuantityTool, UpdateMainStoreItemQuantityTool,
    UpdateMainStoreTool, UpdateOrderStatusTool, UpdateStoreConditionsTool,
};

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - the single source of truth for the tool catalog.
pub struct ToolRegistry;

impl ToolRegistry {
    /// Get all tool names.
    pub fn tool_names() -> Vec<&'static str> {
        vec![
            CreateStoreTool::NAME,
            GetStoreTool::NAME,
            GetAllStoresTool::NAME,
            GetStoreOrdersTool::NAME,
            AddItemToStoreTool::NAME,
            AddMultipleItemsToStoreTool::NAME,
            UpdateItemQuantityTool::NAME,
            UpdateStoreConditionsTool::NAME,
            CreateMainStoreTool::NAME,
            GetMainStoreTool::NAME,
            GetAllMainStoresTool::NAME,
            GetMainStoreOrdersTool::NAME,
            UpdateMainStoreTool::NAME,
            AddItemToMainStoreTool::NAME,
            UpdateMainStoreItemQuantityTool::NAME,
            CreateOrderTool::NAME,
            GetOrderTool::NAME,
            GetAllOrdersTool::NAME,
            UpdateOrderStatusTool::NAME,
            ProcessOrderTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            CreateStoreTool::to_tool(),
            GetStoreTool::to_tool(),
            GetAllStoresTool::to_tool(),
            GetStoreOrdersTool::to_tool(),
            AddItemToStoreTool::to_tool(),
            AddMultipleItemsToStoreTool::to_tool(),
            UpdateItemQuantityTool::to_tool(),
            UpdateStoreConditionsTool::to_tool(),
            CreateMainStoreTool::to_tool(),
            GetMainStoreTool::to_tool(),
            GetAllMainStoresTool::to_tool(),
            GetMainStoreOrdersTool::to_tool(),
            UpdateMainStoreTool::to_tool(),
            AddItemToMainStoreTool::to_tool(),
            UpdateMainStoreItemQuantityTool::to_tool(),
            CreateOrderTool::to_tool(),
            GetOrderTool::to_tool(),
            GetAllOrdersTool::to_tool(),
            UpdateOrderStatusTool::to_tool(),
            ProcessOrderTool::to_tool(),
        ]
    }

    /// Look up the backend request rule for a tool name.
    pub fn rule_for(name: &str) -> Option<RequestRule> {
        match name {
            CreateStoreTool::NAME => Some(CreateStoreTool::rule()),
            GetStoreTool::NAME => Some(GetStoreTool::rule()),
            GetAllStoresTool::NAME => Some(GetAllStoresTool::rule()),
            GetStoreOrdersTool::NAME => Some(GetStoreOrdersTool::rule()),
            AddItemToStoreTool::NAME => Some(AddItemToStoreTool::rule()),
            AddMultipleItemsToStoreTool::NAME => Some(AddMultipleItemsToStoreTool::rule()),
            UpdateItemQuantityTool::NAME => Some(UpdateItemQuantityTool::rule()),
            UpdateStoreConditionsTool::NAME => Some(UpdateStoreConditionsTool::rule()),
            CreateMainStoreTool::NAME => Some(CreateMainStoreTool::rule()),
            GetMainStoreTool::NAME => Some(GetMainStoreTool::rule()),
            GetAllMainStoresTool::NAME => Some(GetAllMainStoresTool::rule()),
            GetMainStoreOrdersTool::NAME => Some(GetMainStoreOrdersTool::rule()),
            UpdateMainStoreTool::NAME => Some(UpdateMainStoreTool::rule()),
            AddItemToMainStoreTool::NAME => Some(AddItemToMainStoreTool::rule()),
            UpdateMainStoreItemQuantityTool::NAME => Some(UpdateMainStoreItemQuantityTool::rule()),
            CreateOrderTool::NAME => Some(CreateOrderTool::rule()),
            GetOrderTool::NAME => Some(GetOrderTool::rule()),
            GetAllOrdersTool::NAME => Some(GetAllOrdersTool::rule()),
            UpdateOrderStatusTool::NAME => Some(UpdateOrderStatusTool::rule()),
            ProcessOrderTool::NAME => Some(ProcessOrderTool::rule()),
            _ => None,
        }
    }
}
