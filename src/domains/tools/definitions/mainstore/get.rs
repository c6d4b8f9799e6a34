//! Main store lookup tools.

use std::sync::Arc;

use rmcp::{handler::server::tool::ToolRoute, model::Tool};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::super::common::{backend_route, tool_model};
use crate::backend::{BackendClient, RequestRule};

/// Parameters for fetching a single main store.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GetMainStoreParams {
    #[schemars(description = "ID of the main store to fetch")]
    pub store_id: String,
}

/// Parameters for listing all main stores (none).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GetAllMainStoresParams {}

/// Parameters for listing the orders a main store fulfills.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GetMainStoreOrdersParams {
    #[schemars(description = "ID of the main store whose orders to list")]
    pub main_store_id: String,
}

/// Fetch a single main store by id.
pub struct GetMainStoreTool;

impl GetMainStoreTool {
    pub const NAME: &'static str = "get_main_store";

    pub const DESCRIPTION: &'static str =
        "Get a main store by its id, including its inventory and condition information.";

    pub fn rule() -> RequestRule {
        RequestRule::get("/mainstore/{store_id}")
    }

    pub fn to_tool() -> Tool {
        tool_model::<GetMainStoreParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<BackendClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        backend_route::<GetMainStoreParams, S>(Self::to_tool(), Self::rule(), client)
    }
}

/// List all main stores.
pub struct GetAllMainStoresTool;

impl GetAllMainStoresTool {
    pub const NAME: &'static str = "get_all_main_stores";

    pub const DESCRIPTION: &'static str = "Get all main stores with their inventories.";

    pub fn rule() -> RequestRule {
        RequestRule::get("/mainstore/")
    }

    pub fn to_tool() -> Tool {
        tool_model::<GetAllMainStoresParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<BackendClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        backend_route::<GetAllMainStoresParams, S>(Self::to_tool(), Self::rule(), client)
    }
}

/// List all orders fulfilled by a main store.
pub struct GetMainStoreOrdersTool;

impl GetMainStoreOrdersTool {
    pub const NAME: &'static str = "get_main_store_orders";

    pub const DESCRIPTION: &'static str = "Get all orders assigned to a specific main store.";

    pub fn rule() -> RequestRule {
        RequestRule::get("/mainstore/{main_store_id}/orders/")
    }

    pub fn to_tool() -> Tool {
        tool_model::<GetMainStoreOrdersParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<BackendClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        backend_route::<GetMainStoreOrdersParams, S>(Self::to_tool(), Self::rule(), client)
    }
}
