//! Store lookup tools.
//!
//! Read-only tools: fetch a single store, list all stores, and list the
//! orders a store has placed.

use std::sync::Arc;

use rmcp::{handler::server::tool::ToolRoute, model::Tool};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::super::common::{backend_route, tool_model};
use crate::backend::{BackendClient, RequestRule};

/// Parameters for fetching a single store.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GetStoreParams {
    #[schemars(description = "ID of the store to fetch")]
    pub store_id: String,
}

/// Parameters for listing all stores (none).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GetAllStoresParams {}

/// Parameters for listing a store's orders.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GetStoreOrdersParams {
    #[schemars(description = "ID of the store whose orders to list")]
    pub store_id: String,
}

/// Fetch a single store by id.
pub struct GetStoreTool;

impl GetStoreTool {
    pub const NAME: &'static str = "get_store";

    pub const DESCRIPTION: &'static str =
        "Get a store by its id, including its inventory and condition information.";

    pub fn rule() -> RequestRule {
        RequestRule::get("/stores/{store_id}")
    }

    pub fn to_tool() -> Tool {
        tool_model::<GetStoreParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<BackendClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        backend_route::<GetStoreParams, S>(Self::to_tool(), Self::rule(), client)
    }
}

/// List all stores.
pub struct GetAllStoresTool;

impl GetAllStoresTool {
    pub const NAME: &'static str = "get_all_stores";

    pub const DESCRIPTION: &'static str = "Get all stores with their inventories.";

    pub fn rule() -> RequestRule {
        RequestRule::get("/stores/")
    }

    pub fn to_tool() -> Tool {
        tool_model::<GetAllStoresParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<BackendClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        backend_route::<GetAllStoresParams, S>(Self::to_tool(), Self::rule(), client)
    }
}

/// List all orders placed by a store.
pub struct GetStoreOrdersTool;

impl GetStoreOrdersTool {
    pub const NAME: &'static str = "get_store_orders";

    pub const DESCRIPTION: &'static str = "Get all orders placed by a specific store.";

    pub fn rule() -> RequestRule {
        RequestRule::get("/stores/{store_id}/orders/")
    }

    pub fn to_tool() -> Tool {
        tool_model::<GetStoreOrdersParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<BackendClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        backend_route::<GetStoreOrdersParams, S>(Self::to_tool(), Self::rule(), client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{BodySpec, Method};
    use serde_json::json;

    #[test]
    fn test_get_store_rule() {
        let rule = GetStoreTool::rule();
        assert_eq!(rule.method, Method::Get);
        assert_eq!(rule.path, "/stores/{store_id}");
        assert_eq!(rule.body, BodySpec::None);
    }

    #[test]
    fn test_get_all_stores_takes_no_arguments() {
        let params: GetAllStoresParams = serde_json::from_value(json!({})).unwrap();
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn test_store_orders_rule() {
        let rule = GetStoreOrdersTool::rule();
        assert_eq!(rule.method, Method::Get);
        assert_eq!(rule.path, "/stores/{store_id}/orders/");
    }
}
