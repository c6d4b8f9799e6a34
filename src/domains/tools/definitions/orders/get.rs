//! Order lookup tools.

use std::sync::Arc;

use rmcp::{handler::server::tool::ToolRoute, model::Tool};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::super::common::{backend_route, tool_model};
use crate::backend::{BackendClient, RequestRule};

/// Parameters for fetching a single order.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GetOrderParams {
    #[schemars(description = "ID of the order to fetch")]
    pub order_id: String,
}

/// Parameters for listing all orders (none).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GetAllOrdersParams {}

/// Fetch a single order by id.
pub struct GetOrderTool;

impl GetOrderTool {
    pub const NAME: &'static str = "get_order";

    pub const DESCRIPTION: &'static str =
        "Get an order by its id, including its items, status and history.";

    pub fn rule() -> RequestRule {
        RequestRule::get("/orders/{order_id}")
    }

    pub fn to_tool() -> Tool {
        tool_model::<GetOrderParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<BackendClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        backend_route::<GetOrderParams, S>(Self::to_tool(), Self::rule(), client)
    }
}

/// List all orders.
pub struct GetAllOrdersTool;

impl GetAllOrdersTool {
    pub const NAME: &'static str = "get_all_orders";

    pub const DESCRIPTION: &'static str = "Get all orders across every store.";

    pub fn rule() -> RequestRule {
        RequestRule::get("/orders/")
    }

    pub fn to_tool() -> Tool {
        tool_model::<GetAllOrdersParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<BackendClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        backend_route::<GetAllOrdersParams, S>(Self::to_tool(), Self::rule(), client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{BodySpec, Method, build_request};
    use serde_json::json;

    #[test]
    fn test_get_order_rule() {
        let rule = GetOrderTool::rule();
        assert_eq!(rule.method, Method::Get);
        assert_eq!(rule.body, BodySpec::None);
    }

    #[test]
    fn test_order_id_substituted() {
        let args = json!({ "order_id": "o42" }).as_object().cloned().unwrap();
        let request = build_request(&GetOrderTool::rule(), args).unwrap();
        assert_eq!(request.path, "/orders/o42");
        assert!(request.body.is_none());
    }
}
