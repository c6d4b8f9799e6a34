//! Order creation tool.

use std::sync::Arc;

use rmcp::{handler::server::tool::ToolRoute, model::Tool};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::super::common::{OrderItemSpec, backend_route, tool_model};
use crate::backend::{BackendClient, BodySpec, RequestRule};

/// Parameters for placing a restock order against a main store.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CreateOrderParams {
    #[schemars(description = "ID of the store placing the order")]
    pub store_id: String,

    #[schemars(description = "Name of the store placing the order")]
    pub store_name: String,

    #[schemars(description = "ID of the main store that should fulfill the order")]
    pub main_store_id: String,

    #[schemars(description = "Items to order")]
    pub items: Vec<OrderItemSpec>,

    #[schemars(description = "Optional notes for the order")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Place a restock order from a store to a main store.
pub struct CreateOrderTool;

impl CreateOrderTool {
    pub const NAME: &'static str = "create_order";

    pub const DESCRIPTION: &'static str = "Create a restock order from a store to a main store with a list of items. Returns the new order id.";

    pub fn rule() -> RequestRule {
        RequestRule::post("/orders/", BodySpec::Remaining)
    }

    pub fn to_tool() -> Tool {
        tool_model::<CreateOrderParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<BackendClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        backend_route::<CreateOrderParams, S>(Self::to_tool(), Self::rule(), client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::build_request;
    use serde_json::json;

    #[test]
    fn test_full_body_sent() {
        let params: CreateOrderParams = serde_json::from_value(json!({
            "store_id": "s1",
            "store_name": "Corner Shop",
            "main_store_id": "m1",
            "items": [
                { "item_name": "flour", "quantity": 10, "unit": "kg" }
            ]
        }))
        .unwrap();
        let args = serde_json::to_value(&params)
            .unwrap()
            .as_object()
            .cloned()
            .unwrap();
        let request = build_request(&CreateOrderTool::rule(), args).unwrap();
        assert_eq!(request.path, "/orders/");
        let body = request.body.unwrap();
        assert_eq!(body["store_id"], json!("s1"));
        assert_eq!(body["items"][0]["item_name"], json!("flour"));
        assert!(body.get("notes").is_none());
    }

    #[test]
    fn test_items_required() {
        let result: Result<CreateOrderParams, _> = serde_json::from_value(json!({
            "store_id": "s1",
            "store_name": "Corner Shop",
            "main_store_id": "m1"
        }));
        assert!(result.is_err());
    }
}
