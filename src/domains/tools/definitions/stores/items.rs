//! Store inventory tools.
//!
//! Add single items, add items in bulk, and update an item's quantity.
//! The quantity update is the one tool whose value travels in the query
//! string rather than the body.

use std::sync::Arc;

use rmcp::{handler::server::tool::ToolRoute, model::Tool};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::super::common::{StoreItemSpec, backend_route, tool_model};
use crate::backend::{BackendClient, BodySpec, RequestRule};

/// Parameters for adding a single item to a store.
///
/// The item fields are flat in the tool schema; the store id goes into the
/// path and the rest form the request body.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AddItemToStoreParams {
    #[schemars(description = "ID of the store to add the item to")]
    pub store_id: String,

    #[serde(flatten)]
    pub item: StoreItemSpec,
}

/// Parameters for adding multiple items at once.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AddMultipleItemsParams {
    #[schemars(description = "ID of the store to add the items to")]
    pub store_id: String,

    #[schemars(description = "Items to add")]
    pub items: Vec<StoreItemSpec>,
}

/// Parameters for updating an item's quantity.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UpdateItemQuantityParams {
    #[schemars(description = "ID of the store")]
    pub store_id: String,

    #[schemars(description = "Name of the item to update")]
    pub item_name: String,

    #[schemars(description = "New quantity for the item")]
    pub new_quantity: u32,
}

/// Add a single item to a store's inventory.
pub struct AddItemToStoreTool;

impl AddItemToStoreTool {
    pub const NAME: &'static str = "add_item_to_store";

    pub const DESCRIPTION: &'static str =
        "Add a single item to a store's inventory with quantity, capacity and optional price/category.";

    pub fn rule() -> RequestRule {
        RequestRule::post("/stores/{store_id}/items/", BodySpec::Remaining)
    }

    pub fn to_tool() -> Tool {
        tool_model::<AddItemToStoreParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<BackendClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        backend_route::<AddItemToStoreParams, S>(Self::to_tool(), Self::rule(), client)
    }
}

/// Add multiple items to a store in one call.
pub struct AddMultipleItemsToStoreTool;

impl AddMultipleItemsToStoreTool {
    pub const NAME: &'static str = "add_multiple_items_to_store";

    pub const DESCRIPTION: &'static str =
        "Add multiple items to a store's inventory in a single call.";

    pub fn rule() -> RequestRule {
        // The items array is the entire request body, not wrapped in a key.
        RequestRule::post("/stores/{store_id}/items/bulk/", BodySpec::Field("items"))
    }

    pub fn to_tool() -> Tool {
        tool_model::<AddMultipleItemsParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<BackendClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        backend_route::<AddMultipleItemsParams, S>(Self::to_tool(), Self::rule(), client)
    }
}

/// Update the quantity of an existing store item.
pub struct UpdateItemQuantityTool;

impl UpdateItemQuantityTool {
    pub const NAME: &'static str = "update_item_quantity";

    pub const DESCRIPTION: &'static str =
        "Update the current quantity of an item in a store's inventory.";

    pub fn rule() -> RequestRule {
        // The backend takes new_quantity as a query parameter, never a body.
        RequestRule::put(
            "/stores/{store_id}/items/{item_name}/quantity/",
            BodySpec::Query("new_quantity"),
        )
    }

    pub fn to_tool() -> Tool {
        tool_model::<UpdateItemQuantityParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<BackendClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        backend_route::<UpdateItemQuantityParams, S>(Self::to_tool(), Self::rule(), client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{Method, build_request};
    use serde_json::json;

    #[test]
    fn test_item_fields_are_flat() {
        let params: AddItemToStoreParams = serde_json::from_value(json!({
            "store_id": "s1",
            "item_name": "rice",
            "current_quantity": 10,
            "max_quantity": 50
        }))
        .unwrap();
        assert_eq!(params.item.item_name, "rice");

        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(value["item_name"], json!("rice"));
        assert!(value.get("item").is_none());
    }

    #[test]
    fn test_bulk_rule_sends_array_as_body() {
        let params: AddMultipleItemsParams = serde_json::from_value(json!({
            "store_id": "s1",
            "items": [
                { "item_name": "rice", "current_quantity": 1, "max_quantity": 5 },
                { "item_name": "salt", "current_quantity": 2, "max_quantity": 8 }
            ]
        }))
        .unwrap();
        let args = serde_json::to_value(&params)
            .unwrap()
            .as_object()
            .cloned()
            .unwrap();
        let request = build_request(&AddMultipleItemsToStoreTool::rule(), args).unwrap();
        assert_eq!(request.path, "/stores/s1/items/bulk/");
        assert_eq!(request.body.unwrap().as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_quantity_travels_in_query_string() {
        let params: UpdateItemQuantityParams = serde_json::from_value(json!({
            "store_id": "s1",
            "item_name": "rice",
            "new_quantity": 25
        }))
        .unwrap();
        let args = serde_json::to_value(&params)
            .unwrap()
            .as_object()
            .cloned()
            .unwrap();
        let request = build_request(&UpdateItemQuantityTool::rule(), args).unwrap();
        assert_eq!(request.method, Method::Put);
        assert_eq!(request.path, "/stores/s1/items/rice/quantity/");
        assert_eq!(
            request.query,
            vec![("new_quantity".to_string(), "25".to_string())]
        );
        assert!(request.body.is_none());
    }
}
