//! Main store inventory tools.

use std::sync::Arc;

use rmcp::{handler::server::tool::ToolRoute, model::Tool};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::super::common::{StoreItemSpec, backend_route, tool_model};
use crate::backend::{BackendClient, BodySpec, RequestRule};

/// Parameters for adding or updating an item in a main store.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AddItemToMainStoreParams {
    #[schemars(description = "ID of the main store to add the item to")]
    pub store_id: String,

    #[serde(flatten)]
    pub item: StoreItemSpec,
}

/// Parameters for updating a main store item's quantity.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UpdateMainStoreItemQuantityParams {
    #[schemars(description = "ID of the main store")]
    pub store_id: String,

    #[schemars(description = "Name of the item to update")]
    pub item_name: String,

    #[schemars(description = "New quantity for the item")]
    pub new_quantity: u32,
}

/// Add or update an item in a main store's inventory.
pub struct AddItemToMainStoreTool;

impl AddItemToMainStoreTool {
    pub const NAME: &'static str = "add_item_to_main_store";

    pub const DESCRIPTION: &'static str =
        "Add an item to a main store's inventory, or update it if it already exists.";

    pub fn rule() -> RequestRule {
        RequestRule::post("/mainstore/{store_id}/items/", BodySpec::Remaining)
    }

    pub fn to_tool() -> Tool {
        tool_model::<AddItemToMainStoreParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<BackendClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        backend_route::<AddItemToMainStoreParams, S>(Self::to_tool(), Self::rule(), client)
    }
}

/// Update the quantity of an existing main store item.
pub struct UpdateMainStoreItemQuantityTool;

impl UpdateMainStoreItemQuantityTool {
    pub const NAME: &'static str = "update_main_store_item_quantity";

    pub const DESCRIPTION: &'static str =
        "Update the current quantity of an item in a main store's inventory.";

    pub fn rule() -> RequestRule {
        // Same query-parameter convention as the store-level quantity update.
        RequestRule::put(
            "/mainstore/{store_id}/items/{item_name}/quantity/",
            BodySpec::Query("new_quantity"),
        )
    }

    pub fn to_tool() -> Tool {
        tool_model::<UpdateMainStoreItemQuantityParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<BackendClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        backend_route::<UpdateMainStoreItemQuantityParams, S>(
            Self::to_tool(),
            Self::rule(),
            client,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::build_request;
    use serde_json::json;

    #[test]
    fn test_item_fields_become_body() {
        let params: AddItemToMainStoreParams = serde_json::from_value(json!({
            "store_id": "m1",
            "item_name": "flour",
            "current_quantity": 100,
            "max_quantity": 500,
            "unit": "kg"
        }))
        .unwrap();
        let args = serde_json::to_value(&params)
            .unwrap()
            .as_object()
            .cloned()
            .unwrap();
        let request = build_request(&AddItemToMainStoreTool::rule(), args).unwrap();
        assert_eq!(request.path, "/mainstore/m1/items/");
        assert_eq!(request.body.unwrap()["unit"], json!("kg"));
    }

    #[test]
    fn test_quantity_in_query_string() {
        let params: UpdateMainStoreItemQuantityParams = serde_json::from_value(json!({
            "store_id": "m1",
            "item_name": "flour",
            "new_quantity": 75
        }))
        .unwrap();
        let args = serde_json::to_value(&params)
            .unwrap()
            .as_object()
            .cloned()
            .unwrap();
        let request = build_request(&UpdateMainStoreItemQuantityTool::rule(), args).unwrap();
        assert_eq!(request.path, "/mainstore/m1/items/flour/quantity/");
        assert_eq!(
            request.query,
            vec![("new_quantity".to_string(), "75".to_string())]
        );
        assert!(request.body.is_none());
    }
}
