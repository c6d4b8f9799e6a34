//! Main store update tool.

use std::sync::Arc;

use rmcp::{handler::server::tool::ToolRoute, model::Tool};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::super::common::{ConditionParams, backend_route, tool_model};
use crate::backend::{BackendClient, BodySpec, RequestRule};

/// Parameters for updating a main store. All fields optional; only the
/// supplied ones are sent.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UpdateMainStoreParams {
    #[schemars(description = "ID of the main store to update")]
    pub store_id: String,

    #[schemars(description = "New name of the main store")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[schemars(description = "New location of the main store")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[schemars(description = "New manager name")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager: Option<String>,

    #[serde(flatten)]
    pub conditions: ConditionParams,
}

/// Update a main store's information and conditions.
pub struct UpdateMainStoreTool;

impl UpdateMainStoreTool {
    pub const NAME: &'static str = "update_main_store";

    pub const DESCRIPTION: &'static str =
        "Update a main store's name, location, manager or condition information.";

    pub fn rule() -> RequestRule {
        RequestRule::put("/mainstore/{store_id}", BodySpec::Remaining)
    }

    pub fn to_tool() -> Tool {
        tool_model::<UpdateMainStoreParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<BackendClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        backend_route::<UpdateMainStoreParams, S>(Self::to_tool(), Self::rule(), client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::build_request;
    use serde_json::json;

    #[test]
    fn test_only_supplied_fields_sent() {
        let params: UpdateMainStoreParams = serde_json::from_value(json!({
            "store_id": "m1",
            "manager": "Grace"
        }))
        .unwrap();
        let args = serde_json::to_value(&params)
            .unwrap()
            .as_object()
            .cloned()
            .unwrap();
        let request = build_request(&UpdateMainStoreTool::rule(), args).unwrap();
        assert_eq!(request.path, "/mainstore/m1");
        assert_eq!(request.body, Some(json!({ "manager": "Grace" })));
    }
}
