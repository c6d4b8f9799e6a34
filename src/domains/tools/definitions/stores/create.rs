//! Store creation tool.

use std::sync::Arc;

use rmcp::{handler::server::tool::ToolRoute, model::Tool};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::super::common::{ConditionParams, StoreItemSpec, backend_route, tool_model};
use crate::backend::{BackendClient, BodySpec, RequestRule};

/// Parameters for creating a store.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CreateStoreParams {
    #[schemars(description = "Name of the store")]
    pub store_name: String,

    #[schemars(description = "Store address")]
    pub store_address: String,

    #[schemars(description = "Store contact number")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_phone: Option<String>,

    #[schemars(description = "Store email")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_email: Option<String>,

    #[schemars(description = "Store owner name")]
    pub owner_name: String,

    #[schemars(description = "Type of store (default: General)")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_type: Option<String>,

    #[schemars(description = "Initial inventory items")]
    #[serde(default)]
    pub items: Vec<StoreItemSpec>,

    #[serde(flatten)]
    pub conditions: ConditionParams,
}

/// Store creation tool - registers a new store with the backend.
pub struct CreateStoreTool;

impl CreateStoreTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "create_store";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Create a new store with a name, address, owner and optional initial inventory and condition information. Returns the new store id.";

    /// Declarative request mapping for this tool.
    pub fn rule() -> RequestRule {
        RequestRule::post("/stores/", BodySpec::Remaining)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        tool_model::<CreateStoreParams>(Self::NAME, Self::DESCRIPTION)
    }

    /// Create a ToolRoute wired to the backend client.
    pub fn create_route<S>(client: Arc<BackendClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        backend_route::<CreateStoreParams, S>(Self::to_tool(), Self::rule(), client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::Method;
    use serde_json::json;

    #[test]
    fn test_minimal_params() {
        let params: CreateStoreParams = serde_json::from_value(json!({
            "store_name": "Corner Shop",
            "store_address": "12 Main St",
            "owner_name": "Ada"
        }))
        .unwrap();
        assert!(params.items.is_empty());
        assert!(params.conditions.economic_conditions.is_none());
    }

    #[test]
    fn test_missing_required_field_rejected() {
        let result: Result<CreateStoreParams, _> =
            serde_json::from_value(json!({ "store_name": "Corner Shop" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_conditions_flatten_into_body() {
        let params: CreateStoreParams = serde_json::from_value(json!({
            "store_name": "Corner Shop",
            "store_address": "12 Main St",
            "owner_name": "Ada",
            "economic_conditions": "high"
        }))
        .unwrap();
        let body = serde_json::to_value(&params).unwrap();
        assert_eq!(body["economic_conditions"], json!("high"));
    }

    #[test]
    fn test_rule() {
        let rule = CreateStoreTool::rule();
        assert_eq!(rule.method, Method::Post);
        assert_eq!(rule.path, "/stores/");
        assert_eq!(rule.body, BodySpec::Remaining);
    }
}
