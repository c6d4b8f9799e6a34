//! Store conditions tool.
//!
//! Updates the economic, political and environmental condition fields of a
//! store. Uses the same four-level severity scale everywhere.

use std::sync::Arc;

use rmcp::{handler::server::tool::ToolRoute, model::Tool};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::super::common::{ConditionParams, backend_route, tool_model};
use crate::backend::{BackendClient, BodySpec, RequestRule};

/// Parameters for updating a store's conditions.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UpdateStoreConditionsParams {
    #[schemars(description = "ID of the store to update")]
    pub store_id: String,

    #[serde(flatten)]
    pub conditions: ConditionParams,
}

/// Update a store's economic, political and environmental conditions.
pub struct UpdateStoreConditionsTool;

impl UpdateStoreConditionsTool {
    pub const NAME: &'static str = "update_store_conditions";

    pub const DESCRIPTION: &'static str = "Update the economic conditions, political instability and environmental issues of a store (severity: low, medium, high, critical) with optional notes.";

    pub fn rule() -> RequestRule {
        RequestRule::put("/stores/{store_id}/conditions/", BodySpec::Remaining)
    }

    pub fn to_tool() -> Tool {
        tool_model::<UpdateStoreConditionsParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<BackendClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        backend_route::<UpdateStoreConditionsParams, S>(Self::to_tool(), Self::rule(), client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::build_request;
    use serde_json::json;

    #[test]
    fn test_conditions_become_body() {
        let params: UpdateStoreConditionsParams = serde_json::from_value(json!({
            "store_id": "s1",
            "economic_conditions": "critical",
            "economic_notes": "supply shock"
        }))
        .unwrap();
        let args = serde_json::to_value(&params)
            .unwrap()
            .as_object()
            .cloned()
            .unwrap();
        let request = build_request(&UpdateStoreConditionsTool::rule(), args).unwrap();
        assert_eq!(request.path, "/stores/s1/conditions/");
        assert_eq!(
            request.body,
            Some(json!({
                "economic_conditions": "critical",
                "economic_notes": "supply shock"
            }))
        );
    }

    #[test]
    fn test_invalid_severity_rejected() {
        let result: Result<UpdateStoreConditionsParams, _> = serde_json::from_value(json!({
            "store_id": "s1",
            "economic_conditions": "catastrophic"
        }));
        assert!(result.is_err());
    }
}
