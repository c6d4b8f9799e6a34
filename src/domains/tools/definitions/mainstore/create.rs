//! Main store creation tool.

use std::sync::Arc;

use rmcp::{handler::server::tool::ToolRoute, model::Tool};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::super::common::{ConditionParams, StoreItemSpec, backend_route, tool_model};
use crate::backend::{BackendClient, BodySpec, RequestRule};

/// Parameters for creating a main store (warehouse).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CreateMainStoreParams {
    #[schemars(description = "Name of the main store")]
    pub name: String,

    #[schemars(description = "Location of the main store")]
    pub location: String,

    #[schemars(description = "Name of the manager")]
    pub manager: String,

    #[schemars(description = "Initial inventory items")]
    #[serde(default)]
    pub items: Vec<StoreItemSpec>,

    #[serde(flatten)]
    pub conditions: ConditionParams,
}

/// Create a main store that fulfills orders from regular stores.
pub struct CreateMainStoreTool;

impl CreateMainStoreTool {
    pub const NAME: &'static str = "create_main_store";

    pub const DESCRIPTION: &'static str = "Create a new main store (warehouse) with a name, location, manager and optional initial inventory. Returns the new main store id.";

    pub fn rule() -> RequestRule {
        RequestRule::post("/mainstore/", BodySpec::Remaining)
    }

    pub fn to_tool() -> Tool {
        tool_model::<CreateMainStoreParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<BackendClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        backend_route::<CreateMainStoreParams, S>(Self::to_tool(), Self::rule(), client)
    }
}
