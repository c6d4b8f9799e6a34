//! Order processing tool.

use std::sync::Arc;

use rmcp::{handler::server::tool::ToolRoute, model::Tool};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::super::common::{backend_route, tool_model};
use crate::backend::{BackendClient, BodySpec, RequestRule};

/// Parameters for processing an order.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ProcessOrderParams {
    #[schemars(description = "ID of the order to process")]
    pub order_id: String,
}

/// Process an order: deduct stock at the main store and move the order
/// to processing.
pub struct ProcessOrderTool;

impl ProcessOrderTool {
    pub const NAME: &'static str = "process_order";

    pub const DESCRIPTION: &'static str = "Process a pending order, deducting the ordered quantities from the main store's inventory.";

    pub fn rule() -> RequestRule {
        RequestRule::post("/orders/{order_id}/process/", BodySpec::Empty)
    }

    pub fn to_tool() -> Tool {
        tool_model::<ProcessOrderParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<BackendClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        backend_route::<ProcessOrderParams, S>(Self::to_tool(), Self::rule(), client)
    }
}
