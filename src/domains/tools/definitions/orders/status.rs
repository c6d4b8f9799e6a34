//! Order status update tool.

use std::sync::Arc;

use rmcp::{handler::server::tool::ToolRoute, model::Tool};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::super::common::{OrderStatus, backend_route, tool_model};
use crate::backend::{BackendClient, BodySpec, RequestRule};

/// Parameters for updating an order's status.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UpdateOrderStatusParams {
    #[schemars(description = "ID of the order to update")]
    pub order_id: String,

    #[schemars(description = "New status: pending, processing, shipped, delivered or cancelled")]
    pub status: OrderStatus,

    #[schemars(description = "Optional notes about the status change")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Move an order to a new status.
pub struct UpdateOrderStatusTool;

impl UpdateOrderStatusTool {
    pub const NAME: &'static str = "update_order_status";

    pub const DESCRIPTION: &'static str =
        "Update the status of an order (pending, processing, shipped, delivered, cancelled).";

    pub fn rule() -> RequestRule {
        RequestRule::put("/orders/{order_id}/status/", BodySpec::Remaining)
    }

    pub fn to_tool() -> Tool {
        tool_model::<UpdateOrderStatusParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<BackendClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        backend_route::<UpdateOrderStatusParams, S>(Self::to_tool(), Self::rule(), client)
    }
}
