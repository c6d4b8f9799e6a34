//! Common utilities shared across backend tools.
//!
//! This module provides the shared parameter shapes (severity scale, item
//! specs, condition fields), the uniform envelope helpers, and the generic
//! dispatch path every tool route goes through.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::warn;

use crate::backend::{BackendClient, RequestRule, build_request};

// ============================================================================
// Shared parameter shapes
// ============================================================================

/// Four-level severity scale used for store condition fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SeverityLevel {
    Low,
    Medium,
    High,
    Critical,
}

/// Lifecycle states of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

/// An inventory item as stored in a store or main store.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct StoreItemSpec {
    #[schemars(description = "Name of the item")]
    pub item_name: String,

    #[schemars(description = "Current quantity in stock")]
    pub current_quantity: u32,

    #[schemars(description = "Maximum quantity capacity")]
    pub max_quantity: u32,

    #[schemars(description = "Unit of measurement (default: pcs)")]
    #[serde(default = "default_unit")]
    pub unit: String,

    #[schemars(description = "Price per unit")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    #[schemars(description = "Item category")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// An item line inside an order.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct OrderItemSpec {
    #[schemars(description = "Name of the item")]
    pub item_name: String,

    #[schemars(description = "Quantity ordered")]
    pub quantity: u32,

    #[schemars(description = "Unit of measurement (default: pcs)")]
    #[serde(default = "default_unit")]
    pub unit: String,

    #[schemars(description = "Price per unit")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    #[schemars(description = "Item category")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Economic, political and environmental condition fields shared by store
/// and main-store tools. All optional; absent fields are not sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ConditionParams {
    #[schemars(description = "Current economic conditions affecting the store")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub economic_conditions: Option<SeverityLevel>,

    #[schemars(description = "Additional notes about economic conditions")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub economic_notes: Option<String>,

    #[schemars(description = "Level of political instability in the area")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub political_instability: Option<SeverityLevel>,

    #[schemars(description = "Additional notes about the political situation")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub political_notes: Option<String>,

    #[schemars(description = "Environmental issues affecting the store")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environmental_issues: Option<SeverityLevel>,

    #[schemars(description = "Additional notes about environmental issues")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environmental_notes: Option<String>,
}

pub fn default_unit() -> String {
    "pcs".to_string()
}

// ============================================================================
// Envelope helpers
// ============================================================================

/// Create an error envelope with the uniform "Error: " prefix.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(format!("Error: {}", message))])
}

/// Create a success envelope with text content.
pub fn success_result(content: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content)])
}

// ============================================================================
// Generic dispatch
// ============================================================================

/// Execute one tool invocation: resolve the rule against the typed
/// parameters, issue the single backend call, and wrap the outcome in an
/// envelope. Backend failures never escape this function.
pub async fn dispatch<P: Serialize>(
    client: &BackendClient,
    rule: &RequestRule,
    params: &P,
) -> CallToolResult {
    let args = match serde_json::to_value(params) {
        Ok(Value::Object(map)) => map,
        Ok(_) => return error_result("tool parameters did not serialize to an object"),
        Err(e) => return error_result(&e.to_string()),
    };

    let request = match build_request(rule, args) {
        Ok(request) => request,
        Err(e) => return error_result(&e.to_string()),
    };

    match client.execute(&request).await {
        Ok(text) => success_result(text),
        Err(e) => error_result(&e.to_string()),
    }
}

/// Build the Tool model for a params type.
pub(crate) fn tool_model<P: JsonSchema + 'static>(name: &'static str, description: &'static str) -> Tool {
    Tool {
        name: name.into(),
        description: Some(description.into()),
        input_schema: cached_schema_for_type::<P>(),
        annotations: None,
        output_schema: None,
        icons: None,
        meta: None,
        title: None,
    }
}

/// Build a ToolRoute that deserializes the arguments into `P`, then runs the
/// generic dispatch against the backend. Malformed arguments are rejected
/// here, before any network activity.
pub(crate) fn backend_route<P, S>(
    tool: Tool,
    rule: RequestRule,
    client: Arc<BackendClient>,
) -> ToolRoute<S>
where
    P: DeserializeOwned + Serialize + Send + Sync + 'static,
    S: Send + Sync + 'static,
{
    ToolRoute::new_dyn(tool, move |ctx: ToolCallContext<'_, S>| {
        let client = client.clone();
        let args = ctx.arguments.clone().unwrap_or_default();
        async move {
            let params: P = serde_json::from_value(Value::Object(args))
                .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
            Ok(dispatch(&client, &rule, &params).await)
        }
        .boxed()
    })
}
