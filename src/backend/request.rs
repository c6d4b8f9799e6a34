//! Declarative mapping from tool arguments to backend requests.
//!
//! Every tool declares a [`RequestRule`] describing the HTTP method, the path
//! template and where its arguments go (body, query string, or path). The
//! generic [`build_request`] function turns a rule plus an argument bag into
//! a concrete [`BackendRequest`], so the dispatcher is pure data plus one
//! executor.

use serde_json::{Map, Value};
use thiserror::Error;

/// JSON object alias matching the argument bag shape rmcp hands us.
pub type JsonObject = Map<String, Value>;

/// HTTP methods used by the backend surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
        }
    }
}

/// Where the arguments left over after path substitution are placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodySpec {
    /// All remaining arguments become the JSON body.
    Remaining,
    /// A single named argument becomes the entire body (e.g. a bulk items array).
    Field(&'static str),
    /// A single named argument is sent as a query parameter; no body.
    Query(&'static str),
    /// An empty JSON object body.
    Empty,
    /// No body at all.
    None,
}

/// Declarative request-building rule for one tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestRule {
    pub method: Method,
    /// Path template relative to the base URL. Segments wrapped in braces
    /// are filled from the argument bag, e.g. `/stores/{store_id}/items/`.
    pub path: &'static str,
    pub body: BodySpec,
}

impl RequestRule {
    pub const fn get(path: &'static str) -> Self {
        Self {
            method: Method::Get,
            path,
            body: BodySpec::None,
        }
    }

    pub const fn post(path: &'static str, body: BodySpec) -> Self {
        Self {
            method: Method::Post,
            path,
            body,
        }
    }

    pub const fn put(path: &'static str, body: BodySpec) -> Self {
        Self {
            method: Method::Put,
            path,
            body,
        }
    }
}

/// A fully resolved outbound request, ready for the HTTP client.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendRequest {
    pub method: Method,
    /// Resolved path relative to the base URL.
    pub path: String,
    /// Query string pairs (empty for most tools).
    pub query: Vec<(String, String)>,
    /// JSON body, if the rule produces one.
    pub body: Option<Value>,
}

/// Errors while resolving a rule against an argument bag.
///
/// These should not occur for arguments that passed typed deserialization;
/// they guard the generic builder against mismatched rules.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("missing required argument '{0}'")]
    MissingArgument(String),

    #[error("argument '{0}' must be a string, number or boolean")]
    NotScalar(String),

    #[error("argument '{0}' is not a valid path segment")]
    NotPathSafe(String),
}

/// Resolve a rule against an argument bag into a concrete request.
///
/// Path placeholders consume their arguments; the rule's [`BodySpec`] decides
/// where everything left over goes.
pub fn build_request(
    rule: &RequestRule,
    mut args: JsonObject,
) -> Result<BackendRequest, RequestError> {
    let mut path = String::new();
    for segment in rule.path.split('/').filter(|s| !s.is_empty()) {
        path.push('/');
        if let Some(name) = segment
            .strip_prefix('{')
            .and_then(|s| s.strip_suffix('}'))
        {
            let value = args
                .remove(name)
                .ok_or_else(|| RequestError::MissingArgument(name.to_string()))?;
            path.push_str(&path_segment(name, &value)?);
        } else {
            path.push_str(segment);
        }
    }
    if rule.path.ends_with('/') {
        path.push('/');
    }

    let mut query = Vec::new();
    let body = match rule.body {
        BodySpec::Remaining => Some(Value::Object(args)),
        BodySpec::Field(name) => Some(
            args.remove(name)
                .ok_or_else(|| RequestError::MissingArgument(name.to_string()))?,
        ),
        BodySpec::Query(name) => {
            let value = args
                .remove(name)
                .ok_or_else(|| RequestError::MissingArgument(name.to_string()))?;
            query.push((name.to_string(), scalar_to_string(name, &value)?));
            None
        }
        BodySpec::Empty => Some(Value::Object(JsonObject::new())),
        BodySpec::None => None,
    };

    Ok(BackendRequest {
        method: rule.method,
        path,
        query,
        body,
    })
}

fn scalar_to_string(name: &str, value: &Value) -> Result<String, RequestError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        _ => Err(RequestError::NotScalar(name.to_string())),
    }
}

/// Convert a placeholder value into a single path segment. Values that would
/// rewrite the request target (empty, or containing `/`, `?` or `#`) are
/// rejected rather than interpolated.
fn path_segment(name: &str, value: &Value) -> Result<String, RequestError> {
    let segment = scalar_to_string(name, value)?;
    if segment.is_empty() || segment.contains(['/', '?', '#']) {
        return Err(RequestError::NotPathSafe(name.to_string()));
    }
    Ok(segment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn args(value: Value) -> JsonObject {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_path_placeholder_substitution() {
        let rule = RequestRule::get("/stores/{store_id}");
        let request = build_request(&rule, args(json!({ "store_id": "abc123" }))).unwrap();
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.path, "/stores/abc123");
        assert!(request.query.is_empty());
        assert!(request.body.is_none());
    }

    #[test]
    fn test_trailing_slash_preserved() {
        let rule = RequestRule::get("/stores/");
        let request = build_request(&rule, JsonObject::new()).unwrap();
        assert_eq!(request.path, "/stores/");
    }

    #[test]
    fn test_remaining_args_become_body() {
        let rule = RequestRule::post("/stores/{store_id}/items/", BodySpec::Remaining);
        let request = build_request(
            &rule,
            args(json!({
                "store_id": "s1",
                "item_name": "rice",
                "current_quantity": 10,
                "max_quantity": 50
            })),
        )
        .unwrap();
        assert_eq!(request.path, "/stores/s1/items/");
        // store_id was consumed by the path and must not leak into the body
        assert_eq!(
            request.body,
            Some(json!({
                "item_name": "rice",
                "current_quantity": 10,
                "max_quantity": 50
            }))
        );
    }

    #[test]
    fn test_field_becomes_entire_body() {
        let rule = RequestRule::post("/stores/{store_id}/items/bulk/", BodySpec::Field("items"));
        let request = build_request(
            &rule,
            args(json!({
                "store_id": "s1",
                "items": [{ "item_name": "rice", "current_quantity": 1, "max_quantity": 5 }]
            })),
        )
        .unwrap();
        // The array is the whole body, not wrapped in a key
        assert!(request.body.as_ref().unwrap().is_array());
    }

    #[test]
    fn test_query_param_never_in_body() {
        let rule = RequestRule::put(
            "/stores/{store_id}/items/{item_name}/quantity/",
            BodySpec::Query("new_quantity"),
        );
        let request = build_request(
            &rule,
            args(json!({ "store_id": "s1", "item_name": "rice", "new_quantity": 42 })),
        )
        .unwrap();
        assert_eq!(request.path, "/stores/s1/items/rice/quantity/");
        assert_eq!(
            request.query,
            vec![("new_quantity".to_string(), "42".to_string())]
        );
        assert!(request.body.is_none());
    }

    #[test]
    fn test_empty_body() {
        let rule = RequestRule::post("/orders/{order_id}/process/", BodySpec::Empty);
        let request = build_request(&rule, args(json!({ "order_id": "o1" }))).unwrap();
        assert_eq!(request.body, Some(json!({})));
    }

    #[test]
    fn test_missing_path_argument() {
        let rule = RequestRule::get("/stores/{store_id}");
        let err = build_request(&rule, JsonObject::new()).unwrap_err();
        assert_eq!(err, RequestError::MissingArgument("store_id".to_string()));
    }

    #[test]
    fn test_non_scalar_path_argument() {
        let rule = RequestRule::get("/stores/{store_id}");
        let err = build_request(&rule, args(json!({ "store_id": ["not", "scalar"] }))).unwrap_err();
        assert_eq!(err, RequestError::NotScalar("store_id".to_string()));
    }

    #[test]
    fn test_path_rewriting_values_rejected() {
        let rule = RequestRule::get("/stores/{store_id}");
        for bad in ["s1/items", "s1?admin=true", "s1#frag", ""] {
            let err = build_request(&rule, args(json!({ "store_id": bad }))).unwrap_err();
            assert_eq!(err, RequestError::NotPathSafe("store_id".to_string()), "{bad:?}");
        }
    }

    #[test]
    fn test_query_values_are_not_path_checked() {
        // Query pairs go through reqwest's own encoding, so target-rewriting
        // characters are fine there.
        let rule = RequestRule::put(
            "/stores/{store_id}/items/{item_name}/quantity/",
            BodySpec::Query("new_quantity"),
        );
        let request = build_request(
            &rule,
            args(json!({ "store_id": "s1", "item_name": "rice", "new_quantity": 10 })),
        )
        .unwrap();
        assert_eq!(request.query[0].1, "10");
    }
}
