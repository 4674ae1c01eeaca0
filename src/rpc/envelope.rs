//! JSON-RPC 2.0 envelope codec

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::SdkError;
use crate::constants::{JSONRPC_VERSION, REQUEST_ID};

/// Request envelope as it travels on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub method: String,
    pub id: Value,
    #[serde(default)]
    pub params: Vec<Value>,
}

/// Build the request body for `method` with positional `params`.
///
/// The id is always `"1"`; requests are never multiplexed by id.
pub fn encode_request(method: &str, params: &[Value]) -> String {
    json!({
        "jsonrpc": JSONRPC_VERSION,
        "method": method,
        "id": REQUEST_ID,
        "params": params,
    })
    .to_string()
}

/// Classify a response body and extract its `result` node.
///
/// Checked in order: JSON syntax, a non-null `error` member, a `result`
/// member (which may itself be `null`). An `error` member holding `null`
/// counts as absent.
pub fn parse_response(body: &str) -> Result<Value, SdkError> {
    let root: Value =
        serde_json::from_str(body).map_err(|e| SdkError::FailedParsingJson(e.to_string()))?;

    let Value::Object(mut map) = root else {
        return Err(SdkError::MalformedResponse);
    };

    if let Some(error) = map.get("error").filter(|e| !e.is_null()) {
        return Err(SdkError::Api(error_message(error)));
    }

    map.remove("result").ok_or(SdkError::MalformedResponse)
}

fn error_message(error: &Value) -> String {
    match error {
        Value::String(message) => message.clone(),
        Value::Object(fields) => fields
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("unknown error")
            .to_string(),
        _ => "unknown error".to_string(),
    }
}
