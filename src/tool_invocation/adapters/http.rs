//! JSON-RPC over HTTP tool backend.
//!
//! Speaks the MCP `tools/call` method against a single HTTP endpoint. The
//! connection step is a `ping` request; JSON-RPC `-32602` (invalid params)
//! errors map to non-retryable validation failures and every other failure
//! is reported as retryable.

use crate::tool_invocation::{
    domain::{TargetName, ToolName, ToolParams},
    ports::{ToolBackend, ToolBackendError, ToolBackendResult},
};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::debug;
use url::Url;
use uuid::Uuid;

/// JSON-RPC error code for invalid method parameters.
const INVALID_PARAMS_CODE: i64 = -32602;

#[derive(Debug, Deserialize)]
struct JsonRpcResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<JsonRpcError>,
}

#[derive(Debug, Deserialize)]
struct JsonRpcError {
    code: i64,
    message: String,
}

/// Tool backend calling a remote MCP endpoint over HTTP.
#[derive(Debug, Clone)]
pub struct HttpToolBackend {
    target: TargetName,
    endpoint: Url,
    http: reqwest::Client,
}

impl HttpToolBackend {
    /// Creates a backend for `target` served at `endpoint`.
    #[must_use]
    pub const fn new(target: TargetName, endpoint: Url, http: reqwest::Client) -> Self {
        Self {
            target,
            endpoint,
            http,
        }
    }

    /// Returns the endpoint URL.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn rpc(&self, method: &str, params: Value) -> ToolBackendResult<Value> {
        let request_id = Uuid::new_v4().to_string();
        debug!(server = %self.target, method, request_id = %request_id, "sending JSON-RPC request");

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&json!({
                "jsonrpc": "2.0",
                "id": request_id,
                "method": method,
                "params": params,
            }))
            .send()
            .await
            .map_err(ToolBackendError::transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ToolBackendError::Execution(format!(
                "{} responded with HTTP {status}",
                self.target
            )));
        }

        let body: JsonRpcResponse = response.json().await.map_err(ToolBackendError::transport)?;
        match (body.result, body.error) {
            (_, Some(error)) if error.code == INVALID_PARAMS_CODE => {
                Err(ToolBackendError::InvalidParams(error.message))
            }
            (_, Some(error)) => Err(ToolBackendError::Execution(format!(
                "{} (code {})",
                error.message, error.code
            ))),
            (Some(result), None) => Ok(result),
            (None, None) => Err(ToolBackendError::Execution(
                "JSON-RPC response carried neither result nor error".to_owned(),
            )),
        }
    }
}

/// Extracts the payload of an MCP `tools/call` result.
///
/// Results flagged with `isError` become execution failures carrying the
/// first text content block. Otherwise `structuredContent` is preferred over
/// the raw result.
fn tool_payload(result: Value) -> ToolBackendResult<Value> {
    if result.get("isError").and_then(Value::as_bool) == Some(true) {
        let message = result
            .get("content")
            .and_then(Value::as_array)
            .and_then(|blocks| blocks.iter().find_map(|block| block.get("text")))
            .and_then(Value::as_str)
            .unwrap_or("tool reported an error")
            .to_owned();
        return Err(ToolBackendError::Execution(message));
    }

    Ok(match result {
        Value::Object(mut fields) => match fields.remove("structuredContent") {
            Some(structured) => structured,
            None => Value::Object(fields),
        },
        other => other,
    })
}

#[async_trait]
impl ToolBackend for HttpToolBackend {
    fn target(&self) -> &TargetName {
        &self.target
    }

    async fn connect(&self) -> ToolBackendResult<()> {
        self.rpc("ping", json!({}))
            .await
            .map(|_| ())
            .map_err(|err| ToolBackendError::Connection(err.to_string()))
    }

    async fn execute(&self, tool: &ToolName, params: &ToolParams) -> ToolBackendResult<Value> {
        let result = self
            .rpc(
                "tools/call",
                json!({"name": tool.as_str(), "arguments": params}),
            )
            .await?;
        tool_payload(result)
    }
}
