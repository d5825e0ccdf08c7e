use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, trace};

use radix_core::constants::JSONRPC_VERSION;
use radix_core::{RadixError, Result};

/// Carries one named remote call to the node and returns its `result`.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn call(&self, method: &str, params: Value) -> Result<Value>;
}

/// JSON-RPC 2.0 over HTTP POST.
///
/// Raw reqwest + serde_json rather than a full RPC client stack; one POST per
/// call, no retries, reqwest's default timeouts.
pub struct HttpTransport {
    url: String,
    client: reqwest::Client,
    next_id: AtomicU64,
}

impl HttpTransport {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            client: reqwest::Client::new(),
            next_id: AtomicU64::new(1),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn call(&self, method: &str, params: Value) -> Result<Value> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let body = serde_json::json!({
            "jsonrpc": JSONRPC_VERSION,
            "method": method,
            "params": params,
            "id": id
        });
        debug!(method, id, url = %self.url, "RPC call");

        let resp = self
            .client
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(|e| RadixError::Http(format!("connecting to node at {}: {e}", self.url)))?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| RadixError::Http(format!("reading response body: {e}")))?;
        trace!(method, id, %status, body = %text, "RPC response");

        let json: Value = match serde_json::from_str(&text) {
            Ok(json) => json,
            Err(_) if !status.is_success() => {
                return Err(RadixError::Http(format!("{status}: {text}")));
            }
            Err(e) => {
                return Err(RadixError::MalformedResponse(format!("{e}: {text}")));
            }
        };

        unwrap_response(json).map_err(|e| match e {
            RadixError::MalformedResponse(_) if !status.is_success() => {
                RadixError::Http(format!("{status}: {text}"))
            }
            other => other,
        })
    }
}

/// Split a JSON-RPC response envelope into its result or its error.
pub(crate) fn unwrap_response(mut json: Value) -> Result<Value> {
    if let Some(err) = json.get("error").filter(|e| !e.is_null()) {
        let code = err.get("code").and_then(Value::as_i64);
        let message = err.get("message").and_then(Value::as_str);
        return Err(match (code, message) {
            (Some(code), Some(message)) => RadixError::Rpc {
                code,
                message: message.to_string(),
                data: err.get("data").cloned(),
            },
            _ => RadixError::MalformedResponse(format!("unrecognised error object: {err}")),
        });
    }

    match json.get_mut("result") {
        Some(result) => Ok(result.take()),
        None => Err(RadixError::MalformedResponse(format!(
            "neither result nor error in {json}"
        ))),
    }
}
