//! JSON-RPC 2.0 transport.
//!
//! Both the wallet endpoint and the token API speak JSON-RPC over HTTP POST.
//! Responses are decoded the same way for both: a JSON-RPC `error` object
//! wins over the HTTP status, so "Must be authenticated!" from a 401 surfaces
//! as the provider's own reason.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::http::HttpClient;
use crate::domain::IndexerError;

// ============================================================================
// Wire Types
// ============================================================================

#[derive(Debug, Serialize)]
struct RpcRequest<'a, P: Serialize> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: P,
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<RpcErrorObject>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

// ============================================================================
// Client
// ============================================================================

/// A JSON-RPC endpoint reachable over HTTP.
#[derive(Debug, Clone)]
pub struct JsonRpcClient {
    http: HttpClient,
    url: String,
    next_id: Arc<AtomicU64>,
}

impl JsonRpcClient {
    /// Creates a client for the endpoint at `url`.
    #[must_use]
    pub fn new(http: HttpClient, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Endpoint URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Calls `method` with `params` and decodes the `result` member.
    ///
    /// # Errors
    ///
    /// Returns `IndexerError::Network` on transport failure,
    /// `IndexerError::Rpc` when the endpoint returns an error object,
    /// `IndexerError::Http` for non-JSON failures and
    /// `IndexerError::Parse` when the result has an unexpected shape.
    pub async fn call<P, R>(&self, method: &str, params: P) -> Result<R, IndexerError>
    where
        P: Serialize + Send,
        R: DeserializeOwned,
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request = RpcRequest {
            jsonrpc: "2.0",
            id,
            method,
            params,
        };

        tracing::debug!("rpc #{id} -> {method}");
        let response = self.http.post(&self.url).json(&request).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        tracing::debug!("rpc #{id} <- HTTP {status}, {} bytes", body.len());

        decode_response(status, &body)
    }
}

/// Decodes a JSON-RPC response body.
pub(crate) fn decode_response<R: DeserializeOwned>(
    status: u16,
    body: &str,
) -> Result<R, IndexerError> {
    let envelope = match serde_json::from_str::<RpcResponse>(body) {
        Ok(envelope) => envelope,
        Err(e) => {
            if (200..300).contains(&status) {
                return Err(IndexerError::parse(format!("invalid JSON-RPC response: {e}")));
            }
            return Err(IndexerError::Http {
                status,
                body: body.trim().to_string(),
            });
        }
    };

    if let Some(error) = envelope.error {
        return Err(IndexerError::rpc(error.code, error.message));
    }

    if !(200..300).contains(&status) {
        return Err(IndexerError::Http {
            status,
            body: body.trim().to_string(),
        });
    }

    serde_json::from_value(envelope.result.unwrap_or(Value::Null))
        .map_err(|e| IndexerError::parse(format!("unexpected result shape: {e}")))
}

// ============================================================================
// Tests
// ============================================================================
