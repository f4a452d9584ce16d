// Copyright (C) 2022-2026 The FreeNews Project.
//
// rpc_client.rs file belongs to the freenews project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::error::{Result, RpcError};
use crate::models::{CallResult, NodeStatus, RpcRequest, RpcResponse};
use base64::{engine::general_purpose, Engine as _};
use reqwest::{Client, Url};
use serde_json::{json, Value};
use std::str;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, warn};

/// Fixed argument blob attached to every view query: the base58
/// encoding of the empty JSON object `{}`. Part of the wire contract
/// with the node; do not change unless the upstream RPC interface does.
pub const EMPTY_ARGS_BASE58: &str = "AQ4";

/// JSON-RPC client bound to one chain node endpoint.
///
/// All methods are read-only against the client itself; a single
/// instance can be shared across tasks.
#[derive(Debug)]
pub struct RpcClient {
    base_address: Url,
    http_client: Client,
    next_id: AtomicU64,
}

impl RpcClient {
    /// Creates a new RPC client for the given node endpoint.
    pub fn new(url: Url) -> Self {
        Self::with_client(Client::new(), url)
    }

    /// Creates a new RPC client from an endpoint string.
    pub fn from_url(url: &str) -> Result<Self> {
        let parsed = Url::parse(url).map_err(|_| RpcError::InvalidUrl(url.to_string()))?;
        Ok(Self::new(parsed))
    }

    /// Creates a new RPC client with an existing HTTP client.
    pub fn with_client(client: Client, url: Url) -> Self {
        Self {
            base_address: url,
            http_client: client,
            next_id: AtomicU64::new(1),
        }
    }

    /// Endpoint this client talks to.
    pub fn node_url(&self) -> &Url {
        &self.base_address
    }

    /// Sends a single JSON-RPC request and parses the response envelope.
    pub async fn send(&self, request: &RpcRequest) -> Result<RpcResponse> {
        let response = self
            .http_client
            .post(self.base_address.clone())
            .json(request)
            .send()
            .await?;
        Ok(response.json::<RpcResponse>().await?)
    }

    /// Sends a JSON-RPC request and returns the result payload.
    ///
    /// A node-side `error` object or a response without a `result`
    /// field is surfaced as an error.
    pub async fn rpc_send(&self, method: &str, params: Value) -> Result<Value> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request = RpcRequest::new(id, method, params);
        debug!(id, method, "sending rpc request");

        let response = self.send(&request).await?;
        if let Some(error) = response.error {
            warn!(code = error.code, message = %error.message, method, "node rejected request");
            return Err(RpcError::Node {
                code: error.code,
                message: error.message,
            });
        }
        response.result.ok_or(RpcError::MissingResult)
    }

    /// Issues a read-only view call against a contract method.
    ///
    /// The call is addressed as `call/{contract_name}/{method_name}`
    /// with the fixed empty-arguments blob. The node returns the
    /// function result as an array of byte values holding UTF-8 encoded
    /// JSON, which is decoded before returning. Never mutates remote
    /// state.
    pub async fn query_view(&self, contract_name: &str, method_name: &str) -> Result<Value> {
        let request_path = format!("call/{contract_name}/{method_name}");
        debug!(path = %request_path, "issuing view query");

        let result = self
            .rpc_send("query", json!([request_path, EMPTY_ARGS_BASE58]))
            .await?;
        let call: CallResult = serde_json::from_value(result)?;
        for line in &call.logs {
            debug!(log = %line, "contract log");
        }
        decode_call_payload(&call.result)
    }

    /// Queries the node status; used as a reachability probe when a
    /// connection is opened.
    pub async fn status(&self) -> Result<NodeStatus> {
        let result = self.rpc_send("status", json!([])).await?;
        Ok(serde_json::from_value(result)?)
    }

    /// Submits a signed transaction and waits for the node to
    /// acknowledge it.
    pub async fn broadcast_tx(&self, signed_tx: &[u8]) -> Result<Value> {
        let encoded = general_purpose::STANDARD.encode(signed_tx);
        self.rpc_send("broadcast_tx_commit", json!([encoded])).await
    }
}

/// Reassembles a byte-array call result into a JSON value.
fn decode_call_payload(bytes: &[u8]) -> Result<Value> {
    let text = str::from_utf8(bytes)?;
    Ok(serde_json::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_args_blob_is_base58_of_empty_object() {
        assert_eq!(bs58::encode(b"{}").into_string(), EMPTY_ARGS_BASE58);
    }

    #[test]
    fn decodes_empty_object_payload() {
        // [123, 125] are the bytes of "{}".
        let value = decode_call_payload(&[123, 125]).unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn decodes_array_payload() {
        let bytes = br#"[{"id":1,"hash_head":"h","hash_body":"b","uri":"http://x"}]"#;
        let value = decode_call_payload(bytes).unwrap();
        assert_eq!(value[0]["uri"], "http://x");
    }

    #[test]
    fn invalid_utf8_is_a_decode_error() {
        let err = decode_call_payload(&[0xff, 0xfe]).unwrap_err();
        assert!(matches!(err, RpcError::InvalidUtf8(_)));
    }

    #[test]
    fn invalid_json_is_a_decode_error() {
        let err = decode_call_payload(b"{not json").unwrap_err();
        assert!(matches!(err, RpcError::Json(_)));
    }

    #[test]
    fn from_url_rejects_garbage() {
        assert!(matches!(
            RpcClient::from_url("not a url"),
            Err(RpcError::InvalidUrl(_))
        ));
    }
}
