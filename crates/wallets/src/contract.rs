// Copyright (C) 2022-2026 The FreeNews Project.
//
// contract.rs file belongs to the freenews project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::connection::Connection;
use crate::session::WalletSession;
use crate::{Result, WalletError};
use base64::{engine::general_purpose, Engine as _};
use ed25519_dalek::Signer as _;
use freenews_core::{NewsItem, NewsSubmission};
use freenews_rpc_client::RpcError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

/// View methods the news contract declares. Read-only, no transaction.
pub const VIEW_METHODS: &[&str] = &["get_all"];

/// Change methods the news contract declares. Each call submits a
/// signed transaction.
pub const CHANGE_METHODS: &[&str] = &["add"];

/// Signed change-call envelope submitted to the node.
///
/// The signature covers the canonical payload of the other fields; the
/// arguments travel base64-encoded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionEnvelope {
    pub signer_id: String,
    pub receiver_id: String,
    pub method_name: String,
    pub args: String,
    pub public_key: String,
    pub signature: String,
}

impl TransactionEnvelope {
    /// Canonical byte string the signature is computed over.
    pub fn signing_payload(
        signer_id: &str,
        receiver_id: &str,
        method_name: &str,
        args: &str,
    ) -> Vec<u8> {
        format!("{signer_id}\n{receiver_id}\n{method_name}\n{args}").into_bytes()
    }

    /// Decodes the arguments back into a JSON value.
    pub fn decode_args(&self) -> Result<Value> {
        let bytes = general_purpose::STANDARD
            .decode(&self.args)
            .map_err(|e| WalletError::Transaction(format!("bad args encoding: {e}")))?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Typed proxy for the deployed news contract.
///
/// Exactly the declared view and change methods are invocable; any
/// other name fails before any network traffic happens. The proxy is
/// bound to the account that was signed in when it was built.
#[derive(Debug)]
pub struct Contract {
    connection: Connection,
    contract_name: String,
    signer_account: Option<String>,
}

impl Contract {
    /// Binds a proxy to the connection's contract and the wallet's
    /// signed-in account (if any).
    pub fn new(connection: &Connection, wallet: &WalletSession) -> Self {
        Self {
            connection: connection.clone(),
            contract_name: connection.config().contract_name.clone(),
            signer_account: wallet.account_id().map(str::to_string),
        }
    }

    /// Contract account this proxy addresses.
    pub fn contract_name(&self) -> &str {
        &self.contract_name
    }

    /// Invokes a declared view method and returns its decoded JSON
    /// result.
    pub async fn view(&self, method: &str) -> Result<Value> {
        if !VIEW_METHODS.contains(&method) {
            return Err(WalletError::MethodNotDeclared(method.to_string()));
        }
        debug!(contract = %self.contract_name, method, "view call");
        Ok(self
            .connection
            .client()
            .query_view(&self.contract_name, method)
            .await?)
    }

    /// Invokes a declared change method with JSON-serializable
    /// arguments, suspending until the chain acknowledges the
    /// transaction.
    pub async fn call<T: Serialize>(&self, method: &str, args: &T) -> Result<()> {
        if !CHANGE_METHODS.contains(&method) {
            return Err(WalletError::MethodNotDeclared(method.to_string()));
        }
        let signer_id = self
            .signer_account
            .as_deref()
            .ok_or(WalletError::NotSignedIn)?;

        let record = self
            .connection
            .key_store()
            .get(self.connection.network_id(), signer_id)?
            .ok_or(WalletError::NotSignedIn)?;
        let key = record.signing_key()?;

        let args_encoded = general_purpose::STANDARD.encode(serde_json::to_vec(args)?);
        let payload = TransactionEnvelope::signing_payload(
            signer_id,
            &self.contract_name,
            method,
            &args_encoded,
        );
        let signature = key.sign(&payload);
        let envelope = TransactionEnvelope {
            signer_id: signer_id.to_string(),
            receiver_id: self.contract_name.clone(),
            method_name: method.to_string(),
            args: args_encoded,
            public_key: record.public_key.clone(),
            signature: bs58::encode(signature.to_bytes()).into_string(),
        };

        debug!(contract = %self.contract_name, method, signer = signer_id, "submitting change call");
        let outcome = self
            .connection
            .client()
            .broadcast_tx(&serde_json::to_vec(&envelope)?)
            .await
            .map_err(|e| match e {
                RpcError::Node { code, message } => {
                    WalletError::Transaction(format!("node rejected transaction ({code}): {message}"))
                }
                other => WalletError::Rpc(other),
            })?;
        info!(contract = %self.contract_name, method, outcome = %outcome, "change call acknowledged");
        Ok(())
    }

    /// Fetches the whole news feed.
    pub async fn get_all(&self) -> Result<Vec<NewsItem>> {
        let value = self.view("get_all").await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Submits a new feed entry.
    pub async fn add(&self, submission: &NewsSubmission) -> Result<()> {
        self.call("add", submission).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ed25519_dalek::{Signature, SigningKey, Verifier as _};
    use rand::rngs::OsRng;

    #[test]
    fn declared_method_sets_match_the_frontend() {
        assert_eq!(VIEW_METHODS, ["get_all"]);
        assert_eq!(CHANGE_METHODS, ["add"]);
    }

    #[test]
    fn envelope_args_round_trip() {
        let submission = NewsSubmission {
            uri: "http://example.org".to_string(),
            hash_head: "head".to_string(),
            hash_body: "body".to_string(),
        };
        let args = general_purpose::STANDARD.encode(serde_json::to_vec(&submission).unwrap());
        let envelope = TransactionEnvelope {
            signer_id: "alice.testnet".to_string(),
            receiver_id: "news.testnet".to_string(),
            method_name: "add".to_string(),
            args,
            public_key: String::new(),
            signature: String::new(),
        };
        let decoded: NewsSubmission =
            serde_json::from_value(envelope.decode_args().unwrap()).unwrap();
        assert_eq!(decoded, submission);
    }

    #[test]
    fn envelope_signature_verifies() {
        let key = SigningKey::generate(&mut OsRng);
        let payload =
            TransactionEnvelope::signing_payload("alice.testnet", "news.testnet", "add", "e30=");
        let signature = {
            use ed25519_dalek::Signer as _;
            key.sign(&payload)
        };
        let encoded = bs58::encode(signature.to_bytes()).into_string();

        let decoded = bs58::decode(&encoded).into_vec().unwrap();
        let restored = Signature::from_bytes(&decoded.as_slice().try_into().unwrap());
        assert!(key.verifying_key().verify(&payload, &restored).is_ok());
    }
}
