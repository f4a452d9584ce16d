// Copyright (C) 2022-2026 The FreeNews Project.
//
// session.rs file belongs to the freenews project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::connection::Connection;
use crate::contract::Contract;
use crate::key_store::KeyRecord;
use crate::{Result, WalletError};
use ed25519_dalek::{Signer as _, SigningKey};
use freenews_config::EnvironmentConfig;
use rand::rngs::OsRng;
use tracing::{debug, info};
use url::Url;

/// Handoff to the external wallet authorization flow.
///
/// The URL is opened by the user outside this process; the session only
/// observes the result once [`WalletSession::complete_sign_in`] runs on
/// the way back.
#[derive(Debug, Clone)]
pub struct SignInRequest {
    pub account_id: String,
    pub url: Url,
}

/// Wallet session bound to one connection.
///
/// Sign-in state is re-derived from the credential store when the
/// session is constructed; there is no in-process callback from the
/// external wallet.
#[derive(Debug)]
pub struct WalletSession {
    connection: Connection,
    account_id: Option<String>,
}

impl WalletSession {
    /// Builds a session, deriving the sign-in state from the store.
    ///
    /// A corrupt store surfaces as a connection failure; a dangling
    /// signed-in marker without a credential counts as signed out.
    pub fn new(connection: &Connection) -> Result<Self> {
        let network_id = connection.network_id().to_string();
        let active = connection
            .key_store()
            .active_account(&network_id)
            .map_err(corrupt_store)?;

        let account_id = match active {
            Some(account) => {
                let record = connection
                    .key_store()
                    .get(&network_id, &account)
                    .map_err(corrupt_store)?;
                if record.is_some() {
                    Some(account)
                } else {
                    debug!(account_id = %account, "signed-in marker without credential, treating as signed out");
                    None
                }
            }
            None => None,
        };

        Ok(Self {
            connection: connection.clone(),
            account_id,
        })
    }

    /// Whether a signed-in account is bound to this session.
    pub fn is_signed_in(&self) -> bool {
        self.account_id.is_some()
    }

    /// The signed-in account, if any.
    pub fn account_id(&self) -> Option<&str> {
        self.account_id.as_deref()
    }

    /// Starts the sign-in flow for an account.
    ///
    /// Generates a fresh key, stores it as the account's pending
    /// credential and returns the external authorization URL the user
    /// must visit. Returns `Ok(None)` when already signed in: repeated
    /// requests are a no-op for the caller.
    pub fn request_sign_in(&self, account_id: &str) -> Result<Option<SignInRequest>> {
        if let Some(current) = &self.account_id {
            debug!(account_id = %current, "sign-in requested while already signed in");
            return Ok(None);
        }

        let key = SigningKey::generate(&mut OsRng);
        let record = KeyRecord::from_signing_key(account_id, &key);
        self.connection
            .key_store()
            .put(self.connection.network_id(), &record)?;

        let url = authorization_url(self.connection.config(), account_id, &record.public_key)?;
        info!(account_id, url = %url, "sign-in handoff prepared");
        Ok(Some(SignInRequest {
            account_id: account_id.to_string(),
            url,
        }))
    }

    /// Return leg of the sign-in flow: the external wallet authorized
    /// the pending credential, so mark the account as signed in.
    pub fn complete_sign_in(&mut self, account_id: &str) -> Result<()> {
        let network_id = self.connection.network_id();
        let record = self.connection.key_store().get(network_id, account_id)?;
        if record.is_none() {
            return Err(WalletError::KeyStore(format!(
                "no pending credential for '{account_id}'"
            )));
        }
        self.connection.key_store().set_active(network_id, account_id)?;
        self.account_id = Some(account_id.to_string());
        info!(account_id, "signed in");
        Ok(())
    }

    /// Clears the local credential and invalidates the session.
    ///
    /// Signing out while already signed out is a no-op.
    pub fn sign_out(&mut self) -> Result<()> {
        match self.account_id.take() {
            Some(account) => {
                let network_id = self.connection.network_id();
                self.connection.key_store().remove(network_id, &account)?;
                self.connection.key_store().clear_active(network_id)?;
                info!(account_id = %account, "signed out");
            }
            None => debug!("sign-out requested while already signed out"),
        }
        Ok(())
    }

    /// Signs a message with the stored credential of the signed-in
    /// account.
    pub fn sign(&self, message: &[u8]) -> Result<SignedMessage> {
        let account = self.account_id.as_deref().ok_or(WalletError::NotSignedIn)?;
        let record = self
            .connection
            .key_store()
            .get(self.connection.network_id(), account)?
            .ok_or(WalletError::NotSignedIn)?;
        let key = record.signing_key()?;
        let signature = key.sign(message);
        Ok(SignedMessage {
            public_key: record.public_key,
            signature: bs58::encode(signature.to_bytes()).into_string(),
        })
    }

    /// Connection this session is bound to.
    pub fn connection(&self) -> &Connection {
        &self.connection
    }
}

/// Signature produced by [`WalletSession::sign`], in wire text form.
#[derive(Debug, Clone)]
pub struct SignedMessage {
    pub public_key: String,
    pub signature: String,
}

fn corrupt_store(err: WalletError) -> WalletError {
    WalletError::Connection(format!("credential store unusable: {err}"))
}

fn authorization_url(
    config: &EnvironmentConfig,
    account_id: &str,
    public_key: &str,
) -> Result<Url> {
    let mut url = Url::parse(&config.wallet_url)
        .map_err(|e| WalletError::Connection(format!("bad wallet URL '{}': {e}", config.wallet_url)))?;
    url.path_segments_mut()
        .map_err(|_| WalletError::Connection(format!("bad wallet URL '{}'", config.wallet_url)))?
        .push("login");
    url.query_pairs_mut()
        .append_pair("contract_id", &config.contract_name)
        .append_pair("account_id", account_id)
        .append_pair("public_key", public_key);
    Ok(url)
}

/// One page's working set: connection, wallet session and contract
/// proxy, built together and owned by the page that asked for it.
#[derive(Debug)]
pub struct Session {
    pub connection: Connection,
    pub wallet: WalletSession,
    pub contract: Contract,
}

impl Session {
    /// Builds a session against the default credential store.
    pub async fn build(config: EnvironmentConfig) -> Result<Self> {
        let connection = Connection::open(config).await?;
        Self::from_connection(connection)
    }

    /// Builds a session with an explicit credential store.
    pub async fn build_with_store(
        config: EnvironmentConfig,
        store: crate::key_store::FileKeyStore,
    ) -> Result<Self> {
        let connection = Connection::open_with_store(config, store).await?;
        Self::from_connection(connection)
    }

    fn from_connection(connection: Connection) -> Result<Self> {
        let wallet = WalletSession::new(&connection)?;
        let contract = Contract::new(&connection, &wallet);
        Ok(Self {
            connection,
            wallet,
            contract,
        })
    }
}
