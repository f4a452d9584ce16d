// Copyright (C) 2022-2026 The FreeNews Project.
//
// connection.rs file belongs to the freenews project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::key_store::FileKeyStore;
use crate::{Result, WalletError};
use freenews_config::EnvironmentConfig;
use freenews_rpc_client::RpcClient;
use std::sync::Arc;
use tracing::debug;
use url::Url;

/// Open connection to a chain network: the resolved environment, an RPC
/// client bound to its node, and the local credential store.
///
/// Cheap to clone; session, wallet and contract handles share it.
#[derive(Debug, Clone)]
pub struct Connection {
    config: Arc<EnvironmentConfig>,
    client: Arc<RpcClient>,
    key_store: Arc<FileKeyStore>,
}

impl Connection {
    /// Opens a connection using the default credential store location.
    pub async fn open(config: EnvironmentConfig) -> Result<Self> {
        let store = FileKeyStore::open_default()
            .map_err(|e| WalletError::Connection(format!("cannot open credential store: {e}")))?;
        Self::open_with_store(config, store).await
    }

    /// Opens a connection with an explicit credential store.
    ///
    /// Probes the node with a status query; an unreachable node fails
    /// the connection rather than the first later call.
    pub async fn open_with_store(config: EnvironmentConfig, store: FileKeyStore) -> Result<Self> {
        let url = Url::parse(&config.node_url)
            .map_err(|e| WalletError::Connection(format!("bad node URL '{}': {e}", config.node_url)))?;
        let client = RpcClient::new(url);

        let status = client
            .status()
            .await
            .map_err(|e| WalletError::Connection(format!("node '{}' unreachable: {e}", config.node_url)))?;
        debug!(
            chain_id = %status.chain_id,
            height = status.sync_info.latest_block_height,
            "connected to network"
        );

        Ok(Self {
            config: Arc::new(config),
            client: Arc::new(client),
            key_store: Arc::new(store),
        })
    }

    /// Resolved environment this connection targets.
    pub fn config(&self) -> &EnvironmentConfig {
        &self.config
    }

    /// RPC client bound to the environment's node.
    pub fn client(&self) -> &RpcClient {
        &self.client
    }

    /// Local credential store.
    pub fn key_store(&self) -> &FileKeyStore {
        &self.key_store
    }

    /// Network id shorthand used for key-store addressing.
    pub fn network_id(&self) -> &str {
        &self.config.network_id
    }
}
