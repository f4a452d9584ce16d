// Copyright (C) 2022-2026 The FreeNews Project.
//
// lib.rs file belongs to the freenews project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! FreeNews Wallets Library
//!
//! This crate provides the authenticated half of the FreeNews client:
//! - File-backed credential store (the persisted local key store)
//! - Wallet session with the external sign-in handoff
//! - Contract proxy with statically declared view/change methods
//! - Session builder tying connection, wallet and contract together
//!
//! Sessions are built per page activation and never shared; state is
//! re-derived from the credential store every time one is built.

pub mod connection;
pub mod contract;
pub mod key_store;
pub mod session;

// Re-export main types
pub use connection::Connection;
pub use contract::{Contract, CHANGE_METHODS, VIEW_METHODS};
pub use key_store::{FileKeyStore, KeyRecord};
pub use session::{Session, SignInRequest, SignedMessage, WalletSession};

use freenews_rpc_client::RpcError;
use thiserror::Error;

/// Result type for wallet operations
pub type Result<T> = std::result::Result<T, WalletError>;

/// Wallet-related errors
#[derive(Error, Debug)]
pub enum WalletError {
    #[error("connection failed: {0}")]
    Connection(String),

    #[error("key store error: {0}")]
    KeyStore(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("method '{0}' is not declared on the contract")]
    MethodNotDeclared(String),

    #[error("wallet is not signed in")]
    NotSignedIn,

    #[error("transaction rejected: {0}")]
    Transaction(String),

    #[error("RPC error: {0}")]
    Rpc(#[from] RpcError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
