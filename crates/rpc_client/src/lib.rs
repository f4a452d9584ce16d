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

//! FreeNews RPC Client Library
//!
//! This crate provides the JSON-RPC provider used by the FreeNews
//! application to talk to a chain node: read-only contract view calls
//! (with the node's byte-array result decoding), a liveness probe, and
//! transaction broadcasting for change methods.

pub mod models;
mod error;
mod rpc_client;

pub use error::{Result, RpcError};
pub use rpc_client::{RpcClient, EMPTY_ARGS_BASE58};

// Re-export commonly used types
pub use models::{CallResult, NodeStatus, RpcRequest, RpcResponse, RpcResponseError};
