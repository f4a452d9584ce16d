// Copyright (C) 2022-2026 The FreeNews Project.
//
// mod.rs file belongs to the freenews project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Wire models for the JSON-RPC transport.

mod call_result;
mod node_status;
mod rpc_request;
mod rpc_response;

pub use call_result::CallResult;
pub use node_status::{NodeStatus, SyncInfo};
pub use rpc_request::RpcRequest;
pub use rpc_response::{RpcResponse, RpcResponseError};
