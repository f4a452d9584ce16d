// Copyright (C) 2022-2026 The FreeNews Project.
//
// node_status.rs file belongs to the freenews project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use serde::{Deserialize, Serialize};

/// Slice of the node `status` response used as a reachability probe.
///
/// Unknown fields of the real payload are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeStatus {
    pub chain_id: String,

    #[serde(default)]
    pub sync_info: SyncInfo,
}

/// Sync progress of the queried node.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SyncInfo {
    #[serde(default)]
    pub latest_block_height: u64,

    #[serde(default)]
    pub syncing: bool,
}
