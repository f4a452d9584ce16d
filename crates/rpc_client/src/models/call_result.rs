// Copyright (C) 2022-2026 The FreeNews Project.
//
// call_result.rs file belongs to the freenews project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use serde::{Deserialize, Serialize};

/// Result of a `query` call addressed to a contract function.
///
/// The node returns the function's return value as an array of byte
/// values holding a UTF-8 encoded JSON document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallResult {
    /// Raw return value bytes
    pub result: Vec<u8>,

    /// Log lines emitted during execution
    #[serde(default)]
    pub logs: Vec<String>,

    /// Block the call was evaluated at
    #[serde(default)]
    pub block_height: u64,

    #[serde(default)]
    pub block_hash: Option<String>,
}
