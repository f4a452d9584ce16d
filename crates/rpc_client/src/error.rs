// Copyright (C) 2022-2026 The FreeNews Project.
//
// error.rs file belongs to the freenews project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use thiserror::Error;

/// Result type for RPC operations
pub type Result<T> = std::result::Result<T, RpcError>;

/// Errors surfaced by the RPC client.
///
/// `Transport`, `Node` and `MissingResult` cover failed queries;
/// `InvalidUtf8` and `Json` cover responses whose byte payload could
/// not be decoded into a JSON value.
#[derive(Error, Debug)]
pub enum RpcError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("node returned error {code}: {message}")]
    Node { code: i64, message: String },

    #[error("response contained no result")]
    MissingResult,

    #[error("call result bytes are not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    #[error("call result is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid node URL '{0}'")]
    InvalidUrl(String),
}
