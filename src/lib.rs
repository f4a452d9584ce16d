//! # FreeNews: blockchain-backed news feed in Rust
//!
//! Core library for the FreeNews application: a small client stack that
//! reads a news feed from a deployed smart contract and submits new
//! entries through a wallet session.
//!
//! The implementation is organized into several crates:
//!
//! - [`freenews_core`] - News domain types and content helpers
//! - [`freenews_config`] - Deployment environment resolution
//! - [`freenews_rpc_client`] - JSON-RPC provider and view-call decoding
//! - [`freenews_wallets`] - Key store, wallet session and contract proxy
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use freenews::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = resolve(Environment::Testnet);
//!     let session = Session::build(config).await?;
//!     let feed = session.contract.get_all().await?;
//!     println!("{} stories", feed.len());
//!     Ok(())
//! }
//! ```

// Re-export all public APIs from member crates
pub use freenews_config as config;
pub use freenews_core as core;
pub use freenews_rpc_client as rpc;
pub use freenews_wallets as wallets;

/// Commonly used types for working with the FreeNews stack.
pub mod prelude {
    pub use crate::config::{resolve, Environment, EnvironmentConfig};
    pub use crate::core::{NewsItem, NewsSubmission};
    pub use crate::rpc::RpcClient;
    pub use crate::wallets::{Contract, Session, WalletSession};
}
