//! Page controllers for the three application pages.
//!
//! Each page owns the session it builds on activation; nothing is
//! shared between pages, mirroring the per-mount sessions of the web
//! front end.

pub mod addnews;
pub mod news;
pub mod wallet;

use freenews_config::{ConfigError, EnvironmentConfig};
use freenews_wallets::{FileKeyStore, Session, WalletError};
use std::path::Path;
use thiserror::Error;

/// Failures surfaced to the command layer.
#[derive(Error, Debug)]
pub enum PageError {
    /// Deliberate stub: the action exists in the UI but has no chain
    /// semantics yet.
    #[error("{0} is not yet implemented")]
    NotYetImplemented(String),

    #[error("invalid form: {0}")]
    Validation(String),

    #[error(transparent)]
    Wallet(#[from] WalletError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type for page operations
pub type Result<T> = std::result::Result<T, PageError>;

/// Builds a fresh session for a page activation, honoring an explicit
/// credentials directory when one was given.
pub async fn build_session(
    config: EnvironmentConfig,
    credentials_dir: Option<&Path>,
) -> Result<Session> {
    let session = match credentials_dir {
        Some(dir) => {
            let store = FileKeyStore::open(dir)?;
            Session::build_with_store(config, store).await?
        }
        None => Session::build(config).await?,
    };
    Ok(session)
}
