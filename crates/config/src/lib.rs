//! FreeNews Configuration Module
//!
//! Maps a named deployment environment to the fixed endpoint parameters
//! of that NEAR network: RPC node, wallet, helper and the news contract
//! account. Resolution is a pure function of the environment name; the
//! process environment is only consulted by [`resolve_from_env`], once
//! at startup.

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Contract account used when no deploy-time override is provided.
pub const DEFAULT_CONTRACT_NAME: &str = "your-account.testnet";

/// Contract account of the development deployment on testnet.
pub const TESTNET_CONTRACT_NAME: &str = "dev-1639058472488-73443661948457";

/// Variable naming the deployment environment, read once at startup.
pub const ENV_VAR: &str = "NEWS_ENV";

/// Variable overriding the contract account for production/betanet.
pub const CONTRACT_VAR: &str = "CONTRACT_NAME";

/// Configuration errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unconfigured environment '{0}'")]
    UnknownEnvironment(String),
}

/// Named deployment target for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Production,
    Mainnet,
    Development,
    #[default]
    Testnet,
    Betanet,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Production => write!(f, "production"),
            Environment::Mainnet => write!(f, "mainnet"),
            Environment::Development => write!(f, "development"),
            Environment::Testnet => write!(f, "testnet"),
            Environment::Betanet => write!(f, "betanet"),
        }
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "production" => Ok(Environment::Production),
            "mainnet" => Ok(Environment::Mainnet),
            "development" => Ok(Environment::Development),
            "testnet" => Ok(Environment::Testnet),
            "betanet" => Ok(Environment::Betanet),
            other => Err(ConfigError::UnknownEnvironment(other.to_string())),
        }
    }
}

/// Endpoint parameters of one deployment environment.
///
/// Immutable once resolved; a session never re-resolves its config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    pub network_id: String,
    pub node_url: String,
    pub contract_name: String,
    pub wallet_url: String,
    pub helper_url: String,
    pub explorer_url: Option<String>,
}

/// Resolves an environment to its endpoint parameters.
///
/// Pure function of the input; the contract account for production and
/// betanet falls back to [`DEFAULT_CONTRACT_NAME`].
pub fn resolve(env: Environment) -> EnvironmentConfig {
    resolve_with_contract(env, None)
}

/// Resolves an environment, overriding the contract account where the
/// environment permits it (production/mainnet and betanet).
///
/// The development/testnet deployment is pinned to its dev contract and
/// ignores the override.
pub fn resolve_with_contract(env: Environment, contract: Option<String>) -> EnvironmentConfig {
    let overridden = contract.unwrap_or_else(|| DEFAULT_CONTRACT_NAME.to_string());
    match env {
        Environment::Production | Environment::Mainnet => EnvironmentConfig {
            network_id: "mainnet".to_string(),
            node_url: "https://rpc.mainnet.near.org".to_string(),
            contract_name: overridden,
            wallet_url: "https://wallet.near.org".to_string(),
            helper_url: "https://helper.mainnet.near.org".to_string(),
            explorer_url: None,
        },
        Environment::Development | Environment::Testnet => EnvironmentConfig {
            network_id: "testnet".to_string(),
            node_url: "https://rpc.testnet.near.org".to_string(),
            contract_name: TESTNET_CONTRACT_NAME.to_string(),
            wallet_url: "https://wallet.testnet.near.org".to_string(),
            helper_url: "https://helper.testnet.near.org".to_string(),
            explorer_url: Some("https://explorer.testnet.near.org".to_string()),
        },
        Environment::Betanet => EnvironmentConfig {
            network_id: "betanet".to_string(),
            node_url: "https://rpc.betanet.near.org".to_string(),
            contract_name: overridden,
            wallet_url: "https://wallet.betanet.near.org".to_string(),
            helper_url: "https://helper.betanet.near.org".to_string(),
            explorer_url: None,
        },
    }
}

/// Resolves the startup configuration from the process environment:
/// `NEWS_ENV` names the environment (default testnet) and
/// `CONTRACT_NAME` optionally overrides the contract account.
pub fn resolve_from_env() -> Result<EnvironmentConfig, ConfigError> {
    from_vars(env::var(ENV_VAR).ok().as_deref(), env::var(CONTRACT_VAR).ok())
}

fn from_vars(
    env_name: Option<&str>,
    contract: Option<String>,
) -> Result<EnvironmentConfig, ConfigError> {
    let env = match env_name {
        Some(name) => name.parse()?,
        None => Environment::default(),
    };
    Ok(resolve_with_contract(env, contract))
}
