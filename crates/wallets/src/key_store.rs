// Copyright (C) 2022-2026 The FreeNews Project.
//
// key_store.rs file belongs to the freenews project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::{Result, WalletError};
use ed25519_dalek::{SigningKey, VerifyingKey};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const KEY_PREFIX: &str = "ed25519:";
const ACTIVE_MARKER: &str = ".active.json";

/// One stored credential: an account and its ed25519 key pair.
///
/// Keys are stored in the `ed25519:<base58>` text form; the private key
/// encodes the 64-byte secret-then-public concatenation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyRecord {
    pub account_id: String,
    pub public_key: String,
    pub private_key: String,
}

impl KeyRecord {
    /// Builds a record from a freshly generated signing key.
    pub fn from_signing_key(account_id: &str, key: &SigningKey) -> Self {
        let keypair = key.to_keypair_bytes();
        Self {
            account_id: account_id.to_string(),
            public_key: encode_key(key.verifying_key().as_bytes()),
            private_key: encode_key(&keypair),
        }
    }

    /// Reconstructs the signing key held by this record.
    pub fn signing_key(&self) -> Result<SigningKey> {
        let bytes = decode_key(&self.private_key)?;
        let secret: [u8; 32] = bytes
            .get(..32)
            .and_then(|b| b.try_into().ok())
            .ok_or_else(|| WalletError::KeyStore("private key is too short".to_string()))?;
        Ok(SigningKey::from_bytes(&secret))
    }

    /// Reconstructs the verifying key held by this record.
    pub fn verifying_key(&self) -> Result<VerifyingKey> {
        let bytes = decode_key(&self.public_key)?;
        let public: [u8; 32] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| WalletError::KeyStore("public key has wrong length".to_string()))?;
        VerifyingKey::from_bytes(&public)
            .map_err(|e| WalletError::KeyStore(format!("invalid public key: {e}")))
    }
}

fn encode_key(bytes: &[u8]) -> String {
    format!("{KEY_PREFIX}{}", bs58::encode(bytes).into_string())
}

fn decode_key(text: &str) -> Result<Vec<u8>> {
    let encoded = text
        .strip_prefix(KEY_PREFIX)
        .ok_or_else(|| WalletError::KeyStore(format!("key '{text}' lacks the ed25519 prefix")))?;
    bs58::decode(encoded)
        .into_vec()
        .map_err(|e| WalletError::KeyStore(format!("invalid base58 key: {e}")))
}

/// Marker naming the currently signed-in account of a network.
#[derive(Debug, Serialize, Deserialize)]
struct ActiveAccount {
    account_id: String,
}

/// Persisted local credential store: one JSON record per
/// network/account pair under a root directory, plus a per-network
/// marker for the signed-in account.
///
/// Only the wallet layer reads or writes this store.
#[derive(Debug, Clone)]
pub struct FileKeyStore {
    root: PathBuf,
}

impl FileKeyStore {
    /// Opens (creating if needed) a store rooted at `root`.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        debug!(root = %root.display(), "credential store opened");
        Ok(Self { root })
    }

    /// Opens the store at the default per-user location
    /// (`~/.freenews/credentials`).
    pub fn open_default() -> Result<Self> {
        let home = dirs::home_dir()
            .ok_or_else(|| WalletError::KeyStore("cannot locate home directory".to_string()))?;
        Self::open(home.join(".freenews").join("credentials"))
    }

    /// Root directory of this store.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn network_dir(&self, network_id: &str) -> PathBuf {
        self.root.join(network_id)
    }

    fn record_path(&self, network_id: &str, account_id: &str) -> PathBuf {
        self.network_dir(network_id).join(format!("{account_id}.json"))
    }

    /// Loads the credential of an account, if one is stored.
    ///
    /// A present but unreadable record is an error, not a signed-out
    /// state.
    pub fn get(&self, network_id: &str, account_id: &str) -> Result<Option<KeyRecord>> {
        let path = self.record_path(network_id, account_id);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let record: KeyRecord = serde_json::from_str(&raw).map_err(|e| {
            WalletError::KeyStore(format!("corrupt record {}: {e}", path.display()))
        })?;
        Ok(Some(record))
    }

    /// Stores (or replaces) the credential of an account.
    pub fn put(&self, network_id: &str, record: &KeyRecord) -> Result<()> {
        let dir = self.network_dir(network_id);
        fs::create_dir_all(&dir)?;
        let path = self.record_path(network_id, &record.account_id);
        fs::write(&path, serde_json::to_string_pretty(record)?)?;
        info!(network_id, account_id = %record.account_id, "credential stored");
        Ok(())
    }

    /// Removes the credential of an account. Removing an absent record
    /// is a no-op.
    pub fn remove(&self, network_id: &str, account_id: &str) -> Result<()> {
        let path = self.record_path(network_id, account_id);
        match fs::remove_file(&path) {
            Ok(()) => {
                info!(network_id, account_id, "credential removed");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Lists the accounts with stored credentials on a network.
    pub fn accounts(&self, network_id: &str) -> Result<Vec<String>> {
        let dir = self.network_dir(network_id);
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        let mut accounts = Vec::new();
        for entry in entries {
            let name = entry?.file_name();
            let name = name.to_string_lossy();
            if let Some(account) = name.strip_suffix(".json") {
                if !name.starts_with('.') {
                    accounts.push(account.to_string());
                }
            }
        }
        accounts.sort();
        Ok(accounts)
    }

    /// Account currently marked as signed in on a network, if any.
    pub fn active_account(&self, network_id: &str) -> Result<Option<String>> {
        let path = self.network_dir(network_id).join(ACTIVE_MARKER);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let marker: ActiveAccount = serde_json::from_str(&raw).map_err(|e| {
            WalletError::KeyStore(format!("corrupt marker {}: {e}", path.display()))
        })?;
        Ok(Some(marker.account_id))
    }

    /// Marks an account as signed in on a network.
    pub fn set_active(&self, network_id: &str, account_id: &str) -> Result<()> {
        let dir = self.network_dir(network_id);
        fs::create_dir_all(&dir)?;
        let marker = ActiveAccount {
            account_id: account_id.to_string(),
        };
        fs::write(dir.join(ACTIVE_MARKER), serde_json::to_string(&marker)?)?;
        Ok(())
    }

    /// Clears the signed-in marker of a network. Clearing an absent
    /// marker is a no-op.
    pub fn clear_active(&self, network_id: &str) -> Result<()> {
        match fs::remove_file(self.network_dir(network_id).join(ACTIVE_MARKER)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::OsRng;

    fn store() -> (tempfile::TempDir, FileKeyStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKeyStore::open(dir.path()).unwrap();
        (dir, store)
    }

    #[test]
    fn record_round_trips_signing_key() {
        let key = SigningKey::generate(&mut OsRng);
        let record = KeyRecord::from_signing_key("alice.testnet", &key);
        let restored = record.signing_key().unwrap();
        assert_eq!(restored.to_bytes(), key.to_bytes());
        assert_eq!(
            record.verifying_key().unwrap().as_bytes(),
            key.verifying_key().as_bytes()
        );
    }

    #[test]
    fn get_returns_none_for_unknown_account() {
        let (_dir, store) = store();
        assert!(store.get("testnet", "nobody.testnet").unwrap().is_none());
    }

    #[test]
    fn put_then_get_then_remove() {
        let (_dir, store) = store();
        let key = SigningKey::generate(&mut OsRng);
        let record = KeyRecord::from_signing_key("alice.testnet", &key);
        store.put("testnet", &record).unwrap();

        let loaded = store.get("testnet", "alice.testnet").unwrap().unwrap();
        assert_eq!(loaded.public_key, record.public_key);
        assert_eq!(store.accounts("testnet").unwrap(), vec!["alice.testnet"]);

        store.remove("testnet", "alice.testnet").unwrap();
        assert!(store.get("testnet", "alice.testnet").unwrap().is_none());
    }

    #[test]
    fn remove_missing_record_is_a_noop() {
        let (_dir, store) = store();
        store.remove("testnet", "ghost.testnet").unwrap();
    }

    #[test]
    fn corrupt_record_is_an_error_not_signed_out() {
        let (_dir, store) = store();
        let dir = store.root().join("testnet");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("broken.testnet.json"), "{ not json").unwrap();

        let err = store.get("testnet", "broken.testnet").unwrap_err();
        assert!(matches!(err, WalletError::KeyStore(_)));
    }

    #[test]
    fn active_marker_lifecycle() {
        let (_dir, store) = store();
        assert!(store.active_account("testnet").unwrap().is_none());

        store.set_active("testnet", "alice.testnet").unwrap();
        assert_eq!(
            store.active_account("testnet").unwrap().as_deref(),
            Some("alice.testnet")
        );

        store.clear_active("testnet").unwrap();
        assert!(store.active_account("testnet").unwrap().is_none());
        // idempotent
        store.clear_active("testnet").unwrap();
    }

    #[test]
    fn networks_are_isolated() {
        let (_dir, store) = store();
        let key = SigningKey::generate(&mut OsRng);
        let record = KeyRecord::from_signing_key("alice.testnet", &key);
        store.put("testnet", &record).unwrap();
        assert!(store.get("mainnet", "alice.testnet").unwrap().is_none());
    }
}
