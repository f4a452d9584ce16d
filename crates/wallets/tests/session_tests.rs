//! Session lifecycle tests over a temporary credential store and a mock
//! RPC node.

use freenews_config::{resolve, Environment, EnvironmentConfig};
use freenews_wallets::{FileKeyStore, Session, WalletError};
use serde_json::json;

fn status_body() -> String {
    json!({
        "jsonrpc": "2.0",
        "id": 1,
        "result": {
            "chain_id": "testnet",
            "sync_info": { "latest_block_height": 1, "syncing": false }
        }
    })
    .to_string()
}

/// Testnet config pointed at the mock node.
fn config_for(server: &mockito::Server) -> EnvironmentConfig {
    let mut config = resolve(Environment::Testnet);
    config.node_url = server.url();
    config
}

async fn mock_status(server: &mut mockito::Server) -> mockito::Mock {
    server
        .mock("POST", "/")
        .match_body(mockito::Matcher::PartialJson(json!({ "method": "status" })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(status_body())
        .expect_at_least(1)
        .create_async()
        .await
}

#[tokio::test]
async fn session_starts_signed_out() {
    let mut server = mockito::Server::new_async().await;
    let _status = mock_status(&mut server).await;
    let dir = tempfile::tempdir().unwrap();
    let store = FileKeyStore::open(dir.path()).unwrap();

    let session = Session::build_with_store(config_for(&server), store)
        .await
        .unwrap();
    assert!(!session.wallet.is_signed_in());
    assert!(session.wallet.account_id().is_none());
}

#[tokio::test]
async fn sign_in_flow_reaches_signed_in_and_back() {
    let mut server = mockito::Server::new_async().await;
    let _status = mock_status(&mut server).await;
    let dir = tempfile::tempdir().unwrap();
    let store = FileKeyStore::open(dir.path()).unwrap();

    let mut session = Session::build_with_store(config_for(&server), store.clone())
        .await
        .unwrap();

    // SignedOut -> request: external handoff URL produced, still signed out.
    let request = session
        .wallet
        .request_sign_in("alice.testnet")
        .unwrap()
        .expect("handoff expected while signed out");
    assert_eq!(request.account_id, "alice.testnet");
    assert!(request.url.as_str().contains("login"));
    assert!(!session.wallet.is_signed_in());

    // External wallet authorized; the return leg completes sign-in.
    session.wallet.complete_sign_in("alice.testnet").unwrap();
    assert!(session.wallet.is_signed_in());
    assert_eq!(session.wallet.account_id(), Some("alice.testnet"));

    // Requesting again while signed in is a no-op.
    assert!(session
        .wallet
        .request_sign_in("alice.testnet")
        .unwrap()
        .is_none());

    // SignedIn -> sign_out -> SignedOut.
    session.wallet.sign_out().unwrap();
    assert!(!session.wallet.is_signed_in());

    // Signing out again is a no-op, not an error.
    session.wallet.sign_out().unwrap();
    assert!(!session.wallet.is_signed_in());
}

#[tokio::test]
async fn sign_in_state_survives_session_rebuild() {
    let mut server = mockito::Server::new_async().await;
    let _status = mock_status(&mut server).await;
    let dir = tempfile::tempdir().unwrap();
    let store = FileKeyStore::open(dir.path()).unwrap();

    let mut first = Session::build_with_store(config_for(&server), store.clone())
        .await
        .unwrap();
    first.wallet.request_sign_in("alice.testnet").unwrap();
    first.wallet.complete_sign_in("alice.testnet").unwrap();
    drop(first);

    // The "page reload": a fresh session re-derives state from the store.
    let second = Session::build_with_store(config_for(&server), store)
        .await
        .unwrap();
    assert!(second.wallet.is_signed_in());
    assert_eq!(second.wallet.account_id(), Some("alice.testnet"));
}

#[tokio::test]
async fn complete_sign_in_without_pending_credential_fails() {
    let mut server = mockito::Server::new_async().await;
    let _status = mock_status(&mut server).await;
    let dir = tempfile::tempdir().unwrap();
    let store = FileKeyStore::open(dir.path()).unwrap();

    let mut session = Session::build_with_store(config_for(&server), store)
        .await
        .unwrap();
    let err = session.wallet.complete_sign_in("ghost.testnet").unwrap_err();
    assert!(matches!(err, WalletError::KeyStore(_)));
    assert!(!session.wallet.is_signed_in());
}

#[tokio::test]
async fn signed_message_verifies_with_stored_key() {
    let mut server = mockito::Server::new_async().await;
    let _status = mock_status(&mut server).await;
    let dir = tempfile::tempdir().unwrap();
    let store = FileKeyStore::open(dir.path()).unwrap();

    let mut session = Session::build_with_store(config_for(&server), store.clone())
        .await
        .unwrap();
    session.wallet.request_sign_in("alice.testnet").unwrap();
    session.wallet.complete_sign_in("alice.testnet").unwrap();

    let signed = session.wallet.sign(b"payload").unwrap();
    let record = store.get("testnet", "alice.testnet").unwrap().unwrap();
    assert_eq!(signed.public_key, record.public_key);

    use ed25519_dalek::{Signature, Verifier as _};
    let bytes = bs58::decode(&signed.signature).into_vec().unwrap();
    let signature = Signature::from_bytes(&bytes.as_slice().try_into().unwrap());
    assert!(record
        .verifying_key()
        .unwrap()
        .verify(b"payload", &signature)
        .is_ok());
}

#[tokio::test]
async fn unreachable_node_fails_session_build() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileKeyStore::open(dir.path()).unwrap();
    let mut config = resolve(Environment::Testnet);
    // Nothing listens on this port.
    config.node_url = "http://127.0.0.1:9".to_string();

    let err = Session::build_with_store(config, store).await.unwrap_err();
    assert!(matches!(err, WalletError::Connection(_)));
}

#[tokio::test]
async fn corrupt_credential_store_fails_session_build() {
    let mut server = mockito::Server::new_async().await;
    let _status = mock_status(&mut server).await;
    let dir = tempfile::tempdir().unwrap();
    let store = FileKeyStore::open(dir.path()).unwrap();
    store.set_active("testnet", "alice.testnet").unwrap();
    std::fs::write(
        dir.path().join("testnet").join("alice.testnet.json"),
        "{ not json",
    )
    .unwrap();

    let err = Session::build_with_store(config_for(&server), store)
        .await
        .unwrap_err();
    assert!(matches!(err, WalletError::Connection(_)));
}
