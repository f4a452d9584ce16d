//! Wallet page: sign-in state display and the external authorization
//! handoff.

use super::Result;
use freenews_wallets::{Session, SignInRequest};

/// Controller of the wallet page. Owns its session.
pub struct WalletPage {
    session: Session,
}

impl WalletPage {
    /// Activates the page with an already-built session.
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// Renders the current sign-in state.
    pub fn status(&self) -> String {
        match self.session.wallet.account_id() {
            Some(account) => format!("Hello {account}\n"),
            None => "signed out\n".to_string(),
        }
    }

    /// Starts the sign-in flow. `None` means the wallet was already
    /// signed in and nothing needed to happen.
    pub fn sign_in(&self, account_id: &str) -> Result<Option<SignInRequest>> {
        Ok(self.session.wallet.request_sign_in(account_id)?)
    }

    /// Return leg of the sign-in flow, run once the external wallet
    /// authorized the credential.
    pub fn complete(&mut self, account_id: &str) -> Result<()> {
        Ok(self.session.wallet.complete_sign_in(account_id)?)
    }

    /// Signs out; idempotent.
    pub fn sign_out(&mut self) -> Result<()> {
        Ok(self.session.wallet.sign_out()?)
    }
}
