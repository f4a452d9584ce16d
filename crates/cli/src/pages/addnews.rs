//! Add-news page: form validation, optional content digesting and
//! submission through the contract's `add` change method.

use super::{PageError, Result};
use freenews_core::{sha256_hex, NewsSubmission};
use freenews_wallets::Session;
use tracing::info;

/// Raw form input of the add-news page.
#[derive(Debug, Clone, Default)]
pub struct NewsForm {
    pub uri: String,
    pub header: String,
    pub body: String,
}

impl NewsForm {
    /// Validates the form the way the page does before submitting:
    /// every field filled, uri a well-formed http(s) URL.
    pub fn validate(&self) -> Result<()> {
        if self.uri.trim().is_empty() {
            return Err(PageError::Validation("uri must not be empty".to_string()));
        }
        if self.header.trim().is_empty() {
            return Err(PageError::Validation("header must not be empty".to_string()));
        }
        if self.body.trim().is_empty() {
            return Err(PageError::Validation("body must not be empty".to_string()));
        }
        let parsed = url::Url::parse(&self.uri)
            .map_err(|e| PageError::Validation(format!("uri is not a valid URL: {e}")))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(PageError::Validation(format!(
                "uri must use http or https, not '{}'",
                parsed.scheme()
            )));
        }
        if parsed.host().is_none() {
            return Err(PageError::Validation("uri has no host".to_string()));
        }
        Ok(())
    }

    /// Converts the form into the change-method argument. With
    /// `digest`, header and body are fingerprinted instead of sent as
    /// raw text.
    pub fn into_submission(self, digest: bool) -> NewsSubmission {
        let (hash_head, hash_body) = if digest {
            (sha256_hex(&self.header), sha256_hex(&self.body))
        } else {
            (self.header, self.body)
        };
        NewsSubmission {
            uri: self.uri,
            hash_head,
            hash_body,
        }
    }
}

/// Controller of the add-news page. Owns its session.
pub struct AddNewsPage {
    session: Session,
}

impl AddNewsPage {
    /// Activates the page with an already-built session.
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// Validates and submits the form.
    ///
    /// On success, returns the path of the page to navigate to. On
    /// failure nothing is navigated: the caller stays on the form.
    pub async fn submit(&self, form: NewsForm, digest: bool) -> Result<String> {
        form.validate()?;
        let submission = form.into_submission(digest);
        self.session.contract.add(&submission).await?;
        info!(uri = %submission.uri, "news entry submitted");
        Ok("/news".to_string())
    }
}
