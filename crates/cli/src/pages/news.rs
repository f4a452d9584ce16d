//! News feed page: fetches the feed on activation and renders it.

use super::{PageError, Result};
use freenews_core::NewsItem;
use freenews_wallets::Session;
use std::fmt;
use tracing::debug;

/// Vote direction on a feed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum VoteKind {
    Like,
    Dislike,
}

impl fmt::Display for VoteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VoteKind::Like => write!(f, "like"),
            VoteKind::Dislike => write!(f, "dislike"),
        }
    }
}

/// Controller of the news feed page. Owns its session.
pub struct NewsPage {
    session: Session,
}

impl NewsPage {
    /// Activates the page with an already-built session.
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// Fetches the feed from the contract.
    ///
    /// A failure leaves the caller with no items; the page renders a
    /// visible error instead of stale data.
    pub async fn fetch(&self) -> Result<Vec<NewsItem>> {
        let items = self.session.contract.get_all().await?;
        debug!(count = items.len(), "feed fetched");
        Ok(items)
    }

    /// Votes on a feed entry.
    ///
    /// The contract methods for voting were never wired up, so this
    /// only reports what would happen. It deliberately performs no
    /// chain call.
    pub fn vote(kind: VoteKind, news_id: u32) -> Result<()> {
        Err(PageError::NotYetImplemented(format!(
            "voting ({kind} on news {news_id})"
        )))
    }

    /// Renders the feed the way the list view shows it.
    pub fn render(items: &[NewsItem]) -> String {
        if items.is_empty() {
            return "(no news yet)\n".to_string();
        }
        let mut out = String::new();
        for item in items {
            out.push_str(&format!(
                "#{id} {uri}\n    head: {head}\n    body: {body}\n    +{like} / -{dislike}\n",
                id = item.id,
                uri = item.uri,
                head = item.hash_head,
                body = item.hash_body,
                like = item.like,
                dislike = item.dislike,
            ));
        }
        out
    }
}
