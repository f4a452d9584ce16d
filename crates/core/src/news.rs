use serde::{Deserialize, Serialize};

/// A single feed entry as stored by the news contract.
///
/// Produced only by decoding the contract's `get_all` view response;
/// clients never mutate an item locally, they re-fetch the feed instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: u32,
    pub hash_head: String,
    pub hash_body: String,
    pub uri: String,
    // Deployed contract versions that predate vote counters omit these.
    #[serde(default)]
    pub like: u32,
    #[serde(default)]
    pub dislike: u32,
}

/// Argument of the contract's `add` change method.
///
/// The id is assigned by the contract, so a submission carries none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsSubmission {
    pub uri: String,
    pub hash_head: String,
    pub hash_body: String,
}

/// Merges a freshly fetched feed into a base feed by id.
///
/// Every element of `base` is replaced by the element of `updates` with
/// the same id when one exists; elements without an update are kept
/// unchanged. Elements that only appear in `updates` are ignored.
pub fn right_merge_by_id(base: &[NewsItem], updates: &[NewsItem]) -> Vec<NewsItem> {
    base.iter()
        .map(|item| {
            updates
                .iter()
                .find(|candidate| candidate.id == item.id)
                .unwrap_or(item)
                .clone()
        })
        .collect()
}
