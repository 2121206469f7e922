//! Fan-out/fan-in aggregation of every configured source into one feed.

mod poll;

pub use poll::{DEFAULT_POLL_INTERVAL, poll};

use std::cmp::Ordering;

use futures::future::join_all;

use crate::core::{Article, MergedResult, NewsClient, ProviderResult};
use crate::source::Source;

/// Overall message reported when no source could be fetched.
pub(crate) const ALL_FAILED_MESSAGE: &str = "Failed to fetch from all news sources";

/// Fetches every source concurrently and merges the results.
///
/// Waits for all sources to settle — a slow or failing provider never blocks
/// or drops the others. Successful batches are concatenated and stable-sorted
/// newest first. Partial failure degrades the feed; only total failure turns
/// into [`MergedResult::AllFailed`].
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(skip_all, fields(sources = sources.len()))
)]
pub async fn fetch_all(client: &NewsClient, sources: &[Source]) -> MergedResult {
    let results = join_all(sources.iter().map(|s| s.fetch(client))).await;
    merge(results)
}

/// Fan-in: concatenate successful batches, sort by recency, reconcile
/// failures.
///
/// An empty input merges to an empty feed, not an outage; an input where
/// every provider failed merges to [`MergedResult::AllFailed`].
#[must_use]
pub fn merge(results: Vec<ProviderResult>) -> MergedResult {
    if !results.is_empty() && results.iter().all(ProviderResult::is_failed) {
        return MergedResult::AllFailed(ALL_FAILED_MESSAGE.to_string());
    }

    let mut articles: Vec<Article> = results
        .into_iter()
        .flat_map(|r| match r {
            ProviderResult::Fetched(articles) => articles,
            ProviderResult::Failed(_) => Vec::new(),
        })
        .collect();
    sort_by_recency(&mut articles);
    MergedResult::Articles(articles)
}

/// Stable descending sort by publish time. Undated articles go last, and
/// equal timestamps keep their arrival order, so re-sorting a sorted feed is
/// an identity.
pub fn sort_by_recency(articles: &mut [Article]) {
    articles.sort_by(|a, b| match (a.published_at, b.published_at) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}
