//! Query search path: routes a user-supplied query to the query-capable
//! provider.
//!
//! A blank query is "no search" and falls back to the default merged feed,
//! so callers get the same output shape either way.

use crate::core::{Article, MergedResult, NewsClient};
use crate::source::Source;
use crate::{feed, fmp};

/// Outcome status of a search, kept separate from the payload so the caller
/// can render "no results" and "request failed" differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    Success,
    Failure,
}

/// A search response: status, article payload and, on failure, a reason.
///
/// An empty article list under [`SearchStatus::Success`] means the query
/// genuinely matched nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub status: SearchStatus,
    pub articles: Vec<Article>,
    pub message: Option<String>,
}

impl SearchResult {
    fn success(articles: Vec<Article>) -> Self {
        Self {
            status: SearchStatus::Success,
            articles,
            message: None,
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            status: SearchStatus::Failure,
            articles: Vec::new(),
            message: Some(message.into()),
        }
    }

    /// Whether the search completed, regardless of how many articles it
    /// matched.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == SearchStatus::Success
    }
}

/// Searches news for a ticker query with default settings.
pub async fn search(client: &NewsClient, sources: &[Source], query: &str) -> SearchResult {
    SearchBuilder::new(client, sources, query).fetch().await
}

/// A builder for searching news by ticker symbols.
#[derive(Debug)]
pub struct SearchBuilder {
    client: NewsClient,
    sources: Vec<Source>,
    query: String,
}

impl SearchBuilder {
    /// Creates a new `SearchBuilder` over the given sources.
    ///
    /// The sources serve two roles: the first [`Source::Fmp`] entry is the
    /// query-capable provider, and the full set is the fallback feed for a
    /// blank query.
    pub fn new(client: &NewsClient, sources: &[Source], query: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            sources: sources.to_vec(),
            query: query.into(),
        }
    }

    /// Executes the search.
    ///
    /// Never returns an error value: transport failures and a missing
    /// query-capable source both surface as [`SearchStatus::Failure`] with a
    /// message.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip_all, fields(query = %self.query))
    )]
    pub async fn fetch(self) -> SearchResult {
        let query = self.query.trim();

        if query.is_empty() {
            // No search requested; hand back the default merged feed.
            return match feed::fetch_all(&self.client, &self.sources).await {
                MergedResult::Articles(articles) => SearchResult::success(articles),
                MergedResult::AllFailed(reason) => SearchResult::failure(reason),
            };
        }

        let Some(cfg) = self.sources.iter().find_map(|s| match s {
            Source::Fmp(cfg) => Some(cfg),
            _ => None,
        }) else {
            return SearchResult::failure("no query-capable source configured");
        };

        // Single provider: its response order stands, no multi-source sort.
        match fmp::fetch_query(&self.client, cfg, query).await {
            Ok(articles) => SearchResult::success(articles),
            Err(e) => SearchResult::failure(format!("search failed: {e}")),
        }
    }
}
