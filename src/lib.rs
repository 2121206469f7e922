//! newsdesk: multi-source news aggregation client.
//!
//! Polls NewsAPI, GNews and Financial Modeling Prep concurrently, normalizes
//! each provider's response shape into a common [`Article`], and merges
//! everything into a single feed sorted newest first. On top of the feed, a
//! keyword heuristic tags headlines with a coarse [`Sentiment`] label and a
//! finance filter selects the subset worth scrolling on a ticker.
//!
//! The crate is the data half of a news viewer: rendering, image-load
//! fallbacks and refresh UI belong to the consumer. Provider failures are
//! captured as values, never panics — a source that is down degrades the
//! feed for one cycle and is retried from scratch on the next.

pub mod core;
pub mod feed;
pub mod fmp;
pub mod gnews;
pub mod newsapi;
pub mod search;
pub mod sentiment;
pub mod source;
pub mod ticker;

pub use crate::core::{
    Article, FeedError, MergedResult, NewsClient, NewsClientBuilder, ProviderResult, Sentiment,
};
pub use feed::{DEFAULT_POLL_INTERVAL, fetch_all, poll};
pub use fmp::FmpConfig;
pub use gnews::GNewsConfig;
pub use newsapi::NewsApiConfig;
pub use search::{SearchBuilder, SearchResult, SearchStatus, search};
pub use source::Source;
pub use ticker::{TickerHeadline, financial_headlines};
