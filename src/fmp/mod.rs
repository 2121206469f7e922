//! Source adapter for Financial Modeling Prep's `stock_news` endpoint.
//!
//! FMP doubles as the query-capable provider: the search path routes a
//! user-supplied ticker list through [`fetch_query`] against the same
//! endpoint and normalization.

pub(crate) mod wire;

use url::Url;

use crate::core::{Article, FeedError, NewsClient, net};

/// Source label for items whose `site` field is absent.
pub const SOURCE_LABEL: &str = "Financial Modeling Prep";

const DEFAULT_BASE: &str = "https://financialmodelingprep.com/api/v3/";
const DEFAULT_LIMIT: u32 = 10;

/// Configuration for the Financial Modeling Prep source.
#[derive(Debug, Clone)]
pub struct FmpConfig {
    base: Url,
    api_key: String,
    tickers: Option<String>,
    limit: u32,
}

impl FmpConfig {
    /// Creates a config with the default endpoint and result limit. With no
    /// ticker filter set, the feed fetch pulls the latest stock news across
    /// all symbols.
    ///
    /// # Panics
    ///
    /// Panics if the hardcoded default endpoint constant is not a valid URL,
    /// which would be a bug in this crate.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base: Url::parse(DEFAULT_BASE).unwrap(),
            api_key: api_key.into(),
            tickers: None,
            limit: DEFAULT_LIMIT,
        }
    }

    /// (For testing) Overrides the API base URL.
    #[must_use]
    pub fn base(mut self, base: Url) -> Self {
        self.base = base;
        self
    }

    /// Restricts the feed fetch to a comma-separated ticker list.
    #[must_use]
    pub fn tickers(mut self, tickers: impl Into<String>) -> Self {
        self.tickers = Some(tickers.into());
        self
    }

    /// Sets the maximum number of articles to return.
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }
}

/// Feed-side fetch: latest stock news, optionally filtered by the
/// configured tickers.
pub(crate) async fn fetch(client: &NewsClient, cfg: &FmpConfig) -> Result<Vec<Article>, FeedError> {
    fetch_stock_news(client, cfg, cfg.tickers.as_deref()).await
}

/// Search-side fetch: the user's query replaces the configured tickers.
pub(crate) async fn fetch_query(
    client: &NewsClient,
    cfg: &FmpConfig,
    tickers: &str,
) -> Result<Vec<Article>, FeedError> {
    fetch_stock_news(client, cfg, Some(tickers)).await
}

async fn fetch_stock_news(
    client: &NewsClient,
    cfg: &FmpConfig,
    tickers: Option<&str>,
) -> Result<Vec<Article>, FeedError> {
    let mut url = cfg.base.join("stock_news")?;
    {
        let mut qp = url.query_pairs_mut();
        if let Some(t) = tickers {
            qp.append_pair("tickers", t);
        }
        qp.append_pair("limit", &cfg.limit.to_string());
        qp.append_pair("apikey", &cfg.api_key);
    }

    let resp = client.http().get(url).send().await?;
    let body = net::get_text(resp).await?;
    // FMP returns a bare array, no envelope.
    let items: Vec<wire::RawStockNews> = serde_json::from_str(&body)?;

    Ok(items.into_iter().map(wire::RawStockNews::normalize).collect())
}
