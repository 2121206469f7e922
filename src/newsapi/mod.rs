//! Source adapter for the NewsAPI `/v2/everything` endpoint.

pub(crate) mod wire;

use url::Url;

use crate::core::{Article, FeedError, NewsClient, net};

/// Source label for items whose source block carries no name.
pub const SOURCE_LABEL: &str = "NewsAPI";

const DEFAULT_BASE: &str = "https://newsapi.org/v2/everything";
const DEFAULT_QUERY: &str = "stocks OR earnings";
const DEFAULT_LANGUAGE: &str = "en";

/// Configuration for the NewsAPI source.
#[derive(Debug, Clone)]
pub struct NewsApiConfig {
    base: Url,
    api_key: String,
    query: String,
    language: String,
}

impl NewsApiConfig {
    /// Creates a config with the default endpoint, query terms and language.
    ///
    /// # Panics
    ///
    /// Panics if the hardcoded default endpoint constant is not a valid URL,
    /// which would be a bug in this crate.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base: Url::parse(DEFAULT_BASE).unwrap(),
            api_key: api_key.into(),
            query: DEFAULT_QUERY.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }

    /// (For testing) Overrides the endpoint URL.
    #[must_use]
    pub fn base(mut self, base: Url) -> Self {
        self.base = base;
        self
    }

    /// Sets the search terms sent as `q`.
    #[must_use]
    pub fn query(mut self, q: impl Into<String>) -> Self {
        self.query = q.into();
        self
    }

    /// Sets the article language.
    #[must_use]
    pub fn language(mut self, lang: impl Into<String>) -> Self {
        self.language = lang.into();
        self
    }
}

/// One bounded request against NewsAPI, every raw item normalized through
/// the field-by-field fallback map. Errors stay inside the adapter boundary;
/// the caller converts them into a failure marker.
pub(crate) async fn fetch(
    client: &NewsClient,
    cfg: &NewsApiConfig,
) -> Result<Vec<Article>, FeedError> {
    let mut url = cfg.base.clone();
    url.query_pairs_mut()
        .append_pair("q", &cfg.query)
        .append_pair("language", &cfg.language)
        .append_pair("sortBy", "publishedAt")
        .append_pair("apiKey", &cfg.api_key);

    let resp = client.http().get(url).send().await?;
    let body = net::get_text(resp).await?;
    let envelope: wire::Envelope = serde_json::from_str(&body)?;

    Ok(envelope
        .articles
        .unwrap_or_default()
        .into_iter()
        .map(wire::RawArticle::normalize)
        .collect())
}
