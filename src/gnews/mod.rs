//! Source adapter for the GNews `/api/v4/search` endpoint.

pub(crate) mod wire;

use url::Url;

use crate::core::{Article, FeedError, NewsClient, net};

/// Source label for items whose source block carries no name.
pub const SOURCE_LABEL: &str = "GNews";

const DEFAULT_BASE: &str = "https://gnews.io/api/v4/search";
const DEFAULT_QUERY: &str = "earnings OR stocks";
const DEFAULT_LANG: &str = "en";
const DEFAULT_COUNTRY: &str = "us";
const DEFAULT_MAX: u32 = 10;

/// Configuration for the GNews source.
#[derive(Debug, Clone)]
pub struct GNewsConfig {
    base: Url,
    token: String,
    query: String,
    lang: String,
    country: String,
    max: u32,
}

impl GNewsConfig {
    /// Creates a config with the default endpoint, query terms, locale and
    /// result limit.
    ///
    /// # Panics
    ///
    /// Panics if the hardcoded default endpoint constant is not a valid URL,
    /// which would be a bug in this crate.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            base: Url::parse(DEFAULT_BASE).unwrap(),
            token: token.into(),
            query: DEFAULT_QUERY.to_string(),
            lang: DEFAULT_LANG.to_string(),
            country: DEFAULT_COUNTRY.to_string(),
            max: DEFAULT_MAX,
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
    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    /// Sets the source country.
    #[must_use]
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    /// Sets the maximum number of articles to return.
    #[must_use]
    pub const fn max(mut self, max: u32) -> Self {
        self.max = max;
        self
    }
}

/// One bounded request against GNews; raw items go through the shared
/// fallback map, so a half-filled item still yields a complete `Article`.
pub(crate) async fn fetch(
    client: &NewsClient,
    cfg: &GNewsConfig,
) -> Result<Vec<Article>, FeedError> {
    let mut url = cfg.base.clone();
    url.query_pairs_mut()
        .append_pair("q", &cfg.query)
        .append_pair("lang", &cfg.lang)
        .append_pair("country", &cfg.country)
        .append_pair("max", &cfg.max.to_string())
        .append_pair("token", &cfg.token);

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
