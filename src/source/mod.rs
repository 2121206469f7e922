//! The fixed set of upstream providers.

use crate::core::{NewsClient, ProviderResult};
use crate::fmp::{self, FmpConfig};
use crate::gnews::{self, GNewsConfig};
use crate::newsapi::{self, NewsApiConfig};

/// One configured upstream source.
///
/// The variant set is closed: dispatch is a `match`, and each provider's
/// JSON shape stays inside its own module. Adding a provider means adding a
/// module and a variant here; the aggregator is untouched.
#[derive(Debug, Clone)]
pub enum Source {
    NewsApi(NewsApiConfig),
    GNews(GNewsConfig),
    Fmp(FmpConfig),
}

impl Source {
    /// Human-readable provider label, used in failure reasons.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Source::NewsApi(_) => newsapi::SOURCE_LABEL,
            Source::GNews(_) => gnews::SOURCE_LABEL,
            Source::Fmp(_) => fmp::SOURCE_LABEL,
        }
    }

    /// Fetch and normalize this source's articles.
    ///
    /// Infallible at the type level: a transport problem, a bad status or an
    /// undecodable body all come back as [`ProviderResult::Failed`] rather
    /// than an error, so one broken provider cannot abort the aggregation.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip_all, fields(source = self.label()))
    )]
    pub async fn fetch(&self, client: &NewsClient) -> ProviderResult {
        let result = match self {
            Source::NewsApi(cfg) => newsapi::fetch(client, cfg).await,
            Source::GNews(cfg) => gnews::fetch(client, cfg).await,
            Source::Fmp(cfg) => fmp::fetch(client, cfg).await,
        };

        match result {
            Ok(articles) => ProviderResult::Fetched(articles),
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(source = self.label(), error = %e, "provider fetch failed");
                ProviderResult::Failed(format!("{} failed: {e}", self.label()))
            }
        }
    }
}
