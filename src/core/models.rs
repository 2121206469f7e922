use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::sentiment;

/// Title substituted when a provider item has none.
pub const FALLBACK_TITLE: &str = "No title available";

/// Anchor substituted when a provider item carries no link.
pub const FALLBACK_URL: &str = "#";

/// Image URL substituted when a provider item carries no image. The display
/// layer also falls back to this URL when the resolved image fails to load.
pub const FALLBACK_IMAGE: &str = "https://placehold.co/440x220?text=no+image";

/// One normalized news article.
///
/// Every provider's response shape is mapped into this type before it enters
/// the merged feed, so required fields are always present — via the fallback
/// constants above where the provider omitted them. Articles are rebuilt
/// from scratch on every poll cycle and never mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Article {
    /// The headline.
    pub title: String,
    /// Body snippet or summary; empty when the provider has none.
    pub description: String,
    /// Link to the full story.
    pub url: String,
    /// Thumbnail URL.
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    /// Publish time. `None` when the provider omitted or mangled it; such
    /// articles sort after every dated one.
    #[serde(rename = "publishedAt")]
    pub published_at: Option<DateTime<Utc>>,
    /// Human-readable publisher or provider name.
    pub source: String,
}

impl Article {
    /// Coarse sentiment of the headline, derived on demand from the title.
    #[must_use]
    pub fn sentiment(&self) -> Sentiment {
        sentiment::classify(&self.title)
    }
}

/// Sentiment label attached to a headline by the keyword classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "positive"),
            Sentiment::Negative => write!(f, "negative"),
            Sentiment::Neutral => write!(f, "neutral"),
        }
    }
}

/// One provider's outcome, with failure captured as data.
///
/// A provider that times out, returns a bad status or sends an undecodable
/// body yields [`ProviderResult::Failed`]; the aggregation continues with
/// the remaining providers.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderResult {
    /// Articles fetched and normalized from one provider (possibly none).
    Fetched(Vec<Article>),
    /// The provider could not be fetched; carries a human-readable reason.
    Failed(String),
}

impl ProviderResult {
    /// The fetched articles; empty for a failed provider.
    #[must_use]
    pub fn articles(&self) -> &[Article] {
        match self {
            ProviderResult::Fetched(articles) => articles,
            ProviderResult::Failed(_) => &[],
        }
    }

    /// Whether this provider failed outright.
    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, ProviderResult::Failed(_))
    }
}

/// The aggregator's output.
///
/// Partial failure still produces [`MergedResult::Articles`] — one provider
/// down is degraded service. Only when every provider fails does the feed
/// collapse to [`MergedResult::AllFailed`], so a caller can tell "no news
/// today" from "all sources down".
#[derive(Debug, Clone, PartialEq)]
pub enum MergedResult {
    /// At least one provider succeeded; sorted newest first.
    Articles(Vec<Article>),
    /// Every provider failed; carries the overall failure message.
    AllFailed(String),
}

impl MergedResult {
    /// The merged articles; empty when every provider failed.
    #[must_use]
    pub fn articles(&self) -> &[Article] {
        match self {
            MergedResult::Articles(articles) => articles,
            MergedResult::AllFailed(_) => &[],
        }
    }

    /// The overall failure message, if every provider failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            MergedResult::Articles(_) => None,
            MergedResult::AllFailed(reason) => Some(reason),
        }
    }
}
