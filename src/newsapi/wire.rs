use serde::Deserialize;

use crate::core::conversions::datetime_from_rfc3339;
use crate::core::models::{Article, FALLBACK_IMAGE, FALLBACK_TITLE, FALLBACK_URL};

#[derive(Deserialize)]
pub(crate) struct Envelope {
    #[allow(dead_code)]
    #[serde(default)]
    pub(crate) status: Option<String>,
    #[allow(dead_code)]
    #[serde(rename = "totalResults")]
    #[serde(default)]
    pub(crate) total_results: Option<i64>,
    #[serde(default)]
    pub(crate) articles: Option<Vec<RawArticle>>,
}

#[derive(Deserialize)]
pub(crate) struct RawArticle {
    #[serde(default)]
    pub(crate) source: Option<RawSource>,
    #[serde(default)]
    pub(crate) title: Option<String>,
    #[serde(default)]
    pub(crate) description: Option<String>,
    #[serde(default)]
    pub(crate) url: Option<String>,
    #[serde(rename = "urlToImage")]
    #[serde(default)]
    pub(crate) url_to_image: Option<String>,
    #[serde(rename = "publishedAt")]
    #[serde(default)]
    pub(crate) published_at: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct RawSource {
    #[serde(default)]
    pub(crate) name: Option<String>,
}

impl RawArticle {
    /// Field-by-field fallbacks; one missing field never drops the item.
    pub(crate) fn normalize(self) -> Article {
        Article {
            title: self.title.unwrap_or_else(|| FALLBACK_TITLE.to_string()),
            description: self.description.unwrap_or_default(),
            url: self.url.unwrap_or_else(|| FALLBACK_URL.to_string()),
            image_url: self
                .url_to_image
                .unwrap_or_else(|| FALLBACK_IMAGE.to_string()),
            published_at: self.published_at.as_deref().and_then(datetime_from_rfc3339),
            source: self
                .source
                .and_then(|s| s.name)
                .unwrap_or_else(|| super::SOURCE_LABEL.to_string()),
        }
    }
}
