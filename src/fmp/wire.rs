use serde::Deserialize;

use crate::core::conversions::datetime_from_fmp;
use crate::core::models::{Article, FALLBACK_IMAGE, FALLBACK_TITLE, FALLBACK_URL};

#[derive(Deserialize)]
pub(crate) struct RawStockNews {
    #[allow(dead_code)]
    #[serde(default)]
    pub(crate) symbol: Option<String>,
    #[serde(rename = "publishedDate")]
    #[serde(default)]
    pub(crate) published_date: Option<String>,
    #[serde(default)]
    pub(crate) title: Option<String>,
    #[serde(default)]
    pub(crate) image: Option<String>,
    #[serde(default)]
    pub(crate) site: Option<String>,
    #[serde(default)]
    pub(crate) text: Option<String>,
    #[serde(default)]
    pub(crate) url: Option<String>,
}

impl RawStockNews {
    /// Field-by-field fallbacks; one missing field never drops the item.
    /// FMP's `text` maps to the description and `site` to the source name.
    pub(crate) fn normalize(self) -> Article {
        Article {
            title: self.title.unwrap_or_else(|| FALLBACK_TITLE.to_string()),
            description: self.text.unwrap_or_default(),
            url: self.url.unwrap_or_else(|| FALLBACK_URL.to_string()),
            image_url: self.image.unwrap_or_else(|| FALLBACK_IMAGE.to_string()),
            published_at: self.published_date.as_deref().and_then(datetime_from_fmp),
            source: self.site.unwrap_or_else(|| super::SOURCE_LABEL.to_string()),
        }
    }
}
