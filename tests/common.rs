#![allow(dead_code)]

use chrono::{DateTime, Utc};
use newsdesk::{Article, NewsClient};

pub fn client() -> NewsClient {
    NewsClient::builder().build().unwrap()
}

pub fn ts(s: &str) -> DateTime<Utc> {
    s.parse().unwrap_or_else(|e| panic!("bad test timestamp {s}: {e}"))
}

/// A fully-populated article; only title and publish time vary per test.
pub fn article(title: &str, published_at: Option<&str>) -> Article {
    Article {
        title: title.to_string(),
        description: String::new(),
        url: "https://example.com/story".to_string(),
        image_url: "https://example.com/thumb.png".to_string(),
        published_at: published_at.map(ts),
        source: "Test Wire".to_string(),
    }
}
