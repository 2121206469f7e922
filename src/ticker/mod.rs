//! Finance filter for the scrolling headline ticker.

use crate::core::{Article, Sentiment};

/// Keywords that mark a headline as finance-relevant.
///
/// Matched as case-insensitive substrings of the title — looser than the
/// exact token match used by the sentiment lexicons, so "stocks" matches
/// "stock".
pub const FINANCE_KEYWORDS: &[&str] = &[
    "stock",
    "share",
    "market",
    "dow",
    "nasdaq",
    "s&p",
    "earnings",
    "fed",
    "inflation",
    "economy",
    "trading",
    "invest",
    "ipo",
    "crypto",
    "bitcoin",
    "wall street",
];

/// One ticker entry: a retained article plus its headline sentiment.
#[derive(Debug, Clone, PartialEq)]
pub struct TickerHeadline {
    pub article: Article,
    pub sentiment: Sentiment,
}

/// Selects the finance-relevant subset of a feed, preserving its order.
///
/// The input is expected in the aggregator's recency order and is not
/// re-sorted. Sentiment is computed only for retained articles.
#[must_use]
pub fn financial_headlines(articles: &[Article]) -> Vec<TickerHeadline> {
    articles
        .iter()
        .filter(|a| is_financial(&a.title))
        .map(|a| TickerHeadline {
            article: a.clone(),
            sentiment: a.sentiment(),
        })
        .collect()
}

/// True when the title contains at least one finance keyword.
#[must_use]
pub fn is_financial(title: &str) -> bool {
    let lowered = title.to_lowercase();
    FINANCE_KEYWORDS.iter().any(|k| lowered.contains(k))
}
