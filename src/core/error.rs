use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
///
/// Errors of this type only travel inside a source adapter. At the
/// aggregation boundary they are flattened into a human-readable failure
/// marker ([`ProviderResult::Failed`](crate::ProviderResult::Failed)) so a
/// broken provider can never abort the feed.
#[derive(Debug, Error)]
pub enum FeedError {
    /// An error occurred during an HTTP request, including timeouts.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A response body could not be decoded as the provider's JSON shape.
    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },
}
