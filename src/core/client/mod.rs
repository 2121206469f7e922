//! Public client surface + builder.
//! Defaults (UA, timeout) live in `constants`.

mod constants;

use std::time::Duration;

use constants::{DEFAULT_TIMEOUT, USER_AGENT};
use reqwest::Client;

use crate::core::FeedError;

/// HTTP client shared by every source adapter.
///
/// Built once and passed into each fetch — there is no module-level global
/// configuration. Cloning is cheap (the inner `reqwest::Client` is
/// reference-counted).
#[derive(Debug, Clone)]
pub struct NewsClient {
    http: Client,
}

impl Default for NewsClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl NewsClient {
    /// Create a new builder.
    pub fn builder() -> NewsClientBuilder {
        NewsClientBuilder::default()
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct NewsClientBuilder {
    user_agent: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl NewsClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Set the overall per-request timeout. Default: 5 seconds.
    ///
    /// A request that exceeds this bound is reported as an ordinary provider
    /// failure; there is no retry beyond the next poll cycle.
    #[must_use]
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns a `FeedError` if the underlying HTTP client cannot be
    /// constructed (e.g. no TLS backend available).
    pub fn build(self) -> Result<NewsClient, FeedError> {
        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT));

        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        Ok(NewsClient {
            http: httpb.build()?,
        })
    }
}
