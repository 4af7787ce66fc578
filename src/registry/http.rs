//! Blocking HTTP download of the BLZ feed.

use std::time::Duration;

use super::{FeedSource, RegistryConfig, decode_latin1};
use crate::core::BankdatenError;

/// Fetches the registry feed with an HTTP GET.
///
/// Sends an explicit User-Agent; the Bundesbank CDN rejects requests that
/// carry none. The body is decoded as ISO-8859-1. There is no retry: a failed
/// download aborts the run and the caller decides whether to try again.
#[derive(Debug, Clone)]
pub struct HttpFeed {
    url: String,
    user_agent: String,
    timeout: Duration,
}

impl HttpFeed {
    /// Create a feed for `url` with the default User-Agent and timeout.
    pub fn new(url: impl Into<String>) -> Self {
        let defaults = RegistryConfig::default();
        Self {
            url: url.into(),
            user_agent: defaults.user_agent,
            timeout: Duration::from_secs(defaults.timeout_secs),
        }
    }

    /// Create a feed from the URL, User-Agent and timeout in `config`.
    pub fn from_config(config: &RegistryConfig) -> Self {
        Self {
            url: config.feed_url.clone(),
            user_agent: config.user_agent.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }

    /// The feed URL.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl FeedSource for HttpFeed {
    fn fetch(&self) -> Result<String, BankdatenError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent.as_str())
            .build()
            .map_err(|e| BankdatenError::RegistryUnavailable(e.to_string()))?;

        tracing::info!(url = %self.url, "downloading BLZ registry");
        let resp = client
            .get(&self.url)
            .send()
            .map_err(|e| BankdatenError::RegistryUnavailable(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(BankdatenError::RegistryUnavailable(format!(
                "HTTP {status} from {}",
                self.url
            )));
        }

        let body = resp
            .bytes()
            .map_err(|e| BankdatenError::RegistryUnavailable(e.to_string()))?;
        Ok(decode_latin1(&body))
    }
}
