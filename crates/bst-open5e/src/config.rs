//! Configuration for the Open5e client.

use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Public Open5e API root.
pub const DEFAULT_BASE_URL: &str = "https://api.open5e.com/";

/// Results requested per search. Only the first page is read.
pub const DEFAULT_LIMIT: u32 = 100;

/// Request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings for [`crate::Open5eClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root; `monsters/` is appended to it.
    pub base_url: String,
    /// Page size for every search request.
    pub limit: u32,
    /// Timeout applied to each request.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            limit: DEFAULT_LIMIT,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// - `OPEN5E_URL`
    /// - `OPEN5E_LIMIT`
    /// - `OPEN5E_TIMEOUT_SECS`
    ///
    /// Unset or unparsable variables keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(url) = lookup("OPEN5E_URL").filter(|url| !url.trim().is_empty()) {
            config = config.with_base_url(url);
        }
        if let Some(limit) = parse::<u32>(lookup("OPEN5E_LIMIT")) {
            config = config.with_limit(limit);
        }
        if let Some(secs) = parse::<u64>(lookup("OPEN5E_TIMEOUT_SECS")) {
            config = config.with_timeout(Duration::from_secs(secs));
        }

        config
    }

    /// Set the API root.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the page size (at least 1).
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit.max(1);
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full URL of the monsters endpoint.
    pub fn monsters_url(&self) -> String {
        format!("{}/monsters/", self.base_url.trim_end_matches('/'))
    }
}

fn parse<T: FromStr>(value: Option<String>) -> Option<T> {
    value?.trim().parse().ok()
}
