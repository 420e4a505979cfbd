//! Blocking HTTP client for the Open5e monsters endpoint.

use bst_core::MonsterRecord;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::query::SearchQuery;
use crate::source::{MonsterPage, MonsterSource};

/// Searches the Open5e API.
#[derive(Debug, Clone)]
pub struct Open5eClient {
    http: reqwest::blocking::Client,
    config: ClientConfig,
}

impl Open5eClient {
    /// Create a client with the given configuration.
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("bestiary/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, config })
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn fetch_page(&self, params: &[(&'static str, String)]) -> ClientResult<MonsterPage> {
        let url = self.config.monsters_url();
        debug!(%url, ?params, "requesting monsters");

        let response = self.http.get(&url).query(params).send()?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let page: MonsterPage = response.json()?;
        debug!(
            results = page.results.len(),
            count = ?page.count,
            "received monsters"
        );
        if page.has_more() {
            debug!("more results available; only the first page is read");
        }
        Ok(page)
    }
}

impl MonsterSource for Open5eClient {
    fn search(&self, query: &SearchQuery) -> ClientResult<Vec<MonsterRecord>> {
        let mut records = Vec::new();
        for params in query.requests(self.config.limit) {
            records.extend(self.fetch_page(&params)?.into_records());
        }
        debug!(%query, found = records.len(), "search finished");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_keeps_config() {
        let config = ClientConfig::default().with_limit(5);
        let client = Open5eClient::new(config.clone()).unwrap();
        assert_eq!(client.config(), &config);
    }
}
