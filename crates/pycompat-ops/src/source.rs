//! Remote text retrieval.

use std::time::Duration;

use reqwest::blocking::Client;

use pycompat_core::config::NetworkConfig;
use pycompat_util::errors::{PycompatError, PycompatResult};

/// Something that can turn a URL into a response body.
///
/// Implementations make one attempt per call; retry policy is not theirs
/// to decide.
pub trait Fetch {
    fn fetch_text(&self, url: &str) -> PycompatResult<String>;
}

/// Blocking HTTP implementation backed by `reqwest`.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration, user_agent: &str) -> PycompatResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| PycompatError::Network {
                message: format!("Failed to create HTTP client: {e}"),
            })?;
        Ok(Self { client })
    }

    pub fn from_config(network: &NetworkConfig) -> PycompatResult<Self> {
        Self::new(network.timeout(), &network.user_agent)
    }
}

impl Fetch for HttpFetcher {
    fn fetch_text(&self, url: &str) -> PycompatResult<String> {
        tracing::info!("Fetching {}", url);
        self.client
            .get(url)
            .send()
            .and_then(|r| r.error_for_status())
            .and_then(|r| r.text())
            .map_err(|e| {
                PycompatError::Network {
                    message: format!("Failed to fetch {url}: {e}"),
                }
                .into()
            })
    }
}
