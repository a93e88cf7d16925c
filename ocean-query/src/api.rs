//! Backend endpoints and the metadata client.
//!
//! Endpoint builders are always available. The HTTP client needs the `api`
//! feature; `reqwest` uses the browser's `fetch` when built for WASM.

use crate::canonical::percent_encode;
use crate::query::{derive_url, Query};

#[cfg(feature = "api")]
use crate::options::{parse_options, OptionItem};
#[cfg(feature = "api")]
use anyhow::Context;
#[cfg(feature = "api")]
use reqwest::Client;

/// Dataset list endpoint.
pub const DATASETS_ENDPOINT: &str = "/api/v1.0/datasets/";
/// Variable list endpoint; takes `vectors` and `dataset` parameters.
pub const VARIABLES_ENDPOINT: &str = "/api/v1.0/variables/";

/// Where the backend lives. An empty `base_url` yields paths relative to
/// the current origin.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn datasets_endpoint(&self) -> String {
        format!("{}{}", self.base_url, DATASETS_ENDPOINT)
    }

    pub fn variables_endpoint(&self, dataset: &str) -> String {
        format!(
            "{}{}?vectors&dataset={}",
            self.base_url,
            VARIABLES_ENDPOINT,
            percent_encode(dataset)
        )
    }

    pub fn plot_url(&self, query: &Query) -> String {
        format!("{}{}", self.base_url, derive_url(query))
    }
}

/// Fetches option lists from the metadata endpoints.
#[cfg(feature = "api")]
#[derive(Debug, Clone, Default)]
pub struct ApiClient {
    client: Client,
    config: ApiConfig,
}

#[cfg(feature = "api")]
impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// GET `endpoint` and decode its JSON option list.
    pub async fn fetch_options(&self, endpoint: &str) -> anyhow::Result<Vec<OptionItem>> {
        log::debug!("fetching options from {}", endpoint);
        let response = self
            .client
            .get(endpoint)
            .send()
            .await
            .with_context(|| format!("request to {} failed", endpoint))?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("{} returned HTTP {}", endpoint, status);
        }

        let body = response
            .text()
            .await
            .with_context(|| format!("failed to read response from {}", endpoint))?;
        let options = parse_options(&body)
            .with_context(|| format!("{} did not return an option list", endpoint))?;
        log::info!("loaded {} options from {}", options.len(), endpoint);
        Ok(options)
    }

    pub async fn datasets(&self) -> anyhow::Result<Vec<OptionItem>> {
        self.fetch_options(&self.config.datasets_endpoint()).await
    }

    pub async fn variables(&self, dataset: &str) -> anyhow::Result<Vec<OptionItem>> {
        self.fetch_options(&self.config.variables_endpoint(dataset))
            .await
    }
}
