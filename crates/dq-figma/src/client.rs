//! Figma API Client
//!
//! Issues authenticated GET requests against the routed endpoint and hands
//! the response to the normalizer. Requests are awaited one at a time; the
//! client keeps reqwest's default timeout behaviour.

use dq_core::Settings;
use reqwest::Client;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::dump;
use crate::endpoint::{endpoints, Endpoint, QueryParams};
use crate::normalize::{normalize, ApiResult};

/// Figma REST API client
#[derive(Debug, Clone)]
pub struct FigmaClient {
    client: Client,
    access_token: String,
    /// Base API URL
    api_url: String,
}

impl FigmaClient {
    /// Create a new client against `https://api.figma.com/v1`
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            access_token: access_token.into(),
            api_url: endpoints::BASE_URL.to_string(),
        }
    }

    /// Create a client with a custom base URL
    pub fn with_endpoint(access_token: impl Into<String>, endpoint: impl Into<String>) -> Self {
        let mut client = Self::new(access_token);
        client.api_url = endpoint.into();
        client
    }

    /// Create from settings. A missing token is only logged; Figma itself
    /// reports the failure on the first call.
    pub fn from_settings(settings: &Settings) -> Self {
        let token = settings.figma_access_token.clone().unwrap_or_else(|| {
            warn!("FIGMA_ACCESS_TOKEN not set; Figma requests will be unauthenticated");
            String::new()
        });
        match &settings.figma_api_base {
            Some(base) => Self::with_endpoint(token, base.clone()),
            None => Self::new(token),
        }
    }

    /// Get the current API URL
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Fetch by endpoint key. Unknown keys and bad parameters come back as
    /// the error half of the pair, like upstream failures do.
    pub async fn fetch(&self, key: &str, param: &str, query: Option<&QueryParams>) -> ApiResult {
        match key.parse::<Endpoint>() {
            Ok(endpoint) => self.fetch_endpoint(endpoint, param, query).await,
            Err(e) => {
                warn!("Rejected Figma request: {}", e);
                ApiResult::error(e.to_string())
            }
        }
    }

    /// Fetch a known endpoint
    pub async fn fetch_endpoint(
        &self,
        endpoint: Endpoint,
        param: &str,
        query: Option<&QueryParams>,
    ) -> ApiResult {
        let url = match endpoint.url(&self.api_url, param, query) {
            Ok(url) => url,
            Err(e) => {
                warn!("Rejected Figma request: {}", e);
                return ApiResult::error(e.to_string());
            }
        };

        info!("Figma fetch: endpoint={}, base={}", endpoint, self.api_url);
        debug!("Figma request to: {}", url);

        let response = match self
            .client
            .get(url)
            .bearer_auth(&self.access_token)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!("Figma request failed: {}", e);
                return ApiResult::error(format!("Error: request failed - {}", e));
            }
        };

        let status = response.status().as_u16();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                warn!("Failed to read Figma response body: {}", e);
                return ApiResult::error(format!("Error: {} - failed to read body: {}", status, e));
            }
        };

        let result = normalize(status, &body);
        if let ApiResult::Error(msg) = &result {
            warn!("Figma API error for {}: {}", endpoint, msg);
        }
        result
    }

    /// Fetch and save a successful payload to `path`. An error result leaves
    /// any previous dump in place; only a failed write returns `Err`.
    pub async fn fetch_and_dump(
        &self,
        key: &str,
        param: &str,
        query: Option<&QueryParams>,
        path: impl AsRef<Path>,
    ) -> dq_core::Result<ApiResult> {
        let result = self.fetch(key, param, query).await;
        if let Some(data) = result.data() {
            dump::write_json(path, data).await?;
        }
        Ok(result)
    }
}
