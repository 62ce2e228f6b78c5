//! Deezer catalog HTTP client
//!
//! Album search only. No API key required.
//!
//! API: https://developers.deezer.com/api/search

use std::time::Duration;

use async_trait::async_trait;

use super::CatalogApi;
use super::dto::SearchResponse;
use crate::config::ApiConfig;
use crate::error::CatalogError;
use crate::model::Album;

/// Deezer catalog client
#[derive(Clone)]
pub struct DeezerClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl DeezerClient {
    pub fn new(config: &ApiConfig) -> Result<Self, CatalogError> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Request target for an album search, query percent-encoded
    pub fn search_url(&self, query: &str) -> String {
        format!(
            "{}/search/album?q={}",
            self.base_url,
            urlencoding::encode(query)
        )
    }
}

#[async_trait]
impl CatalogApi for DeezerClient {
    async fn search_albums(&self, query: &str) -> Result<Vec<Album>, CatalogError> {
        let url = self.search_url(query);
        crate::log_api_request!("search_album", query, url = %url);

        let response = self
            .http_client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        parse_search_body(status, &body)
    }
}

/// Map an HTTP status and body to albums or a typed error.
pub(crate) fn parse_search_body(
    status: reqwest::StatusCode,
    body: &str,
) -> Result<Vec<Album>, CatalogError> {
    if !status.is_success() {
        return Err(CatalogError::Status {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
        });
    }

    let response: SearchResponse =
        serde_json::from_str(body).map_err(|e| CatalogError::Parse(e.to_string()))?;

    if let Some(error) = response.error {
        return Err(CatalogError::Api {
            code: error.code,
            kind: error.kind,
            message: error.message,
        });
    }

    tracing::trace!(
        returned = response.data.len(),
        total = response.total.unwrap_or_default(),
        "Search response parsed"
    );
    Ok(response.data.into_iter().map(Album::from).collect())
}
