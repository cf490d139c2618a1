//! HTTP access to the artwork catalog.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use shared::{
    domain::ArtworkPage,
    error::{ApiError, ApiErrorBody, ErrorCode},
    protocol::{ArtworksQuery, ArtworksResponse},
};
use tracing::{debug, warn};
use url::Url;

use crate::{error::FetchError, settings::Settings};

/// Anything that can produce one page of artworks. The desktop backend and
/// the CLI only talk to this trait, so tests can swap in canned pages.
#[async_trait]
pub trait ArtworkSource: Send + Sync {
    async fn fetch_page(&self, page: u32) -> Result<ArtworkPage, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ArticClient {
    http: Client,
    base_url: Url,
    limit: Option<u32>,
}

impl ArticClient {
    pub fn new(http: Client, base_url: Url, limit: Option<u32>) -> Self {
        Self {
            http,
            base_url,
            limit,
        }
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let base_url = settings.base_url()?;
        let http = Client::builder()
            .timeout(settings.request_timeout())
            .user_agent(settings.user_agent.clone())
            .build()
            .context("failed to build catalog HTTP client")?;
        Ok(Self::new(http, base_url, Some(settings.rows_per_page())))
    }

    fn artworks_url(&self) -> String {
        format!("{}/artworks", self.base_url.as_str().trim_end_matches('/'))
    }
}

#[async_trait]
impl ArtworkSource for ArticClient {
    async fn fetch_page(&self, page: u32) -> Result<ArtworkPage, FetchError> {
        if page == 0 {
            return Err(FetchError::InvalidPage(page));
        }

        let response = self
            .http
            .get(self.artworks_url())
            .query(&ArtworksQuery::new(page, self.limit))
            .send()
            .await
            .map_err(FetchError::Transport)?;
        let status = response.status();
        let body = response.bytes().await.map_err(FetchError::Transport)?;

        if !status.is_success() {
            let api = serde_json::from_slice::<ApiErrorBody>(&body)
                .map(ApiError::from)
                .unwrap_or_else(|_| {
                    ApiError::new(
                        ErrorCode::from_status(status.as_u16()),
                        status
                            .canonical_reason()
                            .unwrap_or("unexpected status")
                            .to_string(),
                    )
                });
            warn!(page, status = status.as_u16(), "catalog rejected page request: {}", api.message);
            return Err(FetchError::Status {
                status: status.as_u16(),
                api,
            });
        }

        let envelope: ArtworksResponse =
            serde_json::from_slice(&body).map_err(FetchError::Decode)?;
        debug!(page, rows = envelope.data.len(), "fetched artworks page");
        Ok(envelope.into())
    }
}

#[cfg(test)]
#[path = "tests/api_tests.rs"]
mod tests;
