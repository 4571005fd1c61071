//! HTTP client for a remote session history API
//!
//! Backs `HistoryStore` with an external service so several responder
//! instances can share one conversation log. Expected endpoints:
//! `GET /session/{id}/history`, `POST /session/{id}/messages`,
//! `GET /health`.

use crate::history_store::HistoryStore;
use crate::types::HistoryEntry;
use anyhow::{Context, Result};
use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

/// Failure surfaced by the remote history API.
#[derive(Debug, Error)]
pub enum HistoryApiError {
    #[error("history API returned {status}: {body}")]
    Status { status: u16, body: String },
}

#[derive(Debug, Clone)]
pub struct HttpHistoryStore {
    base_url: String,
    client: reqwest::Client,
}

impl HttpHistoryStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    fn session_url(&self, session_id: &str, tail: &str) -> String {
        format!(
            "{}/session/{}/{}",
            self.base_url,
            urlencoding::encode(session_id),
            tail
        )
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        Err(HistoryApiError::Status { status, body }.into())
    }

    /// Health check
    pub async fn health_check(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        let response = self.client.get(&url).send().await?;
        Ok(response.status().is_success())
    }
}

#[async_trait]
impl HistoryStore for HttpHistoryStore {
    fn name(&self) -> &'static str {
        "http_history"
    }

    async fn history(&self, session_id: &str) -> Result<Vec<HistoryEntry>> {
        let url = self.session_url(session_id, "history");
        debug!("Fetching history from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to reach history API")?;
        let response = Self::check_status(response).await?;

        let history: Vec<HistoryEntry> = response
            .json()
            .await
            .context("Failed to parse history API response")?;
        debug!("Retrieved {} entries for session {}", history.len(), session_id);

        Ok(history)
    }

    async fn append(&self, session_id: &str, entries: Vec<HistoryEntry>) -> Result<()> {
        let url = self.session_url(session_id, "messages");
        debug!("Appending {} entries via {}", entries.len(), url);

        let response = self
            .client
            .post(&url)
            .json(&entries)
            .send()
            .await
            .context("Failed to reach history API")?;
        Self::check_status(response).await?;

        Ok(())
    }
}
