//! HTTP client for the multi-agent backend.
//!
//! The backend exposes two endpoints:
//!
//! - `GET {API_URL}/models` - provider catalog ([`ModelCatalog`])
//! - `POST {API_URL}/ask` - staged answer for a question ([`QueryResult`])
//!
//! No retries or timeouts beyond reqwest's defaults are applied; each call is one request.

mod error;

pub use error::ClientError;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::models::{ModelCatalog, QueryResult};

/// Backend address used when nothing is configured
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Debug, Serialize)]
struct AskPayload<'a> {
    question: &'a str,
    provider: &'a str,
}

#[derive(Debug, Clone)]
pub struct BackendClient {
    http: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http: Client::new(), base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the provider catalog
    pub async fn load_catalog(&self) -> Result<ModelCatalog, ClientError> {
        let url = format!("{}/models", self.base_url);
        debug!(%url, "loading provider catalog");

        let response = self.http.get(&url).send().await?;
        let bytes = ensure_success(response).await?;
        let catalog: ModelCatalog = serde_json::from_slice(&bytes)?;

        info!(
            providers = catalog.available_models.len(),
            current = catalog.current.as_deref().unwrap_or("-"),
            "provider catalog loaded"
        );
        Ok(catalog)
    }

    /// Fetch the catalog, degrading to an empty one on any failure
    pub async fn load_catalog_or_default(&self) -> ModelCatalog {
        match self.load_catalog().await {
            Ok(catalog) => catalog,
            Err(e) => {
                warn!(error = %e, "failed to load provider catalog");
                ModelCatalog::default()
            }
        }
    }

    /// Submit a question to the given provider.
    ///
    /// Payloads lacking any of the five stage fields are rejected.
    pub async fn submit(&self, question: &str, provider: &str) -> Result<QueryResult, ClientError> {
        if question.trim().is_empty() {
            return Err(ClientError::EmptyQuestion);
        }

        let url = format!("{}/ask", self.base_url);
        debug!(%url, provider, "submitting question");

        let response = self.http.post(&url).json(&AskPayload { question, provider }).send().await?;
        let bytes = ensure_success(response).await?;

        let payload: Value = serde_json::from_slice(&bytes)?;
        if let Some(field) = QueryResult::missing_field(&payload) {
            return Err(ClientError::MissingField(field));
        }
        let result: QueryResult = serde_json::from_value(payload)?;

        info!(provider, extra_fields = result.extra.len(), "query answered");
        Ok(result)
    }
}

async fn ensure_success(response: reqwest::Response) -> Result<Vec<u8>, ClientError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ClientError::Status { status: status.as_u16(), body });
    }
    Ok(response.bytes().await?.to_vec())
}
