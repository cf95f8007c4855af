//! HTTP client for the remote catalog service
//!
//! Wraps the two endpoints the wizard talks to: the category listing used to
//! populate the workplace selector and the create call used for submission.

use super::error::ApiError;
use super::traits::CatalogApi;
use super::types::Acknowledgment;
use crate::config::WizardConfig;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Client for the catalog REST API
#[derive(Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a client from the user configuration
    pub fn new(config: &WizardConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs()))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: config.api_base_url(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Check the status code and decode the JSON body
    async fn handle_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        let body = resp.text().await?;
        decode_body(&body)
    }
}

/// Decode a JSON response body
pub(crate) fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    Ok(serde_json::from_str(body)?)
}

#[async_trait]
impl CatalogApi for CatalogClient {
    async fn fetch_category_list(&self) -> Result<Vec<String>, ApiError> {
        let url = self.url("/products/category-list");
        tracing::debug!("GET {url}");
        let resp = self.http.get(&url).send().await?;
        Self::handle_response(resp).await
    }

    async fn add_product(&self, title: &str) -> Result<Acknowledgment, ApiError> {
        let url = self.url("/products/add");
        tracing::debug!("POST {url}");
        let body = serde_json::json!({ "title": title });
        let resp = self
            .http
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .await?;
        Self::handle_response(resp).await
    }

    fn category_url(&self, slug: &str) -> String {
        self.url(&format!("/products/category/{slug}"))
    }
}
