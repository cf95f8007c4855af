//! Trait abstraction for the catalog service to enable mocking in tests

use super::error::ApiError;
use super::types::Acknowledgment;
use async_trait::async_trait;

/// Operations the wizard needs from the remote catalog service
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// `GET /products/category-list`: raw category identifiers
    async fn fetch_category_list(&self) -> Result<Vec<String>, ApiError>;

    /// `POST /products/add` with `{"title": ...}`
    async fn add_product(&self, title: &str) -> Result<Acknowledgment, ApiError>;

    /// Informational URL of one category
    fn category_url(&self, slug: &str) -> String;
}
