//! Loan application submission

use super::error::SubmissionError;
use super::traits::CatalogApi;
use super::types::Acknowledgment;
use std::sync::Arc;

/// Posts the applicant summary to the remote service.
///
/// No retry and no deduplication: every call creates a new remote record.
#[derive(Clone)]
pub struct SubmissionService {
    api: Arc<dyn CatalogApi>,
}

impl SubmissionService {
    pub fn new(api: Arc<dyn CatalogApi>) -> Self {
        Self { api }
    }

    pub async fn submit(&self, applicant_title: &str) -> Result<Acknowledgment, SubmissionError> {
        match self.api.add_product(applicant_title).await {
            Ok(ack) => {
                tracing::info!("Loan application submitted (id {})", ack.id);
                Ok(ack)
            }
            Err(source) => {
                tracing::warn!("Error submitting loan application: {source}");
                Err(SubmissionError { source })
            }
        }
    }
}
