//! Remote catalog service adapters
//!
//! All network failures are converted here into the wizard's error taxonomy;
//! nothing above this module sees a raw transport error.

mod categories;
mod client;
mod error;
mod submission;
mod traits;
mod types;

pub use categories::{CategoryList, CategoryProvider};
pub use client::CatalogClient;
pub use error::SubmissionError;
pub use submission::SubmissionService;
pub use traits::CatalogApi;
pub use types::Acknowledgment;

#[cfg(test)]
pub use categories::fallback_categories;
#[cfg(test)]
pub use error::ApiError;
#[cfg(test)]
pub use traits::MockCatalogApi;
