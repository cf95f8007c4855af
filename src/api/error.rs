//! Error taxonomy for the remote adapters

/// Low-level failure talking to the catalog service
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Advisory: the category list could not be fetched and the fallback list is in use
#[derive(Debug, thiserror::Error)]
#[error("Failed to load workplaces")]
pub struct CategoryFetchError {
    #[source]
    pub source: ApiError,
}

/// The final submission failed; the user may retry
#[derive(Debug, thiserror::Error)]
#[error("Failed to submit loan application. Please try again.")]
pub struct SubmissionError {
    #[source]
    pub source: ApiError,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_submission_error_message_is_uniform() {
        let err = SubmissionError {
            source: ApiError::Status(503),
        };
        assert_eq!(
            err.to_string(),
            "Failed to submit loan application. Please try again."
        );
        assert_eq!(
            err.source().map(|s| s.to_string()),
            Some("HTTP error! status: 503".to_string())
        );
    }

    #[test]
    fn test_decode_error_converts() {
        let parse = serde_json::from_str::<Vec<String>>("{").unwrap_err();
        let err: ApiError = parse.into();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_category_fetch_error_keeps_source() {
        let err = CategoryFetchError {
            source: ApiError::Status(404),
        };
        assert_eq!(err.to_string(), "Failed to load workplaces");
        assert!(err.source().is_some());
    }
}
