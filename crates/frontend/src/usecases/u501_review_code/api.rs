//! Review Code - HTTP client for the review backend

use super::model::{ReviewBackend, ReviewError};
use crate::shared::api_utils::{api_base, join_url};
use contracts::usecases::u501_review_code::{ReviewRequest, REVIEW_PATH};
use gloo_net::http::Request;

/// Posts code to `{base}/ai/get-review` and returns the markdown body as-is.
#[derive(Debug, Clone)]
pub struct HttpReviewBackend {
    base_url: String,
}

impl HttpReviewBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Backend at the configured base URL (see [`api_base`])
    pub fn from_config() -> Self {
        Self::new(api_base())
    }

    pub fn endpoint(&self) -> String {
        join_url(&self.base_url, REVIEW_PATH)
    }
}

impl ReviewBackend for HttpReviewBackend {
    async fn review(&self, request: &ReviewRequest) -> Result<String, ReviewError> {
        let response = Request::post(&self.endpoint())
            .json(request)
            .map_err(|e| ReviewError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ReviewError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(ReviewError::Status(response.status()));
        }

        response
            .text()
            .await
            .map_err(|e| ReviewError::Body(e.to_string()))
    }
}
