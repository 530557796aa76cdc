use serde::{Deserialize, Serialize};

/// Path of the review endpoint, relative to the backend base URL.
pub const REVIEW_PATH: &str = "/ai/get-review";

/// Body of `POST /ai/get-review`
///
/// The response is plain markdown text, so there is no response DTO.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewRequest {
    /// Raw source text exactly as typed in the editor
    pub code: String,
}

impl ReviewRequest {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}
