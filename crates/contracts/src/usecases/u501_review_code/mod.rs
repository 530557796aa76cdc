pub mod request;

pub use request::{ReviewRequest, REVIEW_PATH};

use crate::usecases::common::UseCaseMetadata;

pub struct ReviewCode;

impl UseCaseMetadata for ReviewCode {
    fn display_name() -> &'static str {
        "AI Code Reviewer"
    }

    fn description() -> &'static str {
        "Paste source code and get an AI-written review in markdown"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_labels() {
        assert_eq!(ReviewCode::display_name(), "AI Code Reviewer");
        assert!(!ReviewCode::description().is_empty());
    }
}
