//! Review Code UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: state record, display rule and the backend seam
//! - api.rs: HTTP backend (gloo-net)
//! - view_model.rs: ReviewCodeVm with signals
//! - view.rs: Main component ReviewCodePage

mod api;
mod model;
mod view;
mod view_model;

pub use api::HttpReviewBackend;
pub use model::{
    request_review, ReviewBackend, ReviewDisplay, ReviewError, ReviewState, FALLBACK_REVIEW,
    INITIAL_CODE,
};
pub use view::ReviewCodePage;
pub use view_model::ReviewCodeVm;

/// Grammar used by the editor surface
pub const EDITOR_LANGUAGE: &str = "js";
