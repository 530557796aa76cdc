//! Review Code - View Model

use super::api::HttpReviewBackend;
use super::model::{request_review, ReviewDisplay, ReviewState, ReviewStateCell};
use leptos::prelude::*;

impl ReviewStateCell for RwSignal<ReviewState> {
    fn update_state<R>(&self, f: impl FnOnce(&mut ReviewState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

#[derive(Clone, Copy)]
pub struct ReviewCodeVm {
    pub state: RwSignal<ReviewState>,
    /// Re-evaluated only when the pane actually changes, not on every keystroke
    pub display: Memo<ReviewDisplay>,
}

impl ReviewCodeVm {
    pub fn new() -> Self {
        let state = RwSignal::new(ReviewState::default());
        let display = Memo::new(move |_| state.with(ReviewState::display));
        Self { state, display }
    }

    pub fn code(&self) -> String {
        self.state.with(|s| s.code.clone())
    }

    pub fn set_code(&self, code: String) {
        self.state.update(|s| s.code = code);
    }

    pub fn is_busy(&self) -> bool {
        self.state.with(|s| s.is_busy)
    }

    pub fn can_submit(&self) -> bool {
        self.state.with(ReviewState::can_submit)
    }

    /// Sends the current code for review in the background.
    pub fn submit(&self) {
        let state = self.state;
        wasm_bindgen_futures::spawn_local(async move {
            let backend = HttpReviewBackend::from_config();
            if !request_review(&state, &backend).await {
                log::debug!("Review request skipped: empty code or request in flight");
            }
        });
    }
}

impl Default for ReviewCodeVm {
    fn default() -> Self {
        Self::new()
    }
}
