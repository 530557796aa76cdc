//! Review Code - Model (state record, display rule, backend seam)
//!
//! Everything here is plain Rust so the request flow can be exercised
//! without a browser.

use std::cell::RefCell;

use contracts::usecases::u501_review_code::ReviewRequest;
use thiserror::Error;

/// Snippet shown in the editor on first load
pub const INITIAL_CODE: &str = "function sum() {\n  return 1 + 1\n}";

/// Markdown shown in the result pane whenever a review request fails
pub const FALLBACK_REVIEW: &str = "##  Error\nFailed to analyze code. Please try again.";

/// Why a review request failed. Only ever logged; the user sees [`FALLBACK_REVIEW`].
#[derive(Debug, Error)]
pub enum ReviewError {
    #[error("failed to build review request: {0}")]
    Request(String),
    #[error("review request failed: {0}")]
    Transport(String),
    #[error("review backend returned HTTP {0}")]
    Status(u16),
    #[error("failed to read review response: {0}")]
    Body(String),
}

/// What the result pane shows. Exactly one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewDisplay {
    /// Request in flight: spinner and skeleton lines
    Loading,
    /// Markdown returned by the backend (or the fallback)
    Result(String),
    /// Nothing requested yet
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewState {
    pub code: String,
    pub review: String,
    pub is_busy: bool,
}

impl Default for ReviewState {
    fn default() -> Self {
        Self::new(INITIAL_CODE)
    }
}

impl ReviewState {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            review: String::new(),
            is_busy: false,
        }
    }

    /// Whether the trigger control is enabled
    pub fn can_submit(&self) -> bool {
        !self.is_busy && !self.code.trim().is_empty()
    }

    /// Marks a request as started and returns its body.
    ///
    /// Returns `None` and leaves the state untouched when the code is blank
    /// or a request is already in flight.
    pub fn begin(&mut self) -> Option<ReviewRequest> {
        if !self.can_submit() {
            return None;
        }
        self.is_busy = true;
        self.review.clear();
        Some(ReviewRequest::new(self.code.clone()))
    }

    /// Applies the outcome of a request. Always clears the busy flag.
    pub fn settle(&mut self, outcome: Result<String, ReviewError>) {
        self.review = match outcome {
            Ok(markdown) => markdown,
            Err(_) => FALLBACK_REVIEW.to_string(),
        };
        self.is_busy = false;
    }

    pub fn display(&self) -> ReviewDisplay {
        if self.is_busy {
            ReviewDisplay::Loading
        } else if self.review.is_empty() {
            ReviewDisplay::Empty
        } else {
            ReviewDisplay::Result(self.review.clone())
        }
    }
}

/// The remote service that turns source code into a markdown review.
#[allow(async_fn_in_trait)]
pub trait ReviewBackend {
    async fn review(&self, request: &ReviewRequest) -> Result<String, ReviewError>;
}

/// Shared, interior-mutable holder of [`ReviewState`].
///
/// Returns `None` when the holder is no longer alive (a disposed signal).
pub trait ReviewStateCell {
    fn update_state<R>(&self, f: impl FnOnce(&mut ReviewState) -> R) -> Option<R>;
}

impl ReviewStateCell for RefCell<ReviewState> {
    fn update_state<R>(&self, f: impl FnOnce(&mut ReviewState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Runs one review round trip against `backend`.
///
/// Returns `false` without touching the network when the guard rejects the
/// call. The state is settled after the call on every path.
pub async fn request_review<C, B>(state: &C, backend: &B) -> bool
where
    C: ReviewStateCell,
    B: ReviewBackend,
{
    let Some(request) = state.update_state(ReviewState::begin).flatten() else {
        return false;
    };

    log::debug!("Requesting review for {} bytes of code", request.code.len());
    let outcome = backend.review(&request).await;
    if let Err(err) = &outcome {
        log::error!("Review error: {}", err);
    }

    state.update_state(|s| s.settle(outcome));
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use std::cell::Cell;

    /// Records every request and answers with a canned outcome.
    struct FakeBackend {
        calls: RefCell<Vec<ReviewRequest>>,
        reply: fn() -> Result<String, ReviewError>,
    }

    impl FakeBackend {
        fn replying(reply: fn() -> Result<String, ReviewError>) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                reply,
            }
        }

        fn call_count(&self) -> usize {
            self.calls.borrow().len()
        }
    }

    impl ReviewBackend for FakeBackend {
        async fn review(&self, request: &ReviewRequest) -> Result<String, ReviewError> {
            self.calls.borrow_mut().push(request.clone());
            (self.reply)()
        }
    }

    /// Holds the response until the test releases it, and checks the busy
    /// flag while the request is in flight.
    struct GatedBackend<'a> {
        calls: Cell<usize>,
        gate: RefCell<Option<oneshot::Receiver<String>>>,
        state: &'a RefCell<ReviewState>,
        busy_seen: Cell<bool>,
    }

    impl ReviewBackend for GatedBackend<'_> {
        async fn review(&self, _request: &ReviewRequest) -> Result<String, ReviewError> {
            self.calls.set(self.calls.get() + 1);
            self.busy_seen.set(self.state.borrow().is_busy);
            let gate = self.gate.borrow_mut().take();
            match gate {
                Some(rx) => rx.await.map_err(|e| ReviewError::Transport(e.to_string())),
                None => Err(ReviewError::Transport("gate already used".into())),
            }
        }
    }

    #[test]
    fn test_initial_state() {
        let state = ReviewState::default();
        assert_eq!(state.code, INITIAL_CODE);
        assert!(state.review.is_empty());
        assert!(!state.is_busy);
        assert_eq!(state.display(), ReviewDisplay::Empty);
        assert!(state.can_submit());
    }

    #[test]
    fn test_begin_sets_busy_and_clears_review() {
        let mut state = ReviewState::new("let x = 1;");
        state.review = "## Old review".into();

        let request = state.begin().expect("request should start");

        assert_eq!(request.code, "let x = 1;");
        assert!(state.is_busy);
        assert!(state.review.is_empty());
        assert_eq!(state.display(), ReviewDisplay::Loading);
    }

    #[test]
    fn test_blank_code_is_rejected() {
        for code in ["", "   ", "\n\t  \n"] {
            let mut state = ReviewState::new(code);
            state.review = "## Kept".into();
            let before = state.clone();

            assert!(!state.can_submit());
            assert!(state.begin().is_none());
            assert_eq!(state, before, "state must be unchanged for {code:?}");
        }
    }

    #[test]
    fn test_begin_while_busy_is_rejected() {
        let mut state = ReviewState::new("x");
        assert!(state.begin().is_some());
        let before = state.clone();

        assert!(!state.can_submit());
        assert!(state.begin().is_none());
        assert_eq!(state, before);
    }

    #[test]
    fn test_loading_hides_previous_review() {
        let state = ReviewState {
            code: "x".into(),
            review: "## Stale".into(),
            is_busy: true,
        };
        assert_eq!(state.display(), ReviewDisplay::Loading);
    }

    #[test]
    fn test_settle_success_keeps_body_verbatim() {
        let body = "## Review\n\n```js\nconst a = '<b>';\n```\n  trailing  ";
        let mut state = ReviewState::new("x");
        state.begin();

        state.settle(Ok(body.to_string()));

        assert_eq!(state.review, body);
        assert!(!state.is_busy);
        assert_eq!(state.display(), ReviewDisplay::Result(body.to_string()));
    }

    #[test]
    fn test_settle_failure_uses_fallback() {
        let mut state = ReviewState::new("x");
        state.begin();

        state.settle(Err(ReviewError::Status(500)));

        assert_eq!(state.review, FALLBACK_REVIEW);
        assert!(!state.is_busy);
        assert!(state.can_submit());
    }

    #[test]
    fn test_empty_success_body_shows_empty_state() {
        let mut state = ReviewState::new("x");
        state.begin();
        state.settle(Ok(String::new()));
        assert_eq!(state.display(), ReviewDisplay::Empty);
    }

    #[test]
    fn test_review_success_scenario() {
        let state = RefCell::new(ReviewState::new("function sum(){return 1+1}"));
        let backend = FakeBackend::replying(|| Ok("## Looks fine".to_string()));

        let sent = block_on(request_review(&state, &backend));

        assert!(sent);
        assert_eq!(backend.call_count(), 1);
        assert_eq!(
            backend.calls.borrow()[0],
            ReviewRequest::new("function sum(){return 1+1}")
        );
        let state = state.borrow();
        assert!(!state.is_busy);
        assert_eq!(state.display(), ReviewDisplay::Result("## Looks fine".into()));
    }

    #[test]
    fn test_review_empty_input_makes_no_call() {
        let state = RefCell::new(ReviewState::new(""));
        let backend = FakeBackend::replying(|| Ok("unused".to_string()));

        let sent = block_on(request_review(&state, &backend));

        assert!(!sent);
        assert_eq!(backend.call_count(), 0);
        assert_eq!(*state.borrow(), ReviewState::new(""));
    }

    #[test]
    fn test_review_network_failure_scenario() {
        let state = RefCell::new(ReviewState::new("fn main() {}"));
        let backend =
            FakeBackend::replying(|| Err(ReviewError::Transport("connection refused".into())));

        let sent = block_on(request_review(&state, &backend));

        assert!(sent);
        assert_eq!(backend.call_count(), 1);
        let state = state.borrow();
        assert_eq!(state.review, FALLBACK_REVIEW);
        assert!(!state.is_busy);
    }

    #[test]
    fn test_double_trigger_while_in_flight_makes_one_call() {
        let state = RefCell::new(ReviewState::new("fn main() {}"));
        let (tx, rx) = oneshot::channel();
        let backend = GatedBackend {
            calls: Cell::new(0),
            gate: RefCell::new(Some(rx)),
            state: &state,
            busy_seen: Cell::new(false),
        };

        let state_ref = &state;
        let (first, second, _) = block_on(async {
            futures::join!(
                request_review(state_ref, &backend),
                request_review(state_ref, &backend),
                async move {
                    assert!(state_ref.borrow().is_busy);
                    let _ = tx.send("## Done".to_string());
                }
            )
        });

        assert!(first);
        assert!(!second);
        assert_eq!(backend.calls.get(), 1);
        assert!(backend.busy_seen.get(), "busy must be set while in flight");
        let state = state.borrow();
        assert!(!state.is_busy);
        assert_eq!(state.review, "## Done");
    }

    #[test]
    fn test_error_messages_name_the_cause() {
        assert_eq!(
            ReviewError::Status(404).to_string(),
            "review backend returned HTTP 404"
        );
        assert!(ReviewError::Transport("timeout".into())
            .to_string()
            .contains("timeout"));
    }
}
