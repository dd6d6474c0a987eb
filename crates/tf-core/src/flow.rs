//! Screen flow: submission form and results view state
//!
//! Kept free of any UI toolkit so the rules (blank claims never dispatch, no
//! double submission, failure distinct from loading) are testable on their
//! own. The web client keeps one of each in a signal.

use crate::query::ResultsQuery;
use crate::{
    RequestLimits, ValidationError, VerdictResult, VerificationRequest, VerifyError, VerifyResult,
};

/// State of the submission screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionForm {
    pub claim: String,
    pub evidence: String,
    submitting: bool,
}

impl SubmissionForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn can_submit(&self) -> bool {
        !self.submitting && !self.claim.trim().is_empty()
    }

    /// Returns the navigation target, or `None` when submitting is a no-op
    pub fn submit(&mut self) -> Option<ResultsQuery> {
        if !self.can_submit() {
            return None;
        }

        self.submitting = true;
        Some(ResultsQuery::new(self.claim.clone(), self.evidence.clone()))
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// State of the results screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsView {
    /// Reached without a usable claim; nothing is dispatched
    MissingClaim,
    Loading(VerificationRequest),
    Ready(VerdictResult),
    Failed(VerifyError),
}

impl ResultsView {
    pub fn begin(query: &ResultsQuery, limits: &RequestLimits) -> Self {
        match query.to_request(limits) {
            Ok(request) => ResultsView::Loading(request),
            Err(ValidationError::EmptyClaim) => ResultsView::MissingClaim,
            Err(e) => ResultsView::Failed(e.into()),
        }
    }

    /// Settle a pending verification. Outcomes arriving in any state other
    /// than `Loading` are dropped.
    pub fn finish(self, outcome: VerifyResult<VerdictResult>) -> Self {
        match self {
            ResultsView::Loading(_) => match outcome {
                Ok(result) => ResultsView::Ready(result),
                Err(e) => ResultsView::Failed(e),
            },
            other => other,
        }
    }

    /// The request to dispatch, while loading
    pub fn pending_request(&self) -> Option<&VerificationRequest> {
        match self {
            ResultsView::Loading(request) => Some(request),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ResultsView::Loading(_))
    }

    pub fn result(&self) -> Option<&VerdictResult> {
        match self {
            ResultsView::Ready(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&VerifyError> {
        match self {
            ResultsView::Failed(e) => Some(e),
            _ => None,
        }
    }
}
