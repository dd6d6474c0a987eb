//! Truth Finder Core
//!
//! This crate defines the claim verification contract: the request a user
//! submits, the verdict a verifier returns, the error taxonomy separating bad
//! input from service failures, and the screen flow the UI drives on top of it.

pub mod flow;
pub mod query;
pub mod report;
pub mod request;
pub mod result;
pub mod verifier;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use flow::{ResultsView, SubmissionForm};
pub use query::ResultsQuery;
pub use request::{RequestLimits, VerificationRequest};
pub use result::VerdictResult;
pub use verifier::{ClaimVerifier, StubVerifier, VerificationService};

#[cfg(not(target_arch = "wasm32"))]
pub use verifier::HttpVerifier;

/// Rejected user input. No verifier is ever invoked for a request that fails
/// validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("claim must not be empty")]
    EmptyClaim,

    #[error("claim exceeds {max} characters")]
    ClaimTooLong { max: usize },

    #[error("evidence exceeds {max} characters")]
    EvidenceTooLong { max: usize },

    /// Input refused by a remote validator, carrying its message
    #[error("{0}")]
    Rejected(String),
}

/// Failure of the verifier behind the contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("verification service unavailable: {0}")]
    Unavailable(String),

    #[error("verification service timed out")]
    Timeout,

    #[error("verification service returned {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("invalid response from verification service: {0}")]
    InvalidResponse(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerifyError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl VerifyError {
    pub fn is_validation(&self) -> bool {
        matches!(self, VerifyError::Validation(_))
    }

    pub fn is_service(&self) -> bool {
        matches!(self, VerifyError::Service(_))
    }
}

pub type VerifyResult<T> = Result<T, VerifyError>;

/// Tri-state outcome of a verification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    Supported,
    Refuted,
    Neutral,
}

impl Verdict {
    pub const ALL: [Verdict; 3] = [Verdict::Supported, Verdict::Refuted, Verdict::Neutral];

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Supported => "Supported",
            Verdict::Refuted => "Refuted",
            Verdict::Neutral => "Neutral",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Certainty in a verdict, as a whole percentage in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Confidence(u8);

impl Confidence {
    pub const MAX: u8 = 100;

    pub const fn new(percent: u8) -> Option<Self> {
        if percent <= Self::MAX {
            Some(Self(percent))
        } else {
            None
        }
    }

    /// Clamp to 100 instead of rejecting
    pub const fn saturating(percent: u8) -> Self {
        if percent <= Self::MAX {
            Self(percent)
        } else {
            Self(Self::MAX)
        }
    }

    pub fn percent(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Confidence {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Confidence::new(value)
            .ok_or_else(|| format!("confidence {} is outside 0..=100", value))
    }
}

impl From<Confidence> for u8 {
    fn from(confidence: Confidence) -> Self {
        confidence.0
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}
