//! Verification requests

use crate::ValidationError;
use serde::{Deserialize, Serialize};

/// Size limits applied while validating a request. The server publishes its
/// own through `GET /api/config` so clients validate against the same values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RequestLimits {
    /// Maximum claim length in characters
    pub max_claim_chars: usize,
    /// Maximum evidence length in characters
    pub max_evidence_chars: usize,
}

impl Default for RequestLimits {
    fn default() -> Self {
        Self {
            max_claim_chars: 2_000,
            max_evidence_chars: 10_000,
        }
    }
}

/// A validated claim plus optional supporting evidence.
///
/// Only obtainable through [`VerificationRequest::new`] or
/// [`VerificationRequest::with_limits`], so holding one proves the claim is
/// not blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerificationRequest {
    claim: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    evidence: Option<String>,
}

impl VerificationRequest {
    pub fn new(
        claim: impl Into<String>,
        evidence: Option<String>,
    ) -> Result<Self, ValidationError> {
        Self::with_limits(claim, evidence, &RequestLimits::default())
    }

    pub fn with_limits(
        claim: impl Into<String>,
        evidence: Option<String>,
        limits: &RequestLimits,
    ) -> Result<Self, ValidationError> {
        let claim = claim.into();

        if claim.trim().is_empty() {
            return Err(ValidationError::EmptyClaim);
        }
        if claim.chars().count() > limits.max_claim_chars {
            return Err(ValidationError::ClaimTooLong {
                max: limits.max_claim_chars,
            });
        }

        // Blank evidence carries no information
        let evidence = evidence.filter(|e| !e.trim().is_empty());
        if let Some(e) = &evidence {
            if e.chars().count() > limits.max_evidence_chars {
                return Err(ValidationError::EvidenceTooLong {
                    max: limits.max_evidence_chars,
                });
            }
        }

        Ok(Self { claim, evidence })
    }

    pub fn claim(&self) -> &str {
        &self.claim
    }

    pub fn evidence(&self) -> Option<&str> {
        self.evidence.as_deref()
    }
}
