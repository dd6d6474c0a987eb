//! Claim verification service
//!
//! [`ClaimVerifier`] is the seam a real fact-checking backend plugs into.
//! [`VerificationService`] wraps a verifier and guarantees that only
//! validated requests ever reach it.

mod stub;
#[cfg(not(target_arch = "wasm32"))]
mod http;

pub use stub::StubVerifier;
#[cfg(not(target_arch = "wasm32"))]
pub use http::HttpVerifier;

use crate::{RequestLimits, ServiceError, VerdictResult, VerificationRequest, VerifyResult};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

/// A backend able to judge a claim
#[async_trait]
pub trait ClaimVerifier: Send + Sync {
    /// Short identifier used in logs and the config endpoint
    fn name(&self) -> &'static str;

    async fn verify(&self, request: &VerificationRequest) -> Result<VerdictResult, ServiceError>;
}

/// Validating front for a [`ClaimVerifier`]
#[derive(Clone)]
pub struct VerificationService {
    verifier: Arc<dyn ClaimVerifier>,
    limits: RequestLimits,
}

impl VerificationService {
    pub fn new(verifier: Arc<dyn ClaimVerifier>) -> Self {
        Self {
            verifier,
            limits: RequestLimits::default(),
        }
    }

    pub fn with_limits(mut self, limits: RequestLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn verifier_name(&self) -> &'static str {
        self.verifier.name()
    }

    pub fn limits(&self) -> &RequestLimits {
        &self.limits
    }

    /// Validate raw input and verify it
    pub async fn verify(&self, claim: &str, evidence: Option<&str>) -> VerifyResult<VerdictResult> {
        let request = VerificationRequest::with_limits(
            claim,
            evidence.map(str::to_string),
            &self.limits,
        )?;
        self.verify_request(&request).await
    }

    /// Verify an already validated request
    pub async fn verify_request(
        &self,
        request: &VerificationRequest,
    ) -> VerifyResult<VerdictResult> {
        debug!(
            verifier = self.verifier.name(),
            claim_chars = request.claim().chars().count(),
            has_evidence = request.evidence().is_some(),
            "Verifying claim"
        );

        match self.verifier.verify(request).await {
            Ok(result) => {
                debug!(
                    verdict = %result.verdict(),
                    confidence = result.confidence().percent(),
                    "Claim verified"
                );
                Ok(result)
            }
            Err(e) => {
                warn!(verifier = self.verifier.name(), "Verification failed: {}", e);
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ValidationError, Verdict, VerifyError};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingVerifier {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ClaimVerifier for CountingVerifier {
        fn name(&self) -> &'static str {
            "counting"
        }

        async fn verify(
            &self,
            request: &VerificationRequest,
        ) -> Result<VerdictResult, ServiceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            StubVerifier.verify(request).await
        }
    }

    struct DownVerifier;

    #[async_trait]
    impl ClaimVerifier for DownVerifier {
        fn name(&self) -> &'static str {
            "down"
        }

        async fn verify(
            &self,
            _request: &VerificationRequest,
        ) -> Result<VerdictResult, ServiceError> {
            Err(ServiceError::Unavailable("connection refused".to_string()))
        }
    }

    #[tokio::test]
    async fn test_blank_claim_never_reaches_verifier() {
        let verifier = Arc::new(CountingVerifier::default());
        let service = VerificationService::new(verifier.clone());

        for claim in ["", "   ", "\n\t"] {
            let err = service.verify(claim, Some("evidence")).await.unwrap_err();
            assert_eq!(err, VerifyError::Validation(ValidationError::EmptyClaim));
        }
        assert_eq!(verifier.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_valid_claim_produces_one_result() {
        let verifier = Arc::new(CountingVerifier::default());
        let service = VerificationService::new(verifier.clone());

        let result = service
            .verify("Vaccines cause autism in children", None)
            .await
            .unwrap();

        assert_eq!(verifier.calls.load(Ordering::SeqCst), 1);
        assert!(result.confidence().percent() <= 100);
        assert!(Verdict::ALL.contains(&result.verdict()));
    }

    #[tokio::test]
    async fn test_limits_applied_before_verifier() {
        let verifier = Arc::new(CountingVerifier::default());
        let service = VerificationService::new(verifier.clone()).with_limits(RequestLimits {
            max_claim_chars: 4,
            max_evidence_chars: 4,
        });

        let err = service.verify("too long", None).await.unwrap_err();
        assert_eq!(err, VerifyError::Validation(ValidationError::ClaimTooLong { max: 4 }));
        assert_eq!(verifier.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_service_error_propagates() {
        let service = VerificationService::new(Arc::new(DownVerifier));
        let err = service.verify("claim", None).await.unwrap_err();
        assert!(err.is_service());
        assert_eq!(service.verifier_name(), "down");
    }
}
