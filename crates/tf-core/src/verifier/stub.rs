//! Canned verifier

use super::ClaimVerifier;
use crate::{Confidence, ServiceError, VerdictResult, Verdict, VerificationRequest};
use async_trait::async_trait;

const EXPLANATION: &str = "There is no credible scientific evidence linking vaccines to autism. \
Multiple large-scale studies involving millions of children have consistently found no causal \
relationship between vaccination and autism spectrum disorders. The original study suggesting \
this link was retracted due to fraudulent data and methodological flaws.";

const EXTRACTED_TEXT: &str = "There is currently no evidence that vaccines cause autism spectrum \
disorders. The weight of currently available evidence does not support the hypothesis that \
vaccines cause autism or are associated with increased risk of autism spectrum disorders.";

const SOURCE: &str = "CDC / WHO / AAP";
const SOURCE_URL: &str = "https://www.cdc.gov/vaccinesafety/concerns/autism.html";
const CONFIDENCE: u8 = 87;

/// Returns the same result for every claim. Stands in until a real backend
/// is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubVerifier;

impl StubVerifier {
    pub fn canned_result() -> VerdictResult {
        VerdictResult::new(
            Verdict::Refuted,
            Confidence::saturating(CONFIDENCE),
            EXPLANATION,
            EXTRACTED_TEXT,
            SOURCE,
        )
        .with_source_url(SOURCE_URL)
    }
}

#[async_trait]
impl ClaimVerifier for StubVerifier {
    fn name(&self) -> &'static str {
        "stub"
    }

    async fn verify(&self, _request: &VerificationRequest) -> Result<VerdictResult, ServiceError> {
        Ok(Self::canned_result())
    }
}
