//! JSON report generation

use super::VerifiedClaim;

pub fn generate(verified: &VerifiedClaim) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(verified)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{StubVerifier, VerificationRequest};

    #[test]
    fn test_json_report_shape() {
        let request = VerificationRequest::new("claim", None).unwrap();
        let verified = VerifiedClaim::new(request, StubVerifier::canned_result());

        let value: serde_json::Value = serde_json::from_str(&generate(&verified).unwrap()).unwrap();
        assert_eq!(value["request"]["claim"], "claim");
        assert_eq!(value["result"]["verdict"], "Refuted");
        assert_eq!(value["result"]["confidence"], 87);
        assert!(value["generatedAt"].is_string());
    }
}
