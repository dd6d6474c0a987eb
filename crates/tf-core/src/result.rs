//! Verdict results

use crate::{Confidence, Verdict};
use serde::{Deserialize, Serialize};

/// Outcome of verifying one claim. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerdictResult {
    verdict: Verdict,
    confidence: Confidence,
    explanation: String,
    /// Excerpt quoted from the cited source
    #[serde(alias = "exactMatch")]
    extracted_text: String,
    source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    source_url: Option<String>,
}

impl VerdictResult {
    pub fn new(
        verdict: Verdict,
        confidence: Confidence,
        explanation: impl Into<String>,
        extracted_text: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            verdict,
            confidence,
            explanation: explanation.into(),
            extracted_text: extracted_text.into(),
            source: source.into(),
            source_url: None,
        }
    }

    pub fn with_source_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = Some(url.into());
        self
    }

    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    pub fn confidence(&self) -> Confidence {
        self.confidence
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    pub fn extracted_text(&self) -> &str {
        &self.extracted_text
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn source_url(&self) -> Option<&str> {
        self.source_url.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> VerdictResult {
        VerdictResult::new(
            Verdict::Neutral,
            Confidence::new(50).unwrap(),
            "Mixed evidence.",
            "Some say yes, some say no.",
            "Example Source",
        )
    }

    #[test]
    fn test_wire_format() {
        let json = serde_json::to_value(sample().with_source_url("https://example.com")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "verdict": "Neutral",
                "confidence": 50,
                "explanation": "Mixed evidence.",
                "extractedText": "Some say yes, some say no.",
                "source": "Example Source",
                "sourceUrl": "https://example.com",
            })
        );
    }

    #[test]
    fn test_source_url_omitted_when_absent() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("sourceUrl").is_none());
    }

    #[test]
    fn test_accepts_exact_match_alias() {
        let parsed: VerdictResult = serde_json::from_str(
            r#"{
                "verdict": "Supported",
                "confidence": 87,
                "explanation": "Well supported.",
                "exactMatch": "According to recent studies...",
                "source": "Journal"
            }"#,
        )
        .unwrap();

        assert_eq!(parsed.verdict(), Verdict::Supported);
        assert_eq!(parsed.extracted_text(), "According to recent studies...");
        assert_eq!(parsed.source_url(), None);
    }

    #[test]
    fn test_rejects_out_of_range_confidence() {
        let err = serde_json::from_str::<VerdictResult>(
            r#"{"verdict":"Refuted","confidence":101,"explanation":"","extractedText":"","source":""}"#,
        );
        assert!(err.is_err());
    }
}
