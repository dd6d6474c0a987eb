//! Navigation query carrying a claim from the submission screen to the
//! results screen

use crate::{RequestLimits, ValidationError, VerificationRequest};
use url::form_urlencoded;

pub const RESULTS_PATH: &str = "/results";

const CLAIM_KEY: &str = "claim";
const EVIDENCE_KEY: &str = "evidence";

/// Claim and evidence exactly as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ResultsQuery {
    pub claim: String,
    pub evidence: String,
}

impl ResultsQuery {
    pub fn new(claim: impl Into<String>, evidence: impl Into<String>) -> Self {
        Self {
            claim: claim.into(),
            evidence: evidence.into(),
        }
    }

    /// Encode as `claim=…&evidence=…`
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair(CLAIM_KEY, &self.claim)
            .append_pair(EVIDENCE_KEY, &self.evidence)
            .finish()
    }

    /// Decode a search string, with or without the leading `?`.
    ///
    /// Missing keys decode to empty strings and the first occurrence of a
    /// repeated key wins.
    pub fn parse(search: &str) -> Self {
        let search = search.strip_prefix('?').unwrap_or(search);
        let mut claim = None;
        let mut evidence = None;

        for (key, value) in form_urlencoded::parse(search.as_bytes()) {
            match &*key {
                CLAIM_KEY if claim.is_none() => claim = Some(value.into_owned()),
                EVIDENCE_KEY if evidence.is_none() => evidence = Some(value.into_owned()),
                _ => {}
            }
        }

        Self {
            claim: claim.unwrap_or_default(),
            evidence: evidence.unwrap_or_default(),
        }
    }

    /// Relative link to the results screen
    pub fn href(&self) -> String {
        format!("{}?{}", RESULTS_PATH, self.to_query_string())
    }

    /// Absolute link for sharing, e.g. `share_url("https://truthfinder.app")`
    pub fn share_url(&self, origin: &str) -> String {
        format!("{}{}", origin.trim_end_matches('/'), self.href())
    }

    pub fn has_claim(&self) -> bool {
        !self.claim.trim().is_empty()
    }

    pub fn to_request(
        &self,
        limits: &RequestLimits,
    ) -> Result<VerificationRequest, ValidationError> {
        VerificationRequest::with_limits(self.claim.clone(), Some(self.evidence.clone()), limits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_round_trip_preserves_text() {
        let cases = [
            ("Vaccines cause autism in children", ""),
            ("a & b = c?", "100% + 5% / 2#frag"),
            ("  leading and trailing  ", "line one\nline two\r\n\ttabbed"),
            ("Température moyenne +1.1°C depuis 1880", "出典: 気象庁 😀"),
            ("already%20encoded+plus", "claim=evil&evidence=more"),
        ];

        for (claim, evidence) in cases {
            let query = ResultsQuery::new(claim, evidence);
            assert_eq!(ResultsQuery::parse(&query.to_query_string()), query);
            assert_eq!(ResultsQuery::parse(&format!("?{}", query.to_query_string())), query);
        }
    }

    #[test]
    fn test_decodes_percent_encoded_spaces() {
        let query = ResultsQuery::parse("?claim=The%20sky%20is%20blue&evidence=");
        assert_eq!(query.claim, "The sky is blue");
        assert_eq!(query.evidence, "");
    }

    #[test]
    fn test_missing_and_repeated_keys() {
        let query = ResultsQuery::parse("evidence=x&utm_source=mail");
        assert_eq!(query, ResultsQuery::new("", "x"));

        let query = ResultsQuery::parse("claim=first&claim=second");
        assert_eq!(query.claim, "first");
    }

    #[test]
    fn test_href_and_share_url() {
        let query = ResultsQuery::new("sky is blue", "");
        assert_eq!(query.href(), "/results?claim=sky+is+blue&evidence=");
        assert_eq!(
            query.share_url("https://truthfinder.app/"),
            "https://truthfinder.app/results?claim=sky+is+blue&evidence="
        );
    }

    #[test]
    fn test_to_request() {
        let limits = RequestLimits::default();

        let request = ResultsQuery::new("claim", "").to_request(&limits).unwrap();
        assert_eq!(request.evidence(), None);

        let err = ResultsQuery::new("   ", "evidence").to_request(&limits).unwrap_err();
        assert_eq!(err, ValidationError::EmptyClaim);
    }
}
