//! Plain-text summary used by the "Share" action

use crate::{VerdictResult, VerificationRequest};

pub fn share_text(request: &VerificationRequest, result: &VerdictResult) -> String {
    let mut out = format!(
        "Claim: \"{}\"\nVerdict: {} ({} confidence)\n{}\nSource: {}",
        request.claim().trim(),
        result.verdict(),
        result.confidence(),
        result.explanation(),
        result.source(),
    );

    if let Some(url) = result.source_url() {
        out.push_str(&format!(" ({})", url));
    }

    out
}
