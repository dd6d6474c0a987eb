//! Markdown report generation

use super::VerifiedClaim;
use std::fmt::Write;

pub fn generate(verified: &VerifiedClaim) -> String {
    let request = &verified.request;
    let result = &verified.result;
    let mut out = String::new();

    let _ = writeln!(out, "# Claim Verification Report\n");
    let _ = writeln!(out, "**Generated:** {}\n", verified.generated_at.to_rfc3339());

    let _ = writeln!(out, "## Claim\n");
    let _ = writeln!(out, "{}\n", blockquote(request.claim()));
    if let Some(evidence) = request.evidence() {
        let _ = writeln!(out, "### Supporting Evidence\n");
        let _ = writeln!(out, "{}\n", blockquote(evidence));
    }

    let _ = writeln!(out, "## Verdict\n");
    let _ = writeln!(out, "**{}** ({} confidence)\n", result.verdict(), result.confidence());

    let _ = writeln!(out, "## Explanation\n");
    let _ = writeln!(out, "{}\n", result.explanation());

    let _ = writeln!(out, "## Extracted Text\n");
    let _ = writeln!(out, "{}\n", blockquote(result.extracted_text()));

    let _ = writeln!(out, "## Source\n");
    match result.source_url() {
        Some(url) => {
            let _ = writeln!(out, "{} <{}>", result.source(), url);
        }
        None => {
            let _ = writeln!(out, "{}", result.source());
        }
    }

    out
}

fn blockquote(text: &str) -> String {
    text.lines()
        .map(|line| format!("> {}", line))
        .collect::<Vec<_>>()
        .join("\n")
}
