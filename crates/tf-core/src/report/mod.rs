//! Report generation

pub mod json;
pub mod markdown;
pub mod text;

use crate::{VerdictResult, VerificationRequest};
use chrono::{DateTime, Utc};
use serde::Serialize;

pub use text::share_text;

/// Report format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Json,
    Markdown,
    Text,
}

impl ReportFormat {
    /// Unknown names fall back to Markdown
    pub fn parse(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "json" => ReportFormat::Json,
            "text" | "txt" => ReportFormat::Text,
            _ => ReportFormat::Markdown,
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ReportFormat::Json => "application/json",
            ReportFormat::Markdown => "text/markdown; charset=utf-8",
            ReportFormat::Text => "text/plain; charset=utf-8",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Json => "json",
            ReportFormat::Markdown => "md",
            ReportFormat::Text => "txt",
        }
    }
}

/// A request paired with the verdict it produced
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifiedClaim {
    pub request: VerificationRequest,
    pub result: VerdictResult,
    pub generated_at: DateTime<Utc>,
}

impl VerifiedClaim {
    pub fn new(request: VerificationRequest, result: VerdictResult) -> Self {
        Self {
            request,
            result,
            generated_at: Utc::now(),
        }
    }
}

/// Generate report in specified format
pub fn generate_report(
    verified: &VerifiedClaim,
    format: ReportFormat,
) -> Result<String, serde_json::Error> {
    match format {
        ReportFormat::Json => json::generate(verified),
        ReportFormat::Markdown => Ok(markdown::generate(verified)),
        ReportFormat::Text => Ok(share_text(&verified.request, &verified.result)),
    }
}
