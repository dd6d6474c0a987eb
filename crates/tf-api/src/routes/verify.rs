//! Claim verification routes

use crate::error::ApiError;
use crate::AppState;
use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use tf_core::report::{self, ReportFormat, VerifiedClaim};
use tf_core::{VerdictResult, VerificationRequest};

#[derive(Debug, Deserialize)]
pub struct VerifyPayload {
    #[serde(default)]
    pub claim: String,
    #[serde(default)]
    pub evidence: Option<String>,
}

#[derive(Deserialize)]
pub struct ReportQuery {
    pub format: Option<String>,
}

pub async fn verify_claim(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<VerifyPayload>,
) -> Result<Json<VerdictResult>, ApiError> {
    let result = state
        .service
        .verify(&payload.claim, payload.evidence.as_deref())
        .await?;

    Ok(Json(result))
}

pub async fn verify_report(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ReportQuery>,
    Json(payload): Json<VerifyPayload>,
) -> Result<Response, ApiError> {
    let format = ReportFormat::parse(query.format.as_deref().unwrap_or("markdown"));

    let request =
        VerificationRequest::with_limits(payload.claim, payload.evidence, state.service.limits())?;
    let result = state.service.verify_request(&request).await?;
    let verified = VerifiedClaim::new(request, result);

    let content = report::generate_report(&verified, format)
        .map_err(|e| ApiError::Internal(format!("report serialization failed: {}", e)))?;

    let filename = format!(
        "claim_report_{}.{}",
        verified.generated_at.format("%Y%m%dT%H%M%SZ"),
        format.extension()
    );

    let headers = [
        (header::CONTENT_TYPE, format.content_type().to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename),
        ),
    ];

    Ok((headers, content).into_response())
}
