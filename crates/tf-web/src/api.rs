//! Calls into the verification API served from the same origin

use serde::Deserialize;
use tf_core::{
    RequestLimits, ServiceError, ValidationError, VerdictResult, VerificationRequest, VerifyError,
};

/// Longest raw error body carried into a [`ServiceError`]
const MAX_ERROR_BODY: usize = 512;

#[derive(Deserialize, Default)]
#[serde(default)]
struct ErrorBody {
    error: String,
    message: String,
}

fn url(path: &str) -> Result<String, ServiceError> {
    let origin = leptos::window()
        .location()
        .origin()
        .map_err(|_| ServiceError::Unavailable("page origin unavailable".to_string()))?;
    Ok(format!("{}{}", origin, path))
}

/// Limits the server validates against
pub async fn limits() -> Result<RequestLimits, ServiceError> {
    let url = url("/api/config")?;
    tracing::debug!("GET {}", url);

    let response = reqwest::get(&url)
        .await
        .map_err(|e| ServiceError::Unavailable(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ServiceError::Upstream {
            status: status.as_u16(),
            message: status.to_string(),
        });
    }

    response
        .json::<RequestLimits>()
        .await
        .map_err(|e| ServiceError::InvalidResponse(e.to_string()))
}

pub async fn verify(request: &VerificationRequest) -> Result<VerdictResult, VerifyError> {
    let url = url("/api/verify")?;
    tracing::debug!("POST {}", url);

    let response = reqwest::Client::new()
        .post(&url)
        .json(request)
        .send()
        .await
        .map_err(|e| ServiceError::Unavailable(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(map_error(status.as_u16(), &body));
    }

    response
        .json::<VerdictResult>()
        .await
        .map_err(|e| ServiceError::InvalidResponse(e.to_string()).into())
}

/// Translate an error response from the API back into the error it reported
fn map_error(status: u16, body: &str) -> VerifyError {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    let message = if !parsed.message.is_empty() {
        parsed.message
    } else if !body.trim().is_empty() {
        body.chars().take(MAX_ERROR_BODY).collect()
    } else {
        format!("HTTP {}", status)
    };

    match (parsed.error.as_str(), status) {
        ("validation", _) | (_, 422) => ValidationError::Rejected(message).into(),
        ("timeout", _) | (_, 504) => ServiceError::Timeout.into(),
        (_, 503) => ServiceError::Unavailable(message).into(),
        _ => ServiceError::Upstream { status, message }.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_validation_rejection() {
        let err = map_error(
            422,
            r#"{"error":"validation","message":"claim exceeds 280 characters"}"#,
        );
        assert!(err.is_validation());
        assert_eq!(
            err,
            VerifyError::Validation(ValidationError::Rejected(
                "claim exceeds 280 characters".to_string()
            ))
        );
        assert_eq!(err.to_string(), "claim exceeds 280 characters");
    }

    #[test]
    fn test_unavailable() {
        let err = map_error(
            503,
            r#"{"error":"service","message":"verification service unavailable: refused"}"#,
        );
        assert_eq!(
            err,
            VerifyError::Service(ServiceError::Unavailable(
                "verification service unavailable: refused".to_string()
            ))
        );
    }

    #[test]
    fn test_timeout() {
        let err = map_error(
            504,
            r#"{"error":"timeout","message":"verification service timed out"}"#,
        );
        assert_eq!(err, VerifyError::Service(ServiceError::Timeout));

        // Gateway timeouts from a proxy carry no JSON body
        let err = map_error(504, "<html>Gateway Timeout</html>");
        assert_eq!(err, VerifyError::Service(ServiceError::Timeout));
    }

    #[test]
    fn test_other_failures_are_upstream() {
        let err = map_error(500, r#"{"error":"internal","message":"report failed"}"#);
        assert_eq!(
            err,
            VerifyError::Service(ServiceError::Upstream {
                status: 500,
                message: "report failed".to_string()
            })
        );

        let err = map_error(502, &"x".repeat(2000));
        assert!(err.is_service());
        match err {
            VerifyError::Service(ServiceError::Upstream { status, message }) => {
                assert_eq!(status, 502);
                assert_eq!(message.len(), MAX_ERROR_BODY);
            }
            other => panic!("unexpected error: {:?}", other),
        }

        let err = map_error(500, "");
        assert_eq!(
            err,
            VerifyError::Service(ServiceError::Upstream {
                status: 500,
                message: "HTTP 500".to_string()
            })
        );
    }
}
