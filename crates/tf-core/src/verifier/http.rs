//! Verifier backed by a remote service speaking the same JSON contract

use super::ClaimVerifier;
use crate::{ServiceError, VerdictResult, VerificationRequest};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Longest upstream error body carried into a [`ServiceError`]
const MAX_ERROR_BODY: usize = 512;

/// Forwards requests to `POST {base}/api/verify`
pub struct HttpVerifier {
    client: reqwest::Client,
    endpoint: Url,
    timeout: Duration,
}

impl HttpVerifier {
    pub fn new(base_url: &Url, timeout: Duration) -> Result<Self, url::ParseError> {
        let mut base = base_url.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let endpoint = base.join("api/verify")?;

        Ok(Self {
            client: reqwest::Client::new(),
            endpoint,
            timeout,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ClaimVerifier for HttpVerifier {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn verify(&self, request: &VerificationRequest) -> Result<VerdictResult, ServiceError> {
        debug!("POST {}", self.endpoint);

        let response = self
            .client
            .post(self.endpoint.clone())
            .timeout(self.timeout)
            .json(request)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ServiceError::Upstream {
                status: status.as_u16(),
                message: upstream_message(&body),
            });
        }

        let body = response.bytes().await.map_err(transport_error)?;
        serde_json::from_slice(&body).map_err(|e| ServiceError::InvalidResponse(e.to_string()))
    }
}

fn transport_error(err: reqwest::Error) -> ServiceError {
    if err.is_timeout() {
        ServiceError::Timeout
    } else {
        ServiceError::Unavailable(err.to_string())
    }
}

/// Prefer the `message` field of a JSON error body, else the raw text
fn upstream_message(body: &str) -> String {
    let value = serde_json::from_str::<serde_json::Value>(body).ok();
    let message = value
        .as_ref()
        .and_then(|v| v.get("message"))
        .and_then(|m| m.as_str())
        .unwrap_or(body);

    message.chars().take(MAX_ERROR_BODY).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{StubVerifier, Verdict};
    use axum::{http::StatusCode, routing::post, Json, Router};

    async fn serve(app: Router) -> Url {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        Url::parse(&format!("http://{}", addr)).unwrap()
    }

    fn request() -> VerificationRequest {
        VerificationRequest::new("Vaccines cause autism in children", None).unwrap()
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let base = Url::parse("http://verifier.internal/v2").unwrap();
        let verifier = HttpVerifier::new(&base, Duration::from_secs(1)).unwrap();
        assert_eq!(verifier.endpoint().as_str(), "http://verifier.internal/v2/api/verify");

        let base = Url::parse("http://verifier.internal").unwrap();
        let verifier = HttpVerifier::new(&base, Duration::from_secs(1)).unwrap();
        assert_eq!(verifier.endpoint().as_str(), "http://verifier.internal/api/verify");
    }

    #[test]
    fn test_upstream_message_extraction() {
        assert_eq!(upstream_message(r#"{"error":"service","message":"down"}"#), "down");
        assert_eq!(upstream_message("plain failure"), "plain failure");
        assert_eq!(upstream_message(&"x".repeat(2000)).len(), MAX_ERROR_BODY);

        let long = serde_json::json!({ "message": "y".repeat(5000) }).to_string();
        assert_eq!(upstream_message(&long).chars().count(), MAX_ERROR_BODY);
    }

    #[tokio::test]
    async fn test_decodes_upstream_result() {
        let app = Router::new().route(
            "/api/verify",
            post(|Json(body): Json<serde_json::Value>| async move {
                assert_eq!(body["claim"], "Vaccines cause autism in children");
                Json(StubVerifier::canned_result())
            }),
        );
        let base = serve(app).await;

        let verifier = HttpVerifier::new(&base, Duration::from_secs(5)).unwrap();
        let result = verifier.verify(&request()).await.unwrap();

        assert_eq!(result.verdict(), Verdict::Refuted);
        assert_eq!(result.confidence().percent(), 87);
    }

    #[tokio::test]
    async fn test_upstream_error_status() {
        let app = Router::new().route(
            "/api/verify",
            post(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({ "error": "service", "message": "model offline" })),
                )
            }),
        );
        let base = serve(app).await;

        let verifier = HttpVerifier::new(&base, Duration::from_secs(5)).unwrap();
        let err = verifier.verify(&request()).await.unwrap_err();

        assert_eq!(
            err,
            ServiceError::Upstream {
                status: 500,
                message: "model offline".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_out_of_range_confidence_is_invalid() {
        let app = Router::new().route(
            "/api/verify",
            post(|| async {
                Json(serde_json::json!({
                    "verdict": "Supported",
                    "confidence": 120,
                    "explanation": "",
                    "extractedText": "",
                    "source": ""
                }))
            }),
        );
        let base = serve(app).await;

        let verifier = HttpVerifier::new(&base, Duration::from_secs(5)).unwrap();
        let err = verifier.verify(&request()).await.unwrap_err();

        assert!(matches!(err, ServiceError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_slow_upstream_times_out() {
        let app = Router::new().route(
            "/api/verify",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Json(StubVerifier::canned_result())
            }),
        );
        let base = serve(app).await;

        let verifier = HttpVerifier::new(&base, Duration::from_millis(100)).unwrap();
        let err = verifier.verify(&request()).await.unwrap_err();

        assert_eq!(err, ServiceError::Timeout);
    }

    #[tokio::test]
    async fn test_unreachable_upstream() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let base = Url::parse(&format!("http://{}", addr)).unwrap();
        let verifier = HttpVerifier::new(&base, Duration::from_secs(5)).unwrap();
        let err = verifier.verify(&request()).await.unwrap_err();

        assert!(matches!(err, ServiceError::Unavailable(_)));
    }
}
