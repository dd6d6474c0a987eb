//! HTTP error mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tf_core::{ServiceError, ValidationError, VerifyError};
use tracing::error;

#[derive(Debug)]
pub enum ApiError {
    Verify(VerifyError),
    Internal(String),
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Verify(VerifyError::Validation(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Verify(VerifyError::Service(ServiceError::Timeout)) => {
                StatusCode::GATEWAY_TIMEOUT
            }
            ApiError::Verify(VerifyError::Service(ServiceError::Unavailable(_))) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            ApiError::Verify(VerifyError::Service(_)) => StatusCode::BAD_GATEWAY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            ApiError::Verify(VerifyError::Validation(_)) => "validation",
            ApiError::Verify(VerifyError::Service(ServiceError::Timeout)) => "timeout",
            ApiError::Verify(VerifyError::Service(_)) => "service",
            ApiError::Internal(_) => "internal",
        }
    }
}

impl From<VerifyError> for ApiError {
    fn from(err: VerifyError) -> Self {
        ApiError::Verify(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Verify(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match &self {
            ApiError::Verify(e) => e.to_string(),
            ApiError::Internal(detail) => {
                error!("Internal error: {}", detail);
                "internal server error".to_string()
            }
        };

        let body = ErrorBody {
            error: self.kind(),
            message,
        };

        (self.status(), Json(body)).into_response()
    }
}
