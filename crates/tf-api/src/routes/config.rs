//! Client-facing configuration

use crate::AppState;
use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;
use tf_core::RequestLimits;

/// Limits are flattened so clients can read them straight into
/// [`RequestLimits`]
#[derive(Serialize)]
pub struct ConfigResponse {
    pub verifier: String,
    #[serde(flatten)]
    pub limits: RequestLimits,
    pub version: String,
}

pub async fn get_config(State(state): State<Arc<AppState>>) -> Json<ConfigResponse> {
    Json(ConfigResponse {
        verifier: state.service.verifier_name().to_string(),
        limits: *state.service.limits(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
