//! Truth Finder API Server

mod config;
mod error;
mod routes;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tf_core::{ClaimVerifier, HttpVerifier, StubVerifier, VerificationService};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use config::{AppConfig, ConfigError, VerifierKind};

/// Application state shared across handlers
pub struct AppState {
    pub service: VerificationService,
    pub config: AppConfig,
}

fn build_verifier(config: &AppConfig) -> Result<Arc<dyn ClaimVerifier>, ConfigError> {
    match config.verifier {
        VerifierKind::Stub => Ok(Arc::new(StubVerifier)),
        VerifierKind::Http => {
            let base = config.upstream_url.as_ref().ok_or(ConfigError::Missing {
                name: "TF_UPSTREAM_URL",
            })?;
            let verifier = HttpVerifier::new(base, config.upstream_timeout).map_err(|e| {
                ConfigError::Invalid {
                    name: "TF_UPSTREAM_URL",
                    value: base.to_string(),
                    reason: e.to_string(),
                }
            })?;
            info!("Forwarding verification to {}", verifier.endpoint());
            Ok(Arc::new(verifier))
        }
    }
}

/// Build router
pub fn app(state: Arc<AppState>) -> Router {
    let static_dir = &state.config.static_dir;
    let web_ui = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        // Health check
        .route("/health", get(routes::health_check))

        // Verification
        .route("/api/verify", post(routes::verify::verify_claim))
        .route("/api/verify/report", post(routes::verify::verify_report))
        .route("/api/config", get(routes::config::get_config))

        // Web UI
        .fallback_service(web_ui)

        // CORS
        .layer(CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any))

        // Tracing
        .layer(TraceLayer::new_for_http())

        // State
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "tf_api=debug,tf_core=debug,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Truth Finder API Server");

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let verifier = match build_verifier(&config) {
        Ok(verifier) => verifier,
        Err(e) => {
            error!("Failed to create verifier: {}", e);
            std::process::exit(1);
        }
    };

    let service = VerificationService::new(verifier).with_limits(config.limits);
    info!("Using {} verifier", service.verifier_name());

    let addr = config.bind_addr.clone();
    let state = Arc::new(AppState { service, config });

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };
    info!("Listening on {}", addr);

    if let Err(e) = axum::serve(listener, app(state)).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}
