//! Server configuration from environment variables

use std::path::PathBuf;
use std::time::Duration;
use tf_core::RequestLimits;
use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{name} must be set when TF_VERIFIER=http")]
    Missing { name: &'static str },

    #[error("invalid value for {name}: {value:?} ({reason})")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Which backend answers verification requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifierKind {
    Stub,
    Http,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub verifier: VerifierKind,
    pub upstream_url: Option<Url>,
    pub upstream_timeout: Duration,
    pub static_dir: PathBuf,
    pub limits: RequestLimits,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".to_string(),
            verifier: VerifierKind::Stub,
            upstream_url: None,
            upstream_timeout: Duration::from_secs(30),
            static_dir: PathBuf::from("./crates/tf-web/dist"),
            limits: RequestLimits::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable source; unset variables keep their defaults
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(addr) = get("TF_BIND_ADDR") {
            config.bind_addr = addr;
        }

        if let Some(kind) = get("TF_VERIFIER") {
            config.verifier = match kind.trim().to_lowercase().as_str() {
                "stub" => VerifierKind::Stub,
                "http" => VerifierKind::Http,
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "TF_VERIFIER",
                        value: kind,
                        reason: "expected stub or http".to_string(),
                    })
                }
            };
        }

        if let Some(raw) = get("TF_UPSTREAM_URL") {
            let url = Url::parse(&raw).map_err(|e| ConfigError::Invalid {
                name: "TF_UPSTREAM_URL",
                value: raw.clone(),
                reason: e.to_string(),
            })?;
            config.upstream_url = Some(url);
        }

        if let Some(secs) = parse_number(&get, "TF_UPSTREAM_TIMEOUT_SECS")? {
            config.upstream_timeout = Duration::from_secs(secs as u64);
        }

        if let Some(dir) = get("TF_STATIC_DIR") {
            config.static_dir = PathBuf::from(dir);
        }

        if let Some(max) = parse_number(&get, "TF_MAX_CLAIM_CHARS")? {
            config.limits.max_claim_chars = max;
        }

        if let Some(max) = parse_number(&get, "TF_MAX_EVIDENCE_CHARS")? {
            config.limits.max_evidence_chars = max;
        }

        if config.verifier == VerifierKind::Http && config.upstream_url.is_none() {
            return Err(ConfigError::Missing {
                name: "TF_UPSTREAM_URL",
            });
        }

        Ok(config)
    }
}

fn parse_number(
    get: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<Option<usize>, ConfigError> {
    let Some(raw) = get(name) else {
        return Ok(None);
    };

    match raw.trim().parse::<usize>() {
        Ok(0) => Err(ConfigError::Invalid {
            name,
            value: raw,
            reason: "must be greater than zero".to_string(),
        }),
        Ok(n) => Ok(Some(n)),
        Err(e) => Err(ConfigError::Invalid {
            name,
            value: raw,
            reason: e.to_string(),
        }),
    }
}
