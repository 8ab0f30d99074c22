use crate::core::{AppError, Result};
use crate::modules::gateways::models::Credentials;
use crate::modules::gateways::services::DEFAULT_BASE_URL;
use std::env;

/// Default per-request timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Acquiring gateway configuration
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Gateway host; endpoint paths are appended to it
    pub base_url: String,
    pub credentials: Credentials,
    pub timeout_secs: u64,
    /// Skip TLS certificate verification. Unsafe; off unless explicitly enabled.
    pub accept_invalid_certs: bool,
}

impl GatewayConfig {
    /// Config for the default gateway host with the given credentials
    pub fn new(credentials: Credentials) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            credentials,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            accept_invalid_certs: false,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// `SBERBANK_TOKEN` selects token auth; otherwise `SBERBANK_LOGIN` and
    /// `SBERBANK_PASSWORD` are required. Blank values count as unset, so the
    /// `SBERBANK_TOKEN=` line from `.env.example` keeps password mode.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let credentials = match lookup("SBERBANK_TOKEN") {
            Some(token) => Credentials::Token(token),
            None => Credentials::Password {
                login: lookup("SBERBANK_LOGIN")
                    .ok_or_else(|| AppError::configuration("SBERBANK_LOGIN not set"))?,
                password: lookup("SBERBANK_PASSWORD")
                    .ok_or_else(|| AppError::configuration("SBERBANK_PASSWORD not set"))?,
            },
        };

        Ok(GatewayConfig {
            base_url: lookup("SBERBANK_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            credentials,
            timeout_secs: lookup("SBERBANK_TIMEOUT_SECS")
                .unwrap_or_else(|| DEFAULT_TIMEOUT_SECS.to_string())
                .parse()
                .map_err(|_| AppError::configuration("Invalid SBERBANK_TIMEOUT_SECS"))?,
            accept_invalid_certs: lookup("SBERBANK_ACCEPT_INVALID_CERTS")
                .unwrap_or_else(|| "false".to_string())
                .parse()
                .map_err(|_| AppError::configuration("Invalid SBERBANK_ACCEPT_INVALID_CERTS"))?,
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim_end_matches('/').is_empty() {
            return Err(AppError::configuration("Gateway base URL must not be empty"));
        }

        if self.timeout_secs == 0 {
            return Err(AppError::configuration(
                "Gateway timeout must be greater than 0",
            ));
        }

        Ok(())
    }
}
