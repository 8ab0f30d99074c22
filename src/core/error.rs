/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
///
/// The `Display` text of each variant is what callers see in `GatewayResult::error`.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Request rejected before any network call
    #[error("{0}")]
    Validation(String),

    /// No usable response: connection failed or the body was not a JSON object
    #[error("Can't create connection to: {endpoint} | with data: {payload}")]
    Transport {
        endpoint: String,
        payload: String,
        raw_response: Option<String>,
    },

    /// Structured error payload returned by the gateway
    #[error("Error code: {code} | Message: {message}")]
    Gateway {
        code: i64,
        message: String,
        raw_response: String,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// HTTP client could not be built
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Operation the gateway integration does not offer
    #[error("Not implemented: {0}")]
    NotImplemented(String),
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }

    /// Raw gateway body attached to the error, if one was received
    pub fn raw_response(&self) -> Option<&str> {
        match self {
            AppError::Transport { raw_response, .. } => raw_response.as_deref(),
            AppError::Gateway { raw_response, .. } => Some(raw_response),
            _ => None,
        }
    }
}
