use crate::core::{AppError, Result};
use std::collections::HashMap;
use std::fmt;

/// Form fields that carry secrets and must never be logged
pub const SECRET_FIELDS: [&str; 2] = ["token", "password"];

/// Merchant credentials for the acquiring API
///
/// The mode is chosen once and fixed for the client's lifetime.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Pre-issued access token, sent as `token`
    Token(String),
    /// API user, sent as `userName` + `password`
    Password { login: String, password: String },
}

impl Credentials {
    /// Build credentials from an auth mapping
    ///
    /// # Arguments
    /// * `is_token_auth` - selects token mode (`accessToken`) over login/password mode
    /// * `auth` - mapping with `accessToken` (or `access_token`), or `login` and `password`
    ///
    /// # Errors
    /// `AppError::Configuration` naming the first missing key. Credentials are checked
    /// here, when the client is configured, not on the first gateway call.
    pub fn from_auth(is_token_auth: bool, auth: &HashMap<String, String>) -> Result<Self> {
        let require = |key: &str| {
            auth.get(key)
                .cloned()
                .ok_or_else(|| AppError::configuration(format!("Missing auth key: {}", key)))
        };

        if is_token_auth {
            auth.get("accessToken")
                .or_else(|| auth.get("access_token"))
                .cloned()
                .map(Credentials::Token)
                .ok_or_else(|| AppError::configuration("Missing auth key: accessToken"))
        } else {
            Ok(Credentials::Password {
                login: require("login")?,
                password: require("password")?,
            })
        }
    }

    pub fn is_token_auth(&self) -> bool {
        matches!(self, Credentials::Token(_))
    }

    /// Form fields injected into every outgoing request
    pub fn form_fields(&self) -> Vec<(String, String)> {
        match self {
            Credentials::Token(token) => vec![("token".to_string(), token.clone())],
            Credentials::Password { login, password } => vec![
                ("userName".to_string(), login.clone()),
                ("password".to_string(), password.clone()),
            ],
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credentials::Token(_) => f.debug_tuple("Token").field(&"***").finish(),
            Credentials::Password { login, .. } => f
                .debug_struct("Password")
                .field("login", login)
                .field("password", &"***")
                .finish(),
        }
    }
}
