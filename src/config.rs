//! Provider configuration for the messaging client.

use std::fmt;
use thiserror::Error;

/// Environment variable holding the bearer token.
pub const TOKEN_ENV: &str = "WP_TOKEN";

/// Environment variable holding the phone-number-scoped base URL.
pub const BASE_URL_ENV: &str = "WP_BASE_URL";

/// Errors raised while assembling a [`ClientConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A value was empty.
    #[error("{0} must not be empty")]
    Empty(&'static str),

    /// An environment variable was not set or not valid unicode.
    #[error("environment variable {0} is not set")]
    MissingEnv(&'static str),
}

/// Credentials and endpoint of the Cloud API.
///
/// Immutable after construction. `Debug` output redacts the token.
///
/// # Examples
///
/// ```
/// use metakit_whatsapp::config::ClientConfig;
///
/// let config = ClientConfig::new("token", "https://graph.facebook.com/v18.0/123456/")
///     .expect("valid config");
/// assert_eq!(config.messages_url(), "https://graph.facebook.com/v18.0/123456/messages");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    token: String,
    base_url: String,
}

impl ClientConfig {
    /// Creates a configuration. A trailing `/` on `base_url` is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Empty`] if either value is empty.
    pub fn new(token: impl Into<String>, base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let token_value = token.into();
        if token_value.is_empty() {
            return Err(ConfigError::Empty("token"));
        }
        let raw_base_url = base_url.into();
        let trimmed = raw_base_url.trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ConfigError::Empty("base URL"));
        }

        Ok(Self {
            token: token_value,
            base_url: trimmed.to_owned(),
        })
    }

    /// Reads the configuration from `WP_TOKEN` and `WP_BASE_URL`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnv`] if a variable is unset, or
    /// [`ConfigError::Empty`] if it is empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        let token = std::env::var(TOKEN_ENV).map_err(|_| ConfigError::MissingEnv(TOKEN_ENV))?;
        let base_url =
            std::env::var(BASE_URL_ENV).map_err(|_| ConfigError::MissingEnv(BASE_URL_ENV))?;
        Self::new(token, base_url)
    }

    /// Returns the bearer token.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the `/messages` endpoint URL.
    #[must_use]
    pub fn messages_url(&self) -> String {
        format!("{}/messages", self.base_url)
    }

    /// Returns the `Authorization` header value.
    #[must_use]
    pub fn authorization(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("token", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}
