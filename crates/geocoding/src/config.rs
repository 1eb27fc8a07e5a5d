//! Geocoding service configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::error::GeoError;

/// Character set requested for every response
pub const CHARSET: &str = "utf-8";

/// Configuration for the Google Maps geocoding service
#[derive(Clone, Deserialize)]
pub struct GeoConfig {
    /// Map API key (sensitive - uses SecretString)
    #[serde(default = "default_api_key")]
    pub api_key: SecretString,

    /// Geocoding endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Street view panorama endpoint
    #[serde(default = "default_street_view_url")]
    pub street_view_url: String,

    /// Response language (`hl` parameter)
    #[serde(default = "default_language")]
    pub language: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_api_key() -> SecretString {
    SecretString::from(String::new())
}

fn default_base_url() -> String {
    "http://maps.google.com/maps/geo".to_string()
}

fn default_street_view_url() -> String {
    "http://maps.google.com/cbk".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    format!("geocoding/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for GeoConfig {
    fn default() -> Self {
        Self {
            api_key: default_api_key(),
            base_url: default_base_url(),
            street_view_url: default_street_view_url(),
            language: default_language(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl std::fmt::Debug for GeoConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeoConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("street_view_url", &self.street_view_url)
            .field("language", &self.language)
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl GeoConfig {
    /// Create a configuration with the given API key and default endpoints
    #[must_use]
    pub fn with_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
            ..Default::default()
        }
    }

    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: 5,
            ..Self::with_key("API_KEY")
        }
    }

    /// The API key in clear text, for request URLs and error messages
    #[must_use]
    pub fn key(&self) -> &str {
        self.api_key.expose_secret()
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::ConfigurationError`] if an endpoint or the
    /// language is empty, or the timeout is zero. The key itself is never
    /// validated locally; the service reports bad keys as status 610.
    pub fn validate(&self) -> Result<(), GeoError> {
        if self.base_url.is_empty() {
            return Err(GeoError::ConfigurationError(
                "base_url must not be empty".to_string(),
            ));
        }

        if self.street_view_url.is_empty() {
            return Err(GeoError::ConfigurationError(
                "street_view_url must not be empty".to_string(),
            ));
        }

        if self.language.trim().is_empty() {
            return Err(GeoError::ConfigurationError(
                "language must not be empty".to_string(),
            ));
        }

        if self.timeout_secs == 0 {
            return Err(GeoError::ConfigurationError(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
