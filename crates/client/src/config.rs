//! Client configuration.

use std::time::Duration;

/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV: &str = "BIBLIOTEK_API_URL";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Configuration for [`crate::ApiClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the remote API, without a trailing slash.
    pub base_url: String,
    /// Timeout applied to every request, and to the bounded refresh attempt
    /// made during session restoration.
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read the base URL from `BIBLIOTEK_API_URL`, falling back to the local
    /// development server.
    pub fn from_env() -> Self {
        let base_url = std::env::var(BASE_URL_ENV).unwrap_or_else(|_| {
            tracing::warn!("{BASE_URL_ENV} not set; using local dev default");
            "http://localhost:8080".to_string()
        });
        Self::new(base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = ClientConfig::new("http://localhost:8080/");
        assert_eq!(config.base_url, "http://localhost:8080");
    }

    #[test]
    fn timeout_defaults_to_five_seconds() {
        let config = ClientConfig::new("http://localhost:8080");
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn timeout_can_be_overridden() {
        let config =
            ClientConfig::new("http://localhost:8080").with_timeout(Duration::from_millis(250));
        assert_eq!(config.timeout, Duration::from_millis(250));
    }
}
