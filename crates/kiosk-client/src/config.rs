//! Client configuration.
//!
//! The kiosk talks to one backend for both the catalog and the receipt
//! printer, so a single config covers both clients.

use std::time::Duration;

/// Default backend when nothing is configured (local development server).
const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Per-request timeout. Catalog fetches and the print round trip are
/// interactive; anything slower than this reads as "broken" on a kiosk.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the HTTP clients.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL, without a trailing slash.
    pub base_url: String,

    /// Timeout applied to every request.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Creates a config from an explicit URL, the `KIOSK_API_URL`
    /// environment variable, or the local default, in that order.
    pub fn from_env_or(base_url: Option<String>) -> Self {
        let base_url = base_url
            .or_else(|| std::env::var("KIOSK_API_URL").ok())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        ClientConfig {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_env_or(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_url_wins_and_slash_is_trimmed() {
        let config = ClientConfig::from_env_or(Some("http://kiosk.local:8000/".to_string()));
        assert_eq!(config.base_url, "http://kiosk.local:8000");
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }
}
