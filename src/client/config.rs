//! Client configuration

use std::time::Duration;

/// Analysis server used when none is given
pub const DEFAULT_SERVER_URL: &str = "http://16.16.138.18:8000";

/// Timeout for `GET /health`
pub const HEALTH_TIMEOUT: Duration = Duration::from_secs(10);

/// Timeout for `POST /analyze` (large uploads take a while)
pub const ANALYZE_TIMEOUT: Duration = Duration::from_secs(120);

/// Where the server lives and how long to wait for it
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL without trailing slash (e.g. http://localhost:8000)
    pub server_url: String,

    pub health_timeout: Duration,

    pub analyze_timeout: Duration,
}

impl ClientConfig {
    /// Create a configuration for the server at `server_url`
    pub fn new(server_url: impl Into<String>) -> Self {
        let server_url = server_url.into().trim_end_matches('/').to_string();
        Self {
            server_url,
            health_timeout: HEALTH_TIMEOUT,
            analyze_timeout: ANALYZE_TIMEOUT,
        }
    }

    /// Use `server_url` when given, the default server otherwise
    pub fn from_override(server_url: Option<String>) -> Self {
        server_url.map(Self::new).unwrap_or_default()
    }

    pub fn with_health_timeout(mut self, timeout: Duration) -> Self {
        self.health_timeout = timeout;
        self
    }

    pub fn with_analyze_timeout(mut self, timeout: Duration) -> Self {
        self.analyze_timeout = timeout;
        self
    }

    pub fn health_endpoint(&self) -> String {
        format!("{}/health", self.server_url)
    }

    pub fn analyze_endpoint(&self) -> String {
        format!("{}/analyze", self.server_url)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SERVER_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.server_url, DEFAULT_SERVER_URL);
        assert_eq!(config.health_timeout, Duration::from_secs(10));
        assert_eq!(config.analyze_timeout, Duration::from_secs(120));
        assert_eq!(config.health_endpoint(), "http://16.16.138.18:8000/health");
        assert_eq!(config.analyze_endpoint(), "http://16.16.138.18:8000/analyze");
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ClientConfig::new("http://localhost:8000/");
        assert_eq!(config.analyze_endpoint(), "http://localhost:8000/analyze");
    }

    #[test]
    fn test_from_override() {
        let config = ClientConfig::from_override(Some("http://127.0.0.1:9000".to_string()));
        assert_eq!(config.server_url, "http://127.0.0.1:9000");

        let config = ClientConfig::from_override(None);
        assert_eq!(config.server_url, DEFAULT_SERVER_URL);
    }
}
