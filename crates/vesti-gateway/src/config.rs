//! Gateway configuration.
//!
//! The backend is a single configurable `host:port` pair. Values come from
//! the `VESTI_API_HOST`, `VESTI_API_PORT` and `VESTI_API_TIMEOUT_SECS`
//! environment variables, with development defaults matching a locally run
//! backend.

use std::env;
use std::time::Duration;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Base-URL and timeout configuration for [`crate::HttpGateway`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    pub host: String,
    pub port: u16,
    /// Per-request transport timeout
    pub timeout: Duration,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl GatewayConfig {
    /// Builds a configuration from environment variables, falling back to
    /// defaults for anything unset or unparseable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let host = env::var("VESTI_API_HOST").unwrap_or(defaults.host);
        let port = env::var("VESTI_API_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port);
        let timeout = env::var("VESTI_API_TIMEOUT_SECS")
            .ok()
            .and_then(|t| t.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.timeout);
        Self {
            host,
            port,
            timeout,
        }
    }

    /// Renders the base URL, e.g. `http://127.0.0.1:5000`.
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// Resolves an image URL from a backend payload.
    ///
    /// The backend hands out relative paths (`/uploads/...`) for its own
    /// files and absolute URLs for externally hosted images; absolute URLs
    /// pass through untouched.
    pub fn resolve_image_url(&self, url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") {
            url.to_string()
        } else {
            format!("{}{}", self.base_url(), url)
        }
    }
}
