//! Site configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `SITE_API_BASE_URL` - Base URL of the REST backend (e.g., `http://127.0.0.1:8001`)
//!
//! ## Optional
//! - `SITE_HOST` - Bind address (default: 127.0.0.1)
//! - `SITE_PORT` - Listen port (default: 3000)
//! - `SITE_API_TIMEOUT_SECS` - Timeout for every backend call (default: 10)
//! - `SITE_GALLERY_DATA_PATH` - Album document read before asking the backend
//!   (default: `crates/site/static/real_gallery_data.json`)
//! - `SITE_STATIC_DIR` - Directory served under `/static` (default: `crates/site/static`)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Default timeout for backend calls.
pub const DEFAULT_API_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Site application configuration.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Base URL of the REST backend, without the `/api` suffix
    pub api_base_url: Url,
    /// Timeout applied to every backend call
    pub api_timeout: Duration,
    /// Path of the static album document
    pub gallery_data_path: PathBuf,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
}

impl SiteConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("SITE_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("SITE_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("SITE_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("SITE_PORT".to_string(), e.to_string()))?;
        let api_base_url = parse_base_url(&get_required_env("SITE_API_BASE_URL")?)?;
        let timeout_secs = get_env_or_default("SITE_API_TIMEOUT_SECS", "10")
            .parse::<u64>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("SITE_API_TIMEOUT_SECS".to_string(), e.to_string())
            })?;

        Ok(Self {
            host,
            port,
            api_base_url,
            api_timeout: Duration::from_secs(timeout_secs),
            gallery_data_path: PathBuf::from(get_env_or_default(
                "SITE_GALLERY_DATA_PATH",
                "crates/site/static/real_gallery_data.json",
            )),
            static_dir: PathBuf::from(get_env_or_default("SITE_STATIC_DIR", "crates/site/static")),
            sentry_dsn: get_optional_env("SENTRY_DSN"),
            sentry_environment: get_optional_env("SENTRY_ENVIRONMENT"),
        })
    }

    /// Configuration pointing at `api_base_url` with defaults for everything else.
    ///
    /// Used by tests and by anything embedding the site router.
    #[must_use]
    pub fn new(api_base_url: Url) -> Self {
        let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 0,
            api_base_url,
            api_timeout: DEFAULT_API_TIMEOUT,
            gallery_data_path: manifest_dir.join("static/real_gallery_data.json"),
            static_dir: manifest_dir.join("static"),
            sentry_dsn: None,
            sentry_environment: None,
        }
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Parse the backend base URL; only `http` and `https` are accepted.
fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEnvVar("SITE_API_BASE_URL".to_string(), reason);
    let url = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme {}", url.scheme())));
    }
    Ok(url)
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable, treating empty as unset.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_base_url() {
        let url = parse_base_url(" http://127.0.0.1:8001 ").unwrap();
        assert_eq!(url.port(), Some(8001));
        assert!(parse_base_url("https://api.pnmgardeners.co.uk").is_ok());
    }

    #[test]
    fn test_parse_base_url_rejects_other_schemes() {
        assert!(matches!(
            parse_base_url("ftp://example.com"),
            Err(ConfigError::InvalidEnvVar(..))
        ));
        assert!(parse_base_url("not a url").is_err());
    }

    #[test]
    fn test_new_uses_defaults() {
        let config = SiteConfig::new(Url::parse("http://localhost:8001").unwrap());
        assert_eq!(config.api_timeout, DEFAULT_API_TIMEOUT);
        assert!(config.gallery_data_path.ends_with("real_gallery_data.json"));
        assert_eq!(config.socket_addr().port(), 0);
    }
}
