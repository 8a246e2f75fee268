//! Backend location.

use url::Url;

use crate::error::ConfigError;

/// Backend used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Environment variable read by the CLI (also loaded from `.env`).
pub const API_URL_ENV: &str = "DASHBOARD_API_URL";

/// Validated backend base URL.
///
/// The stored URL has no query or fragment and its path ends in `/`, so
/// API paths join below it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base: Url,
}

impl ApiConfig {
    /// Accepts absolute `http://` and `https://` URLs with a host.
    pub fn parse(url: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidApiUrl {
            url: url.to_string(),
            reason,
        };

        let mut base = Url::parse(url.trim()).map_err(|e| invalid(e.to_string()))?;

        if !matches!(base.scheme(), "http" | "https") {
            return Err(invalid(format!(
                "expected an http:// or https:// URL, got {}://",
                base.scheme()
            )));
        }
        if base.host_str().map_or(true, str::is_empty) {
            return Err(invalid("missing host".into()));
        }

        base.set_query(None);
        base.set_fragment(None);
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        Ok(Self { base })
    }

    /// Base URL without the trailing slash, for display.
    pub fn base_url(&self) -> &str {
        self.base.as_str().trim_end_matches('/')
    }

    /// Absolute URL of an API path such as `/api/files`.
    pub fn endpoint(&self, path: &str) -> String {
        match self.base.join(path.trim_start_matches('/')) {
            Ok(url) => url.into(),
            Err(e) => {
                log::error!("Cannot join {} onto {}: {}", path, self.base, e);
                self.base.to_string()
            }
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::parse(DEFAULT_API_URL).expect("DEFAULT_API_URL is a valid http URL")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = ApiConfig::parse("https://files.example.com/").unwrap();
        assert_eq!(config.base_url(), "https://files.example.com");
        assert_eq!(config.endpoint("/api/files"), "https://files.example.com/api/files");
    }

    #[test]
    fn test_rejects_non_http_urls() {
        assert!(ApiConfig::parse("ftp://example.com").is_err());
        assert!(ApiConfig::parse("localhost:8080").is_err());
        assert!(ApiConfig::parse("http://").is_err());
    }

    #[test]
    fn test_rejects_malformed_hosts() {
        assert!(ApiConfig::parse("http://exa mple.com").is_err());
        assert!(ApiConfig::parse("http://:8080").is_err());
    }

    #[test]
    fn test_query_does_not_leak_into_endpoints() {
        let config = ApiConfig::parse("http://api.example.com?v=1").unwrap();
        assert_eq!(config.endpoint("/api/files"), "http://api.example.com/api/files");
    }

    #[test]
    fn test_path_prefix_is_kept() {
        let config = ApiConfig::parse("https://example.com/backend").unwrap();
        assert_eq!(config.endpoint("/api/users"), "https://example.com/backend/api/users");
    }

    #[test]
    fn test_default_points_at_local_backend() {
        assert_eq!(ApiConfig::default().endpoint("api/users"), "http://localhost:8080/api/users");
    }
}
