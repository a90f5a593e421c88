//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// The API base URL used when no override is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// A validated API base URL.
///
/// Every request path is appended to this URL. The URL must carry an
/// `http` or `https` scheme and a non-empty host. Trailing slashes are
/// trimmed so that joining never produces `//`.
///
/// # Example
///
/// ```rust
/// use nitrous_api::BaseUrl;
///
/// let url = BaseUrl::new("https://api.example.com/").unwrap();
/// assert_eq!(url.as_ref(), "https://api.example.com");
/// assert_eq!(url.join("/events"), "https://api.example.com/events");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyBaseUrl`] if the URL is blank, or
    /// [`ConfigError::InvalidBaseUrl`] if it has no `http`/`https` scheme or
    /// no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/');
        if url.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }

        let invalid = || ConfigError::InvalidBaseUrl {
            url: url.to_string(),
        };

        let (scheme, remainder) = url.split_once("://").ok_or_else(invalid)?;
        if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https") {
            return Err(invalid());
        }

        // Host ends at port, path, query, or end of string
        let host = remainder
            .split([':', '/', '?', '#'])
            .next()
            .unwrap_or_default();
        if host.is_empty() {
            return Err(invalid());
        }

        Ok(Self(url.to_string()))
    }

    /// Appends an endpoint path to the base URL.
    ///
    /// A missing leading `/` on `endpoint` is added.
    #[must_use]
    pub fn join(&self, endpoint: &str) -> String {
        if endpoint.starts_with('/') {
            format!("{}{endpoint}", self.0)
        } else {
            format!("{}/{endpoint}", self.0)
        }
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self(DEFAULT_BASE_URL.to_string())
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_rejects_empty_string() {
        assert!(matches!(BaseUrl::new(""), Err(ConfigError::EmptyBaseUrl)));
        assert!(matches!(BaseUrl::new("   "), Err(ConfigError::EmptyBaseUrl)));
        assert!(matches!(BaseUrl::new("/"), Err(ConfigError::EmptyBaseUrl)));
    }

    #[test]
    fn test_base_url_trims_trailing_slashes() {
        let url = BaseUrl::new("http://localhost:8080/api//").unwrap();
        assert_eq!(url.as_ref(), "http://localhost:8080/api");
    }

    #[test]
    fn test_base_url_rejects_invalid() {
        // No scheme
        assert!(BaseUrl::new("api.example.com").is_err());

        // Empty host
        assert!(BaseUrl::new("https://").is_err());
        assert!(BaseUrl::new("http://:8080/api").is_err());

        // Unsupported scheme
        assert!(BaseUrl::new("ftp://api.example.com").is_err());
    }

    #[test]
    fn test_base_url_default_targets_localhost() {
        assert_eq!(BaseUrl::default().as_ref(), "http://localhost:8080/api");
        assert_eq!(
            BaseUrl::default().join("/events"),
            "http://localhost:8080/api/events"
        );
    }

    #[test]
    fn test_join_adds_missing_leading_slash() {
        let url = BaseUrl::new("https://api.example.com").unwrap();
        assert_eq!(url.join("merch"), "https://api.example.com/merch");
        assert_eq!(url.join("/merch"), "https://api.example.com/merch");
    }
}
