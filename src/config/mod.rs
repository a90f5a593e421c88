//! Configuration types for the Nitrous API client.
//!
//! This module provides the configuration used to construct an
//! [`HttpClient`](crate::clients::HttpClient).
//!
//! # Overview
//!
//! - [`NitrousConfig`]: The immutable configuration handed to the client
//! - [`NitrousConfigBuilder`]: A builder for constructing [`NitrousConfig`] instances
//! - [`BaseUrl`]: A validated API base URL
//!
//! # Environment
//!
//! [`NitrousConfig::from_env`] reads the base URL from the
//! `NITROUS_API_URL` variable and falls back to
//! `http://localhost:8080/api` when it is unset or empty. The value is read
//! once, when the configuration is built; the client never consults the
//! environment afterwards.
//!
//! # Example
//!
//! ```rust
//! use nitrous_api::{BaseUrl, NitrousConfig};
//!
//! let config = NitrousConfig::builder()
//!     .base_url(BaseUrl::new("https://api.example.com").unwrap())
//!     .user_agent_prefix("NitrousWeb/1.0")
//!     .build();
//!
//! assert_eq!(config.base_url().as_ref(), "https://api.example.com");
//! ```

mod newtypes;

pub use newtypes::{BaseUrl, DEFAULT_BASE_URL};

use std::time::Duration;

use crate::error::ConfigError;

/// Name of the environment variable that overrides the API base URL.
pub const API_URL_ENV: &str = "NITROUS_API_URL";

/// Configuration for the Nitrous API client.
///
/// # Thread Safety
///
/// `NitrousConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
#[derive(Clone, Debug, Default)]
pub struct NitrousConfig {
    base_url: BaseUrl,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl NitrousConfig {
    /// Creates a new builder for constructing a `NitrousConfig`.
    #[must_use]
    pub fn builder() -> NitrousConfigBuilder {
        NitrousConfigBuilder::new()
    }

    /// Builds a configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `NITROUS_API_URL` is set to an invalid URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration using `lookup` to resolve environment variables.
    ///
    /// An unset or blank `NITROUS_API_URL` selects [`DEFAULT_BASE_URL`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the override is set to an invalid URL.
    ///
    /// # Example
    ///
    /// ```rust
    /// use nitrous_api::NitrousConfig;
    ///
    /// let config = NitrousConfig::from_lookup(|_| None).unwrap();
    /// assert_eq!(config.base_url().as_ref(), "http://localhost:8080/api");
    ///
    /// let config = NitrousConfig::from_lookup(|_| Some("https://api.example.com".into())).unwrap();
    /// assert_eq!(config.base_url().as_ref(), "https://api.example.com");
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = match lookup(API_URL_ENV) {
            Some(value) if !value.trim().is_empty() => BaseUrl::new(value)?,
            _ => BaseUrl::default(),
        };

        Ok(Self::builder().base_url(base_url).build())
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the transport timeout, if configured.
    ///
    /// `None` leaves timeouts to the underlying transport.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

// Verify NitrousConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<NitrousConfig>();
};

/// Builder for constructing [`NitrousConfig`] instances.
///
/// # Defaults
///
/// - `base_url`: `http://localhost:8080/api`
/// - `user_agent_prefix`: `None`
/// - `timeout`: `None`
#[derive(Debug, Default)]
pub struct NitrousConfigBuilder {
    base_url: Option<BaseUrl>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl NitrousConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API base URL.
    #[must_use]
    pub fn base_url(mut self, base_url: BaseUrl) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets a transport timeout applied to every request.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`NitrousConfig`].
    ///
    /// Every field is optional, so building cannot fail; validation happens
    /// when the individual values are constructed.
    #[must_use]
    pub fn build(self) -> NitrousConfig {
        NitrousConfig {
            base_url: self.base_url.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
            timeout: self.timeout,
        }
    }
}
