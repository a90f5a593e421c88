//! Error types for the Nitrous API client.
//!
//! This module contains error types used for configuration and validation
//! of values handed to the client before any request is made.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Network and response failures are reported through
//! [`HttpError`](crate::clients::HttpError) instead.
//!
//! # Example
//!
//! ```rust
//! use nitrous_api::{BaseUrl, ConfigError};
//!
//! let result = BaseUrl::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyBaseUrl)));
//! ```

use thiserror::Error;

/// Errors that can occur during client configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The API base URL cannot be empty.
    #[error("API base URL cannot be empty. Please provide a URL such as 'http://localhost:8080/api'.")]
    EmptyBaseUrl,

    /// The API base URL is missing an `http` or `https` scheme.
    #[error("Invalid API base URL '{url}'. Please provide a URL with scheme (e.g., 'https://api.example.com').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A bearer token cannot be empty.
    #[error("Bearer token cannot be empty. Log in or register to obtain a token.")]
    EmptyToken,
}
