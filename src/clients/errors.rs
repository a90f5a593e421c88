//! HTTP-specific error types for the Nitrous API client.
//!
//! # Error Handling
//!
//! Every failure a resource function can produce is one of:
//!
//! - [`HttpError::Transport`]: the request never produced a response
//!   (connection refused, DNS failure, transport timeout)
//! - [`HttpError::Status`]: a non-2xx response, carrying the server's
//!   `error` message or the fallback [`FALLBACK_ERROR_MESSAGE`]
//! - [`HttpError::Decode`]: a 2xx response whose body is not the expected JSON
//! - [`HttpError::InvalidRequest`]: the request was rejected before sending
//!
//! # Example
//!
//! ```rust,ignore
//! use nitrous_api::{Event, HttpError};
//!
//! match Event::find(&client, "42").await {
//!     Ok(event) => println!("{}", event.title),
//!     Err(HttpError::Status(e)) if e.code == 404 => println!("gone: {}", e.message),
//!     Err(HttpError::Status(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(HttpError::Decode(e)) => println!("bad payload from {}", e.endpoint),
//!     Err(HttpError::Transport(e)) => println!("network error: {e}"),
//!     Err(HttpError::InvalidRequest(e)) => println!("invalid request: {e}"),
//! }
//! ```

use thiserror::Error;

/// Message used when a failed response carries no readable `error` field.
pub const FALLBACK_ERROR_MESSAGE: &str = "API request failed";

/// Error returned when a request receives a non-successful response.
///
/// The display form is the message alone, so a server reply of
/// `{"error": "Journey not found"}` surfaces as exactly `Journey not found`.
///
/// # Example
///
/// ```rust
/// use nitrous_api::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     message: "Event not found".to_string(),
///     error_reference: None,
/// };
///
/// assert_eq!(error.to_string(), "Event not found");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The server-supplied `error` message, or [`FALLBACK_ERROR_MESSAGE`].
    pub message: String,
    /// Reference ID for error reporting (from X-Request-Id header).
    pub error_reference: Option<String>,
}

/// Error returned when a successful response cannot be decoded.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Failed to decode response from {endpoint}: {reason}")]
pub struct DecodeError {
    /// The endpoint path the response came from.
    pub endpoint: String,
    /// What was wrong with the body.
    pub reason: String,
}

/// Error returned when an HTTP request fails validation before it is sent.
///
/// # Example
///
/// ```rust
/// use nitrous_api::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::BodyNotAllowed {
///     method: "get".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "Cannot send a body with get requests.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The request path was empty.
    #[error("Cannot send a request without a path.")]
    EmptyPath,

    /// A body was attached to a method that does not carry one.
    #[error("Cannot send a body with {method} requests.")]
    BodyNotAllowed {
        /// The HTTP method the body was attached to.
        method: String,
    },
}

/// Unified error type for all HTTP-related errors.
///
/// Match on the variant to branch on the kind of failure rather than on
/// message text.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network or connection error.
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Status(#[from] HttpResponseError),

    /// The response body did not match the expected shape.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),
}

impl HttpError {
    /// Returns the HTTP status code for [`HttpError::Status`] errors.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status(e) => Some(e.code),
            _ => None,
        }
    }

    /// Returns `true` if the server answered 404.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self.status(), Some(404))
    }

    /// Returns `true` if the server answered 401.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401))
    }
}
