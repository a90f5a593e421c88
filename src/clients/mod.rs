//! HTTP client types for Nitrous API communication.
//!
//! This module provides the generic request executor that every resource
//! function is built on. It handles URL construction, header merging, and
//! uniform normalization of failed responses.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A response from the API, with its raw body
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`HttpError`]: Tagged error type for transport, status, and decode failures
//!
//! # Example
//!
//! ```rust,ignore
//! use nitrous_api::clients::{HttpClient, HttpMethod, HttpRequest};
//! use nitrous_api::NitrousConfig;
//!
//! let client = HttpClient::new(&NitrousConfig::default());
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "/categories")
//!     .build()
//!     .unwrap();
//!
//! let response = client.request(request).await?;
//! ```
//!
//! # Failure Behavior
//!
//! There is no retry. A non-2xx response becomes [`HttpError::Status`] with
//! the body's `error` field as its message, or `"API request failed"` when
//! the body has none. Every failure is logged once with `tracing` before it
//! is returned.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{
    DecodeError, HttpError, HttpResponseError, InvalidHttpRequestError, FALLBACK_ERROR_MESSAGE,
};
pub use http_client::{HttpClient, CLIENT_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
