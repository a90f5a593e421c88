//! HTTP request types for the Nitrous API client.
//!
//! This module provides the [`HttpRequest`] type and its builder for
//! constructing requests to the API.

use std::collections::HashMap;
use std::fmt;

use crate::auth::BearerToken;
use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods used by the Nitrous API.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    #[default]
    Get,
    /// HTTP POST method for creating resources and triggering actions.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// An HTTP request to be sent to the Nitrous API.
///
/// Use [`HttpRequest::builder`] to construct requests with the builder pattern.
///
/// # Example
///
/// ```rust
/// use nitrous_api::clients::{HttpRequest, HttpMethod};
/// use serde_json::json;
///
/// // GET request with a query filter
/// let get_request = HttpRequest::builder(HttpMethod::Get, "/events")
///     .query_param("category", "motorsport")
///     .build()
///     .unwrap();
///
/// // POST request with JSON body
/// let post_request = HttpRequest::builder(HttpMethod::Post, "/auth/login")
///     .body(json!({"email": "rider@example.com", "password": "hunter22"}))
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The endpoint path, appended to the configured base URL.
    pub path: String,
    /// The JSON request body, if any.
    pub body: Option<serde_json::Value>,
    /// Query parameters to append to the URL.
    pub query: Option<HashMap<String, String>>,
    /// Additional headers; these override the client defaults.
    pub extra_headers: Option<HashMap<String, String>>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request, ensuring it meets all requirements.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if:
    /// - `path` is empty
    /// - `http_method` is `Get` and `body` is `Some`
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.path.trim().is_empty() {
            return Err(InvalidHttpRequestError::EmptyPath);
        }

        if self.http_method == HttpMethod::Get && self.body.is_some() {
            return Err(InvalidHttpRequestError::BodyNotAllowed {
                method: self.http_method.to_string(),
            });
        }

        Ok(())
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    body: Option<serde_json::Value>,
    query: Option<HashMap<String, String>>,
    extra_headers: Option<HashMap<String, String>>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            body: None,
            query: None,
            extra_headers: None,
        }
    }

    /// Sets the JSON request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Adds a single query parameter.
    ///
    /// Values are percent-encoded when the request is sent.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Adds a single extra header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Authenticates the request with `Authorization: Bearer <token>`.
    #[must_use]
    pub fn bearer(self, token: &BearerToken) -> Self {
        self.header("Authorization", token.header_value())
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            body: self.body,
            query: self.query,
            extra_headers: self.extra_headers,
        };
        request.verify()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "get");
        assert_eq!(HttpMethod::Post.to_string(), "post");
        assert_eq!(HttpMethod::Put.to_string(), "put");
        assert_eq!(HttpMethod::Delete.to_string(), "delete");
    }

    #[test]
    fn test_default_method_is_get() {
        assert_eq!(HttpMethod::default(), HttpMethod::Get);
    }

    #[test]
    fn test_builder_creates_valid_get_request() {
        let request = HttpRequest::builder(HttpMethod::Get, "/events")
            .build()
            .unwrap();

        assert_eq!(request.http_method, HttpMethod::Get);
        assert_eq!(request.path, "/events");
        assert!(request.body.is_none());
        assert!(request.query.is_none());
        assert!(request.extra_headers.is_none());
    }

    #[test]
    fn test_post_without_body_is_allowed() {
        let request = HttpRequest::builder(HttpMethod::Post, "/journeys/1/book")
            .build()
            .unwrap();
        assert!(request.body.is_none());
    }

    #[test]
    fn test_verify_rejects_body_on_get() {
        let result = HttpRequest::builder(HttpMethod::Get, "/events")
            .body(json!({"title": "x"}))
            .build();

        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::BodyNotAllowed { method }) if method == "get"
        ));
    }

    #[test]
    fn test_verify_rejects_empty_path() {
        let result = HttpRequest::builder(HttpMethod::Get, "").build();
        assert!(matches!(result, Err(InvalidHttpRequestError::EmptyPath)));
    }

    #[test]
    fn test_builder_with_query_params() {
        let request = HttpRequest::builder(HttpMethod::Get, "/events")
            .query_param("category", "water")
            .build()
            .unwrap();

        let query = request.query.unwrap();
        assert_eq!(query.get("category"), Some(&"water".to_string()));
    }

    #[test]
    fn test_bearer_sets_authorization_header() {
        let token = BearerToken::new("abc.def.ghi").unwrap();
        let request = HttpRequest::builder(HttpMethod::Get, "/auth/me")
            .bearer(&token)
            .build()
            .unwrap();

        let headers = request.extra_headers.unwrap();
        assert_eq!(
            headers.get("Authorization"),
            Some(&"Bearer abc.def.ghi".to_string())
        );
    }
}
