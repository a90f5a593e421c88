//! HTTP client for Nitrous API communication.
//!
//! This module provides the [`HttpClient`] type, the single request executor
//! that every resource function delegates to.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::{BaseUrl, NitrousConfig};

/// Client version from Cargo.toml.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Nitrous API.
///
/// The client handles:
/// - URL construction from the configured base URL
/// - Default headers (`Content-Type`, `Accept`, `User-Agent`), which
///   per-request headers override
/// - Normalizing non-2xx responses into [`HttpError::Status`]
/// - Logging every failure once, with the endpoint path
///
/// Each call makes exactly one network attempt. The client keeps no state
/// between calls beyond its immutable configuration, so concurrent calls are
/// fully independent.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use nitrous_api::{HttpClient, HttpMethod, HttpRequest, NitrousConfig};
///
/// let client = HttpClient::new(&NitrousConfig::from_env()?);
///
/// let request = HttpRequest::builder(HttpMethod::Get, "/events/live")
///     .build()
///     .unwrap();
///
/// let body: serde_json::Value = client.request_json(request).await?;
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL every endpoint path is appended to.
    base_url: BaseUrl,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    ///
    /// # Example
    ///
    /// ```rust
    /// use nitrous_api::{HttpClient, NitrousConfig};
    ///
    /// let client = HttpClient::new(&NitrousConfig::default());
    /// assert_eq!(client.base_url().as_ref(), "http://localhost:8080/api");
    /// ```
    #[must_use]
    pub fn new(config: &NitrousConfig) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Nitrous API Client v{CLIENT_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert("User-Agent".to_string(), user_agent);

        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.base_url().clone(),
            default_headers,
        }
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the full URL a request path resolves to.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        self.base_url.join(path)
    }

    /// Merges the default headers with a request's extra headers.
    ///
    /// Header names compare case-insensitively; on collision the request's
    /// value wins.
    fn merged_headers(&self, request: &HttpRequest) -> HashMap<String, String> {
        let mut headers = self.default_headers.clone();
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.retain(|existing, _| !existing.eq_ignore_ascii_case(key));
                headers.insert(key.clone(), value.clone());
            }
        }
        headers
    }

    /// Sends an HTTP request to the Nitrous API.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - The request cannot be sent or its body read (`Transport`)
    /// - A non-2xx response is received (`Status`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        if let Err(e) = request.verify() {
            tracing::error!(endpoint = %request.path, error = %e, "API request rejected");
            return Err(e.into());
        }

        let url = self.url_for(&request.path);
        let headers = self.merged_headers(&request);

        let method = match request.http_method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        };
        let mut req_builder = self.client.request(method, &url);

        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        tracing::debug!(method = %request.http_method, endpoint = %request.path, "Sending API request");

        let res = match req_builder.send().await {
            Ok(res) => res,
            Err(e) => {
                tracing::error!(endpoint = %request.path, error = %e, "API request failed");
                return Err(e.into());
            }
        };

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body = match res.text().await {
            Ok(body) => body,
            Err(e) => {
                tracing::error!(endpoint = %request.path, error = %e, "API response body unreadable");
                return Err(e.into());
            }
        };

        let response = HttpResponse::new(code, res_headers, body);
        if response.is_ok() {
            return Ok(response);
        }

        let error = HttpResponseError {
            code,
            message: response.error_message(),
            error_reference: response.request_id().map(String::from),
        };
        tracing::error!(
            endpoint = %request.path,
            status = code,
            error = %error.message,
            "API request failed"
        );
        Err(error.into())
    }

    /// Sends an HTTP request and decodes the whole response body as `T`.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`request`](Self::request), plus
    /// [`HttpError::Decode`] if a 2xx body does not decode as `T`.
    pub async fn request_json<T: DeserializeOwned>(
        &self,
        request: HttpRequest,
    ) -> Result<T, HttpError> {
        let endpoint = request.path.clone();
        let response = self.request(request).await?;
        response.json(&endpoint).map_err(|e| {
            tracing::error!(endpoint = %endpoint, error = %e.reason, "API response could not be decoded");
            HttpError::Decode(e)
        })
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
