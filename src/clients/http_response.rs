//! HTTP response types for the Nitrous API client.
//!
//! This module provides the [`HttpResponse`] type, which keeps the raw body
//! so that success and failure paths can each interpret it their own way.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

use crate::clients::errors::{DecodeError, FALLBACK_ERROR_MESSAGE};

/// An HTTP response from the Nitrous API.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, lowercased (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(code: u16, headers: HashMap<String, Vec<String>>, body: String) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .get("x-request-id")
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Decodes the whole body as `T`.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] if the body is not valid JSON or does not
    /// match `T`.
    pub fn json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, DecodeError> {
        serde_json::from_str(&self.body).map_err(|e| DecodeError {
            endpoint: endpoint.to_string(),
            reason: e.to_string(),
        })
    }

    /// Extracts the error message carried by a failed response.
    ///
    /// Reads the body's `error` field. A missing, null, or empty field, or a
    /// body that is not JSON at all, yields [`FALLBACK_ERROR_MESSAGE`].
    #[must_use]
    pub fn error_message(&self) -> String {
        let Ok(body) = serde_json::from_str::<serde_json::Value>(&self.body) else {
            return FALLBACK_ERROR_MESSAGE.to_string();
        };

        match body.get("error") {
            Some(serde_json::Value::String(message)) if !message.is_empty() => message.clone(),
            Some(serde_json::Value::Null | serde_json::Value::String(_)) | None => {
                FALLBACK_ERROR_MESSAGE.to_string()
            }
            Some(other) => other.to_string(),
        }
    }
}
