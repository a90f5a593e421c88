//! Bearer token type for authenticated endpoints.
//!
//! # Security
//!
//! [`BearerToken`] implements a custom [`Debug`] that masks the token value,
//! preventing accidental exposure in logs.
//!
//! # Example
//!
//! ```rust
//! use nitrous_api::BearerToken;
//!
//! let token = BearerToken::new("eyJhbGciOi...").unwrap();
//! assert_eq!(token.header_value(), "Bearer eyJhbGciOi...");
//!
//! let debug_output = format!("{:?}", token);
//! assert_eq!(debug_output, "BearerToken(*****)");
//! ```

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ConfigError;

/// An opaque bearer credential issued by register or login.
///
/// The client never stores tokens; callers keep the token and pass it to
/// each authenticated call.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    /// Creates a new bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyToken`] if the token is blank.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ConfigError::EmptyToken);
        }
        Ok(Self(token))
    }

    /// Returns the `Authorization` header value for this token.
    #[must_use]
    pub fn header_value(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl AsRef<str> for BearerToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(*****)")
    }
}

impl Serialize for BearerToken {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for BearerToken {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}
