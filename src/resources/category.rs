//! Category resource implementation.
//!
//! Categories group events by sport. Each category's slug is one of the
//! [`EventCategory`] values.

use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest};
use crate::resources::{fetch_list, segment, EventCategory};

/// Accent color tag for a category tile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CategoryColor {
    /// Cyan accent.
    Cyan,
    /// Blue accent.
    Blue,
    /// Purple accent.
    Purple,
    /// Orange accent.
    Orange,
}

/// An event category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// The unique identifier of the category.
    pub id: String,
    /// Display name.
    pub name: String,
    /// URL slug, matching the events' category.
    pub slug: EventCategory,
    /// Icon glyph.
    pub icon: String,
    /// Number of events in this category that are live now.
    pub live_count: u32,
    /// Short description.
    pub description: String,
    /// Accent color tag.
    pub color: CategoryColor,
}

impl Category {
    /// Lists all categories.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport failure, a non-2xx status, or a
    /// malformed envelope.
    pub async fn all(client: &HttpClient) -> Result<Vec<Self>, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Get, "/categories").build()?;
        fetch_list(client, request, "categories").await
    }

    /// Fetches a single category by slug.
    ///
    /// The slug is taken as a string so unknown slugs reach the server and
    /// come back as 404 `Category not found`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Status`] with code 404 for an unknown slug.
    pub async fn find_by_slug(client: &HttpClient, slug: &str) -> Result<Self, HttpError> {
        let request =
            HttpRequest::builder(HttpMethod::Get, format!("/categories/{}", segment(slug)))
                .build()?;
        client.request_json(request).await
    }
}
