//! Merchandise resource implementation.

use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest};
use crate::resources::{fetch_list, segment};

/// Merchandise category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MerchCategory {
    /// Clothing.
    Apparel,
    /// Caps, bags, and similar.
    Accessories,
    /// Memorabilia.
    Collectibles,
}

/// A merchandise item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MerchItem {
    /// The unique identifier of the item.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Icon glyph.
    pub icon: String,
    /// Price in currency-agnostic units.
    pub price: f64,
    /// Merchandise category.
    pub category: MerchCategory,
}

impl MerchItem {
    /// Lists all merchandise items.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport failure, a non-2xx status, or a
    /// malformed envelope.
    pub async fn all(client: &HttpClient) -> Result<Vec<Self>, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Get, "/merch").build()?;
        fetch_list(client, request, "items").await
    }

    /// Fetches a single merchandise item.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Status`] with code 404 for an unknown id.
    pub async fn find(client: &HttpClient, id: &str) -> Result<Self, HttpError> {
        let request =
            HttpRequest::builder(HttpMethod::Get, format!("/merch/{}", segment(id))).build()?;
        client.request_json(request).await
    }
}
