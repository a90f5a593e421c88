//! Journey resource implementation.
//!
//! Journeys are bookable experiences with a limited number of slots.
//! Booking requires a bearer token and takes one slot.
//!
//! # Example
//!
//! ```rust,ignore
//! use nitrous_api::resources::Journey;
//!
//! let journeys = Journey::all(&client).await?;
//! if let Some(open) = journeys.iter().find(|j| !j.is_sold_out()) {
//!     let booking = Journey::book(&client, &open.id, &auth.token).await?;
//!     println!("{} ({} slots left)", booking.message, booking.journey.slots_left);
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::auth::BearerToken;
use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest};
use crate::resources::{fetch_list, segment};

/// Promotional badge shown on a journey.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum JourneyBadge {
    /// `EXCLUSIVE`
    #[serde(rename = "EXCLUSIVE")]
    Exclusive,
    /// `MEMBERS ONLY`
    #[serde(rename = "MEMBERS ONLY")]
    MembersOnly,
    /// `LIMITED`
    #[serde(rename = "LIMITED")]
    Limited,
}

/// A bookable experience.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Journey {
    /// The unique identifier of the journey.
    pub id: String,
    /// The journey title.
    pub title: String,
    /// Free-text category label.
    pub category: String,
    /// Long description.
    pub description: String,
    /// Promotional badge.
    pub badge: JourneyBadge,
    /// Slots still available.
    pub slots_left: u32,
    /// The journey date, as sent by the server.
    pub date: String,
    /// Price in currency-agnostic units.
    pub price: f64,
    /// Thumbnail reference, if any.
    #[serde(default, alias = "thumbnailUrl", skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

/// The result of booking a journey.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Booking {
    /// Human-readable confirmation.
    pub message: String,
    /// The journey after the booking, with its updated slot count.
    pub journey: Journey,
}

impl Journey {
    /// Returns `true` when no slots are left.
    #[must_use]
    pub const fn is_sold_out(&self) -> bool {
        self.slots_left == 0
    }

    /// Lists all journeys.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport failure, a non-2xx status, or a
    /// malformed envelope.
    pub async fn all(client: &HttpClient) -> Result<Vec<Self>, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Get, "/journeys").build()?;
        fetch_list(client, request, "journeys").await
    }

    /// Fetches a single journey.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Status`] with code 404 for an unknown id.
    pub async fn find(client: &HttpClient, id: &str) -> Result<Self, HttpError> {
        let request =
            HttpRequest::builder(HttpMethod::Get, format!("/journeys/{}", segment(id))).build()?;
        client.request_json(request).await
    }

    /// Books one slot on a journey.
    ///
    /// Sends `POST /journeys/{id}/book` with `Authorization: Bearer <token>`
    /// and no body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Status`] when the token is rejected, the journey
    /// does not exist, or it has no slots left (400 `No slots available`).
    pub async fn book(
        client: &HttpClient,
        id: &str,
        token: &BearerToken,
    ) -> Result<Booking, HttpError> {
        let request =
            HttpRequest::builder(HttpMethod::Post, format!("/journeys/{}/book", segment(id)))
                .bearer(token)
                .build()?;
        client.request_json(request).await
    }
}
