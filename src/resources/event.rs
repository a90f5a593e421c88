//! Event resource implementation.
//!
//! Events are the streams and races listed on the platform. Anyone can read
//! them; creating, updating, and deleting requires a bearer token.
//!
//! # Example
//!
//! ```rust,ignore
//! use nitrous_api::resources::{Event, EventCategory};
//!
//! // Everything, or one category
//! let all = Event::all(&client, None).await?;
//! let water = Event::all(&client, Some(EventCategory::Water)).await?;
//!
//! // What is on air right now
//! let live = Event::live(&client).await?;
//!
//! let event = Event::find(&client, "1").await?;
//! ```

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::BearerToken;
use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest};
use crate::resources::{fetch_list, segment};

/// The fixed set of event categories.
///
/// The lowercase wire form doubles as the category slug.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    /// Car and motorcycle racing.
    Motorsport,
    /// Boat racing and other water sports.
    Water,
    /// Air racing and skydiving.
    Air,
    /// Rally raids and off-road racing.
    Offroad,
}

impl EventCategory {
    /// Every category, in display order.
    pub const ALL: [Self; 4] = [Self::Motorsport, Self::Water, Self::Air, Self::Offroad];

    /// Returns the slug for this category.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Motorsport => "motorsport",
            Self::Water => "water",
            Self::Air => "air",
            Self::Offroad => "offroad",
        }
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A streamed event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// The unique identifier of the event.
    pub id: String,
    /// The event title.
    pub title: String,
    /// Venue and region.
    pub location: String,
    /// The event date, as sent by the server.
    pub date: String,
    /// Start time, when announced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// Whether the event is streaming right now.
    pub is_live: bool,
    /// The event category.
    pub category: EventCategory,
    /// Thumbnail reference, if any.
    #[serde(default, alias = "thumbnailUrl", skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    /// When the event was created on the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Payload for creating or replacing an event.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    /// The event title.
    pub title: String,
    /// Venue and region.
    pub location: String,
    /// When the event takes place.
    pub date: DateTime<Utc>,
    /// Start time, when announced.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// Whether the event is streaming right now.
    pub is_live: bool,
    /// The event category.
    pub category: EventCategory,
    /// Thumbnail URL, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

/// Acknowledgement returned by delete endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteConfirmation {
    /// Human-readable confirmation.
    pub message: String,
}

impl Event {
    /// Lists events, optionally restricted to one category.
    ///
    /// Sends `GET /events`, or `GET /events?category=<slug>` with a filter.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport failure, a non-2xx status, or a
    /// malformed envelope.
    pub async fn all(
        client: &HttpClient,
        category: Option<EventCategory>,
    ) -> Result<Vec<Self>, HttpError> {
        let mut builder = HttpRequest::builder(HttpMethod::Get, "/events");
        if let Some(category) = category {
            builder = builder.query_param("category", category.as_str());
        }
        fetch_list(client, builder.build()?, "events").await
    }

    /// Lists the events that are live right now.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport failure, a non-2xx status, or a
    /// malformed envelope.
    pub async fn live(client: &HttpClient) -> Result<Vec<Self>, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Get, "/events/live").build()?;
        fetch_list(client, request, "events").await
    }

    /// Fetches a single event.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Status`] with code 404 (`Event not found`) for an
    /// unknown id.
    pub async fn find(client: &HttpClient, id: &str) -> Result<Self, HttpError> {
        let request =
            HttpRequest::builder(HttpMethod::Get, format!("/events/{}", segment(id))).build()?;
        client.request_json(request).await
    }

    /// Creates an event and returns it as stored.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Status`] when the token is rejected or the
    /// payload fails server validation.
    pub async fn create(
        client: &HttpClient,
        event: &NewEvent,
        token: &BearerToken,
    ) -> Result<Self, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Post, "/events")
            .body(event)
            .bearer(token)
            .build()?;
        client.request_json(request).await
    }

    /// Replaces an existing event and returns it as stored.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Status`] with code 404 for an unknown id, or when
    /// the token is rejected.
    pub async fn update(
        client: &HttpClient,
        id: &str,
        event: &NewEvent,
        token: &BearerToken,
    ) -> Result<Self, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Put, format!("/events/{}", segment(id)))
            .body(event)
            .bearer(token)
            .build()?;
        client.request_json(request).await
    }

    /// Deletes an event.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Status`] with code 404 for an unknown id, or when
    /// the token is rejected.
    pub async fn delete(
        client: &HttpClient,
        id: &str,
        token: &BearerToken,
    ) -> Result<DeleteConfirmation, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Delete, format!("/events/{}", segment(id)))
            .bearer(token)
            .build()?;
        client.request_json(request).await
    }
}

impl From<&NewEvent> for serde_json::Value {
    fn from(event: &NewEvent) -> Self {
        let mut body = serde_json::json!({
            "title": event.title,
            "location": event.location,
            "date": event.date.to_rfc3339_opts(SecondsFormat::Secs, true),
            "isLive": event.is_live,
            "category": event.category.as_str(),
        });
        if let Some(time) = &event.time {
            body["time"] = Self::from(time.as_str());
        }
        if let Some(thumbnail_url) = &event.thumbnail_url {
            body["thumbnailUrl"] = Self::from(thumbnail_url.as_str());
        }
        body
    }
}
