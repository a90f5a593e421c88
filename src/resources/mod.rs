//! Typed resources and their resource functions.
//!
//! Each resource record carries associated async functions that map one
//! backend endpoint onto a single request through [`HttpClient`]:
//!
//! | Function | Endpoint |
//! |---|---|
//! | [`Event::all`] | `GET /events[?category=<slug>]` |
//! | [`Event::live`] | `GET /events/live` |
//! | [`Event::find`] | `GET /events/{id}` |
//! | [`Event::create`] | `POST /events` (bearer) |
//! | [`Event::update`] | `PUT /events/{id}` (bearer) |
//! | [`Event::delete`] | `DELETE /events/{id}` (bearer) |
//! | [`Category::all`] | `GET /categories` |
//! | [`Category::find_by_slug`] | `GET /categories/{slug}` |
//! | [`Journey::all`] | `GET /journeys` |
//! | [`Journey::find`] | `GET /journeys/{id}` |
//! | [`Journey::book`] | `POST /journeys/{id}/book` (bearer) |
//! | [`MerchItem::all`] | `GET /merch` |
//! | [`MerchItem::find`] | `GET /merch/{id}` |
//!
//! List functions return the collection unwrapped from its envelope.
//! Identifiers and slugs interpolated into paths are percent-encoded.
//!
//! # Example
//!
//! ```rust,ignore
//! use nitrous_api::resources::{Event, EventCategory};
//!
//! let motorsport = Event::all(&client, Some(EventCategory::Motorsport)).await?;
//! for event in &motorsport {
//!     println!("{} @ {}", event.title, event.location);
//! }
//! ```

mod category;
pub mod envelope;
mod event;
mod journey;
mod merch;

pub use category::{Category, CategoryColor};
pub use event::{DeleteConfirmation, Event, EventCategory, NewEvent};
pub use journey::{Booking, Journey, JourneyBadge};
pub use merch::{MerchCategory, MerchItem};

use std::borrow::Cow;

use serde::de::DeserializeOwned;

use crate::clients::{HttpClient, HttpError, HttpRequest};

/// Percent-encodes a value for use as a single path segment.
pub(crate) fn segment(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

/// Sends `request` and unwraps the collection stored under `key`.
pub(crate) async fn fetch_list<T: DeserializeOwned>(
    client: &HttpClient,
    request: HttpRequest,
    key: &str,
) -> Result<Vec<T>, HttpError> {
    let endpoint = request.path.clone();
    let response = client.request(request).await?;
    envelope::decode_list(&response, key, &endpoint).map_err(|e| {
        tracing::error!(endpoint = %endpoint, error = %e.reason, "API response could not be decoded");
        HttpError::Decode(e)
    })
}
