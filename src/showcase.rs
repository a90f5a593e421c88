//! Landing page data, fetched in one fan-out.
//!
//! [`Showcase::fetch`] requests events, categories, journeys, and merchandise
//! concurrently. The four calls are independent: one failing neither cancels
//! nor delays the others. A failed section is replaced by an empty
//! collection so the page can still render, and the failure is logged.
//!
//! Callers that need to react to individual failures should call the
//! resource functions directly instead.
//!
//! # Example
//!
//! ```rust,ignore
//! use nitrous_api::{HttpClient, NitrousConfig, Showcase};
//!
//! let client = HttpClient::new(&NitrousConfig::from_env()?);
//! let showcase = Showcase::fetch(&client).await;
//!
//! for event in showcase.live_events() {
//!     println!("LIVE: {}", event.title);
//! }
//! ```

use crate::clients::{HttpClient, HttpError};
use crate::resources::{Category, Event, Journey, MerchItem};

/// Everything the landing page shows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Showcase {
    /// All events.
    pub events: Vec<Event>,
    /// All categories.
    pub categories: Vec<Category>,
    /// All journeys.
    pub journeys: Vec<Journey>,
    /// All merchandise.
    pub merch: Vec<MerchItem>,
}

impl Showcase {
    /// Fetches all four sections concurrently.
    ///
    /// Never fails; see the module docs for the fallback behavior.
    pub async fn fetch(client: &HttpClient) -> Self {
        let (events, categories, journeys, merch) = tokio::join!(
            Event::all(client, None),
            Category::all(client),
            Journey::all(client),
            MerchItem::all(client),
        );

        Self {
            events: or_empty("events", events),
            categories: or_empty("categories", categories),
            journeys: or_empty("journeys", journeys),
            merch: or_empty("merch", merch),
        }
    }

    /// Returns the events that are live right now.
    pub fn live_events(&self) -> impl Iterator<Item = &Event> {
        self.events.iter().filter(|event| event.is_live)
    }

    /// Returns `true` if every section is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
            && self.categories.is_empty()
            && self.journeys.is_empty()
            && self.merch.is_empty()
    }
}

fn or_empty<T>(section: &str, result: Result<Vec<T>, HttpError>) -> Vec<T> {
    result.unwrap_or_else(|e| {
        tracing::warn!(section, error = %e, "Showcase section unavailable, showing none");
        Vec::new()
    })
}
