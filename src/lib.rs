//! # Nitrous API Client
//!
//! A typed Rust client for the Nitrous sports-streaming API: events,
//! categories, journeys, merchandise, and account authentication.
//!
//! ## Overview
//!
//! This crate provides:
//! - Explicit configuration via [`NitrousConfig`] and [`NitrousConfigBuilder`]
//! - A single request executor, [`HttpClient`], with uniform error handling
//! - Typed resource functions in [`resources`] that unwrap list envelopes
//! - Registration, login, and current-user lookups in [`auth`]
//! - A concurrent landing page fetch via [`Showcase`]
//!
//! ## Quick Start
//!
//! ```rust
//! use nitrous_api::{BaseUrl, HttpClient, NitrousConfig};
//!
//! // Resolve the base URL from NITROUS_API_URL, or build one explicitly
//! let config = NitrousConfig::builder()
//!     .base_url(BaseUrl::new("https://api.example.com").unwrap())
//!     .build();
//!
//! let client = HttpClient::new(&config);
//! assert_eq!(client.url_for("/events"), "https://api.example.com/events");
//! ```
//!
//! ## Fetching Resources
//!
//! ```rust,ignore
//! use nitrous_api::resources::{Category, Event, EventCategory};
//!
//! let live = Event::live(&client).await?;
//! let water = Event::all(&client, Some(EventCategory::Water)).await?;
//! let category = Category::find_by_slug(&client, "water").await?;
//! ```
//!
//! ## Authenticated Calls
//!
//! ```rust,ignore
//! use nitrous_api::auth::login;
//! use nitrous_api::resources::Journey;
//!
//! let auth = login(&client, "rider@example.com", "hunter2222").await?;
//! let booking = Journey::book(&client, "j-1", &auth.token).await?;
//! println!("{}", booking.message);
//! ```
//!
//! ## Error Handling
//!
//! Every call returns [`HttpError`], which distinguishes transport failures,
//! non-2xx responses (with the server's `error` message, or
//! `"API request failed"`), and bodies that do not decode. Nothing is
//! retried and nothing is swallowed.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Newtypes validate on construction
//! - **Strict decoding**: Envelopes and records are checked, not trusted
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod resources;
pub mod showcase;

// Re-export public types at crate root for convenience
pub use auth::{AuthResult, BearerToken, User};
pub use config::{BaseUrl, NitrousConfig, NitrousConfigBuilder, API_URL_ENV, DEFAULT_BASE_URL};
pub use error::ConfigError;
pub use showcase::Showcase;

// Re-export HTTP client types
pub use clients::{
    DecodeError, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError,
};

// Re-export resource types
pub use resources::{
    Booking, Category, CategoryColor, DeleteConfirmation, Event, EventCategory, Journey,
    JourneyBadge, MerchCategory, MerchItem, NewEvent,
};
